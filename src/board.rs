//! Game board: fleet placement with adjacency buffers and shot resolution.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;

use crate::common::{BoardError, ShotResult};
use crate::coordinate::Coordinate;
use crate::ship::Vessel;

/// Display state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    /// Holds an undamaged vessel segment.
    Occupied,
    Hit,
    Miss,
    /// Marked around a sunk vessel; can no longer be fired upon.
    SunkBuffer,
}

/// A square grid holding one fleet.
///
/// Setup and play track unavailable cells separately: `reserved` holds
/// vessel cells and their buffers while placing, and is dropped by
/// [`Board::reset_play_tracking`]; `targeted` only ever grows during play.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
    vessels: Vec<Vessel>,
    reserved: BTreeSet<Coordinate>,
    targeted: BTreeSet<Coordinate>,
    hidden: bool,
    destroyed: usize,
    in_play: bool,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![CellState::Empty; size * size],
            vessels: Vec::new(),
            reserved: BTreeSet::new(),
            targeted: BTreeSet::new(),
            hidden: false,
            destroyed: 0,
            in_play: false,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels sunk so far.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hide vessel positions from rendering.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Returns `true` when every vessel of the fleet is sunk.
    pub fn all_sunk(&self) -> bool {
        self.destroyed == self.vessels.len()
    }

    /// Returns `true` if `c` lies outside the grid.
    pub fn out_of_bounds(&self, c: Coordinate) -> bool {
        self.index(c).is_none()
    }

    /// Whether `c` has been fired upon or lies in a sunk vessel's buffer.
    pub fn is_targeted(&self, c: Coordinate) -> bool {
        self.targeted.contains(&c)
    }

    /// Number of cells closed to further shots.
    pub fn targeted_count(&self) -> usize {
        self.targeted.len()
    }

    /// Raw state of a cell, or `None` outside the grid.
    pub fn cell(&self, c: Coordinate) -> Option<CellState> {
        self.index(c).map(|i| self.cells[i])
    }

    /// State of a cell as an opponent may see it: vessels on a hidden
    /// board appear as empty water.
    pub fn visible_cell(&self, c: Coordinate) -> Option<CellState> {
        self.cell(c).map(|state| match state {
            CellState::Occupied if self.hidden => CellState::Empty,
            other => other,
        })
    }

    fn index(&self, c: Coordinate) -> Option<usize> {
        let size = self.size as i32;
        if (0..size).contains(&c.row) && (0..size).contains(&c.col) {
            Some(c.row as usize * self.size + c.col as usize)
        } else {
            None
        }
    }

    /// Add a vessel to the fleet during setup.
    ///
    /// Every cell must be inside the grid and free of other vessels and
    /// their one-cell buffers. On success the vessel's 8-neighbourhood is
    /// reserved so the next vessel cannot touch it, not even diagonally.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        for c in vessel.cells() {
            if self.out_of_bounds(c) {
                return Err(BoardError::OutOfBounds(c));
            }
            if self.in_play || self.reserved.contains(&c) {
                return Err(BoardError::PlacementConflict(c));
            }
        }
        for c in vessel.cells() {
            if let Some(i) = self.index(c) {
                self.cells[i] = CellState::Occupied;
            }
            self.reserved.insert(c);
        }
        let around: Vec<Coordinate> = vessel.cells().flat_map(Coordinate::neighbourhood).collect();
        for c in around {
            if !self.out_of_bounds(c) {
                self.reserved.insert(c);
            }
        }
        self.vessels.push(vessel);
        Ok(())
    }

    /// Finish setup: discard placement reservations before live play.
    ///
    /// Vessel positions remain derivable from the fleet itself.
    pub fn reset_play_tracking(&mut self) {
        self.reserved.clear();
        self.targeted.clear();
        self.in_play = true;
    }

    /// Resolve a shot at `target`.
    ///
    /// A cell can be fired upon at most once. Sinking a vessel closes its
    /// surrounding cells as well, since no other vessel can be there.
    pub fn fire(&mut self, target: Coordinate) -> Result<ShotResult, BoardError> {
        let idx = self.index(target).ok_or(BoardError::OutOfBounds(target))?;
        if !self.targeted.insert(target) {
            return Err(BoardError::AlreadyTargeted(target));
        }

        let Some(pos) = self.vessels.iter().position(|v| v.is_hit_by(target)) else {
            self.cells[idx] = CellState::Miss;
            return Ok(ShotResult::Miss);
        };

        self.cells[idx] = CellState::Hit;
        let vessel = &mut self.vessels[pos];
        vessel.take_hit();
        if !vessel.is_destroyed() {
            return Ok(ShotResult::Hit);
        }

        self.destroyed += 1;
        let around: Vec<Coordinate> = vessel.cells().flat_map(Coordinate::neighbourhood).collect();
        for c in around {
            if let Some(i) = self.index(c) {
                if self.targeted.insert(c) {
                    self.cells[i] = CellState::SunkBuffer;
                }
            }
        }
        Ok(ShotResult::Sunk)
    }
}
