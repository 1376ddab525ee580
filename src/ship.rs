//! Vessel geometry and damage tracking.

use crate::coordinate::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells extend downwards, row by row.
    Vertical,
    /// Cells extend to the right, column by column.
    Horizontal,
}

/// A ship occupying a straight run of cells starting at its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    hit_points: usize,
}

impl Vessel {
    /// Create an undamaged vessel.
    ///
    /// # Panics
    /// If `length` is zero.
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        assert!(length >= 1, "vessel length must be at least 1");
        Self {
            origin,
            length,
            orientation,
            hit_points: length,
        }
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    /// Cells spanned by the vessel, starting at the origin.
    ///
    /// Always derived from origin, length and orientation; nothing is cached.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length as i32).map(move |i| match self.orientation {
            Orientation::Vertical => self.origin.offset(i, 0),
            Orientation::Horizontal => self.origin.offset(0, i),
        })
    }

    /// Returns `true` if `target` is one of the vessel's cells.
    ///
    /// Pure check; the board records the damage with [`Vessel::take_hit`].
    pub fn is_hit_by(&self, target: Coordinate) -> bool {
        self.cells().any(|c| c == target)
    }

    /// Remove one hit point. Saturates at zero.
    pub fn take_hit(&mut self) {
        self.hit_points = self.hit_points.saturating_sub(1);
    }

    pub fn is_destroyed(&self) -> bool {
        self.hit_points == 0
    }
}
