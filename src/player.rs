use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    board::Board,
    coordinate::Coordinate,
    events::{MatchEvent, MatchObserver, Side},
};

/// Interface implemented by the different combatant types.
///
/// A combatant only chooses targets; the opposing [`Board`] validates them.
pub trait Combatant {
    /// Choose the next coordinate to fire at on a `board_size`×`board_size` grid.
    ///
    /// Errors are reserved for failures of the input source itself, such as
    /// a closed terminal. Bad targets are returned and rejected by the board.
    fn select_target(&mut self, rng: &mut SmallRng, board_size: usize)
        -> anyhow::Result<Coordinate>;

    /// Fire at `enemy` until a shot is accepted.
    ///
    /// Rejected targets are reported to `observer` and a new one is
    /// selected. Returns `true` when the attacker moves again.
    fn take_turn(
        &mut self,
        side: Side,
        rng: &mut SmallRng,
        enemy: &mut Board,
        observer: &mut dyn MatchObserver,
    ) -> anyhow::Result<bool> {
        loop {
            let target = self.select_target(rng, enemy.size())?;
            match enemy.fire(target) {
                Ok(result) => {
                    observer.notify(&MatchEvent::Shot {
                        attacker: side,
                        target,
                        result,
                    });
                    return Ok(result.attacker_continues());
                }
                Err(error) => {
                    observer.notify(&MatchEvent::InvalidTarget {
                        attacker: side,
                        target,
                        error,
                    });
                }
            }
        }
    }
}

/// Computer opponent firing at uniformly random cells.
///
/// Keeps no memory of earlier shots, so repeated cells are rejected by the
/// board and redrawn.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutomatedCombatant;

impl AutomatedCombatant {
    pub fn new() -> Self {
        Self
    }
}

impl Combatant for AutomatedCombatant {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        board_size: usize,
    ) -> anyhow::Result<Coordinate> {
        anyhow::ensure!(board_size > 0, "cannot target an empty board");
        let size = board_size as i32;
        Ok(Coordinate::new(
            rng.random_range(0..size),
            rng.random_range(0..size),
        ))
    }
}
