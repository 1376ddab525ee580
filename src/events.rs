//! Match outcome events and observers.

use alloc::vec::Vec;

use crate::common::{BoardError, ShotResult};
use crate::coordinate::Coordinate;

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The human, or whoever drives the first board.
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// Something that happened during a match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchEvent {
    /// A shot was accepted and resolved.
    Shot {
        attacker: Side,
        target: Coordinate,
        result: ShotResult,
    },
    /// A shot was rejected; the attacker picks again.
    InvalidTarget {
        attacker: Side,
        target: Coordinate,
        error: BoardError,
    },
    Victory { winner: Side },
}

/// Receives match events as they happen.
pub trait MatchObserver {
    fn notify(&mut self, event: &MatchEvent);
}

impl MatchObserver for Vec<MatchEvent> {
    fn notify(&mut self, event: &MatchEvent) {
        self.push(event.clone());
    }
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl MatchObserver for LogObserver {
    fn notify(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::Shot {
                attacker,
                target,
                result,
            } => log::debug!("{:?} fires at ({}): {:?}", attacker, target, result),
            MatchEvent::InvalidTarget {
                attacker, error, ..
            } => log::trace!("{:?} rejected: {}", attacker, error),
            MatchEvent::Victory { winner } => log::debug!("{:?} wins", winner),
        }
    }
}

/// Shot counters for one side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SideTally {
    pub shots: usize,
    pub hits: usize,
    pub sunk: usize,
    pub misses: usize,
    pub invalid: usize,
}

/// Aggregates a match into per-side counters and the winner.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShotTally {
    pub player: SideTally,
    pub computer: SideTally,
    pub winner: Option<Side>,
}

impl ShotTally {
    pub fn side(&self, side: Side) -> &SideTally {
        match side {
            Side::Player => &self.player,
            Side::Computer => &self.computer,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideTally {
        match side {
            Side::Player => &mut self.player,
            Side::Computer => &mut self.computer,
        }
    }
}

impl MatchObserver for ShotTally {
    fn notify(&mut self, event: &MatchEvent) {
        match *event {
            MatchEvent::Shot {
                attacker, result, ..
            } => {
                let tally = self.side_mut(attacker);
                tally.shots += 1;
                match result {
                    ShotResult::Hit => tally.hits += 1,
                    ShotResult::Sunk => {
                        tally.hits += 1;
                        tally.sunk += 1;
                    }
                    ShotResult::Miss => tally.misses += 1,
                }
            }
            MatchEvent::InvalidTarget { attacker, .. } => self.side_mut(attacker).invalid += 1,
            MatchEvent::Victory { winner } => self.winner = Some(winner),
        }
    }
}

/// Fans every event out to two observers.
pub struct Both<'a, A: ?Sized, B: ?Sized>(pub &'a mut A, pub &'a mut B);

impl<A, B> MatchObserver for Both<'_, A, B>
where
    A: MatchObserver + ?Sized,
    B: MatchObserver + ?Sized,
{
    fn notify(&mut self, event: &MatchEvent) {
        self.0.notify(event);
        self.1.notify(event);
    }
}
