//! Common types for the engine: board errors, shot results and input errors.

use crate::coordinate::Coordinate;

/// Outcome of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot struck a vessel that is still afloat.
    Hit,
    /// Shot destroyed the last segment of a vessel.
    Sunk,
    /// Shot struck open water.
    Miss,
}

impl ShotResult {
    /// Whether the attacker keeps the turn. Only a miss passes it on.
    pub fn attacker_continues(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by [`Board`](crate::Board) operations.
///
/// All of them are recoverable: the caller selects another target or
/// another placement and tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    OutOfBounds(Coordinate),
    /// Coordinate was already fired upon, or lies in the buffer of a sunk vessel.
    AlreadyTargeted(Coordinate),
    /// Vessel would overlap or touch another vessel.
    PlacementConflict(Coordinate),
}

impl BoardError {
    /// Coordinate that caused the rejection.
    pub fn coordinate(&self) -> Coordinate {
        match *self {
            BoardError::OutOfBounds(c)
            | BoardError::AlreadyTargeted(c)
            | BoardError::PlacementConflict(c) => c,
        }
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => write!(f, "({}) is outside the board", c),
            BoardError::AlreadyTargeted(c) => write!(f, "({}) was already fired upon", c),
            BoardError::PlacementConflict(c) => {
                write!(f, "({}) is occupied or next to another vessel", c)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Malformed interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Line did not contain exactly two tokens; carries the count found.
    WrongTokenCount(usize),
    /// A token was not an unsigned decimal number.
    NotANumber,
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::WrongTokenCount(_) => write!(f, "Enter 2 coordinates!"),
            InputError::NotANumber => write!(f, "Enter numbers!"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}
