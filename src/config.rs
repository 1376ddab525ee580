/// Side length of the grid unless configured otherwise.
pub const DEFAULT_BOARD_SIZE: usize = 6;
/// Smallest grid the fixed fleet is placed on.
pub const MIN_BOARD_SIZE: usize = 6;
pub const MAX_BOARD_SIZE: usize = 10;

pub const NUM_VESSELS: usize = 7;
/// Vessel lengths, placed in this order.
pub const FLEET: [usize; NUM_VESSELS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of cells occupied by the fleet.
pub const TOTAL_FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed for one board before it is discarded.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Settings for a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub board_size: usize,
}

impl MatchConfig {
    pub fn with_board_size(board_size: usize) -> Self {
        Self { board_size }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}
