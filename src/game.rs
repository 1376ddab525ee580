//! Match orchestration: random fleet generation and the turn state machine.

use alloc::boxed::Box;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    board::Board,
    config::{MatchConfig, FLEET, MAX_BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, MIN_BOARD_SIZE},
    coordinate::Coordinate,
    events::{MatchEvent, MatchObserver, Side},
    player::Combatant,
    ship::{Orientation, Vessel},
};

/// Current phase of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    PlayerTurn,
    AiTurn,
    PlayerWon,
    AiWon,
}

impl MatchState {
    /// Returns `true` once a winner is decided.
    pub fn is_over(self) -> bool {
        matches!(self, MatchState::PlayerWon | MatchState::AiWon)
    }

    /// Winning side of a finished match.
    pub fn winner(self) -> Option<Side> {
        match self {
            MatchState::PlayerWon => Some(Side::Player),
            MatchState::AiWon => Some(Side::Computer),
            _ => None,
        }
    }
}

/// Try to place the whole fleet on a fresh board.
///
/// Origins are drawn from `0..=size`, so some draws fall off the grid and
/// are simply rejected like any other bad placement. Returns `None` when
/// [`MAX_PLACEMENT_ATTEMPTS`] are spent, in which case the caller starts over.
pub fn generate_board(rng: &mut SmallRng, size: usize) -> Option<Board> {
    let mut board = Board::new(size);
    let bound = size as i32;
    let mut attempts = 0;
    for &length in FLEET.iter() {
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                log::debug!("gave up on board after {} placement attempts", MAX_PLACEMENT_ATTEMPTS);
                return None;
            }
            let origin = Coordinate::new(rng.random_range(0..=bound), rng.random_range(0..=bound));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match board.place_vessel(Vessel::new(origin, length, orientation)) {
                Ok(()) => break,
                Err(e) => log::trace!("placement of length {} rejected: {}", length, e),
            }
        }
    }
    board.reset_play_tracking();
    log::debug!("fleet placed after {} attempts", attempts);
    Some(board)
}

/// Generate boards until one holds the full fleet.
pub fn random_board(rng: &mut SmallRng, size: usize) -> Board {
    let mut restarts = 0usize;
    loop {
        if let Some(board) = generate_board(rng, size) {
            return board;
        }
        restarts += 1;
        log::debug!("regenerating board (restart {})", restarts);
    }
}

/// A human-vs-computer match.
///
/// The player moves first. A hit or a sinking lets the attacker fire again;
/// a miss passes the turn.
pub struct Match {
    player: Box<dyn Combatant>,
    computer: Box<dyn Combatant>,
    player_board: Board,
    computer_board: Board,
    rng: SmallRng,
    turn: usize,
    state: MatchState,
}

impl Match {
    /// Set up a match with freshly generated fleets for both sides.
    ///
    /// The computer's board is hidden from rendering.
    pub fn new(
        config: MatchConfig,
        player: Box<dyn Combatant>,
        computer: Box<dyn Combatant>,
        mut rng: SmallRng,
    ) -> anyhow::Result<Self> {
        let size = config.board_size;
        anyhow::ensure!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "board size {} not in {}..={}",
            size,
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE
        );
        let player_board = random_board(&mut rng, size);
        let mut computer_board = random_board(&mut rng, size);
        computer_board.set_hidden(true);
        log::info!("match started on a {}x{} board", size, size);
        Ok(Self::with_boards(
            player,
            computer,
            player_board,
            computer_board,
            rng,
        ))
    }

    /// Set up a match on prepared boards.
    pub fn with_boards(
        player: Box<dyn Combatant>,
        computer: Box<dyn Combatant>,
        player_board: Board,
        computer_board: Board,
        rng: SmallRng,
    ) -> Self {
        Self {
            player,
            computer,
            player_board,
            computer_board,
            rng,
            turn: 0,
            state: MatchState::PlayerTurn,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Turn counter; it does not advance while a side keeps the move.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn computer_board(&self) -> &Board {
        &self.computer_board
    }

    /// Play one move of the active side and update the state.
    ///
    /// Emits [`MatchEvent::Victory`] on the move that ends the match and
    /// does nothing once it is over.
    pub fn step(&mut self, observer: &mut dyn MatchObserver) -> anyhow::Result<MatchState> {
        let again = match self.state {
            MatchState::PlayerTurn => self.player.take_turn(
                Side::Player,
                &mut self.rng,
                &mut self.computer_board,
                observer,
            )?,
            MatchState::AiTurn => self.computer.take_turn(
                Side::Computer,
                &mut self.rng,
                &mut self.player_board,
                observer,
            )?,
            finished => return Ok(finished),
        };

        self.state = if self.computer_board.all_sunk() {
            MatchState::PlayerWon
        } else if self.player_board.all_sunk() {
            MatchState::AiWon
        } else if again {
            self.state
        } else {
            self.turn += 1;
            match self.state {
                MatchState::PlayerTurn => MatchState::AiTurn,
                _ => MatchState::PlayerTurn,
            }
        };
        if let Some(winner) = self.state.winner() {
            log::info!("{:?} won after {} turns", winner, self.turn);
            observer.notify(&MatchEvent::Victory { winner });
        }
        Ok(self.state)
    }

    /// Play until one fleet is destroyed and return the winner.
    pub fn run(&mut self, observer: &mut dyn MatchObserver) -> anyhow::Result<Side> {
        loop {
            if let Some(winner) = self.step(observer)?.winner() {
                return Ok(winner);
            }
        }
    }
}
