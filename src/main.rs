#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    events::Both, init_logging, ui, ui::ConsoleObserver, AutomatedCombatant, Combatant,
    InteractiveCombatant, LogObserver, Match, MatchConfig, MatchState, DEFAULT_BOARD_SIZE,
    MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_size)]
        size: usize,
    },
    /// Watch the computer play against itself.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, value_parser = parse_size)]
        size: usize,
    },
}

#[cfg(feature = "std")]
fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "board size must be between {} and {}",
            MIN_BOARD_SIZE, MAX_BOARD_SIZE
        ))
    }
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn play(player: Box<dyn Combatant>, seed: Option<u64>, size: usize) -> anyhow::Result<()> {
    let rng = make_rng(seed);
    let mut game = Match::new(
        MatchConfig::with_board_size(size),
        player,
        Box::new(AutomatedCombatant::new()),
        rng,
    )?;

    let mut console = ConsoleObserver;
    let mut log = LogObserver;
    let mut observer = Both(&mut console, &mut log);
    while !game.state().is_over() {
        ui::print_boards(&game);
        match game.state() {
            MatchState::PlayerTurn => println!("Player's turn!"),
            _ => println!("Computer's turn!"),
        }
        game.step(&mut observer)?;
    }
    ui::print_boards(&game);
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, size } => {
            println!("{}", ui::greeting());
            play(Box::new(InteractiveCombatant::stdio()), seed, size)
        }
        Commands::Watch { seed, size } => play(Box::new(AutomatedCombatant::new()), seed, size),
    }
}
