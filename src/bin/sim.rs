use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    events::Both, init_logging, AutomatedCombatant, LogObserver, Match, MatchConfig, ShotTally,
};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut game = Match::new(
        MatchConfig::default(),
        Box::new(AutomatedCombatant::new()),
        Box::new(AutomatedCombatant::new()),
        SmallRng::seed_from_u64(seed),
    )?;

    let mut tally = ShotTally::default();
    let mut log = LogObserver;
    game.run(&mut Both(&mut tally, &mut log))?;

    println!("{}", serde_json::to_string(&tally)?);
    Ok(())
}
