use std::collections::VecDeque;
use std::io::Cursor;

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    parse_target, AutomatedCombatant, Board, BoardError, Combatant, Coordinate, InputError,
    InteractiveCombatant, MatchEvent, Orientation, ShotResult, Side, Vessel,
};

struct Scripted(VecDeque<Coordinate>);

impl Scripted {
    fn new(targets: &[(i32, i32)]) -> Self {
        Self(targets.iter().map(|&t| Coordinate::from(t)).collect())
    }
}

impl Combatant for Scripted {
    fn select_target(&mut self, _rng: &mut SmallRng, _size: usize) -> anyhow::Result<Coordinate> {
        self.0
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }
}

fn board_with(vessels: &[Vessel]) -> Board {
    let mut board = Board::new(6);
    for v in vessels {
        board.place_vessel(v.clone()).unwrap();
    }
    board.reset_play_tracking();
    board
}

#[test]
fn test_rejected_targets_are_retried() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = board_with(&[Vessel::new(
        Coordinate::new(0, 0),
        2,
        Orientation::Horizontal,
    )]);
    let mut attacker = Scripted::new(&[(0, 0), (0, 0), (7, 7), (0, 1)]);
    let mut events: Vec<MatchEvent> = Vec::new();

    assert!(attacker
        .take_turn(Side::Player, &mut rng, &mut board, &mut events)
        .unwrap());
    assert!(attacker
        .take_turn(Side::Player, &mut rng, &mut board, &mut events)
        .unwrap());

    assert_eq!(
        events,
        vec![
            MatchEvent::Shot {
                attacker: Side::Player,
                target: Coordinate::new(0, 0),
                result: ShotResult::Hit,
            },
            MatchEvent::InvalidTarget {
                attacker: Side::Player,
                target: Coordinate::new(0, 0),
                error: BoardError::AlreadyTargeted(Coordinate::new(0, 0)),
            },
            MatchEvent::InvalidTarget {
                attacker: Side::Player,
                target: Coordinate::new(7, 7),
                error: BoardError::OutOfBounds(Coordinate::new(7, 7)),
            },
            MatchEvent::Shot {
                attacker: Side::Player,
                target: Coordinate::new(0, 1),
                result: ShotResult::Sunk,
            },
        ]
    );

    // input source failures end the turn with an error
    assert!(attacker
        .take_turn(Side::Player, &mut rng, &mut board, &mut events)
        .is_err());
}

#[test]
fn test_miss_passes_turn() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = board_with(&[Vessel::new(
        Coordinate::new(0, 0),
        1,
        Orientation::Horizontal,
    )]);
    let mut attacker = Scripted::new(&[(4, 4)]);
    let mut events: Vec<MatchEvent> = Vec::new();
    assert!(!attacker
        .take_turn(Side::Computer, &mut rng, &mut board, &mut events)
        .unwrap());
}

#[test]
fn test_automated_targets_stay_on_board() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut ai = AutomatedCombatant::new();
    for _ in 0..1000 {
        let c = ai.select_target(&mut rng, 6).unwrap();
        assert!((0..6).contains(&c.row) && (0..6).contains(&c.col));
    }
}

#[test]
fn test_automated_redraws_until_accepted() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = board_with(&[Vessel::new(
        Coordinate::new(3, 3),
        1,
        Orientation::Horizontal,
    )]);
    for r in 0..6 {
        for c in 0..6 {
            if (r, c) != (3, 3) {
                board.fire(Coordinate::new(r, c)).unwrap();
            }
        }
    }

    let mut events: Vec<MatchEvent> = Vec::new();
    let again = AutomatedCombatant::new()
        .take_turn(Side::Computer, &mut rng, &mut board, &mut events)
        .unwrap();
    assert!(again);

    let (last, rejected) = events.split_last().unwrap();
    assert_eq!(
        *last,
        MatchEvent::Shot {
            attacker: Side::Computer,
            target: Coordinate::new(3, 3),
            result: ShotResult::Sunk,
        }
    );
    for event in rejected {
        assert!(matches!(
            event,
            MatchEvent::InvalidTarget {
                error: BoardError::AlreadyTargeted(_),
                ..
            }
        ));
    }
}

#[test]
fn test_automated_miss_yields_turn() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = board_with(&[Vessel::new(
        Coordinate::new(0, 0),
        1,
        Orientation::Horizontal,
    )]);
    assert_eq!(board.fire(Coordinate::new(0, 0)).unwrap(), ShotResult::Sunk);
    for r in 0..6 {
        for c in 0..6 {
            if (r, c) != (5, 5) {
                let _ = board.fire(Coordinate::new(r, c));
            }
        }
    }
    assert!(!board.is_targeted(Coordinate::new(5, 5)));

    let mut events: Vec<MatchEvent> = Vec::new();
    let again = AutomatedCombatant::new()
        .take_turn(Side::Computer, &mut rng, &mut board, &mut events)
        .unwrap();
    assert!(!again);
    assert_eq!(
        events.last(),
        Some(&MatchEvent::Shot {
            attacker: Side::Computer,
            target: Coordinate::new(5, 5),
            result: ShotResult::Miss,
        })
    );
}

#[test]
fn test_parse_target() {
    assert_eq!(parse_target("3 4"), Ok(Coordinate::new(2, 3)));
    assert_eq!(parse_target("  1   1 \n"), Ok(Coordinate::new(0, 0)));
    assert_eq!(parse_target("0 0"), Ok(Coordinate::new(-1, -1)));
    assert_eq!(parse_target(""), Err(InputError::WrongTokenCount(0)));
    assert_eq!(parse_target("1 2 3"), Err(InputError::WrongTokenCount(3)));
    assert_eq!(parse_target("-1 2"), Err(InputError::NotANumber));
    assert_eq!(parse_target("a b"), Err(InputError::NotANumber));
    assert_eq!(parse_target("1 99999999999"), Err(InputError::NotANumber));
}

#[test]
fn test_interactive_reprompts_on_bad_input() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = board_with(&[Vessel::new(
        Coordinate::new(1, 2),
        1,
        Orientation::Vertical,
    )]);
    let input = Cursor::new("\n1\nfoo bar\n1 2 3\n7 1\n2 3\n");
    let mut player = InteractiveCombatant::new(input, Vec::new());
    let mut events: Vec<MatchEvent> = Vec::new();

    let again = player
        .take_turn(Side::Player, &mut rng, &mut board, &mut events)
        .unwrap();
    assert!(again);
    assert_eq!(
        events,
        vec![
            MatchEvent::InvalidTarget {
                attacker: Side::Player,
                target: Coordinate::new(6, 0),
                error: BoardError::OutOfBounds(Coordinate::new(6, 0)),
            },
            MatchEvent::Shot {
                attacker: Side::Player,
                target: Coordinate::new(1, 2),
                result: ShotResult::Sunk,
            },
        ]
    );

    let output = String::from_utf8(player.into_output()).unwrap();
    assert_eq!(output.matches("Your move: ").count(), 6);
    assert_eq!(output.matches("Enter 2 coordinates!").count(), 3);
    assert_eq!(output.matches("Enter numbers!").count(), 1);
}

#[test]
fn test_interactive_closed_input_is_an_error() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = board_with(&[Vessel::new(
        Coordinate::new(1, 2),
        1,
        Orientation::Vertical,
    )]);
    let mut player = InteractiveCombatant::new(Cursor::new("x\n"), Vec::new());
    let mut events: Vec<MatchEvent> = Vec::new();
    assert!(player
        .take_turn(Side::Player, &mut rng, &mut board, &mut events)
        .is_err());
    assert!(events.is_empty());
}
