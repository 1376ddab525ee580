#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{common::InputError, coordinate::Coordinate, player::Combatant};

/// Parse a line of the form `ROW COL` with 1-based numbers.
///
/// Range checks are left to the board; `0` becomes `-1` and is rejected there.
pub fn parse_target(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };
    let row = parse_number(row)?;
    let col = parse_number(col)?;
    Ok(Coordinate::new(row - 1, col - 1))
}

fn parse_number(token: &str) -> Result<i32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    token.parse().map_err(|_| InputError::NotANumber)
}

/// Human player typing targets on a line-based input.
pub struct InteractiveCombatant<R, W> {
    input: R,
    output: W,
}

impl InteractiveCombatant<io::StdinLock<'static>, io::Stdout> {
    /// Combatant reading from stdin and prompting on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InteractiveCombatant<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the combatant, returning the prompt output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Combatant for InteractiveCombatant<R, W> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _board_size: usize,
    ) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed before a target was entered");
            }
            match parse_target(&line) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, " {} ", e)?,
            }
        }
    }
}
