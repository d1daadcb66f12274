//! Interactive play over a line-based reader.

use crate::ConsoleView;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tictactoe_engine::{StarterPicker, TurnController, TurnOutcome};
use tracing::{debug, instrument};

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark the cell at `(row, col)`.
    Move(usize, usize),
    /// Start over with the same players.
    Restart,
    /// Print the available commands.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Could not understand {input:?}; type 'help' for commands")]
pub struct ParseError {
    /// The offending line.
    pub input: String,
}

impl std::str::FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "r" | "restart" => return Ok(Command::Restart),
            "q" | "quit" | "exit" => return Ok(Command::Quit),
            "h" | "help" | "?" => return Ok(Command::Help),
            _ => {}
        }

        let coords: Vec<_> = trimmed
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(str::parse::<usize>)
            .collect();
        match coords.as_slice() {
            [Ok(x), Ok(y)] => Ok(Command::Move(*x, *y)),
            _ => Err(ParseError {
                input: trimmed.to_string(),
            }),
        }
    }
}

const HELP: &str = "Commands: '<row> <col>' to mark a cell (0-based), 'r' to restart, 'q' to quit.";

/// Reads commands from `input` and feeds them to `game` until quit or EOF.
///
/// The game must already be started.
#[instrument(skip_all)]
pub fn run_interactive<R, W, S>(
    game: &mut TurnController<ConsoleView<W>, S>,
    input: R,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
    S: StarterPicker,
{
    game.view_mut().say(HELP);
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                game.view_mut().say(e);
                continue;
            }
        };
        debug!(?command, "Command received");

        match command {
            Command::Quit => break,
            Command::Help => game.view_mut().say(HELP),
            Command::Restart => game.restart_game()?,
            Command::Move(x, y) => match game.make_turn(x, y) {
                TurnOutcome::Rejected(e) => game.view_mut().say(e),
                TurnOutcome::Ignored => game
                    .view_mut()
                    .say("The game is over. Type 'r' to play again or 'q' to quit."),
                TurnOutcome::Continue | TurnOutcome::Won(_) | TurnOutcome::Drawn => {}
            },
        }
    }
    Ok(())
}
