//! Random self-play: both players click random cells until the game ends.

use anyhow::Context;
use rand::Rng;
use std::fmt;
use std::io::Write;
use tictactoe_engine::{
    EventLog, GameView, Marker, Phase, StarterPicker, TurnController, TurnOutcome,
};
use tracing::{debug, info, instrument};

/// Picks uniformly random coordinates on the board, occupied or not.
///
/// Occupied picks are rejected by the board and simply retried, which is how
/// a user clicking around would behave.
#[derive(Debug, Clone)]
pub struct RandomMover<R> {
    rng: R,
}

impl<R: Rng> RandomMover<R> {
    /// Wraps a random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Random `(row, col)` on a `size x size` board.
    pub fn next_move(&mut self, size: usize) -> (usize, usize) {
        (self.rng.gen_range(0..size), self.rng.gen_range(0..size))
    }
}

/// How a single random game finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedGame {
    /// Winning marker, or `None` for a draw.
    pub winner: Option<Marker>,
    /// Number of `make_turn` calls, rejected ones included.
    pub attempts: usize,
}

/// Plays the current game to the end with random moves.
///
/// Returns `None` without touching the game if it is not in progress.
#[instrument(skip_all)]
pub fn play_out<V, S, R>(
    game: &mut TurnController<V, S>,
    mover: &mut RandomMover<R>,
) -> Option<PlayedGame>
where
    V: GameView,
    S: StarterPicker,
    R: Rng,
{
    if game.phase() != Phase::InProgress {
        return None;
    }
    let size = game.board().size();
    let mut attempts = 0;
    while !game.is_stopped() {
        let (x, y) = mover.next_move(size);
        attempts += 1;
        match game.make_turn(x, y) {
            TurnOutcome::Won(winner) => {
                return Some(PlayedGame {
                    winner: Some(*winner.marker()),
                    attempts,
                });
            }
            TurnOutcome::Drawn => {
                return Some(PlayedGame {
                    winner: None,
                    attempts,
                });
            }
            TurnOutcome::Rejected(e) => debug!(%e, "Random pick rejected"),
            TurnOutcome::Continue | TurnOutcome::Ignored => {}
        }
    }
    None
}

/// Tally over several random games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoplaySummary {
    /// Games played.
    pub games: usize,
    /// Games won by [`Marker::X`].
    pub x_wins: usize,
    /// Games won by [`Marker::O`].
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
    /// Total `make_turn` calls across all games.
    pub attempts: usize,
}

impl AutoplaySummary {
    /// Adds one finished game.
    pub fn record(&mut self, game: &PlayedGame) {
        self.games += 1;
        self.attempts += game.attempts;
        match game.winner {
            Some(Marker::X) => self.x_wins += 1,
            Some(Marker::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }
}

impl fmt::Display for AutoplaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} draws ({} moves attempted)",
            self.games, self.x_wins, self.o_wins, self.draws, self.attempts
        )
    }
}

/// Plays `games` consecutive random games on one controller.
///
/// The first game uses the given player names; later games restart with the
/// same players. `after_game` runs once per finished game, before the next
/// restart, so callers can flush a view.
#[instrument(skip(game, mover, after_game))]
pub fn run_autoplay<V, S, R, F>(
    game: &mut TurnController<V, S>,
    mover: &mut RandomMover<R>,
    names: (&str, &str),
    games: usize,
    mut after_game: F,
) -> anyhow::Result<AutoplaySummary>
where
    V: GameView,
    S: StarterPicker,
    R: Rng,
    F: FnMut(&mut TurnController<V, S>, &PlayedGame) -> anyhow::Result<()>,
{
    let mut summary = AutoplaySummary::default();
    for round in 0..games {
        if round == 0 {
            game.start_game(names.0, names.1);
        } else {
            game.restart_game()?;
        }
        let Some(played) = play_out(game, mover) else {
            anyhow::bail!("Game {} did not reach a result", round + 1);
        };
        summary.record(&played);
        after_game(game, &played)?;
    }
    info!(%summary, "Autoplay finished");
    Ok(summary)
}

/// Drains `log` onto `out`, one JSON object per line.
pub fn write_json_lines<W: Write>(log: &mut EventLog, out: &mut W) -> anyhow::Result<()> {
    for event in log.drain() {
        let line = serde_json::to_string(&event).context("Failed to encode event")?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
