//! Turn sequencing state machine.
//!
//! The controller owns the board, both players and whose turn it is. It turns
//! view intents (`start_game`, `make_turn`, `restart_game`) into board updates
//! and pushes the resulting state changes back to a [`GameView`].

use crate::{
    Board, GameCondition, GameConfig, GameView, MarkError, Marker, Player, Seat, StartError,
    StarterPicker,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Lifecycle of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been started.
    NotStarted,
    /// Moves are accepted.
    InProgress,
    /// A player completed a line.
    Won,
    /// The board filled up without a winner.
    Drawn,
}

impl Phase {
    /// Checks if this is a terminal phase.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Drawn)
    }
}

/// What happened to a call to [`TurnController::make_turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The controller is not accepting moves (not started or already over).
    Ignored,
    /// The board refused the mark. Nothing changed.
    Rejected(MarkError),
    /// The mark was placed and the game goes on.
    Continue,
    /// The mark completed a line for this player.
    Won(Player),
    /// The mark filled the board without a winner.
    Drawn,
}

/// Drives a two-player game on a [`Board`].
///
/// Each controller is an independent session; nothing is shared between
/// instances.
#[derive(Debug)]
pub struct TurnController<V, S> {
    config: GameConfig,
    board: Board,
    players: Option<[Player; 2]>,
    current: Seat,
    phase: Phase,
    view: V,
    starter: S,
}

impl<V: GameView, S: StarterPicker> TurnController<V, S> {
    /// Creates a controller that has not started a game yet.
    #[instrument(skip_all, fields(board_size = *config.board_size()))]
    pub fn new(config: GameConfig, view: V, starter: S) -> Self {
        let board = Board::new(*config.board_size());
        Self {
            config,
            board,
            players: None,
            current: Seat::First,
            phase: Phase::NotStarted,
            view,
            starter,
        }
    }

    /// Registers both players and begins a fresh game.
    ///
    /// The first name plays [`Marker::X`], the second [`Marker::O`]. Blank
    /// names are replaced with the configured defaults. The starting player
    /// is chosen by the starter picker.
    #[instrument(skip_all)]
    pub fn start_game(&mut self, first: impl Into<String>, second: impl Into<String>) {
        let [default_first, default_second] = self.config.default_names();
        let players = [
            Player::new(name_or_default(first.into(), default_first), Marker::X),
            Player::new(name_or_default(second.into(), default_second), Marker::O),
        ];
        info!(first = %players[0], second = %players[1], "Starting game");
        self.players = Some(players);
        self.begin();
    }

    /// Starts a new game with the same two players.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::NotStarted`] if [`Self::start_game`] was never
    /// called.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn restart_game(&mut self) -> Result<(), StartError> {
        if self.players.is_none() {
            warn!("Restart requested before any game was started");
            return Err(StartError::NotStarted);
        }
        info!("Restarting game");
        self.begin();
        Ok(())
    }

    /// Plays the current player's marker at row `x`, column `y`.
    ///
    /// The turn passes to the other player before the board is evaluated, so
    /// the "next player" notification goes out even on a game-ending move,
    /// ahead of the win or draw notification.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn make_turn(&mut self, x: usize, y: usize) -> TurnOutcome {
        if self.phase != Phase::InProgress {
            debug!("Move ignored, game not in progress");
            return TurnOutcome::Ignored;
        }
        let Some(players) = &self.players else {
            return TurnOutcome::Ignored;
        };

        let seat = self.current;
        let mover = &players[seat.index()];
        if let Err(err) = self.board.mark(x, y, *mover.marker()) {
            debug!(%err, "Move rejected");
            return TurnOutcome::Rejected(err);
        }
        debug!(
            player = %mover,
            board = %self.board.render(self.config.markers()),
            "Cell marked"
        );
        if let Some(cell) = self.board.cell(x, y) {
            self.view.on_cell_marked(cell, mover);
        }

        self.current = self.current.other();
        self.view.on_turn_changed(&players[self.current.index()]);

        match self.board.condition() {
            GameCondition::InProgress => TurnOutcome::Continue,
            GameCondition::Win { line } => {
                // Only the player who just moved can have completed a line.
                debug_assert_eq!(line.marker(), Some(seat.marker()));
                let winner = mover;
                self.phase = Phase::Won;
                info!(winner = %winner, kind = %line.kind(), "Game won");
                self.view.on_win(winner, &line);
                self.view.on_game_end();
                TurnOutcome::Won(winner.clone())
            }
            GameCondition::Draw { cells } => {
                self.phase = Phase::Drawn;
                info!("Game drawn");
                self.view.on_draw(&cells);
                self.view.on_game_end();
                TurnOutcome::Drawn
            }
        }
    }

    /// Checks if the game has been won or drawn.
    pub fn is_stopped(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Player whose move is next, once a game has started.
    pub fn current_player(&self) -> Option<&Player> {
        self.players
            .as_ref()
            .map(|players| &players[self.current.index()])
    }

    /// Name of the player whose move is next.
    pub fn current_player_name(&self) -> Option<&str> {
        self.current_player().map(|player| player.name().as_str())
    }

    /// Both players, in registration order.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Configuration the controller was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The attached view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the attached view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Consumes the controller, returning its view.
    pub fn into_view(self) -> V {
        self.view
    }

    fn begin(&mut self) {
        let Some(players) = &self.players else {
            return;
        };
        self.board.reset();
        self.current = self.starter.pick();
        self.phase = Phase::InProgress;
        let starting = &players[self.current.index()];
        info!(starting = %starting, "Game in progress");
        self.view.on_game_start();
        self.view.on_turn_changed(starting);
    }
}

fn name_or_default(name: String, default: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EventLog, FixedStarter, ViewEvent};

    fn controller(seat: Seat) -> TurnController<EventLog, FixedStarter> {
        TurnController::new(GameConfig::default(), EventLog::new(), FixedStarter(seat))
    }

    #[test]
    fn test_not_started_ignores_moves() {
        let mut game = controller(Seat::First);
        assert_eq!(game.phase(), Phase::NotStarted);
        assert_eq!(game.make_turn(0, 0), TurnOutcome::Ignored);
        assert!(game.current_player_name().is_none());
        assert!(game.view().events().is_empty());
    }

    #[test]
    fn test_start_notifies_starting_player() {
        let mut game = controller(Seat::Second);
        game.start_game("John", "Anna");
        assert_eq!(game.phase(), Phase::InProgress);
        assert_eq!(game.current_player_name(), Some("Anna"));
        assert_eq!(game.view().events()[0], ViewEvent::GameStart);
        assert_eq!(
            game.view().events()[1],
            ViewEvent::TurnChanged {
                next: Player::new("Anna", Marker::O)
            }
        );
    }

    #[test]
    fn test_blank_names_use_defaults() {
        let mut game = controller(Seat::First);
        game.start_game("   ", "");
        let players = game.players().unwrap();
        assert_eq!(players[0].name(), "Player 1");
        assert_eq!(players[1].name(), "Player 2");
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = controller(Seat::First);
        game.start_game("John", "Anna");
        assert_eq!(game.make_turn(1, 1), TurnOutcome::Continue);
        assert_eq!(game.current_player_name(), Some("Anna"));
        assert_eq!(game.board().cell(1, 1).unwrap().marker(), Some(Marker::X));
        assert_eq!(game.make_turn(0, 0), TurnOutcome::Continue);
        assert_eq!(game.board().cell(0, 0).unwrap().marker(), Some(Marker::O));
        assert_eq!(game.current_player_name(), Some("John"));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = controller(Seat::First);
        game.start_game("John", "Anna");
        game.make_turn(1, 1);
        let before = game.view().events().len();
        assert!(matches!(
            game.make_turn(1, 1),
            TurnOutcome::Rejected(MarkError::Occupied { .. })
        ));
        assert!(matches!(
            game.make_turn(5, 1),
            TurnOutcome::Rejected(MarkError::OutOfBounds { .. })
        ));
        assert_eq!(game.current_player_name(), Some("Anna"));
        assert_eq!(game.view().events().len(), before);
    }

    #[test]
    fn test_winner_is_player_who_completed_line() {
        let mut game = controller(Seat::Second);
        game.start_game("John", "Anna");
        for (x, y) in [(0, 2), (0, 0), (1, 1), (1, 0)] {
            assert_eq!(game.make_turn(x, y), TurnOutcome::Continue);
        }
        let anna = game.players().unwrap()[Seat::Second.index()].clone();
        assert_eq!(game.make_turn(2, 0), TurnOutcome::Won(anna.clone()));
        assert_eq!(game.phase(), Phase::Won);
        assert!(game.view().events().contains(&ViewEvent::Win {
            winner: anna,
            line: match game.board().condition() {
                GameCondition::Win { line } => line,
                other => panic!("Expected a win, got {other:?}"),
            },
        }));
    }

    #[test]
    fn test_restart_before_start_fails() {
        let mut game = controller(Seat::First);
        assert_eq!(game.restart_game(), Err(StartError::NotStarted));
    }

    #[test]
    fn test_name_or_default_trims() {
        assert_eq!(name_or_default("  Anna ".to_string(), "x"), "Anna");
        assert_eq!(name_or_default("\t".to_string(), "x"), "x");
    }
}
