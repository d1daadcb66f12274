//! Line-oriented terminal view.

use std::fmt::Display;
use std::io::Write;
use tictactoe_engine::{Board, Cell, GameConfig, GameView, Line, MarkerSymbols, Player};
use tracing::warn;

/// Renders game notifications as text on any writer.
///
/// Keeps its own copy of the board, filled from `on_cell_marked`, so it never
/// needs to reach back into the controller.
#[derive(Debug)]
pub struct ConsoleView<W> {
    out: W,
    symbols: MarkerSymbols,
    board: Board,
    input_enabled: bool,
}

impl<W: Write> ConsoleView<W> {
    /// Creates a view writing to `out`, sized and styled from `config`.
    pub fn new(out: W, config: &GameConfig) -> Self {
        Self {
            out,
            symbols: config.markers().clone(),
            board: Board::new(*config.board_size()),
            input_enabled: false,
        }
    }

    /// Whether the view currently accepts moves.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Writes a free-form line, e.g. a prompt or an error message.
    pub fn say(&mut self, message: impl Display) {
        if let Err(e) = writeln!(self.out, "{}", message) {
            warn!(error = %e, "Failed to write to console");
        }
    }

    /// Current grid as text, one row per line with rules in between.
    pub fn render(&self) -> String {
        self.board.render_with(&self.symbols, " | ", Some('-'))
    }

    /// Consumes the view, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn label(&self, player: &Player) -> String {
        format!("{} ({})", player.name(), self.symbols.symbol(*player.marker()))
    }
}

impl<W: Write> GameView for ConsoleView<W> {
    fn on_game_start(&mut self) {
        self.board.reset();
        self.input_enabled = true;
        self.say(format!("New game on a {0}x{0} board.", self.board.size()));
        let board = self.render();
        self.say(board);
    }

    fn on_turn_changed(&mut self, next: &Player) {
        let label = self.label(next);
        self.say(format!("Now it's {}'s turn.", label));
    }

    fn on_cell_marked(&mut self, cell: &Cell, by: &Player) {
        if let Err(e) = self.board.mark(cell.row(), cell.col(), *by.marker()) {
            warn!(error = %e, "Console board out of sync");
        }
        let label = self.label(by);
        self.say(format!("{} marks ({}, {}).", label, cell.row(), cell.col()));
        let board = self.render();
        self.say(board);
    }

    fn on_win(&mut self, winner: &Player, line: &Line) {
        let label = self.label(winner);
        self.say(format!(
            "Now we have a winner! Winner is {} with {}.",
            label,
            line.kind()
        ));
    }

    fn on_draw(&mut self, _cells: &[Cell]) {
        self.say("It's a draw. Try again!");
    }

    fn on_game_end(&mut self) {
        self.input_enabled = false;
        self.say("Game over.");
    }
}
