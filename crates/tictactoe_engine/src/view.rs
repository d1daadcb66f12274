//! Notification interface between the engine and whatever renders it.

use crate::{Cell, Line, Player};
use serde::{Deserialize, Serialize};

/// Receives state changes from a [`crate::TurnController`].
///
/// Calls are synchronous and happen in the order the controller makes them.
/// Rendering technology is up to the implementor.
pub trait GameView {
    /// A game (re)started; move input should be enabled.
    fn on_game_start(&mut self);

    /// `next` is the player who moves next.
    fn on_turn_changed(&mut self, next: &Player);

    /// `by` placed their marker on `cell`.
    fn on_cell_marked(&mut self, cell: &Cell, by: &Player);

    /// `winner` completed `line`.
    fn on_win(&mut self, winner: &Player, line: &Line);

    /// The board filled up without a winner.
    fn on_draw(&mut self, cells: &[Cell]);

    /// The game is over; move input should be disabled.
    fn on_game_end(&mut self);
}

impl<V: GameView + ?Sized> GameView for &mut V {
    fn on_game_start(&mut self) {
        (**self).on_game_start();
    }

    fn on_turn_changed(&mut self, next: &Player) {
        (**self).on_turn_changed(next);
    }

    fn on_cell_marked(&mut self, cell: &Cell, by: &Player) {
        (**self).on_cell_marked(cell, by);
    }

    fn on_win(&mut self, winner: &Player, line: &Line) {
        (**self).on_win(winner, line);
    }

    fn on_draw(&mut self, cells: &[Cell]) {
        (**self).on_draw(cells);
    }

    fn on_game_end(&mut self) {
        (**self).on_game_end();
    }
}

/// A notification as recorded by [`EventLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ViewEvent {
    /// See [`GameView::on_game_start`].
    GameStart,
    /// See [`GameView::on_turn_changed`].
    TurnChanged {
        /// Player to move next.
        next: Player,
    },
    /// See [`GameView::on_cell_marked`].
    CellMarked {
        /// The freshly marked cell.
        cell: Cell,
        /// Who marked it.
        by: Player,
    },
    /// See [`GameView::on_win`].
    Win {
        /// Winning player.
        winner: Player,
        /// Completed line.
        line: Line,
    },
    /// See [`GameView::on_draw`].
    Draw {
        /// Full grid.
        cells: Vec<Cell>,
    },
    /// See [`GameView::on_game_end`].
    GameEnd,
}

/// View that records every notification.
///
/// Useful as a headless view and for transcripts.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<ViewEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first.
    pub fn events(&self) -> &[ViewEvent] {
        &self.events
    }

    /// Removes and returns the recorded events.
    pub fn drain(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of win notifications received.
    pub fn wins(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ViewEvent::Win { .. }))
            .count()
    }

    /// Number of draw notifications received.
    pub fn draws(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ViewEvent::Draw { .. }))
            .count()
    }
}

impl GameView for EventLog {
    fn on_game_start(&mut self) {
        self.events.push(ViewEvent::GameStart);
    }

    fn on_turn_changed(&mut self, next: &Player) {
        self.events.push(ViewEvent::TurnChanged { next: next.clone() });
    }

    fn on_cell_marked(&mut self, cell: &Cell, by: &Player) {
        self.events.push(ViewEvent::CellMarked {
            cell: *cell,
            by: by.clone(),
        });
    }

    fn on_win(&mut self, winner: &Player, line: &Line) {
        self.events.push(ViewEvent::Win {
            winner: winner.clone(),
            line: line.clone(),
        });
    }

    fn on_draw(&mut self, cells: &[Cell]) {
        self.events.push(ViewEvent::Draw {
            cells: cells.to_vec(),
        });
    }

    fn on_game_end(&mut self) {
        self.events.push(ViewEvent::GameEnd);
    }
}
