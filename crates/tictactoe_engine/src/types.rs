//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Marker a player claims cells with.
///
/// The two variants are player slots, not glyphs. What gets drawn for each
/// slot comes from [`crate::MarkerSymbols`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Marker of the first registered player.
    X,
    /// Marker of the second registered player.
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn other(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// Which of the two players in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Seat {
    /// Player registered first (plays [`Marker::X`]).
    First,
    /// Player registered second (plays [`Marker::O`]).
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into a two-player array.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// Marker played from this seat.
    pub fn marker(self) -> Marker {
        match self {
            Seat::First => Marker::X,
            Seat::Second => Marker::O,
        }
    }
}

/// A single cell on the board.
///
/// The position is fixed when the board is built; only the marker changes,
/// and only through [`crate::Board::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    row: usize,
    col: usize,
    marker: Option<Marker>,
}

impl Cell {
    /// Creates an empty cell at the given position.
    pub fn empty(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            marker: None,
        }
    }

    /// Row index (the `x` coordinate of a move).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index (the `y` coordinate of a move).
    pub fn col(&self) -> usize {
        self.col
    }

    /// Marker occupying the cell, if any.
    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    /// Checks if no marker has been placed here.
    pub fn is_empty(&self) -> bool {
        self.marker.is_none()
    }

    pub(crate) fn set_marker(&mut self, marker: Marker) {
        self.marker = Some(marker);
    }

    pub(crate) fn clear(&mut self) {
        self.marker = None;
    }
}
