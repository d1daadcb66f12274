//! Error types for the game engine.

use crate::Marker;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a mark could not be placed.
///
/// Both cases are routine user behavior (clicking outside the grid, clicking
/// a cell twice); the board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
pub enum MarkError {
    /// Coordinates fall outside the `size x size` grid.
    #[display("Cell ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        x: usize,
        /// Requested column.
        y: usize,
        /// Board size.
        size: usize,
    },
    /// The cell already carries a marker.
    #[display("Cell ({x}, {y}) is already marked with {marker}")]
    Occupied {
        /// Requested row.
        x: usize,
        /// Requested column.
        y: usize,
        /// Marker already in place.
        marker: Marker,
    },
}

/// Errors raised when (re)starting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum StartError {
    /// `restart_game` was called before any `start_game`.
    #[display("No game has been started yet")]
    NotStarted,
}

/// A serialized board whose cells do not form a `size x size` grid.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board: {reason}")]
pub struct BoardShapeError {
    /// What is wrong with the grid.
    pub reason: String,
}

impl BoardShapeError {
    /// Creates an error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
