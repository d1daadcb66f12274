//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from board storage
//! so the scan order can be read and tested on its own.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winning_line;

use crate::{Board, GameCondition};
use tracing::{debug, instrument};

/// Classifies a board as won, drawn or still in progress.
///
/// A win takes precedence over a full board.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board) -> GameCondition {
    if let Some(line) = winning_line(board) {
        debug!(kind = %line.kind(), marker = ?line.marker(), "Line completed");
        return GameCondition::Win { line };
    }
    if is_full(board) {
        debug!("Board full without a winner");
        return GameCondition::Draw {
            cells: board.cells().to_vec(),
        };
    }
    GameCondition::InProgress
}
