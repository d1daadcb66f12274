//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Line, LineKind};

/// Finds the first line fully occupied by a single marker.
///
/// Lines are scanned rows first, then columns, then the main diagonal, then
/// the anti-diagonal, each in increasing index order. The order only matters
/// for contrived boards where several lines complete at once.
pub fn winning_line(board: &Board) -> Option<Line> {
    let size = board.size();
    LineKind::all(size)
        .map(|kind| line_at(board, kind))
        .find(|line| line.marker().is_some())
}

fn line_at(board: &Board, kind: LineKind) -> Line {
    let cells: Vec<Cell> = kind
        .positions(board.size())
        .into_iter()
        .filter_map(|(x, y)| board.cell(x, y).copied())
        .collect();
    Line::new(kind, cells)
}
