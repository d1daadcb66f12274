//! Terminal-condition types produced by [`crate::Board::condition`].

use crate::{Cell, Marker};
use serde::{Deserialize, Serialize};

/// Which line of the grid a [`Line`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Row with the given index.
    #[display("row {_0}")]
    Row(usize),
    /// Column with the given index.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl LineKind {
    /// All lines of a `size x size` board in evaluation order:
    /// rows, then columns, then the main diagonal, then the anti-diagonal.
    pub fn all(size: usize) -> impl Iterator<Item = LineKind> {
        (0..size)
            .map(LineKind::Row)
            .chain((0..size).map(LineKind::Column))
            .chain([LineKind::MainDiagonal, LineKind::AntiDiagonal])
    }

    /// Coordinates `(row, col)` covered by this line, in order.
    pub fn positions(self, size: usize) -> Vec<(usize, usize)> {
        (0..size)
            .map(|i| match self {
                LineKind::Row(row) => (row, i),
                LineKind::Column(col) => (i, col),
                LineKind::MainDiagonal => (i, i),
                LineKind::AntiDiagonal => (i, size - 1 - i),
            })
            .collect()
    }
}

/// A row, column or diagonal together with its cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    cells: Vec<Cell>,
}

impl Line {
    pub(crate) fn new(kind: LineKind, cells: Vec<Cell>) -> Self {
        Self { kind, cells }
    }

    /// Which line this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Cells in line order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Marker shared by every cell, or `None` if the line is not uniform.
    pub fn marker(&self) -> Option<Marker> {
        let first = self.cells.first()?.marker()?;
        self.cells
            .iter()
            .all(|cell| cell.marker() == Some(first))
            .then_some(first)
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCondition {
    /// Nobody has won and empty cells remain.
    InProgress,
    /// A line is fully occupied by one marker.
    Win {
        /// The completed line.
        line: Line,
    },
    /// Every cell is occupied and no line won.
    Draw {
        /// The whole grid in row-major order.
        cells: Vec<Cell>,
    },
}

impl GameCondition {
    /// Checks if the game is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameCondition::InProgress)
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<&Line> {
        match self {
            GameCondition::Win { line } => Some(line),
            _ => None,
        }
    }
}
