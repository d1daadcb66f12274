//! N x N tic-tac-toe board.

use crate::{BoardShapeError, Cell, GameCondition, MarkError, Marker, MarkerSymbols, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default board side length.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Largest side length a configuration may ask for.
pub const MAX_BOARD_SIZE: usize = 64;

/// Square grid of cells.
///
/// The size is fixed for the board's lifetime. A cell can be marked once per
/// game; [`Board::reset`] is the only way to clear it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size x size` board.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Cell::empty(row, col)))
            .collect();
        Self { size, cells }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Clears every cell.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
    }

    /// Places `marker` at row `x`, column `y`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkError::OutOfBounds`] if the coordinates are off the grid
    /// and [`MarkError::Occupied`] if the cell already holds a marker. The
    /// board is unchanged in both cases.
    #[instrument(skip(self))]
    pub fn mark(&mut self, x: usize, y: usize, marker: Marker) -> Result<(), MarkError> {
        let size = self.size;
        let idx = self
            .index(x, y)
            .ok_or(MarkError::OutOfBounds { x, y, size })?;
        let cell = &mut self.cells[idx];
        if let Some(existing) = cell.marker() {
            debug!(?existing, "Cell already marked");
            return Err(MarkError::Occupied {
                x,
                y,
                marker: existing,
            });
        }
        cell.set_marker(marker);
        Ok(())
    }

    /// Evaluates whether the game is over, and how.
    ///
    /// Pure function of the grid: rows are checked first, then columns, then
    /// the main diagonal, then the anti-diagonal.
    pub fn condition(&self) -> GameCondition {
        rules::evaluate(self)
    }

    /// Returns the cell at row `x`, column `y`.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Checks if the cell exists and holds no marker.
    pub fn is_empty_at(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(Cell::is_empty)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics, and a zero-sized board has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Cells that can still be marked.
    pub fn empty_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.is_empty())
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Formats the board as text, one row per line.
    ///
    /// Empty cells render as `.`; columns are separated by `|`.
    pub fn render(&self, symbols: &MarkerSymbols) -> String {
        self.render_with(symbols, "|", None)
    }

    /// Formats the board with a custom column separator.
    ///
    /// With `rule` set, a line of that character as wide as the widest row is
    /// drawn between rows.
    pub fn render_with(
        &self,
        symbols: &MarkerSymbols,
        separator: &str,
        rule: Option<char>,
    ) -> String {
        let lines: Vec<String> = self
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell.marker() {
                        Some(marker) => symbols.symbol(marker),
                        None => ".",
                    })
                    .collect::<Vec<_>>()
                    .join(separator)
            })
            .collect();
        match rule {
            Some(ch) => {
                let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
                let divider = format!("\n{}\n", ch.to_string().repeat(width));
                lines.join(&divider)
            }
            None => lines.join("\n"),
        }
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.size && y < self.size).then(|| x * self.size + y)
    }
}

/// Serialized form, checked before it becomes a [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardShapeError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = raw
            .size
            .checked_mul(raw.size)
            .ok_or_else(|| BoardShapeError::new(format!("size {} is too large", raw.size)))?;
        if raw.cells.len() != expected {
            return Err(BoardShapeError::new(format!(
                "expected {} cells for size {}, found {}",
                expected,
                raw.size,
                raw.cells.len()
            )));
        }
        for (idx, cell) in raw.cells.iter().enumerate() {
            let (row, col) = (idx / raw.size, idx % raw.size);
            if (cell.row(), cell.col()) != (row, col) {
                return Err(BoardShapeError::new(format!(
                    "cell {} is at ({}, {}), expected ({}, {})",
                    idx,
                    cell.row(),
                    cell.col(),
                    row,
                    col
                )));
            }
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.size(), 3);
        assert_eq!(board.cells().len(), 9);
        assert!(board.cells().iter().all(Cell::is_empty));
        assert_eq!(board.condition(), GameCondition::InProgress);
    }

    #[test]
    fn test_cells_know_their_position() {
        let board = Board::new(4);
        let cell = board.cell(2, 3).unwrap();
        assert_eq!((cell.row(), cell.col()), (2, 3));
        assert!(board.cell(4, 0).is_none());
    }

    #[test]
    fn test_mark_sets_marker() {
        let mut board = Board::default();
        assert!(board.mark(1, 2, Marker::X).is_ok());
        assert_eq!(board.cell(1, 2).unwrap().marker(), Some(Marker::X));
        assert!(!board.is_empty_at(1, 2));
        assert_eq!(board.empty_cells().count(), 8);
    }

    #[test]
    fn test_mark_occupied_fails() {
        let mut board = Board::default();
        board.mark(0, 0, Marker::X).unwrap();
        let err = board.mark(0, 0, Marker::O).unwrap_err();
        assert_eq!(
            err,
            MarkError::Occupied {
                x: 0,
                y: 0,
                marker: Marker::X
            }
        );
        assert_eq!(board.cell(0, 0).unwrap().marker(), Some(Marker::X));
    }

    #[test]
    fn test_mark_out_of_bounds_fails() {
        let mut board = Board::default();
        let before = board.clone();
        assert!(matches!(
            board.mark(3, 0, Marker::X),
            Err(MarkError::OutOfBounds { x: 3, y: 0, size: 3 })
        ));
        assert!(board.mark(0, 7, Marker::O).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_clears() {
        let mut board = Board::default();
        board.mark(0, 0, Marker::X).unwrap();
        board.mark(2, 1, Marker::O).unwrap();
        board.reset();
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_render() {
        let mut board = Board::default();
        board.mark(0, 0, Marker::X).unwrap();
        board.mark(1, 1, Marker::O).unwrap();
        assert_eq!(board.render(&MarkerSymbols::default()), "X|.|.\n.|O|.\n.|.|.");
    }

    #[test]
    fn test_render_with_rule() {
        let mut board = Board::new(2);
        board.mark(1, 0, Marker::O).unwrap();
        assert_eq!(
            board.render_with(&MarkerSymbols::default(), " | ", Some('-')),
            ". | .\n-----\nO | ."
        );
    }
}
