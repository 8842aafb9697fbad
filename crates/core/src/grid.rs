//! Grid module - the playing field
//!
//! The grid is a `rows x cols` array of [`Cell`]s stored flat in row-major
//! order. Coordinates are `(row, col)` with row 0 at the top; they are `i32`
//! so that piece coordinates which stray off the field can be tested without
//! casts.
//!
//! Queries and setters take coordinates that the caller has already checked.
//! Passing an out-of-range coordinate is a programmer error and panics with
//! [`EngineError::OutOfBounds`]; [`Grid::cell`] is the checked variant.

use std::fmt;

use crate::types::{CellState, EngineError, Rgb, MIN_COLS, MIN_ROWS};

/// A single grid location
///
/// Every non-empty state carries the color it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Active(Rgb),
    Inactive(Rgb),
    Highlighted(Rgb),
}

impl Cell {
    pub fn state(&self) -> CellState {
        match self {
            Cell::Empty => CellState::Empty,
            Cell::Active(_) => CellState::Active,
            Cell::Inactive(_) => CellState::Inactive,
            Cell::Highlighted(_) => CellState::Highlighted,
        }
    }

    pub fn color(&self) -> Option<Rgb> {
        match *self {
            Cell::Empty => None,
            Cell::Active(c) | Cell::Inactive(c) | Cell::Highlighted(c) => Some(c),
        }
    }

    fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Active(_) => '#',
            Cell::Inactive(_) => 'O',
            Cell::Highlighted(_) => '+',
        }
    }
}

/// The playing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// Dimensions below the 6x6 minimum are clamped up.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(MIN_ROWS);
        let cols = cols.max(MIN_COLS);
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if `(row, col)` addresses a cell of this grid
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    #[inline]
    fn index(&self, row: i32, col: i32) -> Result<usize, EngineError> {
        if !self.contains(row, col) {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row as usize * self.cols + col as usize)
    }

    #[inline]
    fn index_or_panic(&self, row: i32, col: i32) -> usize {
        match self.index(row, col) {
            Ok(idx) => idx,
            Err(err) => panic!("{err}"),
        }
    }

    /// Get the cell at `(row, col)`
    pub fn cell(&self, row: i32, col: i32) -> Result<Cell, EngineError> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// State of the cell at `(row, col)`
    ///
    /// # Panics
    ///
    /// If the coordinate is outside the grid.
    pub fn state(&self, row: i32, col: i32) -> CellState {
        self.cells[self.index_or_panic(row, col)].state()
    }

    /// Color of the cell at `(row, col)`, `None` when empty
    ///
    /// # Panics
    ///
    /// If the coordinate is outside the grid.
    pub fn color(&self, row: i32, col: i32) -> Option<Rgb> {
        self.cells[self.index_or_panic(row, col)].color()
    }

    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        self.state(row, col) == CellState::Empty
    }

    pub fn is_active(&self, row: i32, col: i32) -> bool {
        self.state(row, col) == CellState::Active
    }

    pub fn is_inactive(&self, row: i32, col: i32) -> bool {
        self.state(row, col) == CellState::Inactive
    }

    pub fn is_highlighted(&self, row: i32, col: i32) -> bool {
        self.state(row, col) == CellState::Highlighted
    }

    /// Check if a coordinate is off the grid or on a locked cell
    pub fn is_blocked(&self, row: i32, col: i32) -> bool {
        !self.contains(row, col) || self.is_inactive(row, col)
    }

    fn put(&mut self, row: i32, col: i32, cell: Cell) {
        let idx = self.index_or_panic(row, col);
        self.cells[idx] = cell;
    }

    pub fn set_active(&mut self, row: i32, col: i32, color: Rgb) {
        self.put(row, col, Cell::Active(color));
    }

    pub fn set_inactive(&mut self, row: i32, col: i32, color: Rgb) {
        self.put(row, col, Cell::Inactive(color));
    }

    pub fn set_highlighted(&mut self, row: i32, col: i32, color: Rgb) {
        self.put(row, col, Cell::Highlighted(color));
    }

    pub fn set_empty(&mut self, row: i32, col: i32) {
        self.put(row, col, Cell::Empty);
    }

    /// Set every cell to empty
    pub fn clear_all(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check if a row consists of locked cells only
    pub fn row_is_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        self.row_slice(row)
            .iter()
            .all(|cell| matches!(cell, Cell::Inactive(_)))
    }

    /// Overwrite `row` with the row above it, repeating up to the top
    ///
    /// Locked cells keep their color as they move down. Anything else that
    /// moves down becomes empty, and the top row is emptied.
    pub fn shift_rows_down(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        let cols = self.cols;
        for r in (1..=row).rev() {
            for c in 0..cols {
                let above = self.cells[(r - 1) * cols + c];
                self.cells[r * cols + c] = match above {
                    Cell::Inactive(_) => above,
                    _ => Cell::Empty,
                };
            }
        }
        self.cells[..cols].fill(Cell::Empty);
    }

    /// Remove every full row and let the rows above fall into place
    ///
    /// Rows are scanned top to bottom. After a shift the same index is
    /// scanned again since a different row now occupies it.
    /// Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> u32 {
        let mut cleared = 0;
        let mut row = 0;
        while row < self.rows {
            if self.row_is_full(row) {
                cleared += 1;
                self.shift_rows_down(row);
            } else {
                row += 1;
            }
        }
        cleared
    }

    /// Number of cells in the given state
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn row_slice(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }
}

impl fmt::Display for Grid {
    /// One line per row: `#` active, `O` locked, `+` ghost, `.` empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for cell in self.row_slice(row) {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn test_grid_clamps_to_minimum() {
        let grid = Grid::new(2, 3);
        assert_eq!(grid.rows(), 6);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.cells().len(), 36);
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(20, 10);
        assert_eq!(grid.index(0, 0), Ok(0));
        assert_eq!(grid.index(0, 9), Ok(9));
        assert_eq!(grid.index(1, 0), Ok(10));
        assert_eq!(grid.index(19, 9), Ok(199));
        assert!(grid.index(-1, 0).is_err());
        assert!(grid.index(0, 10).is_err());
        assert!(grid.index(20, 0).is_err());
    }

    #[test]
    fn test_cell_color_follows_state() {
        let mut grid = Grid::new(6, 6);
        grid.set_highlighted(2, 2, RED);
        assert_eq!(grid.cell(2, 2), Ok(Cell::Highlighted(RED)));
        grid.set_empty(2, 2);
        assert_eq!(grid.color(2, 2), None);
    }

    #[test]
    #[should_panic(expected = "outside the 6x6 grid")]
    fn test_query_out_of_bounds_panics() {
        let grid = Grid::new(6, 6);
        grid.is_empty(6, 0);
    }

    #[test]
    fn test_shift_drops_non_locked_cells() {
        let mut grid = Grid::new(6, 6);
        grid.set_active(1, 0, RED);
        grid.set_inactive(1, 1, RED);
        grid.set_inactive(0, 2, RED);
        grid.shift_rows_down(2);

        assert!(grid.is_empty(2, 0));
        assert!(grid.is_inactive(2, 1));
        assert!(grid.is_inactive(1, 2));
        assert!((0..6).all(|c| grid.is_empty(0, c)));
    }

    #[test]
    fn test_display_dump() {
        let mut grid = Grid::new(6, 6);
        grid.set_active(0, 0, RED);
        grid.set_inactive(5, 5, RED);
        grid.set_highlighted(4, 5, RED);
        let text = grid.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "#.....");
        assert_eq!(lines[4], ".....+");
        assert_eq!(lines[5], ".....O");
    }
}
