use crate::engine::RoundState;
use crate::grid::Cell;
use crate::types::Shape;

/// Read-only copy of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major, `rows * cols` long
    pub cells: Vec<Cell>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub game_over: bool,
    pub round_state: RoundState,
    pub current: Option<Shape>,
    pub upcoming: Vec<Shape>,
}

impl GameSnapshot {
    /// Cell at `(row, col)`, `Cell::Empty` when outside the grid
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.cols {
            return Cell::Empty;
        }
        self.cells
            .get(row * self.cols + col)
            .copied()
            .unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.cells.clear();
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.fall_interval_ms = 0;
        self.game_over = false;
        self.round_state = RoundState::NoActivePiece;
        self.current = None;
        self.upcoming.clear();
    }
}
