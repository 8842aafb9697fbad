//! Engine module - round state and the command surface
//!
//! [`GameEngine`] owns the grid, the falling piece, its ghost projection and
//! the lookahead queue. Every command is synchronous and runs to completion;
//! callers drive gravity by calling [`GameEngine::tick`] every
//! [`fall_interval_ms`](GameEngine::fall_interval_ms) and pause by not calling
//! anything.
//!
//! Moves are tested with the piece's proposal ([`Tetromino::simulate_shift`])
//! and only committed when nothing is hit. A blocked downward move locks the
//! piece, clears full rows and spawns the next piece. A spawn that overlaps
//! the stack ends the round; afterwards every command except
//! [`GameEngine::new_game`] is ignored.

use std::fmt;

use crate::config::EngineConfig;
use crate::grid::Grid;
use crate::queue::PieceQueue;
use crate::scoring::{next_fall_interval_ms, score_for_cleared_rows};
use crate::snapshot::GameSnapshot;
use crate::tetromino::Tetromino;
use crate::types::{CellState, Command, Direction, Rgb, Shape, SPAWN_ROW};

/// Where a round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundState {
    /// Waiting for the next move or tick to spawn a piece
    #[default]
    NoActivePiece,
    PieceFalling,
    /// A spawn was blocked; only `new_game` does anything now
    RoundOver,
}

/// Result of a single command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing happened (round over, or nothing to act on)
    Ignored,
    /// A new piece entered the grid
    Spawned,
    /// The piece moved one cell
    Moved,
    /// The piece turned clockwise, possibly after horizontal nudges
    Rotated,
    /// The move or rotation would collide and was discarded
    Blocked,
    /// The piece landed; the next piece spawned cleanly
    Locked { rows_cleared: u32 },
    /// A spawn overlapped the stack and ended the round
    RoundOver,
    /// A fresh round was set up
    Restarted,
}

impl MoveOutcome {
    /// Check if the command changed the grid
    pub fn changed(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored | MoveOutcome::Blocked)
    }
}

/// Conflicting sides of a proposed rotation, relative to the proposal's anchor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RotationConflicts {
    top: bool,
    bottom: bool,
    left: bool,
    right: bool,
}

impl RotationConflicts {
    /// Horizontal nudge that moves away from a one-sided conflict
    fn nudge(&self) -> Option<Direction> {
        match (self.left, self.right) {
            (true, false) => Some(Direction::Right),
            (false, true) => Some(Direction::Left),
            _ => None,
        }
    }

    /// Right-side conflicts alone never reject a rotation.
    fn allows_commit(&self) -> bool {
        !self.left && !self.top && !self.bottom
    }
}

/// The falling-block rules engine
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: EngineConfig,
    grid: Grid,
    queue: PieceQueue,
    current: Option<Tetromino>,
    ghost: Option<Tetromino>,
    score: u32,
    level: u32,
    lines: u32,
    /// Gravity ticks since the round started
    ticks: u32,
    fall_interval_ms: u32,
    game_over: bool,
}

impl GameEngine {
    /// Create an engine drawing pieces from `queue`
    ///
    /// The round starts without a piece; the first move or tick spawns one.
    pub fn new(config: EngineConfig, queue: PieceQueue) -> Self {
        let config = config.normalized();
        let grid = Grid::new(config.rows, config.cols);
        Self::build(config, grid, queue)
    }

    /// Create an engine with its own queue seeded from `seed`
    pub fn with_seed(config: EngineConfig, seed: u32) -> Self {
        let queue = PieceQueue::new(seed, config.lookahead);
        Self::new(config, queue)
    }

    /// Create an engine over a prepared grid
    ///
    /// The grid's dimensions replace the configured ones. Useful for puzzles
    /// and for reproducing a position.
    pub fn with_grid(config: EngineConfig, grid: Grid, queue: PieceQueue) -> Self {
        let mut config = config.normalized();
        config.rows = grid.rows();
        config.cols = grid.cols();
        Self::build(config, grid, queue)
    }

    fn build(config: EngineConfig, grid: Grid, queue: PieceQueue) -> Self {
        Self {
            fall_interval_ms: config.initial_fall_interval_ms,
            config,
            grid,
            queue,
            current: None,
            ghost: None,
            score: 0,
            level: 0,
            lines: 0,
            ticks: 0,
            game_over: false,
        }
    }

    /// Start a new round: empty grid, zeroed counters, freshly drawn queue
    pub fn new_game(&mut self) {
        self.grid.clear_all();
        self.queue.reset();
        self.current = None;
        self.ghost = None;
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.ticks = 0;
        self.fall_interval_ms = self.config.initial_fall_interval_ms;
        self.game_over = false;
    }

    // ---- queries ----

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// State of the cell at `(row, col)`
    ///
    /// # Panics
    ///
    /// If the coordinate is outside the grid.
    pub fn cell_state(&self, row: i32, col: i32) -> CellState {
        self.grid.state(row, col)
    }

    /// Color of the cell at `(row, col)`, `None` when empty
    ///
    /// # Panics
    ///
    /// If the coordinate is outside the grid.
    pub fn cell_color(&self, row: i32, col: i32) -> Option<Rgb> {
        self.grid.color(row, col)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Total rows cleared this round
    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Current gravity interval
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn round_state(&self) -> RoundState {
        if self.game_over {
            RoundState::RoundOver
        } else if self.current.is_some() {
            RoundState::PieceFalling
        } else {
            RoundState::NoActivePiece
        }
    }

    pub fn current_piece(&self) -> Option<&Tetromino> {
        self.current.as_ref()
    }

    pub fn ghost_piece(&self) -> Option<&Tetromino> {
        self.ghost.as_ref()
    }

    /// Shapes waiting in the lookahead queue, next first
    pub fn upcoming(&self) -> impl Iterator<Item = Shape> + '_ {
        self.queue.upcoming().map(Tetromino::shape)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.cols = self.grid.cols();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms;
        out.game_over = self.game_over;
        out.round_state = self.round_state();
        out.current = self.current.map(|p| p.shape());
        out.upcoming.clear();
        out.upcoming.extend(self.upcoming());
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    // ---- commands ----

    /// Apply a parsed command
    pub fn apply(&mut self, command: Command) -> MoveOutcome {
        match command {
            Command::Move(direction) => self.move_piece(direction),
            Command::Rotate => self.rotate(),
            Command::Drop => self.drop(),
            Command::Tick => self.tick(),
            Command::NewGame => {
                self.new_game();
                MoveOutcome::Restarted
            }
        }
    }

    /// Move the current piece one cell
    ///
    /// Without a current piece this spawns the next one instead. A blocked
    /// downward move locks the piece in place.
    pub fn move_piece(&mut self, direction: Direction) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Ignored;
        }
        let Some(mut piece) = self.current.take() else {
            return self.spawn_next();
        };

        piece.simulate_shift(direction);
        let hit = self.move_hits(&piece, direction);
        piece.reset_simulation();

        let landed = hit && direction == Direction::Down;
        for (row, col) in piece.coords() {
            if landed {
                self.grid.set_inactive(row, col, piece.color());
            } else if !hit {
                self.grid.set_empty(row, col);
            }
        }

        let outcome = if landed {
            let rows_cleared = self.grid.clear_full_rows();
            self.lines += rows_cleared;
            let multiplier = self.config.score_multiplier;
            self.score += score_for_cleared_rows(rows_cleared, self.level, multiplier);
            match self.spawn_next() {
                MoveOutcome::RoundOver => MoveOutcome::RoundOver,
                _ => MoveOutcome::Locked { rows_cleared },
            }
        } else if hit {
            self.current = Some(piece);
            MoveOutcome::Blocked
        } else {
            piece.shift(direction);
            self.paint_active(&piece);
            self.current = Some(piece);
            MoveOutcome::Moved
        };

        if direction != Direction::Down {
            self.refresh_ghost();
        }
        outcome
    }

    /// Turn the current piece clockwise
    ///
    /// Overlaps with a wall or the stack on exactly one side are resolved by
    /// nudging the proposal away from that side, one column at a time, at
    /// most `cols` times.
    pub fn rotate(&mut self) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Ignored;
        }
        let Some(mut piece) = self.current.take() else {
            return MoveOutcome::Ignored;
        };

        let old_coords = piece.coords();
        piece.simulate_rotate();

        // A reversed nudge revisits an earlier proposal and a row conflict
        // never slides away; both end as conflicts on both sides.
        let max_nudges = self.grid.cols();
        let mut nudges = 0;
        let mut last_nudge: Option<Direction> = None;
        let conflicts = loop {
            let conflicts = self.rotation_conflicts(&piece);
            let Some(nudge) = conflicts.nudge() else {
                break conflicts;
            };
            if last_nudge == Some(nudge.opposite()) || nudges >= max_nudges {
                break RotationConflicts {
                    left: true,
                    right: true,
                    ..conflicts
                };
            }
            piece.simulate_shift(nudge);
            last_nudge = Some(nudge);
            nudges += 1;
        };

        if !conflicts.allows_commit() {
            piece.reset_simulation();
            self.current = Some(piece);
            return MoveOutcome::Blocked;
        }

        for (row, col) in old_coords {
            self.grid.set_empty(row, col);
        }
        piece.apply_simulation();
        self.paint_active(&piece);
        self.current = Some(piece);
        self.refresh_ghost();
        MoveOutcome::Rotated
    }

    /// Send the current piece straight to its ghost position and lock it
    pub fn drop(&mut self) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Ignored;
        }
        let (Some(current), Some(ghost)) = (self.current, self.ghost) else {
            return MoveOutcome::Ignored;
        };

        for (row, col) in current.coords() {
            self.grid.set_empty(row, col);
        }
        self.ghost = None;
        self.paint_active(&ghost);
        self.current = Some(ghost);
        self.move_piece(Direction::Down)
    }

    /// One gravity step
    ///
    /// Moves the piece down (or spawns one), then advances the level every
    /// `ticks_per_level` ticks while the round is still running.
    pub fn tick(&mut self) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Ignored;
        }
        let outcome = self.move_piece(Direction::Down);
        if self.game_over {
            return outcome;
        }

        if self.level < self.config.max_level && self.ticks % self.config.ticks_per_level == 0 {
            self.level += 1;
            self.fall_interval_ms =
                next_fall_interval_ms(self.fall_interval_ms, self.config.fall_interval_decay);
        }
        self.ticks = self.ticks.wrapping_add(1);
        outcome
    }

    // ---- internals ----

    /// Draw the next piece and spawn it
    fn spawn_next(&mut self) -> MoveOutcome {
        let piece = self.queue.next_piece();
        if self.spawn(piece) {
            MoveOutcome::RoundOver
        } else {
            MoveOutcome::Spawned
        }
    }

    /// Place `piece` at the spawn anchor; returns `true` if it was blocked
    ///
    /// Cells already locked are left untouched. A blocked spawn ends the round.
    fn spawn(&mut self, mut piece: Tetromino) -> bool {
        piece.set_position(SPAWN_ROW, self.config.spawn_col());

        let mut blocked = false;
        for (row, col) in piece.coords() {
            if self.grid.is_blocked(row, col) {
                blocked = true;
            } else {
                self.grid.set_active(row, col, piece.color());
            }
        }

        self.current = Some(piece);
        self.refresh_ghost();

        if blocked {
            self.current = None;
            self.game_over = true;
        }
        blocked
    }

    fn move_hits(&self, piece: &Tetromino, direction: Direction) -> bool {
        let rows = self.grid.rows() as i32;
        let cols = self.grid.cols() as i32;
        piece.coords().iter().any(|&(row, col)| {
            let past_edge = match direction {
                Direction::Down => row == rows,
                Direction::Left => col < 0,
                Direction::Right => col >= cols,
                Direction::Up => false,
            };
            past_edge || self.grid.is_blocked(row, col)
        })
    }

    fn rotation_conflicts(&self, piece: &Tetromino) -> RotationConflicts {
        let anchor = piece.placement();
        let mut conflicts = RotationConflicts::default();
        for (row, col) in piece.coords() {
            if !self.grid.is_blocked(row, col) {
                continue;
            }
            if row <= anchor.row {
                conflicts.top = true;
            } else {
                conflicts.bottom = true;
            }
            if col <= anchor.col {
                conflicts.left = true;
            } else {
                conflicts.right = true;
            }
        }
        conflicts
    }

    fn paint_active(&mut self, piece: &Tetromino) {
        for (row, col) in piece.coords() {
            self.grid.set_active(row, col, piece.color());
        }
    }

    /// Redraw the landing projection of the current piece
    fn refresh_ghost(&mut self) {
        if let Some(old) = self.ghost.take() {
            for (row, col) in old.coords() {
                if self.grid.contains(row, col) && self.grid.is_highlighted(row, col) {
                    self.grid.set_empty(row, col);
                }
            }
        }

        let Some(current) = self.current else {
            return;
        };

        let rows = self.grid.rows() as i32;
        let mut ghost = current.detached_copy();
        loop {
            ghost.shift(Direction::Down);
            let landed = ghost.coords().iter().any(|&(row, col)| {
                row >= rows || (self.grid.contains(row, col) && self.grid.is_inactive(row, col))
            });
            if landed {
                break;
            }
        }
        ghost.shift(Direction::Up);

        for (row, col) in ghost.coords() {
            if self.grid.contains(row, col) && self.grid.is_empty(row, col) {
                self.grid.set_highlighted(row, col, ghost.color());
            }
        }
        self.ghost = Some(ghost);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_seed(EngineConfig::default(), 1)
    }
}

impl fmt::Display for GameEngine {
    /// Round summary followed by the grid dump
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "state={:?} score={} level={} lines={} ticks={} fall_interval_ms={}",
            self.round_state(),
            self.score,
            self.level,
            self.lines,
            self.ticks,
            self.fall_interval_ms
        )?;
        if let Some(piece) = &self.current {
            let p = piece.placement();
            writeln!(
                f,
                "current={} at ({}, {}) rotation={:?}",
                piece.shape(),
                p.row,
                p.col,
                p.rotation
            )?;
        }
        write!(f, "{}", self.grid)
    }
}
