//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the rules engine, the terminal
//! front-end and tests alike.
//!
//! # Grid Dimensions
//!
//! - **Default**: 20 rows x 10 columns
//! - **Minimum**: 6 rows x 6 columns (smaller requests are clamped up)
//! - **Spawn anchor**: row 1, column `cols / 2 - 1`
//!
//! Coordinates are `(row, col)` with row 0 at the top.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FALL_INTERVAL_MS` | 1000 | Gravity interval before the first level-up |
//! | `DEFAULT_TICKS_PER_LEVEL` | 40 | Gravity ticks between level-ups |
//! | `DEFAULT_FALL_INTERVAL_DECAY` | 1.5 | Interval divisor applied on each level-up |
//! | `MAX_LEVEL` | 15 | Level cap |
//!
//! # Examples
//!
//! ```
//! use stacker_types::{Command, Direction, Rotation, Shape};
//!
//! let shape: Shape = "t".parse().unwrap();
//! assert_eq!(shape, Shape::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! let dir: Direction = "left".parse().unwrap();
//! assert_eq!(dir, Direction::Left);
//!
//! let cmd: Command = "drop".parse().unwrap();
//! assert_eq!(cmd, Command::Drop);
//! ```

use std::fmt;
use std::str::FromStr;

/// Default grid height in cells
pub const DEFAULT_ROWS: usize = 20;

/// Default grid width in cells
pub const DEFAULT_COLS: usize = 10;

/// Smallest accepted grid height
pub const MIN_ROWS: usize = 6;

/// Smallest accepted grid width
pub const MIN_COLS: usize = 6;

/// Row of the anchor cell for freshly spawned pieces
pub const SPAWN_ROW: i32 = 1;

/// Gravity interval at the start of a round (1000ms = 1 row per second)
pub const DEFAULT_FALL_INTERVAL_MS: u32 = 1000;

/// Number of gravity ticks between level-ups
pub const DEFAULT_TICKS_PER_LEVEL: u32 = 40;

/// Divisor applied to the fall interval on each level-up
pub const DEFAULT_FALL_INTERVAL_DECAY: f64 = 1.5;

/// Highest reachable level
pub const MAX_LEVEL: u32 = 15;

/// Number of upcoming pieces kept in the lookahead queue
pub const DEFAULT_LOOKAHEAD: usize = 2;

/// Line clear scoring table
///
/// Base points for clearing N rows in one lock:
/// - 0 rows: 0 points
/// - 1 row: 40 points
/// - 2 rows: 100 points
/// - 3 rows: 300 points
/// - 4 or more rows: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Errors raised by the rules engine.
///
/// None of these are expected during correct play: collisions, blocked spawns
/// and rejected rotations are ordinary results, not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },
    #[error("unknown direction {0:?} (expected up, down, left or right)")]
    InvalidDirection(String),
    #[error("unknown command {0:?}")]
    InvalidCommand(String),
    #[error("unknown shape {0:?} (expected one of I, J, L, O, S, T, Z)")]
    InvalidShape(String),
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetromino shapes
///
/// Each shape has a fixed display color:
/// - **I**: Cyan
/// - **J**: Blue
/// - **L**: Orange
/// - **O**: Yellow
/// - **S**: Green
/// - **T**: Purple
/// - **Z**: Red
///
/// The declaration order doubles as the shape index (0..7) used by the
/// randomizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl Shape {
    /// All shapes in index order
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::J,
        Shape::L,
        Shape::O,
        Shape::S,
        Shape::T,
        Shape::Z,
    ];

    /// Index of this shape in [`Shape::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Shape for an index in `0..7`
    ///
    /// ```
    /// use stacker_types::Shape;
    ///
    /// assert_eq!(Shape::from_index(3), Some(Shape::O));
    /// assert_eq!(Shape::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Fixed display color of the shape
    pub fn color(self) -> Rgb {
        match self {
            Shape::I => Rgb::new(0, 255, 255),
            Shape::J => Rgb::new(0, 0, 255),
            Shape::L => Rgb::new(255, 165, 0),
            Shape::O => Rgb::new(255, 255, 0),
            Shape::S => Rgb::new(0, 255, 0),
            Shape::T => Rgb::new(170, 0, 255),
            Shape::Z => Rgb::new(255, 0, 0),
        }
    }

    /// Uppercase single-letter name
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::I => "I",
            Shape::J => "J",
            Shape::L => "L",
            Shape::O => "O",
            Shape::S => "S",
            Shape::T => "T",
            Shape::Z => "Z",
        }
    }
}

impl FromStr for Shape {
    type Err = EngineError;

    /// Parse a shape letter (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "i" => Ok(Shape::I),
            "j" => Ok(Shape::J),
            "l" => Ok(Shape::L),
            "o" => Ok(Shape::O),
            "s" => Ok(Shape::S),
            "t" => Ok(Shape::T),
            "z" => Ok(Shape::Z),
            _ => Err(EngineError::InvalidShape(s.to_string())),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four clockwise rotation states of a piece
///
/// - **North**: Spawn orientation (index 0)
/// - **East**: One clockwise turn (index 1)
/// - **South**: Two turns (index 2)
/// - **West**: Three turns (index 3)
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use stacker_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Orientation index in `0..4`
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation for an orientation index, taken modulo 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// A one-cell step on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` delta of one step
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction pointing the other way
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    /// Parse a direction token (case-insensitive)
    ///
    /// ```
    /// use stacker_types::{Direction, EngineError};
    ///
    /// assert_eq!("DOWN".parse::<Direction>(), Ok(Direction::Down));
    /// assert_eq!(
    ///     "sideways".parse::<Direction>(),
    ///     Err(EngineError::InvalidDirection("sideways".to_string()))
    /// );
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(EngineError::InvalidDirection(s.to_string())),
        }
    }
}

/// State of a single grid cell, without its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Empty,
    /// Part of the falling piece
    Active,
    /// Part of the locked stack
    Inactive,
    /// Part of the landing preview (ghost)
    Highlighted,
}

/// Commands accepted by the engine
///
/// These are issued by the keyboard front-end and by the gravity timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the piece one cell (down also locks it when blocked)
    Move(Direction),
    /// Rotate the piece clockwise
    Rotate,
    /// Drop the piece onto its landing preview and lock it
    Drop,
    /// Gravity step, driven by the fall timer
    Tick,
    /// Clear the grid and start a new round
    NewGame,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(dir) => dir.as_str(),
            Command::Rotate => "rotate",
            Command::Drop => "drop",
            Command::Tick => "tick",
            Command::NewGame => "newGame",
        }
    }
}

impl FromStr for Command {
    type Err = EngineError;

    /// Parse a command token
    ///
    /// Direction names map to [`Command::Move`].
    ///
    /// ```
    /// use stacker_types::{Command, Direction};
    ///
    /// assert_eq!("left".parse::<Command>(), Ok(Command::Move(Direction::Left)));
    /// assert_eq!("rotate".parse::<Command>(), Ok(Command::Rotate));
    /// assert_eq!("newGame".parse::<Command>(), Ok(Command::NewGame));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(dir) = s.parse::<Direction>() {
            return Ok(Command::Move(dir));
        }
        match s.to_lowercase().as_str() {
            "rotate" => Ok(Command::Rotate),
            "drop" => Ok(Command::Drop),
            "tick" => Ok(Command::Tick),
            "newgame" | "new_game" => Ok(Command::NewGame),
            _ => Err(EngineError::InvalidCommand(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_index_roundtrip() {
        for (i, shape) in Shape::ALL.iter().enumerate() {
            assert_eq!(shape.index(), i);
            assert_eq!(Shape::from_index(i), Some(*shape));
        }
    }

    #[test]
    fn shape_colors_are_distinct() {
        let mut colors: Vec<Rgb> = Shape::ALL.iter().map(|s| s.color()).collect();
        colors.sort_by_key(|c| (c.r, c.g, c.b));
        colors.dedup();
        assert_eq!(colors.len(), 7);
        assert_eq!(Shape::O.color(), Rgb::new(255, 255, 0));
    }

    #[test]
    fn rotation_index_wraps() {
        assert_eq!(Rotation::from_index(4), Rotation::North);
        assert_eq!(Rotation::from_index(7), Rotation::West);
        assert_eq!(Rotation::West.rotate_cw().index(), 0);
    }

    #[test]
    fn direction_delta_and_opposite() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            let (or, oc) = dir.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn invalid_tokens_are_rejected() {
        assert!(matches!(
            "diagonal".parse::<Direction>(),
            Err(EngineError::InvalidDirection(_))
        ));
        assert!(matches!(
            "hold".parse::<Command>(),
            Err(EngineError::InvalidCommand(_))
        ));
        assert!(matches!("q".parse::<Shape>(), Err(EngineError::InvalidShape(_))));
    }

    #[test]
    fn error_messages_name_the_coordinate() {
        let err = EngineError::OutOfBounds {
            row: -1,
            col: 3,
            rows: 20,
            cols: 10,
        };
        assert_eq!(err.to_string(), "cell (-1, 3) is outside the 20x10 grid");
    }
}
