//! Core rules engine - pure, deterministic, and testable
//!
//! This crate holds every game rule: the grid and its cells, tetromino
//! geometry, simulate-then-commit movement, line clearing, scoring, level
//! progression and the piece randomizer. It has no I/O of its own; a front-end
//! feeds it commands and reads cells, score and level back.
//!
//! # Module Structure
//!
//! - [`grid`]: rows x cols field of colored cells, row clearing
//! - [`pieces`]: per-shape rotation layout tables
//! - [`tetromino`]: a piece with a committed placement and an optional proposal
//! - [`rng`]: seedable LCG and the alternating double-permutation randomizer
//! - [`queue`]: fixed-depth lookahead of upcoming pieces
//! - [`scoring`]: line clear points and fall interval decay
//! - [`config`]: engine configuration
//! - [`engine`]: [`GameEngine`], the command and query surface
//! - [`snapshot`]: a render-ready copy of the engine state
//!
//! # Rules
//!
//! - **Spawn**: row 1, column `cols / 2 - 1`, rotation 0. A spawn that overlaps
//!   a locked cell ends the round.
//! - **Rotation**: clockwise only. A proposal that overlaps a wall or the stack
//!   on exactly one side is nudged away from that side; otherwise it is kept
//!   or rejected as is.
//! - **Ghost**: the landing position of the current piece, drawn on empty cells.
//! - **Scoring**: 40 / 100 / 300 / 1200 for 1-4 rows, times the level by default.
//! - **Levels**: one level every 40 gravity ticks up to 15; each level divides
//!   the fall interval by 1.5.
//!
//! # Example
//!
//! ```
//! use stacker_core::{EngineConfig, GameEngine, MoveOutcome};
//! use stacker_core::types::{Command, Direction};
//!
//! let mut engine = GameEngine::with_seed(EngineConfig::default(), 12345);
//!
//! // The first tick spawns a piece.
//! assert_eq!(engine.tick(), MoveOutcome::Spawned);
//!
//! engine.apply(Command::Move(Direction::Left));
//! engine.apply(Command::Rotate);
//! let outcome = engine.apply(Command::Drop);
//! assert!(matches!(outcome, MoveOutcome::Locked { .. }));
//! assert!(!engine.is_game_over());
//! ```

pub mod config;
pub mod engine;
pub mod grid;
pub mod pieces;
pub mod queue;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tetromino;

pub use stacker_types as types;

// Re-export commonly used types for convenience
pub use config::EngineConfig;
pub use engine::{GameEngine, MoveOutcome, RoundState};
pub use grid::{Cell, Grid};
pub use pieces::get_layout;
pub use queue::PieceQueue;
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{score_for_cleared_rows, ScoreMultiplier};
pub use snapshot::GameSnapshot;
pub use tetromino::{Placement, Tetromino};
