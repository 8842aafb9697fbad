//! Engine configuration
//!
//! All fields have defaults, so a JSON file only needs the keys it changes:
//!
//! ```
//! use stacker_core::EngineConfig;
//!
//! let config: EngineConfig = serde_json::from_str(r#"{ "rows": 12, "cols": 4 }"#).unwrap();
//! let config = config.normalized();
//! assert_eq!(config.rows, 12);
//! assert_eq!(config.cols, 6); // clamped to the minimum
//! assert_eq!(config.max_level, 15);
//! ```

use serde::{Deserialize, Serialize};

use crate::scoring::ScoreMultiplier;
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: usize,
    pub cols: usize,
    pub initial_fall_interval_ms: u32,
    /// Gravity ticks between level-ups
    pub ticks_per_level: u32,
    pub max_level: u32,
    /// Divisor applied to the fall interval on each level-up
    pub fall_interval_decay: f64,
    /// Number of upcoming pieces shown ahead of the current one
    pub lookahead: usize,
    pub score_multiplier: ScoreMultiplier,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            initial_fall_interval_ms: DEFAULT_FALL_INTERVAL_MS,
            ticks_per_level: DEFAULT_TICKS_PER_LEVEL,
            max_level: MAX_LEVEL,
            fall_interval_decay: DEFAULT_FALL_INTERVAL_DECAY,
            lookahead: DEFAULT_LOOKAHEAD,
            score_multiplier: ScoreMultiplier::default(),
        }
    }
}

impl EngineConfig {
    /// Config with the given grid size and defaults elsewhere
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Clamp every field into its accepted range
    pub fn normalized(mut self) -> Self {
        self.rows = self.rows.max(MIN_ROWS);
        self.cols = self.cols.max(MIN_COLS);
        self.initial_fall_interval_ms = self.initial_fall_interval_ms.max(1);
        self.ticks_per_level = self.ticks_per_level.max(1);
        self.max_level = self.max_level.min(MAX_LEVEL);
        if !self.fall_interval_decay.is_finite() || self.fall_interval_decay < 1.0 {
            self.fall_interval_decay = 1.0;
        }
        self.lookahead = self.lookahead.max(1);
        self
    }

    /// Column of the anchor cell for freshly spawned pieces
    pub fn spawn_col(&self) -> i32 {
        (self.cols / 2) as i32 - 1
    }
}
