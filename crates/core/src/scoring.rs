//! Scoring module - line clear points and level speed-up
//!
//! Points for a lock are the classic table value for the number of rows
//! cleared, scaled by a [`ScoreMultiplier`]. With the default multiplier the
//! level itself is the factor, so nothing is awarded at level 0.

use serde::{Deserialize, Serialize};

use crate::types::LINE_SCORES;

/// How the level scales line clear points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMultiplier {
    /// Points times the current level
    #[default]
    Level,
    /// Points unscaled
    Flat,
}

impl ScoreMultiplier {
    pub fn factor(&self, level: u32) -> u32 {
        match self {
            ScoreMultiplier::Level => level,
            ScoreMultiplier::Flat => 1,
        }
    }
}

/// Base points for clearing `rows` rows in one lock
///
/// Anything above four rows scores as four.
pub fn base_line_score(rows: u32) -> u32 {
    LINE_SCORES[(rows as usize).min(LINE_SCORES.len() - 1)]
}

/// Points for clearing `rows` rows at `level`
pub fn score_for_cleared_rows(rows: u32, level: u32, multiplier: ScoreMultiplier) -> u32 {
    base_line_score(rows).saturating_mul(multiplier.factor(level))
}

/// Fall interval after one level-up
///
/// Truncates toward zero and never goes below 1ms.
pub fn next_fall_interval_ms(current_ms: u32, decay: f64) -> u32 {
    if decay <= 1.0 {
        return current_ms;
    }
    ((current_ms as f64 / decay) as u32).max(1)
}
