//! Runtime settings resolved from the environment
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `STACKER_CONFIG` | Path to a JSON [`EngineConfig`]; missing keys keep defaults |
//! | `STACKER_ROWS` / `STACKER_COLS` | Grid size override |
//! | `STACKER_SEED` | Piece sequence seed (default: clock-derived) |
//! | `STACKER_FLAT_SCORING` | `1`/`true` scores clears without the level factor |
//! | `STACKER_DEBUG` | `1`/`true` dumps the final round to stderr on exit |
//!
//! Overrides are applied on top of the JSON file. Unparseable values are
//! reported as warnings and ignored.

use std::env;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use crate::core::{EngineConfig, ScoreMultiplier};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub engine: EngineConfig,
    pub seed: u32,
    pub debug: bool,
    /// Problems found while resolving, for the caller to report
    pub warnings: Vec<String>,
}

impl Settings {
    /// Resolve settings from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve settings from an arbitrary key lookup
    ///
    /// Fails only when `STACKER_CONFIG` names a file that cannot be read or
    /// parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let mut warnings = Vec::new();

        let mut engine = match var("STACKER_CONFIG") {
            Some(path) => load_config(Path::new(&path))?,
            None => EngineConfig::default(),
        };

        if let Some(rows) = parse_var(&var, "STACKER_ROWS", &mut warnings) {
            engine.rows = rows;
        }
        if let Some(cols) = parse_var(&var, "STACKER_COLS", &mut warnings) {
            engine.cols = cols;
        }
        if var("STACKER_FLAT_SCORING").is_some_and(|v| is_truthy(&v)) {
            engine.score_multiplier = ScoreMultiplier::Flat;
        }

        let seed = parse_var(&var, "STACKER_SEED", &mut warnings).unwrap_or_else(clock_seed);
        let debug = var("STACKER_DEBUG").is_some_and(|v| is_truthy(&v));

        Ok(Self {
            engine: engine.normalized(),
            seed,
            debug,
            warnings,
        })
    }
}

/// Read an [`EngineConfig`] from a JSON file
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

fn parse_var<T: std::str::FromStr>(
    var: impl Fn(&str) -> Option<String>,
    key: &str,
    warnings: &mut Vec<String>,
) -> Option<T> {
    let raw = var(key)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warnings.push(format!("ignoring {key}={raw:?}: not a valid number"));
            None
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
