//! Stacker (workspace facade crate).
//!
//! Re-exports the workspace crates as `stacker::{core, input, term, types}` and
//! holds the runtime [`settings`] shared by the binary and tests.

pub mod settings;

pub use stacker_core as core;
pub use stacker_input as input;
pub use stacker_term as term;
pub use stacker_types as types;
