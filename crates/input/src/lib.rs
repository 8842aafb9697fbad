//! Terminal input module
//!
//! Maps `crossterm` key events to engine [`Command`](crate::types::Command)s.
//! Pausing and quitting are front-end concerns and get their own predicates.

pub mod map;

pub use stacker_types as types;

pub use map::{handle_key_event, is_pause_key, should_quit};
