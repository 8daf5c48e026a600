//! Terminal input module (session-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. Digits follow
//! the numbering of the active menu tier; letter shortcuts work at any tier and
//! are filtered by the session itself.

pub mod map;

pub use tetris_supply_types as types;

pub use map::{command_for_key, should_quit};
