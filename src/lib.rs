//! Piece supply (workspace facade crate).
//!
//! Re-exports the member crates as `tetris_supply::{types, core, input, term}`
//! and adds the driver-side pieces that sit outside the engine: environment
//! configuration and the JSON-lines session journal.

pub use tetris_supply_core as core;
pub use tetris_supply_input as input;
pub use tetris_supply_term as term;
pub use tetris_supply_types as types;

pub mod config;
pub mod journal;

pub use config::SessionConfig;
pub use journal::{flush_after, Journal, JournalRecord};
