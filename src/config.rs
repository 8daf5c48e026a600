//! Session configuration read from the environment.
//!
//! - `TETRIS_SUPPLY_SEED`: seed for piece kinds (default: derived from the clock)
//! - `TETRIS_SUPPLY_TIER`: `novice`, `adventurer` or `master` (default: `master`)
//! - `TETRIS_SUPPLY_LOG_PATH`: append a JSON-lines journal here (default: off)

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::MenuTier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: u32,
    pub tier: MenuTier,
    pub log_path: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tier: MenuTier::Master,
            log_path: None,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TETRIS_SUPPLY_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let tier = lookup("TETRIS_SUPPLY_TIER")
            .and_then(|s| MenuTier::from_str(&s))
            .unwrap_or_default();

        let log_path = lookup("TETRIS_SUPPLY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            tier,
            log_path,
        }
    }
}

/// Seed from the wall clock, used when no seed is configured.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}
