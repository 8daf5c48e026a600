//! Supply engine - pure, deterministic, and testable
//!
//! This crate holds the container and exchange logic of the piece supply.
//! It has **zero dependencies** on UI, terminals, or I/O, and performs no
//! logging: every outcome is reported to the caller as a typed result.
//!
//! # Module Structure
//!
//! - [`queue`]: fixed-capacity circular FIFO of upcoming pieces
//! - [`stack`]: fixed-capacity LIFO of reserved pieces
//! - [`factory`]: piece generation with owned, strictly increasing ids
//! - [`rng`]: kind sources (seeded LCG, closures, fixed cycles)
//! - [`exchange`]: single-slot and block swaps between queue and stack
//! - [`supply`]: session applying menu commands plus the refill policy
//! - [`snapshot`]: read-only copies for renderers
//!
//! # Rules
//!
//! - Capacities are fixed at compile time; nothing ever resizes
//! - A failing operation never mutates either container
//! - After every command except quit, the queue is topped up with one piece
//!   (when the session tier has auto-refill), so between commands it is full
//!
//! # Example
//!
//! ```
//! use tetris_supply_core::{Outcome, Supply};
//! use tetris_supply_types::{Command, MenuTier};
//!
//! let mut supply = Supply::new(12345, MenuTier::Master);
//!
//! let step = supply.apply(Command::Reserve).unwrap();
//! assert!(matches!(step.outcome, Outcome::Reserved(_)));
//! assert!(supply.queue().is_full());
//! assert_eq!(supply.reserve().len(), 1);
//!
//! // Block swap needs three reserved pieces.
//! assert!(supply.apply(Command::SwapBlock).is_err());
//! ```

pub mod exchange;
pub mod factory;
pub mod queue;
pub mod rng;
pub mod snapshot;
pub mod stack;
pub mod supply;

pub use tetris_supply_types as types;

// Re-export commonly used types for convenience
pub use exchange::{swap_block, swap_front_top, swap_prefix};
pub use factory::PieceFactory;
pub use queue::{PieceQueue, UpcomingQueue};
pub use rng::{KindCycle, KindSource, SimpleRng};
pub use snapshot::SupplySnapshot;
pub use stack::{PieceStack, ReserveStack};
pub use supply::{Outcome, Step, Supply};
