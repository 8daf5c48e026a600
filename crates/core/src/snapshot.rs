//! Read-only views of a supply session for renderers and the journal.

use arrayvec::ArrayVec;

use crate::types::{MenuTier, Piece, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Copy of a session's containers at one point in time.
///
/// Stack-only; building one never allocates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SupplySnapshot {
    /// Upcoming pieces, front to back.
    pub upcoming: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Reserved pieces, top to base.
    pub reserve: ArrayVec<Piece, RESERVE_CAPACITY>,
    /// Id the next generated piece will carry.
    pub next_id: u64,
    pub tier: MenuTier,
}
