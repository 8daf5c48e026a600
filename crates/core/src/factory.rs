//! Piece generation with explicitly owned id allocation.

use crate::rng::KindSource;
use crate::types::{Piece, PieceKind};

/// Issues pieces with strictly increasing ids, starting at 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceFactory {
    next_id: u64,
}

impl PieceFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a piece from an id and an injected kind selection.
    pub fn create(id: u64, select: impl FnOnce() -> PieceKind) -> Piece {
        Piece::new(select(), id)
    }

    /// Allocate the next id (post-increment).
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Id the next issued piece will carry.
    pub fn peek_id(&self) -> u64 {
        self.next_id
    }

    /// Allocate an id and draw a kind from `source`.
    pub fn issue(&mut self, source: &mut impl KindSource) -> Piece {
        let id = self.next_id();
        Self::create(id, || source.next_kind())
    }
}
