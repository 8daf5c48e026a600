//! Reserve stack - fixed-capacity LIFO
//!
//! Backed by an `ArrayVec`, so live pieces are always storage `0..len` with
//! the top at `len - 1`.

use arrayvec::ArrayVec;

use crate::types::{CapacityError, Container, EmptyError, Piece, RESERVE_CAPACITY};

/// LIFO of reserved pieces with capacity fixed at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PieceStack<const N: usize> {
    items: ArrayVec<Piece, N>,
}

/// The reserve size used by supply sessions.
pub type ReserveStack = PieceStack<RESERVE_CAPACITY>;

impl<const N: usize> PieceStack<N> {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn push(&mut self, piece: Piece) -> Result<(), CapacityError> {
        self.items.try_push(piece).map_err(|_| CapacityError {
            container: Container::Reserve,
            capacity: N,
        })
    }

    pub fn pop(&mut self) -> Result<Piece, EmptyError> {
        self.items.pop().ok_or(EmptyError {
            container: Container::Reserve,
        })
    }

    pub fn peek_top(&self) -> Option<Piece> {
        self.items.last().copied()
    }

    /// Storage index of the piece `depth` positions below the top.
    fn index_from_top(&self, depth: usize) -> Option<usize> {
        self.items.len().checked_sub(depth + 1)
    }

    /// Piece `depth` positions below the top (0 is the top itself).
    pub fn get_from_top(&self, depth: usize) -> Option<Piece> {
        self.index_from_top(depth).map(|i| self.items[i])
    }

    /// Overwrite the piece `depth` positions below the top, returning the old one.
    ///
    /// Out-of-range depths return `None` and leave the stack untouched.
    pub fn replace_from_top(&mut self, depth: usize, piece: Piece) -> Option<Piece> {
        let i = self.index_from_top(depth)?;
        Some(std::mem::replace(&mut self.items[i], piece))
    }

    /// Top-to-base copy of the stack contents.
    pub fn snapshot(&self) -> ArrayVec<Piece, N> {
        self.items.iter().rev().copied().collect()
    }
}
