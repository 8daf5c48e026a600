//! Upcoming-piece queue - fixed-capacity circular FIFO
//!
//! Storage is a fixed array of `N` slots plus two integers: `head` (slot of the
//! front piece) and `len` (live pieces). The logical element `i` lives at slot
//! `(head + i) % N`; the tail slot is derived, never stored.

use arrayvec::ArrayVec;

use crate::types::{CapacityError, Container, EmptyError, Piece, QUEUE_CAPACITY};

/// Circular FIFO of pieces with capacity fixed at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue<const N: usize> {
    slots: [Option<Piece>; N],
    head: usize,
    len: usize,
}

/// The queue size used by supply sessions.
pub type UpcomingQueue = PieceQueue<QUEUE_CAPACITY>;

impl<const N: usize> PieceQueue<N> {
    const NON_ZERO: () = assert!(N > 0, "queue capacity must be positive");

    /// Create an empty queue.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;
        Self {
            slots: [None; N],
            head: 0,
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    #[inline(always)]
    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % N
    }

    /// Append a piece at the back.
    ///
    /// Fails without touching the queue when it is full.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), CapacityError> {
        if self.is_full() {
            return Err(CapacityError {
                container: Container::Queue,
                capacity: N,
            });
        }
        let tail = self.slot(self.len);
        self.slots[tail] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front piece.
    pub fn dequeue(&mut self) -> Result<Piece, EmptyError> {
        let piece = self.peek_front().ok_or(EmptyError {
            container: Container::Queue,
        })?;
        self.slots[self.head] = None;
        self.head = self.slot(1);
        self.len -= 1;
        Ok(piece)
    }

    pub fn peek_front(&self) -> Option<Piece> {
        self.get(0)
    }

    /// Piece at logical position `index`, counted from the front.
    pub fn get(&self, index: usize) -> Option<Piece> {
        if index >= self.len {
            return None;
        }
        self.slots[self.slot(index)]
    }

    /// Overwrite the piece at logical position `index`, returning the old one.
    ///
    /// Out-of-range positions return `None` and leave the queue untouched.
    pub fn replace_at(&mut self, index: usize, piece: Piece) -> Option<Piece> {
        if index >= self.len {
            return None;
        }
        let slot = self.slot(index);
        self.slots[slot].replace(piece)
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    /// Front-to-back copy of the queue contents.
    ///
    /// Stack-only; does not allocate.
    pub fn snapshot(&self) -> ArrayVec<Piece, N> {
        self.iter().collect()
    }

    /// Storage slot of the front piece (exposed for wrap-around checks).
    pub fn head(&self) -> usize {
        self.head
    }
}

impl<const N: usize> Default for PieceQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn piece(id: u64) -> Piece {
        Piece::new(PieceKind::I, id)
    }

    #[test]
    fn test_new_queue_is_empty() {
        let queue = UpcomingQueue::new();
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 5);
        assert_eq!(queue.peek_front(), None);
    }

    #[test]
    fn test_enqueue_until_full() {
        let mut queue = UpcomingQueue::new();
        for id in 0..5 {
            assert!(queue.enqueue(piece(id)).is_ok());
        }
        assert!(queue.is_full());

        let before = queue.snapshot();
        let err = queue.enqueue(piece(99)).unwrap_err();
        assert_eq!(err.container, Container::Queue);
        assert_eq!(err.capacity, 5);
        assert_eq!(queue.snapshot(), before);
    }

    #[test]
    fn test_dequeue_empty_leaves_state() {
        let mut queue = PieceQueue::<3>::new();
        assert_eq!(
            queue.dequeue(),
            Err(EmptyError {
                container: Container::Queue
            })
        );
        assert_eq!(queue.head(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dequeue_clears_slot_and_advances_head() {
        let mut queue = PieceQueue::<3>::new();
        queue.enqueue(piece(1)).unwrap();
        queue.enqueue(piece(2)).unwrap();

        assert_eq!(queue.dequeue().unwrap().id, 1);
        assert_eq!(queue.head(), 1);
        assert_eq!(queue.slots[0], None);
        assert_eq!(queue.peek_front().unwrap().id, 2);
    }

    #[test]
    fn test_tail_wraps_to_slot_zero() {
        let mut queue = PieceQueue::<3>::new();
        for id in 0..3 {
            queue.enqueue(piece(id)).unwrap();
        }
        queue.dequeue().unwrap();
        queue.enqueue(piece(3)).unwrap();

        // Tail wrapped into the slot vacated by id 0.
        assert_eq!(queue.slots[0], Some(piece(3)));
        let ids: Vec<u64> = queue.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_get_and_replace_are_front_relative() {
        let mut queue = PieceQueue::<4>::new();
        for id in 0..4 {
            queue.enqueue(piece(id)).unwrap();
        }
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        queue.enqueue(piece(4)).unwrap();

        assert_eq!(queue.get(0).unwrap().id, 2);
        assert_eq!(queue.get(2).unwrap().id, 4);
        assert_eq!(queue.get(3), None);

        let old = queue.replace_at(2, Piece::new(PieceKind::O, 40));
        assert_eq!(old.unwrap().id, 4);
        assert_eq!(queue.get(2), Some(Piece::new(PieceKind::O, 40)));

        assert_eq!(queue.replace_at(3, piece(77)), None);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut queue = PieceQueue::<2>::new();
        queue.enqueue(piece(7)).unwrap();
        let snap = queue.snapshot();
        queue.dequeue().unwrap();

        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].id, 7);
        assert!(queue.is_empty());
    }
}
