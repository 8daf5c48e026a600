//! Exchanges between the upcoming queue and the reserve stack
//!
//! An exchange is positional: the queue element `i` places from the front
//! trades places with the stack element `i` places below the top. Sizes never
//! change and ids are never reissued.
//!
//! All preconditions are checked before the first write, so an exchange
//! either moves every pair or nothing.

use crate::queue::PieceQueue;
use crate::stack::PieceStack;
use crate::types::{ExchangeError, BLOCK_SWAP_LEN};

/// Exchange the queue front with the stack top.
pub fn swap_front_top<const Q: usize, const S: usize>(
    queue: &mut PieceQueue<Q>,
    stack: &mut PieceStack<S>,
) -> Result<(), ExchangeError> {
    swap_prefix(queue, stack, 1)
}

/// Exchange the first [`BLOCK_SWAP_LEN`] queued pieces with the top
/// [`BLOCK_SWAP_LEN`] reserved pieces.
///
/// Queue `[A, B, C, D, E]` with stack `[X, Y, Z]` (top `Z`) becomes queue
/// `[Z, Y, X, D, E]` with stack top-to-base `[A, B, C]` (base-to-top
/// `[C, B, A]`).
pub fn swap_block<const Q: usize, const S: usize>(
    queue: &mut PieceQueue<Q>,
    stack: &mut PieceStack<S>,
) -> Result<(), ExchangeError> {
    swap_prefix(queue, stack, BLOCK_SWAP_LEN)
}

/// Exchange `len` front-relative queue positions with `len` top-relative
/// stack positions, pairwise.
pub fn swap_prefix<const Q: usize, const S: usize>(
    queue: &mut PieceQueue<Q>,
    stack: &mut PieceStack<S>,
    len: usize,
) -> Result<(), ExchangeError> {
    if len == 0 || queue.len() < len || stack.len() < len {
        return Err(ExchangeError::InsufficientElements {
            needed: len,
            queue_len: queue.len(),
            reserve_len: stack.len(),
        });
    }

    for offset in 0..len {
        let swapped = stack
            .get_from_top(offset)
            .and_then(|top| queue.replace_at(offset, top))
            .and_then(|front| stack.replace_from_top(offset, front));
        debug_assert!(swapped.is_some(), "pair {offset} missed after length check");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::UpcomingQueue;
    use crate::stack::ReserveStack;
    use crate::types::{Piece, PieceKind};

    fn filled(queue_ids: &[u64], stack_ids: &[u64]) -> (UpcomingQueue, ReserveStack) {
        let mut queue = UpcomingQueue::new();
        for &id in queue_ids {
            queue.enqueue(Piece::new(PieceKind::I, id)).unwrap();
        }
        let mut stack = ReserveStack::new();
        for &id in stack_ids {
            stack.push(Piece::new(PieceKind::O, id)).unwrap();
        }
        (queue, stack)
    }

    fn ids<I: IntoIterator<Item = Piece>>(pieces: I) -> Vec<u64> {
        pieces.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_swap_front_top_on_empty_side_fails() {
        let (mut queue, mut stack) = filled(&[0, 1], &[]);
        let err = swap_front_top(&mut queue, &mut stack).unwrap_err();
        assert_eq!(
            err,
            ExchangeError::InsufficientElements {
                needed: 1,
                queue_len: 2,
                reserve_len: 0
            }
        );
        assert_eq!(ids(queue.snapshot()), vec![0, 1]);

        let (mut queue, mut stack) = filled(&[], &[5]);
        assert!(swap_front_top(&mut queue, &mut stack).is_err());
        assert_eq!(ids(stack.snapshot()), vec![5]);
    }

    #[test]
    fn test_swap_prefix_zero_is_rejected() {
        let (mut queue, mut stack) = filled(&[0], &[1]);
        assert!(swap_prefix(&mut queue, &mut stack, 0).is_err());
    }

    #[test]
    fn test_swap_block_pairs_front_with_top() {
        let (mut queue, mut stack) = filled(&[0, 1, 2, 3, 4], &[5, 6, 7]);
        swap_block(&mut queue, &mut stack).unwrap();
        assert_eq!(ids(queue.snapshot()), vec![7, 6, 5, 3, 4]);
        assert_eq!(ids(stack.snapshot()), vec![0, 1, 2]);
    }

    #[test]
    fn test_swap_block_with_deeper_stack_touches_top_three_only() {
        let mut queue = UpcomingQueue::new();
        for id in 0..4 {
            queue.enqueue(Piece::new(PieceKind::T, id)).unwrap();
        }
        let mut stack = PieceStack::<5>::new();
        for id in 10..15 {
            stack.push(Piece::new(PieceKind::L, id)).unwrap();
        }

        swap_block(&mut queue, &mut stack).unwrap();
        assert_eq!(ids(queue.snapshot()), vec![14, 13, 12, 3]);
        assert_eq!(ids(stack.snapshot()), vec![0, 1, 2, 11, 10]);
    }

    #[test]
    fn test_swap_prefix_at_exact_lengths_moves_every_pair() {
        let (mut queue, mut stack) = filled(&[0, 1], &[5, 6]);
        swap_prefix(&mut queue, &mut stack, 2).unwrap();
        assert_eq!(ids(queue.snapshot()), vec![6, 5]);
        assert_eq!(ids(stack.snapshot()), vec![0, 1]);

        let err = swap_prefix(&mut queue, &mut stack, 3).unwrap_err();
        assert_eq!(
            err,
            ExchangeError::InsufficientElements {
                needed: 3,
                queue_len: 2,
                reserve_len: 2
            }
        );
        assert_eq!(ids(queue.snapshot()), vec![6, 5]);
        assert_eq!(ids(stack.snapshot()), vec![0, 1]);
    }
}
