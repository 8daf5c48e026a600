//! Exchange engine scenarios

use tetris_supply::core::{swap_block, swap_front_top, ReserveStack, UpcomingQueue};
use tetris_supply::types::{ExchangeError, Piece, PieceKind};

fn p(kind: PieceKind, id: u64) -> Piece {
    Piece::new(kind, id)
}

fn setup(queue_pieces: &[Piece], stack_pieces: &[Piece]) -> (UpcomingQueue, ReserveStack) {
    let mut queue = UpcomingQueue::new();
    for &piece in queue_pieces {
        queue.enqueue(piece).unwrap();
    }
    let mut stack = ReserveStack::new();
    for &piece in stack_pieces {
        stack.push(piece).unwrap();
    }
    (queue, stack)
}

#[test]
fn test_swap_front_top_exchanges_single_pair() {
    use PieceKind::*;
    let a0 = p(I, 0);
    let b1 = p(O, 1);
    let c2 = p(T, 2);
    let d3 = p(L, 3);
    let e4 = p(I, 4);
    let x5 = p(O, 5);
    let y6 = p(T, 6);

    let (mut queue, mut stack) = setup(&[a0, b1, c2, d3, e4], &[x5, y6]);
    swap_front_top(&mut queue, &mut stack).unwrap();

    assert_eq!(queue.snapshot().as_slice(), &[y6, b1, c2, d3, e4]);
    assert_eq!(stack.snapshot().as_slice(), &[a0, x5]);
    assert_eq!(queue.len(), 5);
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_swap_block_exchanges_three_pairs() {
    use PieceKind::*;
    let [a, b, c, d, e] = [p(I, 0), p(O, 1), p(T, 2), p(L, 3), p(I, 4)];
    let [x, y, z] = [p(L, 5), p(L, 6), p(O, 7)];

    let (mut queue, mut stack) = setup(&[a, b, c, d, e], &[x, y, z]);
    swap_block(&mut queue, &mut stack).unwrap();

    assert_eq!(queue.snapshot().as_slice(), &[z, y, x, d, e]);
    assert_eq!(stack.snapshot().as_slice(), &[a, b, c]);
}

#[test]
fn test_swap_block_twice_restores_positions() {
    use PieceKind::*;
    let queue_pieces = [p(I, 0), p(O, 1), p(T, 2), p(L, 3), p(I, 4)];
    let stack_pieces = [p(L, 5), p(T, 6), p(O, 7)];
    let (mut queue, mut stack) = setup(&queue_pieces, &stack_pieces);

    swap_block(&mut queue, &mut stack).unwrap();
    swap_block(&mut queue, &mut stack).unwrap();

    assert_eq!(queue.snapshot().as_slice(), &queue_pieces);
    assert_eq!(stack.peek_top(), Some(p(O, 7)));
}

#[test]
fn test_swap_block_short_stack_fails_untouched() {
    use PieceKind::*;
    let queue_pieces = [p(I, 0), p(O, 1), p(T, 2), p(L, 3), p(I, 4)];
    let (mut queue, mut stack) = setup(&queue_pieces, &[p(L, 5), p(T, 6)]);
    let stack_before = stack.snapshot();

    assert_eq!(
        swap_block(&mut queue, &mut stack),
        Err(ExchangeError::InsufficientElements {
            needed: 3,
            queue_len: 5,
            reserve_len: 2
        })
    );
    assert_eq!(queue.snapshot().as_slice(), &queue_pieces);
    assert_eq!(stack.snapshot(), stack_before);
}

#[test]
fn test_swap_block_short_queue_fails_untouched() {
    use PieceKind::*;
    let (mut queue, mut stack) = setup(&[p(I, 0), p(O, 1)], &[p(L, 5), p(T, 6), p(O, 7)]);

    assert!(swap_block(&mut queue, &mut stack).is_err());
    assert_eq!(queue.peek_front(), Some(p(I, 0)));
    assert_eq!(stack.peek_top(), Some(p(O, 7)));
}

#[test]
fn test_swap_across_wrapped_queue() {
    use PieceKind::*;
    let (mut queue, mut stack) = setup(&[p(I, 0), p(O, 1), p(T, 2), p(L, 3), p(I, 4)], &[]);
    // Move head to slot 3 so the first three positions straddle the wrap.
    for id in 5..8 {
        let front = queue.dequeue().unwrap();
        stack.push(front).unwrap();
        queue.enqueue(p(T, id)).unwrap();
    }
    assert_eq!(queue.head(), 3);

    swap_block(&mut queue, &mut stack).unwrap();
    let ids: Vec<u64> = queue.iter().map(|piece| piece.id).collect();
    assert_eq!(ids, vec![2, 1, 0, 6, 7]);
    let ids: Vec<u64> = stack.snapshot().iter().map(|piece| piece.id).collect();
    assert_eq!(ids, vec![3, 4, 5]);
}
