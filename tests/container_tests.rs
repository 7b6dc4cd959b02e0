//! Container law tests for the bounded queue and the reserve stack.

use pretty_assertions::assert_eq;

use tetris_stack::core::{PieceQueue, ReserveStack, SessionError};
use tetris_stack::types::{Piece, PieceKind};

fn piece(id: u64) -> Piece {
    Piece::new(PieceKind::L, id)
}

#[test]
fn queue_fifo_law_under_mixed_traffic() {
    let mut queue = PieceQueue::new();
    let mut next_in = 0u64;
    let mut next_out = 0u64;

    // Interleave enqueues and dequeues, always respecting capacity; the
    // dequeue order must equal the enqueue order throughout.
    for round in 0..100 {
        let enqueues = 1 + round % 4;
        for _ in 0..enqueues {
            if !queue.is_full() {
                queue.enqueue(piece(next_in)).unwrap();
                next_in += 1;
            }
        }
        assert!(queue.len() <= queue.capacity());

        let dequeues = 1 + round % 3;
        for _ in 0..dequeues {
            if !queue.is_empty() {
                assert_eq!(queue.dequeue().unwrap().id, next_out);
                next_out += 1;
            }
        }
    }
}

#[test]
fn queue_never_exceeds_capacity() {
    let mut queue = PieceQueue::new();
    for id in 0..20 {
        let _ = queue.enqueue(piece(id));
        assert!(queue.len() <= 5);
    }
    assert_eq!(queue.len(), 5);
}

#[test]
fn queue_failure_is_idempotent() {
    let mut queue = PieceQueue::new();
    let first = queue.dequeue();
    let second = queue.dequeue();
    assert_eq!(first, Err(SessionError::QueueEmpty));
    assert_eq!(first, second);
    assert!(queue.is_empty());
}

#[test]
fn stack_lifo_law() {
    let mut stack = ReserveStack::new();
    let mut pushed = Vec::new();

    for id in 0..3 {
        stack.push(piece(id)).unwrap();
        pushed.push(id);
    }
    assert!(stack.len() <= 3);

    // Pop order is the reverse of push order.
    while let Some(expected) = pushed.pop() {
        assert_eq!(stack.pop().unwrap().id, expected);
    }
    assert_eq!(stack.pop(), Err(SessionError::StackEmpty));
}

#[test]
fn stack_never_exceeds_capacity() {
    let mut stack = ReserveStack::new();
    for id in 0..10 {
        let _ = stack.push(piece(id));
        assert!(stack.len() <= 3);
    }
    assert_eq!(stack.push(piece(99)), Err(SessionError::StackFull));
    assert_eq!(stack.len(), 3);
}
