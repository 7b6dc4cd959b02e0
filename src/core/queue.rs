//! Queue module - the bounded circular "next pieces" feed
//!
//! Array-backed ring buffer with a fixed capacity of 5 slots. Storage reuse
//! via modular head/tail arithmetic is an implementation detail: observable
//! ordering is strictly FIFO and wraparound never leaks to callers.

use arrayvec::ArrayVec;

use crate::core::error::SessionError;
use crate::types::{Piece, QUEUE_CAPACITY};

/// The upcoming-pieces queue - fixed 5 slots, circular storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    /// Backing slots; a slot is live only when covered by `head..head+len`
    slots: [Option<Piece>; QUEUE_CAPACITY],
    /// Index of the next element to remove
    head: usize,
    /// Index of the next free slot to fill
    tail: usize,
    /// Count of live elements, always in `0..=QUEUE_CAPACITY`
    len: usize,
}

impl PieceQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    /// Append a piece at the back.
    ///
    /// Fails with `QueueFull` when all slots are live; live data is never
    /// overwritten.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), SessionError> {
        if self.is_full() {
            return Err(SessionError::QueueFull);
        }
        self.slots[self.tail] = Some(piece);
        self.tail = (self.tail + 1) % QUEUE_CAPACITY;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front piece.
    ///
    /// Fails with `QueueEmpty` instead of fabricating a value; callers can
    /// always tell a real piece from an underflow.
    pub fn dequeue(&mut self) -> Result<Piece, SessionError> {
        if self.is_empty() {
            return Err(SessionError::QueueEmpty);
        }
        // Live slots within `head..head+len` are always Some by construction.
        let piece = self.slots[self.head].take().expect("live slot holds a piece");
        self.head = (self.head + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        Ok(piece)
    }

    /// Non-mutating read of the front piece
    pub fn peek_front(&self) -> Option<&Piece> {
        self.peek_at(0)
    }

    /// Non-mutating read of the logical `offset`-th element from the front
    pub fn peek_at(&self, offset: usize) -> Option<&Piece> {
        if offset >= self.len {
            return None;
        }
        self.slots[(self.head + offset) % QUEUE_CAPACITY].as_ref()
    }

    /// Mutable access to the logical `offset`-th element, for positional swaps
    pub(crate) fn get_mut(&mut self, offset: usize) -> Option<&mut Piece> {
        if offset >= self.len {
            return None;
        }
        self.slots[(self.head + offset) % QUEUE_CAPACITY].as_mut()
    }

    /// Ordered front-to-back view for display; does not mutate indices
    pub fn snapshot(&self) -> ArrayVec<Piece, QUEUE_CAPACITY> {
        let mut out = ArrayVec::new();
        for offset in 0..self.len {
            if let Some(piece) = self.peek_at(offset) {
                out.push(*piece);
            }
        }
        out
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
