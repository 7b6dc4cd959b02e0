//! Stack module - the bounded "reserve" holding area
//!
//! Fixed 3-slot LIFO. The C-style `top == -1` empty sentinel is expressed
//! here as `len == 0`; `top` is always `len - 1` when the stack is non-empty.

use arrayvec::ArrayVec;

use crate::core::error::SessionError;
use crate::types::{Piece, RESERVE_CAPACITY};

/// The reserved-pieces stack - fixed 3 slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveStack {
    /// Backing slots; indices `0..len` are live, index `len - 1` is the top
    slots: [Option<Piece>; RESERVE_CAPACITY],
    /// Count of live elements, always in `0..=RESERVE_CAPACITY`
    len: usize,
}

impl ReserveStack {
    /// Create a new empty stack
    pub fn new() -> Self {
        Self {
            slots: [None; RESERVE_CAPACITY],
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        RESERVE_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == RESERVE_CAPACITY
    }

    /// Push a piece onto the top. Fails with `StackFull` when all slots are live.
    pub fn push(&mut self, piece: Piece) -> Result<(), SessionError> {
        if self.is_full() {
            return Err(SessionError::StackFull);
        }
        self.slots[self.len] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the top piece. Fails with `StackEmpty` on underflow.
    pub fn pop(&mut self) -> Result<Piece, SessionError> {
        if self.is_empty() {
            return Err(SessionError::StackEmpty);
        }
        self.len -= 1;
        let piece = self.slots[self.len].take().expect("live slot holds a piece");
        Ok(piece)
    }

    /// Non-mutating read of the top piece
    pub fn peek_top(&self) -> Option<&Piece> {
        self.peek_at(0)
    }

    /// Non-mutating read of the element `depth_from_top` below the top
    pub fn peek_at(&self, depth_from_top: usize) -> Option<&Piece> {
        if depth_from_top >= self.len {
            return None;
        }
        self.slots[self.len - 1 - depth_from_top].as_ref()
    }

    /// Mutable access by depth from the top, for positional swaps
    pub(crate) fn get_mut(&mut self, depth_from_top: usize) -> Option<&mut Piece> {
        if depth_from_top >= self.len {
            return None;
        }
        self.slots[self.len - 1 - depth_from_top].as_mut()
    }

    /// Ordered top-to-base view for display
    pub fn snapshot(&self) -> ArrayVec<Piece, RESERVE_CAPACITY> {
        let mut out = ArrayVec::new();
        for depth in 0..self.len {
            if let Some(piece) = self.peek_at(depth) {
                out.push(*piece);
            }
        }
        out
    }
}

impl Default for ReserveStack {
    fn default() -> Self {
        Self::new()
    }
}
