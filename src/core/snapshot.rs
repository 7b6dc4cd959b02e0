//! Read-only session views handed to the presentation layer.

use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY, RESERVE_CAPACITY};

/// Ordered, owned copy of both containers at one point in time.
///
/// `queue` is front-to-back, `stack` is top-to-base. Snapshots are plain
/// value copies; holding one never aliases live container state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    pub stack: ArrayVec<Piece, RESERVE_CAPACITY>,
}

impl SessionSnapshot {
    /// Queue contents as `(label, id)` pairs, front-to-back
    pub fn queue_pairs(&self) -> ArrayVec<(char, u64), QUEUE_CAPACITY> {
        self.queue.iter().map(|p| (p.kind.as_char(), p.id)).collect()
    }

    /// Stack contents as `(label, id)` pairs, top-to-base
    pub fn stack_pairs(&self) -> ArrayVec<(char, u64), RESERVE_CAPACITY> {
        self.stack.iter().map(|p| (p.kind.as_char(), p.id)).collect()
    }
}
