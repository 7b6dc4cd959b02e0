//! Session module - the owned aggregate driving both containers
//!
//! Bundles the queue, the reserve stack and the piece generator into one
//! explicitly owned object; action functions take `&mut self` instead of
//! touching hidden globals. Every action validates its preconditions before
//! mutating anything, so a rejected action leaves the session untouched.
//!
//! Refill rule: only actions that remove a piece from the queue (play,
//! reserve) append a freshly generated piece to restore full occupancy.
//! Using a reserved piece and both swaps never refill.

use std::mem;

use crate::core::error::SessionError;
use crate::core::queue::PieceQueue;
use crate::core::rng::PieceGenerator;
use crate::core::snapshot::SessionSnapshot;
use crate::core::stack::ReserveStack;
use crate::types::{Piece, PieceKind, SessionAction, QUEUE_CAPACITY, TRIPLE_SWAP_DEPTH};

/// Outcome of a successful action, naming the affected piece(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionReport {
    /// The piece consumed from the queue front
    Played(Piece),
    /// The piece moved from the queue front onto the reserve
    Reserved(Piece),
    /// The piece consumed from the reserve top
    Used(Piece),
    /// The pieces now sitting at the queue front and the stack top
    SwappedTop { queue_front: Piece, stack_top: Piece },
    /// The pieces now sitting in the three swapped positions of each side
    SwappedTriple {
        queue_front: [Piece; TRIPLE_SWAP_DEPTH],
        stack_top: [Piece; TRIPLE_SWAP_DEPTH],
    },
}

/// One game session: queue, reserve stack and generator, exclusively owned.
#[derive(Debug, Clone)]
pub struct Session {
    queue: PieceQueue,
    stack: ReserveStack,
    generator: PieceGenerator,
}

impl Session {
    /// Create a session with the queue pre-filled to capacity (5 generated
    /// pieces, ids 0..4) and an empty reserve.
    pub fn new(seed: u32) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let mut queue = PieceQueue::new();
        for _ in 0..QUEUE_CAPACITY {
            queue
                .enqueue(generator.next())
                .expect("fresh queue has room for the initial fill");
        }
        Self {
            queue,
            stack: ReserveStack::new(),
            generator,
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    /// Read-only view of both containers for rendering
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            queue: self.queue.snapshot(),
            stack: self.stack.snapshot(),
        }
    }

    /// Dispatch an action by name (presentation-layer entry point)
    pub fn apply(&mut self, action: SessionAction) -> Result<ActionReport, SessionError> {
        match action {
            SessionAction::Play => self.play().map(ActionReport::Played),
            SessionAction::Reserve => self.reserve().map(ActionReport::Reserved),
            SessionAction::UseReserved => self.use_reserved().map(ActionReport::Used),
            SessionAction::SwapTop => self
                .swap_top()
                .map(|(queue_front, stack_top)| ActionReport::SwappedTop {
                    queue_front,
                    stack_top,
                }),
            SessionAction::SwapTriple => self.swap_triple().map(|(queue_front, stack_top)| {
                ActionReport::SwappedTriple {
                    queue_front,
                    stack_top,
                }
            }),
        }
    }

    /// Consume the queue front and refill the queue to full size.
    pub fn play(&mut self) -> Result<Piece, SessionError> {
        let played = self.queue.dequeue()?;
        self.refill();
        Ok(played)
    }

    /// Move the queue front onto the reserve, then refill the queue.
    ///
    /// Both preconditions are checked up front so a full reserve never costs
    /// the caller a dequeued piece.
    pub fn reserve(&mut self) -> Result<Piece, SessionError> {
        if self.stack.is_full() {
            return Err(SessionError::StackFull);
        }
        let reserved = self.queue.dequeue()?;
        self.stack
            .push(reserved)
            .expect("reserve checked not full before dequeue");
        self.refill();
        Ok(reserved)
    }

    /// Consume the reserve top. The queue is not touched and not refilled.
    pub fn use_reserved(&mut self) -> Result<Piece, SessionError> {
        self.stack.pop()
    }

    /// Exchange the queue front with the stack top in place.
    ///
    /// A direct positional exchange: container sizes are unchanged and no
    /// refill occurs since nothing was consumed. Returns the pair now in
    /// place as `(queue_front, stack_top)`.
    pub fn swap_top(&mut self) -> Result<(Piece, Piece), SessionError> {
        if self.queue.is_empty() {
            return Err(SessionError::QueueEmpty);
        }
        if self.stack.is_empty() {
            return Err(SessionError::StackEmpty);
        }
        let front = self.queue.get_mut(0).expect("queue checked non-empty");
        let top = self.stack.get_mut(0).expect("stack checked non-empty");
        mem::swap(front, top);
        Ok((*front, *top))
    }

    /// Exchange the 3 front-most queue pieces with the 3 top-most reserve
    /// pieces, pairwise: front<->top, second<->second, third<->third.
    ///
    /// Rejected atomically when either side holds fewer than 3 pieces; a
    /// partial swap of 1 or 2 elements is never performed. Returns the
    /// pieces now in place on each side.
    pub fn swap_triple(
        &mut self,
    ) -> Result<([Piece; TRIPLE_SWAP_DEPTH], [Piece; TRIPLE_SWAP_DEPTH]), SessionError> {
        if self.queue.len() < TRIPLE_SWAP_DEPTH {
            return Err(SessionError::InsufficientQueueDepth {
                required: TRIPLE_SWAP_DEPTH,
            });
        }
        if self.stack.len() < TRIPLE_SWAP_DEPTH {
            return Err(SessionError::InsufficientStackDepth {
                required: TRIPLE_SWAP_DEPTH,
            });
        }

        let placeholder = Piece::new(PieceKind::I, 0);
        let mut queue_front = [placeholder; TRIPLE_SWAP_DEPTH];
        let mut stack_top = [placeholder; TRIPLE_SWAP_DEPTH];
        for i in 0..TRIPLE_SWAP_DEPTH {
            let q = self.queue.get_mut(i).expect("depth checked");
            let s = self.stack.get_mut(i).expect("depth checked");
            mem::swap(q, s);
            queue_front[i] = *q;
            stack_top[i] = *s;
        }
        Ok((queue_front, stack_top))
    }

    fn refill(&mut self) {
        // Called only right after a dequeue, so a slot is always free.
        self.queue
            .enqueue(self.generator.next())
            .expect("refill follows a dequeue");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_prefilled() {
        let session = Session::new(42);
        assert!(session.queue().is_full());
        assert!(session.stack().is_empty());

        let ids: Vec<u64> = session.snapshot().queue.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_play_consumes_front_and_refills() {
        let mut session = Session::new(42);
        let played = session.play().unwrap();
        assert_eq!(played.id, 0);

        let ids: Vec<u64> = session.snapshot().queue.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(session.queue().is_full());
    }

    #[test]
    fn test_use_reserved_does_not_touch_queue() {
        let mut session = Session::new(42);
        session.reserve().unwrap();
        let before = session.snapshot().queue;

        let used = session.use_reserved().unwrap();
        assert_eq!(used.id, 0);
        assert!(session.stack().is_empty());
        assert_eq!(session.snapshot().queue, before);
    }

    #[test]
    fn test_apply_dispatch_matches_direct_calls() {
        let mut a = Session::new(9);
        let mut b = Session::new(9);

        assert_eq!(
            a.apply(SessionAction::Play).unwrap(),
            ActionReport::Played(b.play().unwrap())
        );
        assert_eq!(
            a.apply(SessionAction::Reserve).unwrap(),
            ActionReport::Reserved(b.reserve().unwrap())
        );
        assert_eq!(
            a.apply(SessionAction::UseReserved).unwrap(),
            ActionReport::Used(b.use_reserved().unwrap())
        );
    }
}
