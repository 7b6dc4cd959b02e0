//! Typed failure reasons for container and session operations.
//!
//! Every failure here is a precondition violation. None are fatal: the core
//! never prints or aborts on them, it hands the reason back to the caller
//! with all container state untouched.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("piece queue is empty")]
    QueueEmpty,
    #[error("piece queue is full")]
    QueueFull,
    #[error("reserve stack is empty")]
    StackEmpty,
    #[error("reserve stack is full")]
    StackFull,
    #[error("piece queue holds fewer than {required} pieces")]
    InsufficientQueueDepth { required: usize },
    #[error("reserve stack holds fewer than {required} pieces")]
    InsufficientStackDepth { required: usize },
}
