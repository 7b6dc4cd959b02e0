//! Core module - pure piece-management logic with no external I/O
//!
//! Contains the bounded circular queue, the bounded reserve stack, the
//! piece generator and the session that composes them. Nothing in here
//! prints, reads input or aborts; failures surface as typed errors.

pub mod error;
pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stack;

// Re-export commonly used types
pub use error::SessionError;
pub use queue::PieceQueue;
pub use rng::{PieceGenerator, SimpleRng};
pub use session::{ActionReport, Session};
pub use snapshot::SessionSnapshot;
pub use stack::ReserveStack;
