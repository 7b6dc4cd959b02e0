//! Terminal presenter module.
//!
//! Peripheral I/O glue around the core session: renders the state header and
//! menu, reads single-key choices, and keeps the terminal tidy via raw mode
//! and the alternate screen. It only calls the session's action entry points
//! and its snapshot accessor; no piece logic lives here.

pub mod keys;
pub mod screen;
pub mod view;

pub use keys::{map_key, should_quit, MenuChoice};
pub use screen::TerminalScreen;
pub use view::{format_piece, Feedback, SessionView};
