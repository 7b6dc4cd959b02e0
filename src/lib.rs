//! Tetris Stack: console simulator of piece management.
//!
//! `core` holds the bounded circular queue, the reserve stack and the
//! session actions; `term` is the thin console presenter; `types` are the
//! shared pure data types.

pub mod core;
pub mod term;
pub mod types;
