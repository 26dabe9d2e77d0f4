//! Input module - key mapping and code entry
//!
//! Translates crossterm key events into engine commands and maintains the
//! hidden-code text buffer.

pub mod handler;

pub use handler::{InputEvent, InputHandler};
