//! Spin Wars: a slot-style matching game with a tick-driven spin engine.
//!
//! `core` holds the state machine (reel randomization, win/streak evaluation,
//! spin task lifecycle); `input` and `term` are the terminal presentation
//! collaborator; `types` is the shared pure-data layer.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
