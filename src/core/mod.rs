//! Core module - pure game logic with no terminal or I/O dependencies
//!
//! This module contains the spin/reward state machine: reel randomization,
//! win and streak evaluation, and the engine that drives them.

pub mod engine;
pub mod reels;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use engine::{NullHooks, SpinEngine, SpinHooks};
pub use snapshot::GameSnapshot;
pub use state::GameState;
