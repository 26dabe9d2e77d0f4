//! Immutable observation of the game state, emitted to subscribers after
//! every mutation and consumed by pull-style renderers.

use crate::types::{Difficulty, Symbol, REEL_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub reels: [Symbol; REEL_COUNT],
    pub points: u32,
    pub streak: u32,
    pub streak_record: u32,
    pub difficulty: Difficulty,
    pub master_unlocked: bool,
    pub started: bool,
    pub message: String,
    pub spinning: bool,
    pub infinite_mode: bool,
}
