//! Reel randomization - difficulty-gated symbol sampling
//!
//! The catalog is a fixed ordered triple. The active pool is a prefix of the
//! catalog whose length follows the legacy difficulty numbering: index 1
//! (Normal) allows symbols 0..=1, index 2 (Master) allows all three. The max
//! index is clamped to the catalog length minus one, so hypothetical higher
//! tiers would not widen the pool further.

use rand::Rng;

use crate::types::{Difficulty, Symbol, REEL_COUNT};

/// Fixed ordered symbol catalog (primary, secondary, tertiary).
pub const CATALOG: [Symbol; REEL_COUNT] = [Symbol::Apple, Symbol::Banana, Symbol::Watermelon];

/// Active symbol pool for a difficulty.
pub fn pool(difficulty: Difficulty) -> &'static [Symbol] {
    let max_index = difficulty.legacy_index().min(CATALOG.len() - 1);
    &CATALOG[..=max_index]
}

/// Draw one symbol uniformly from the active pool.
pub fn draw<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> Symbol {
    let pool = pool(difficulty);
    pool[rng.gen_range(0..pool.len())]
}

/// Redraw all three reel positions, independently and with replacement.
pub fn draw_reels<R: Rng + ?Sized>(rng: &mut R, difficulty: Difficulty) -> [Symbol; REEL_COUNT] {
    [
        draw(rng, difficulty),
        draw(rng, difficulty),
        draw(rng, difficulty),
    ]
}
