//! Game state module - owned aggregate and spin settlement
//!
//! `GameState` holds everything the presentation layer can observe: reels,
//! scores, streaks, difficulty gating, and the current status message.
//! Settlement (win detection and reward/streak bookkeeping) lives here;
//! spin scheduling and randomization live in the engine.

use crate::core::snapshot::GameSnapshot;
use crate::types::{
    Difficulty, Symbol, MSG_FIRST_WIN, MSG_GUIDANCE, MSG_MASTER_SELECTED, MSG_PRO, MSG_UNLOCK,
    PRO_STREAK, REEL_COUNT, UNLOCK_STREAK,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    reels: [Symbol; REEL_COUNT],
    points: u32,
    streak: u32,
    streak_record: u32,
    difficulty: Difficulty,
    /// Monotonic: flips false -> true once, never back.
    master_unlocked: bool,
    /// Selects first-time guidance messages; cleared once the unlock
    /// message has been shown.
    started: bool,
    message: String,
    spinning: bool,
    infinite_mode: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            reels: [Symbol::Apple, Symbol::Banana, Symbol::Watermelon],
            points: 0,
            streak: 0,
            streak_record: 0,
            difficulty: Difficulty::Normal,
            master_unlocked: false,
            started: true,
            message: String::new(),
            spinning: false,
            infinite_mode: false,
        }
    }

    pub fn reels(&self) -> &[Symbol; REEL_COUNT] {
        &self.reels
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn streak_record(&self) -> u32 {
        self.streak_record
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn master_unlocked(&self) -> bool {
        self.master_unlocked
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn spinning(&self) -> bool {
        self.spinning
    }

    pub fn infinite_mode(&self) -> bool {
        self.infinite_mode
    }

    pub(crate) fn set_reels(&mut self, reels: [Symbol; REEL_COUNT]) {
        self.reels = reels;
    }

    pub(crate) fn set_spinning(&mut self, spinning: bool) {
        self.spinning = spinning;
    }

    pub(crate) fn set_infinite_mode(&mut self, infinite_mode: bool) {
        self.infinite_mode = infinite_mode;
    }

    /// Evaluate the reels and apply rewards, streaks, and messages.
    ///
    /// Returns true on a win. Calling this twice on unchanged reels
    /// double-applies rewards; the engine's tick contract invokes it exactly
    /// once per resolution (deliberately excepting infinite mode).
    pub(crate) fn settle(&mut self) -> bool {
        let won = self.reels[0] == self.reels[1] && self.reels[1] == self.reels[2];

        if won {
            self.points += self.difficulty.win_points();
            self.streak += 1;
            if self.streak > self.streak_record {
                self.streak_record = self.streak;
            }

            if self.streak == 1 && self.started {
                self.message = MSG_FIRST_WIN.to_string();
            } else if self.streak == UNLOCK_STREAK && !self.master_unlocked {
                self.message = MSG_UNLOCK.to_string();
                self.master_unlocked = true;
                self.started = false;
                tracing::info!(streak = self.streak, "master difficulty unlocked");
            } else if self.streak >= PRO_STREAK {
                self.message = MSG_PRO.to_string();
            }
        } else {
            self.streak = 0;
            self.message = if self.started {
                MSG_GUIDANCE.to_string()
            } else {
                String::new()
            };
        }

        won
    }

    /// Select a difficulty tier.
    ///
    /// Master is accepted only once unlocked; a locked selection leaves the
    /// state untouched and returns false. The status message is refreshed
    /// unless an active streak of 3+ is in progress.
    pub(crate) fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if difficulty == Difficulty::Master && !self.master_unlocked {
            return false;
        }

        self.difficulty = difficulty;
        if self.streak < PRO_STREAK {
            self.message = match difficulty {
                Difficulty::Normal => String::new(),
                Difficulty::Master => MSG_MASTER_SELECTED.to_string(),
            };
        }
        true
    }

    /// Reset points and streaks. Unlock state, difficulty, message, and the
    /// reels are left alone.
    pub(crate) fn clear_scores(&mut self) {
        self.points = 0;
        self.streak = 0;
        self.streak_record = 0;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            reels: self.reels,
            points: self.points,
            streak: self.streak,
            streak_record: self.streak_record,
            difficulty: self.difficulty,
            master_unlocked: self.master_unlocked,
            started: self.started,
            message: self.message.clone(),
            spinning: self.spinning,
            infinite_mode: self.infinite_mode,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
