//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Number of reel positions resolved per spin.
pub const REEL_COUNT: usize = 3;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u64 = 50;

/// Number of reel redraws a normal-mode spin runs before it settles.
pub const SPIN_TICKS: u32 = 10;

/// Points awarded per win, by difficulty.
pub const NORMAL_WIN_POINTS: u32 = 1;
pub const MASTER_WIN_POINTS: u32 = 5;

/// Streak length that unlocks the Master difficulty.
pub const UNLOCK_STREAK: u32 = 2;

/// Streak length from which the "pro" message shows.
pub const PRO_STREAK: u32 = 3;

/// Hidden token that toggles infinite spin mode.
pub const INFINITE_CODE: &str = "Code";

/// Player-facing status messages.
pub const MSG_FIRST_WIN: &str = "Just one more win";
pub const MSG_UNLOCK: &str = "Awesome, you made it. Try the MASTER level";
pub const MSG_PRO: &str = "Holy cow, what a pro";
pub const MSG_GUIDANCE: &str = "Unlock MASTER level by winning twice in a row";
pub const MSG_MASTER_SELECTED: &str = "What a brave person";

/// Reel symbol kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Apple,
    Banana,
    Watermelon,
}

impl Symbol {
    /// Parse symbol from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "apple" => Some(Symbol::Apple),
            "banana" => Some(Symbol::Banana),
            "watermelon" => Some(Symbol::Watermelon),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Apple => "apple",
            Symbol::Banana => "banana",
            Symbol::Watermelon => "watermelon",
        }
    }
}

/// Difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Normal,
    Master,
}

impl Difficulty {
    /// Numeric index carried over from the original game (Normal = 1, Master = 2).
    /// The reel pool derives its size from this value.
    pub fn legacy_index(&self) -> usize {
        match self {
            Difficulty::Normal => 1,
            Difficulty::Master => 2,
        }
    }

    /// Points a win awards at this difficulty
    pub fn win_points(&self) -> u32 {
        match self {
            Difficulty::Normal => NORMAL_WIN_POINTS,
            Difficulty::Master => MASTER_WIN_POINTS,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Normal => "normal",
            Difficulty::Master => "master",
        }
    }
}

/// Player commands understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Spin,
    SelectNormal,
    SelectMaster,
    Clear,
}

impl GameAction {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Spin => "spin",
            GameAction::SelectNormal => "selectNormal",
            GameAction::SelectMaster => "selectMaster",
            GameAction::Clear => "clear",
        }
    }
}
