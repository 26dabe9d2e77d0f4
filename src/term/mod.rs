//! Terminal presentation module.
//!
//! A small, game-oriented rendering layer: `game_view` turns an engine
//! snapshot into styled lines (pure, testable without a terminal), and
//! `renderer` owns the raw-mode terminal session that flushes them.

pub mod game_view;
pub mod renderer;

pub use game_view::{GameView, LineKind, ViewLine};
pub use renderer::TerminalRenderer;
