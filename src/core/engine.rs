//! SpinEngine - the spin/reward state machine
//!
//! Owns the game state, the seeded RNG, and the single cancellable spin task.
//! Commands (`spin`, `set_code`, `set_difficulty`, `clear`) mutate state and
//! emit a snapshot to every subscriber; invalid commands are no-ops, never
//! failures. Ticks are driven externally at a nominal 50ms cadence.

use std::sync::mpsc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::reels;
use crate::core::snapshot::GameSnapshot;
use crate::core::state::GameState;
use crate::types::{Difficulty, Symbol, INFINITE_CODE, REEL_COUNT, SPIN_TICKS};

/// Presentation/audio collaborator notifications.
///
/// Fire-and-forget: implementations must not block tick progression.
pub trait SpinHooks {
    /// A spin (and its looping sound) started.
    fn on_spin_start(&mut self) {}
    /// The spin settled or was cancelled; looping sound stops.
    fn on_spin_stop(&mut self) {}
}

/// Hooks that do nothing. Default collaborator for headless use and tests.
pub struct NullHooks;

impl SpinHooks for NullHooks {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpinMode {
    /// Fixed number of redraw ticks, then one settlement.
    Bounded,
    /// Ticks until cancelled; settles on every even wall-clock second.
    Endless,
}

/// Scheduled-task handle for the active tick loop.
///
/// At most one exists per engine; cancellation drops the handle and is
/// synchronous and idempotent.
#[derive(Debug)]
struct SpinTask {
    mode: SpinMode,
    remaining_ticks: u32,
}

impl SpinTask {
    fn new(mode: SpinMode) -> Self {
        let remaining_ticks = match mode {
            SpinMode::Bounded => SPIN_TICKS,
            SpinMode::Endless => 0,
        };
        Self {
            mode,
            remaining_ticks,
        }
    }
}

/// State machine owning game state and spin resolution.
pub struct SpinEngine {
    state: GameState,
    rng: ChaCha8Rng,
    task: Option<SpinTask>,
    hooks: Box<dyn SpinHooks>,
    subscribers: Vec<mpsc::Sender<GameSnapshot>>,
}

impl SpinEngine {
    /// Create an engine with the given RNG seed and no collaborator.
    pub fn new(seed: u64) -> Self {
        Self::with_hooks(seed, Box::new(NullHooks))
    }

    /// Create an engine wired to a presentation/audio collaborator.
    pub fn with_hooks(seed: u64, hooks: Box<dyn SpinHooks>) -> Self {
        Self {
            state: GameState::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            task: None,
            hooks,
            subscribers: Vec::new(),
        }
    }

    /// Read access to the owned state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current state snapshot, for pull-style renderers.
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Subscribe to state snapshots; one is sent after every mutation.
    ///
    /// Disconnected receivers are pruned on the next emission.
    pub fn subscribe(&mut self) -> mpsc::Receiver<GameSnapshot> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Pin the reel state directly.
    ///
    /// Bypasses randomization; used by tests and demos to stage a settlement.
    pub fn set_reels(&mut self, reels: [Symbol; REEL_COUNT]) {
        self.state.set_reels(reels);
        self.emit();
    }

    /// Start a spin.
    ///
    /// Rejected (no-op) while a normal-mode spin is in progress. In infinite
    /// mode the previous tick loop is cancelled and a fresh one starts, with
    /// a fresh `on_spin_start` notification.
    pub fn spin(&mut self) {
        if self.task.is_some() && !self.state.infinite_mode() {
            tracing::debug!("spin rejected: already spinning");
            return;
        }

        self.cancel_task();
        let mode = if self.state.infinite_mode() {
            SpinMode::Endless
        } else {
            SpinMode::Bounded
        };
        self.task = Some(SpinTask::new(mode));
        self.state.set_spinning(true);
        self.hooks.on_spin_start();
        tracing::debug!(?mode, "spin started");
        self.emit();
    }

    /// Advance the active tick loop by one 50ms step.
    ///
    /// `epoch_secs` is the current wall-clock time in whole seconds; infinite
    /// mode settles on every tick that lands on an even second, without
    /// stopping the loop. Returns false when no spin is active.
    pub fn tick(&mut self, epoch_secs: u64) -> bool {
        let mode = match &self.task {
            Some(task) => task.mode,
            None => return false,
        };

        let redrawn = reels::draw_reels(&mut self.rng, self.state.difficulty());
        self.state.set_reels(redrawn);

        match mode {
            SpinMode::Bounded => {
                let done = match self.task.as_mut() {
                    Some(task) => {
                        task.remaining_ticks = task.remaining_ticks.saturating_sub(1);
                        task.remaining_ticks == 0
                    }
                    None => false,
                };
                if done {
                    self.state.settle();
                    self.state.set_spinning(false);
                    self.cancel_task();
                    self.hooks.on_spin_stop();
                }
            }
            SpinMode::Endless => {
                if epoch_secs % 2 == 0 {
                    self.state.settle();
                }
            }
        }

        self.emit();
        true
    }

    /// Settle the current reels once: apply rewards, streaks, and messages.
    pub fn finalize_spin(&mut self) {
        self.state.settle();
        self.emit();
    }

    /// Process the hidden-code input field.
    ///
    /// The full field content arrives on every edit; only transitions across
    /// the fixed token change anything.
    pub fn set_code(&mut self, input: &str) {
        match (self.state.infinite_mode(), input == INFINITE_CODE) {
            (false, true) => {
                self.state.set_infinite_mode(true);
                tracing::info!("infinite spin mode engaged");
                if self.state.spinning() {
                    // A bounded spin is mid-flight; it finishes on its own.
                    self.emit();
                } else {
                    self.spin();
                }
            }
            (true, false) => {
                self.state.set_infinite_mode(false);
                self.cancel_task();
                self.state.set_spinning(false);
                self.hooks.on_spin_stop();
                self.state.settle();
                tracing::info!("infinite spin mode cancelled");
                self.emit();
            }
            _ => {}
        }
    }

    /// Select a difficulty tier. Selecting Master before it is unlocked is a
    /// reported no-op (`InvalidDifficultySelection`).
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.state.select_difficulty(difficulty) {
            self.emit();
        } else {
            tracing::debug!(
                requested = difficulty.as_str(),
                "difficulty selection rejected: master locked"
            );
        }
    }

    /// Reset points, streak, and streak record.
    pub fn clear(&mut self) {
        self.state.clear_scores();
        self.emit();
    }

    fn cancel_task(&mut self) {
        self.task = None;
    }

    fn emit(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snap = self.state.snapshot();
        self.subscribers.retain(|tx| tx.send(snap.clone()).is_ok());
    }
}
