//! Terminal Spin Wars runner (default binary).
//!
//! Drives the engine at the nominal 50ms tick cadence, polls key input
//! between ticks, and renders the current snapshot each frame.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use spin_wars::core::{SpinEngine, SpinHooks};
use spin_wars::input::{InputEvent, InputHandler};
use spin_wars::term::{GameView, TerminalRenderer};
use spin_wars::types::{Difficulty, GameAction, TICK_MS};

/// Audio collaborator stand-in: the original loops an mp3 while spinning.
struct SpinSound;

impl SpinHooks for SpinSound {
    fn on_spin_start(&mut self) {
        tracing::debug!("spin sound loop started");
    }

    fn on_spin_stop(&mut self) {
        tracing::debug!("spin sound loop stopped");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos() as u64;
    let mut engine = SpinEngine::with_hooks(seed, Box::new(SpinSound));
    let mut input = InputHandler::new();
    let view = GameView;

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let lines = view.render(&engine.snapshot(), input.code());
        term.draw(&lines)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match input.handle_key(key) {
                        Some(InputEvent::Quit) => return Ok(()),
                        Some(InputEvent::Action(action)) => {
                            tracing::trace!(action = action.as_str(), "player command");
                            match action {
                                GameAction::Spin => engine.spin(),
                                GameAction::SelectNormal => {
                                    engine.set_difficulty(Difficulty::Normal)
                                }
                                GameAction::SelectMaster => {
                                    engine.set_difficulty(Difficulty::Master)
                                }
                                GameAction::Clear => engine.clear(),
                            }
                        }
                        // Per-keystroke, like the original text field's onChange.
                        Some(InputEvent::CodeChanged) => engine.set_code(input.code()),
                        None => {}
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick(epoch_secs());
        }
    }
}
