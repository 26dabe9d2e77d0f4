//! Infinite spin mode: hidden-code transitions and the even-second
//! settlement policy.

use spin_wars::core::SpinEngine;
use spin_wars::types::{Symbol, INFINITE_CODE, SPIN_TICKS};

const ODD_SEC: u64 = 101;
const EVEN_SEC: u64 = 102;

#[test]
fn matching_code_starts_an_unbounded_spin() {
    let mut engine = SpinEngine::new(1);

    engine.set_code(INFINITE_CODE);
    assert!(engine.state().infinite_mode());
    assert!(engine.state().spinning());

    for _ in 0..SPIN_TICKS * 5 {
        assert!(engine.tick(ODD_SEC));
    }
    assert!(engine.state().spinning());
}

#[test]
fn mismatch_cancels_and_settles_current_reels_once() {
    let mut engine = SpinEngine::new(1);
    engine.set_code(INFINITE_CODE);
    engine.tick(ODD_SEC);

    engine.set_reels([Symbol::Watermelon; 3]);
    engine.set_code("Codex");

    assert!(!engine.state().infinite_mode());
    assert!(!engine.state().spinning());
    assert_eq!(engine.state().points(), 1);
    assert_eq!(engine.state().streak(), 1);

    // The loop is gone; nothing settles twice.
    assert!(!engine.tick(EVEN_SEC));
    assert_eq!(engine.state().points(), 1);
}

#[test]
fn partial_code_entry_never_toggles_the_mode() {
    let mut engine = SpinEngine::new(1);

    // Typing "Code" letter by letter: only the final edit matches.
    for partial in ["C", "Co", "Cod"] {
        engine.set_code(partial);
        assert!(!engine.state().infinite_mode());
    }
    engine.set_code("Code");
    assert!(engine.state().infinite_mode());

    // Appending another letter leaves the token: mode drops out.
    engine.set_code("Codee");
    assert!(!engine.state().infinite_mode());
}

#[test]
fn even_seconds_settle_without_stopping_the_spin() {
    let mut engine = SpinEngine::new(1);
    engine.set_code(INFINITE_CODE);

    // Odd seconds: reels churn, nothing settles.
    for _ in 0..5 {
        engine.tick(ODD_SEC);
    }
    assert_eq!(engine.state().points(), 0);
    assert_eq!(engine.state().streak(), 0);
    assert_eq!(engine.state().message(), "");

    // Even second: a settlement runs on whatever was drawn.
    engine.tick(EVEN_SEC);
    assert!(!engine.state().message().is_empty());
    assert!(engine.state().spinning());

    // Many even-second ticks may settle many times; the loop survives all.
    for _ in 0..20 {
        engine.tick(EVEN_SEC);
    }
    assert!(engine.state().spinning());
    assert!(engine.state().streak() <= engine.state().streak_record());
}

#[test]
fn code_during_a_normal_spin_lets_it_finish_first() {
    let mut engine = SpinEngine::new(1);
    engine.spin();
    for _ in 0..3 {
        engine.tick(ODD_SEC);
    }

    engine.set_code(INFINITE_CODE);
    assert!(engine.state().infinite_mode());
    assert!(engine.state().spinning());

    // The bounded loop still runs out on its original schedule.
    for _ in 0..SPIN_TICKS - 3 {
        engine.tick(ODD_SEC);
    }
    assert!(!engine.state().spinning());
    assert!(engine.state().infinite_mode());

    // The next spin is the endless one.
    engine.spin();
    for _ in 0..SPIN_TICKS * 2 {
        engine.tick(ODD_SEC);
    }
    assert!(engine.state().spinning());
}

#[test]
fn retyping_the_code_while_active_changes_nothing() {
    let mut engine = SpinEngine::new(1);
    engine.set_code(INFINITE_CODE);
    let before = engine.snapshot();

    engine.set_code(INFINITE_CODE);
    assert_eq!(engine.snapshot(), before);
}
