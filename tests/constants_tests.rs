// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn rate_bounds_are_ordered() {
    assert!(RESTING_RATE > 0);
    assert!(RESTING_RATE < MODERATE_RATE);
    assert!(MODERATE_RATE < ELEVATED_RATE);
    assert!(ELEVATED_RATE < MAX_RATE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn beat_pulse_fits_inside_fastest_beat() {
    let fastest = MS_PER_MINUTE / MAX_RATE as f64;
    assert!(BEAT_PULSE_MS < fastest);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timers_are_positive_and_ordered() {
    assert!(DECAY_PERIOD_MS > 0.0);
    assert!(SHAKE_HOLD_MS > DECAY_PERIOD_MS);
    assert!(MOTION_DEBOUNCE_MS > 0.0);
    assert!(POINTER_DEBOUNCE_MS > MOTION_DEBOUNCE_MS);
    assert!(DECAY_STEP > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn boosts_stay_within_range() {
    assert!(MOTION_SHAKE_BOOST > 0 && MOTION_SHAKE_BOOST < MAX_RATE - RESTING_RATE);
    assert!(POINTER_SHAKE_BOOST > 0 && POINTER_SHAKE_BOOST < MAX_RATE - RESTING_RATE);
    assert!(POINTER_CONFIRMATIONS >= 1);
    assert!(POINTER_SHAKE_THRESHOLD as f64 > MOTION_SHAKE_THRESHOLD);
}
