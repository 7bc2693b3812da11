// Host-side tests for the virtual timer slots.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod timer {
    include!("../src/core/timer.rs");
}

use timer::*;

#[test]
fn timeout_fires_once_then_goes_idle() {
    let mut ids = TimerIds::default();
    let mut slot = TimerSlot::default();
    assert!(!slot.is_armed());
    assert_eq!(slot.fire(), None);

    slot.arm_timeout(&mut ids, 100.0, 2000.0);
    assert_eq!(slot.deadline(), Some(2100.0));
    assert_eq!(slot.period(), None);
    assert_eq!(slot.due(2099.9), None);
    assert_eq!(slot.due(2100.0), Some(2100.0));

    assert_eq!(slot.fire(), Some(2100.0));
    assert!(!slot.is_armed());
    assert_eq!(slot.due(1e9), None);
}

#[test]
fn interval_keeps_its_handle_and_cadence() {
    let mut ids = TimerIds::default();
    let mut slot = TimerSlot::default();
    let h = slot.arm_interval(&mut ids, 0.0, 500.0);
    for n in 1..=5 {
        assert_eq!(slot.fire(), Some(500.0 * n as f64));
        assert_eq!(slot.handle(), Some(h));
    }
    assert_eq!(slot.deadline(), Some(3000.0));
}

#[test]
fn rearming_replaces_the_pending_timer() {
    let mut ids = TimerIds::default();
    let mut slot = TimerSlot::default();
    let first = slot.arm_timeout(&mut ids, 0.0, 2000.0);
    let second = slot.arm_timeout(&mut ids, 1500.0, 2000.0);
    assert_ne!(first, second);
    assert_eq!(slot.handle(), Some(second));
    assert_eq!(slot.deadline(), Some(3500.0));
    // Only the second deadline remains.
    assert_eq!(slot.due(2000.0), None);
}

#[test]
fn cancel_releases_the_handle() {
    let mut ids = TimerIds::default();
    let mut slot = TimerSlot::default();
    let h = slot.arm_interval(&mut ids, 10.0, 1000.0);
    assert_eq!(slot.cancel(), Some(h));
    assert_eq!(slot.cancel(), None);
    assert_eq!(slot.deadline(), None);
}

#[test]
fn handles_are_unique_across_slots() {
    let mut ids = TimerIds::default();
    let mut a = TimerSlot::default();
    let mut b = TimerSlot::default();
    let ha = a.arm_timeout(&mut ids, 0.0, 1.0);
    let hb = b.arm_timeout(&mut ids, 0.0, 1.0);
    assert_ne!(ha, hb);
}
