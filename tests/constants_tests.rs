// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_never_overshoot() {
    assert!(CURSOR_DOT_FACTOR > 0.0 && CURSOR_DOT_FACTOR <= 1.0);
    assert!(CURSOR_RING_FACTOR > 0.0 && CURSOR_RING_FACTOR <= 1.0);
    // the ring trails the dot
    assert!(CURSOR_RING_FACTOR < CURSOR_DOT_FACTOR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_fractions() {
    for t in [
        COUNTER_VISIBLE_THRESHOLD,
        PROGRESS_VISIBLE_THRESHOLD,
        FADE_VISIBLE_THRESHOLD,
        LAZY_IMAGE_VISIBLE_THRESHOLD,
    ] {
        assert!((0.0..=1.0).contains(&t));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn counter_timing_is_positive() {
    assert!(COUNTER_DURATION_MS > COUNTER_FRAME_MS);
    assert!(COUNTER_FRAME_MS > 0.0);
}
