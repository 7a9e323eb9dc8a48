// Host-side tests for the once-per-target intersection gate.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod trigger {
        include!("../src/core/trigger.rs");
    }
}

use crate::core::trigger::*;

// Replays a batch of (target, is_intersecting) entries the way the observer
// callback walks them and counts how often each target fires.
fn fire_counts(batches: &[&[(&'static str, bool)]]) -> Vec<(&'static str, usize)> {
    let mut gate = FireOnce::default();
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for batch in batches {
        for &(target, intersecting) in batch.iter() {
            if gate.admit(target, intersecting) {
                match counts.iter_mut().find(|(t, _)| *t == target) {
                    Some((_, n)) => *n += 1,
                    None => counts.push((target, 1)),
                }
            }
        }
    }
    counts
}

#[test]
fn repeated_entries_in_one_batch_fire_once() {
    let counts = fire_counts(&[&[("stats", true), ("stats", false), ("stats", true)]]);
    assert_eq!(counts, vec![("stats", 1)]);
}

#[test]
fn re_entry_in_a_later_batch_does_not_fire_again() {
    let counts = fire_counts(&[
        &[("skills", true)],
        &[("skills", false)],
        &[("skills", true)],
    ]);
    assert_eq!(counts, vec![("skills", 1)]);
}

#[test]
fn each_target_fires_exactly_once() {
    let counts = fire_counts(&[
        &[("header", false), ("about", true), ("header", true)],
        &[("about", true), ("contact", true), ("header", true)],
    ]);
    assert_eq!(counts, vec![("about", 1), ("header", 1), ("contact", 1)]);
}

#[test]
fn non_intersecting_entries_never_fire() {
    let mut gate = FireOnce::default();
    assert!(!gate.admit("img", false));
    assert!(!gate.has_fired(&"img"));
    assert!(gate.is_empty());
    assert!(gate.admit("img", true));
    assert!(gate.has_fired(&"img"));
    assert_eq!(gate.len(), 1);
}
