// Host-side tests for the scroll reactors.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::core::scroll::*;

fn section(id: &str, top: f64, height: f64) -> SectionBounds {
    SectionBounds {
        id: id.to_string(),
        top,
        height,
    }
}

#[test]
fn section_range_is_half_open_after_offset() {
    // top 200 -> active range [100, 600)
    let s = section("about", 200.0, 500.0);
    assert!(!s.contains(99.0));
    assert!(s.contains(100.0));
    assert!(s.contains(150.0));
    assert!(s.contains(599.9));
    assert!(!s.contains(600.0));
}

#[test]
fn only_the_section_under_scroll_is_active() {
    let sections = vec![
        section("home", 0.0, 200.0),     // [-100, 100)
        section("about", 200.0, 500.0),  // [100, 600)
        section("projects", 700.0, 800.0), // [600, 1400)
    ];
    assert_eq!(active_sections(&sections, 150.0), vec![false, true, false]);
    assert_eq!(active_sections(&sections, 0.0), vec![true, false, false]);
    assert_eq!(active_sections(&sections, 2000.0), vec![false, false, false]);
}

#[test]
fn navbar_threshold_is_strict() {
    assert!(!navbar_scrolled(0.0));
    assert!(!navbar_scrolled(50.0));
    assert!(navbar_scrolled(50.5));
}

#[test]
fn parallax_speed_increases_with_index() {
    assert!((parallax_offset(100.0, 0) - 10.0).abs() < 1e-9);
    assert!((parallax_offset(100.0, 1) - 15.0).abs() < 1e-9);
    assert!((parallax_offset(100.0, 2) - 20.0).abs() < 1e-9);
    assert_eq!(parallax_offset(0.0, 5), 0.0);
}

#[test]
fn anchor_target_leaves_room_for_header() {
    assert_eq!(anchor_scroll_target(300.0, 1000.0), 1220.0);
}

#[test]
fn link_matching_is_exact() {
    assert!(link_targets_section("#about", "about"));
    assert!(link_targets_section("/index.html#about", "about"));
    assert!(!link_targets_section("#about-me", "about"));
    assert!(!link_targets_section("#about", "about-me"));
    assert!(!link_targets_section("about", "about"));
    assert_eq!(href_fragment("#"), None);
}
