// Host-side tests for the cursor follower.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod cursor {
        include!("../src/core/cursor.rs");
    }
}

use crate::core::constants::*;
use crate::core::cursor::*;
use glam::Vec2;

#[test]
fn lerp_endpoints() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(5.0, -2.0);
    assert_eq!(lerp(a, b, 0.0), a);
    assert_eq!(lerp(a, b, 1.0), b);
    assert_eq!(lerp(a, b, 0.5), Vec2::new(3.0, 0.0));
}

#[test]
fn follower_converges_monotonically_without_overshoot() {
    for factor in [CURSOR_DOT_FACTOR, CURSOR_RING_FACTOR, 1.0] {
        let mut f = Follower::new(factor);
        let target = Vec2::new(640.0, -120.0);
        let mut last = f.position.distance(target);
        for _ in 0..200 {
            let p = f.step(target);
            let d = p.distance(target);
            assert!(d <= last + 1e-4, "distance grew: {} -> {}", last, d);
            // Never passes the target on either axis.
            assert!(p.x <= target.x + 1e-3);
            assert!(p.y >= target.y - 1e-3);
            last = d;
        }
        assert!(last < 1e-2, "factor {} did not converge: {}", factor, last);
    }
}

#[test]
fn follower_factor_one_snaps_to_target() {
    let mut f = Follower::new(1.0);
    assert_eq!(f.step(Vec2::new(10.0, 20.0)), Vec2::new(10.0, 20.0));
}

#[test]
fn follower_factor_is_clamped() {
    assert_eq!(Follower::new(3.0).factor, 1.0);
    assert_eq!(Follower::new(-1.0).factor, 0.0);
}

#[test]
fn dot_leads_ring() {
    let mut c = CursorState::default();
    c.set_pointer(100.0, 100.0);
    c.tick();
    let target = Vec2::new(100.0, 100.0);
    assert!(c.dot.position.distance(target) < c.ring.position.distance(target));
}

#[test]
fn first_frame_positions_and_centering() {
    let mut c = CursorState::default();
    c.set_pointer(100.0, 50.0);
    let frame = c.tick();
    // dot: 0 + 100 * 0.2 = 20, minus 4px half size
    assert!((frame.dot.x - 16.0).abs() < 1e-4);
    assert!((frame.dot.y - 6.0).abs() < 1e-4);
    // ring: 0 + 100 * 0.1 = 10, minus 20px half size
    assert!((frame.ring.x - (-10.0)).abs() < 1e-4);
    assert!((frame.ring.y - (-15.0)).abs() < 1e-4);
}

#[test]
fn non_finite_pointer_is_ignored() {
    let mut c = CursorState::default();
    c.set_pointer(30.0, 40.0);
    c.set_pointer(f32::NAN, 10.0);
    assert_eq!(c.pointer, Vec2::new(30.0, 40.0));
}
