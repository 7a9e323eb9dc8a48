use super::constants::{
    CURSOR_DOT_FACTOR, CURSOR_DOT_HALF_PX, CURSOR_RING_FACTOR, CURSOR_RING_HALF_PX,
};
use glam::Vec2;

/// Linear interpolation `a + (b - a) * t`.
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// A point that chases a target by a fixed fraction of the remaining distance
/// every frame.
///
/// With `factor` in `(0, 1]` the distance to a fixed target shrinks by
/// `(1 - factor)` per step, so the motion is monotone and never overshoots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Follower {
    pub position: Vec2,
    pub factor: f32,
}

impl Follower {
    pub fn new(factor: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            factor: factor.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.position = lerp(self.position, target, self.factor);
        self.position
    }
}

/// Top-left CSS pixel positions for the two cursor elements after a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub dot: Vec2,
    pub ring: Vec2,
}

/// Pointer position plus the two smoothed dots that trail it.
#[derive(Clone, Copy, Debug)]
pub struct CursorState {
    pub pointer: Vec2,
    pub dot: Follower,
    pub ring: Follower,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            pointer: Vec2::ZERO,
            dot: Follower::new(CURSOR_DOT_FACTOR),
            ring: Follower::new(CURSOR_RING_FACTOR),
        }
    }
}

impl CursorState {
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.pointer = Vec2::new(x, y);
        }
    }

    /// Advance both dots one frame and return where to draw them.
    pub fn tick(&mut self) -> CursorFrame {
        let dot = self.dot.step(self.pointer);
        let ring = self.ring.step(self.pointer);
        CursorFrame {
            dot: dot - Vec2::splat(CURSOR_DOT_HALF_PX),
            ring: ring - Vec2::splat(CURSOR_RING_HALF_PX),
        }
    }
}
