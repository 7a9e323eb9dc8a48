use super::constants::{COUNTER_DURATION_MS, COUNTER_FRAME_MS};

/// Parse a `data-count` attribute into an integer target.
pub fn parse_target(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Frame-stepped count-up from 0 to a fixed integer target.
///
/// Each `step` adds `target / (duration / frame)`; the displayed value is the
/// floor of the running total until it reaches the target, after which the
/// target itself is shown and the counter reports completion.
#[derive(Clone, Copy, Debug)]
pub struct Counter {
    target: i64,
    increment: f64,
    current: f64,
    done: bool,
}

impl Counter {
    pub fn new(target: i64) -> Self {
        Self::with_timing(target, COUNTER_DURATION_MS, COUNTER_FRAME_MS)
    }

    pub fn with_timing(target: i64, duration_ms: f64, frame_ms: f64) -> Self {
        let frames = (duration_ms / frame_ms.max(f64::EPSILON)).max(1.0);
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one frame; returns the value to display.
    pub fn step(&mut self) -> i64 {
        if self.done {
            return self.target;
        }
        self.current += self.increment;
        if self.current < self.target as f64 {
            self.current.floor() as i64
        } else {
            self.done = true;
            self.target
        }
    }
}
