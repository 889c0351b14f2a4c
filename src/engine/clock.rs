//! Frame clock.
//!
//! Tracks the animation cadence and enforces the frame cap that guarantees a
//! race terminates even when a stepper never reports exhaustion.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default frame interval in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 40;

/// Default maximum number of frames serviced per race.
pub const DEFAULT_MAX_FRAMES: u64 = 2000;

/// Fixed-cadence frame counter with a hard cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameClock {
    /// Frame interval in milliseconds.
    interval_ms: u64,
    /// Frames granted so far.
    frame_count: u64,
    /// Hard upper bound on granted frames.
    max_frames: u64,
}

impl FrameClock {
    /// Create a clock with the given cadence and cap.
    #[must_use]
    pub const fn new(interval_ms: u64, max_frames: u64) -> Self {
        Self {
            interval_ms,
            frame_count: 0,
            max_frames,
        }
    }

    /// Create a clock with the default cadence and the given cap.
    #[must_use]
    pub const fn with_max_frames(max_frames: u64) -> Self {
        Self::new(DEFAULT_INTERVAL_MS, max_frames)
    }

    /// Frame interval as a `Duration`.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Frame interval in milliseconds.
    #[must_use]
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Frames granted so far.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// The frame cap.
    #[must_use]
    pub const fn max_frames(&self) -> u64 {
        self.max_frames
    }

    /// Frames still available before the cap.
    #[must_use]
    pub const fn remaining(&self) -> u64 {
        self.max_frames.saturating_sub(self.frame_count)
    }

    /// Whether every frame has been granted.
    #[must_use]
    pub const fn at_cap(&self) -> bool {
        self.frame_count >= self.max_frames
    }

    /// Request one frame.
    ///
    /// Returns `false` without counting once the cap is reached.
    pub fn tick(&mut self) -> bool {
        if self.at_cap() {
            return false;
        }
        self.frame_count += 1;
        true
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS, DEFAULT_MAX_FRAMES)
    }
}
