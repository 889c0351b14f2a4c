//! Renderers for race output.
//!
//! The driver talks to exactly one [`RaceRenderer`]. Implementations decide
//! what a snapshot means on their surface:
//!
//! ```text
//! RaceDriver::tick
//!       ↓
//! ┌─────────────────────┐
//! │    RaceRenderer     │
//! │  (trait-based API)  │
//! └─────────────────────┘
//!     ↓       ↓       ↓
//!  RaceBoard  Log  Recording
//! ```

pub mod board;
pub mod log;
pub mod record;

pub use board::{LaneView, RaceBoard, BAR_HEADROOM};
pub use log::LogRenderer;
pub use record::{RaceEvent, RecordingRenderer, SnapshotEvent};

use crate::engine::state::Side;
use crate::steppers::Snapshot;

/// Receiver of race progress.
///
/// `on_snapshot` is called at most once per side per frame, left before
/// right. `on_winner` is called exactly once per race, after the last
/// snapshot.
pub trait RaceRenderer {
    /// A lane produced a new array state. `steps` already counts it.
    fn on_snapshot(&mut self, side: Side, snapshot: Snapshot, steps: u64);

    /// Both lanes are done and this is the verdict.
    fn on_winner(&mut self, message: &str);
}

impl<R: RaceRenderer + ?Sized> RaceRenderer for &mut R {
    fn on_snapshot(&mut self, side: Side, snapshot: Snapshot, steps: u64) {
        (**self).on_snapshot(side, snapshot, steps);
    }

    fn on_winner(&mut self, message: &str) {
        (**self).on_winner(message);
    }
}

/// Renderer that discards everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullRenderer;

impl RaceRenderer for NullRenderer {
    fn on_snapshot(&mut self, _side: Side, _snapshot: Snapshot, _steps: u64) {}

    fn on_winner(&mut self, _message: &str) {}
}
