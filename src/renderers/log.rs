//! Renderer that reports through `tracing`.

use tracing::{debug, info};

use super::RaceRenderer;
use crate::engine::state::Side;
use crate::steppers::Snapshot;

/// Emits one `debug` event per snapshot and an `info` event for the winner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogRenderer {
    snapshots: u64,
}

impl LogRenderer {
    /// Fresh log renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self { snapshots: 0 }
    }

    /// Snapshots seen across both sides.
    #[must_use]
    pub const fn snapshots(&self) -> u64 {
        self.snapshots
    }
}

impl RaceRenderer for LogRenderer {
    fn on_snapshot(&mut self, side: Side, snapshot: Snapshot, steps: u64) {
        self.snapshots += 1;
        debug!(
            %side,
            steps,
            sorted = snapshot.is_sorted(),
            values = ?snapshot.as_slice(),
            "snapshot"
        );
    }

    fn on_winner(&mut self, message: &str) {
        info!(snapshots = self.snapshots, "{message}");
    }
}
