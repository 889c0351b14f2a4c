//! In-memory event recording.
//!
//! Keeps every callback in arrival order. Used by tests and by the replay
//! digest, which hashes the serialized event log.

use serde::{Deserialize, Serialize};

use super::RaceRenderer;
use crate::engine::state::Side;
use crate::steppers::Snapshot;

/// One `on_snapshot` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEvent {
    /// Lane that produced the snapshot.
    pub side: Side,
    /// Lane step counter after the snapshot.
    pub steps: u64,
    /// The array state.
    pub snapshot: Snapshot,
}

/// Any renderer callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaceEvent {
    /// A lane advanced.
    Snapshot(SnapshotEvent),
    /// The verdict was announced.
    Winner(String),
}

/// Renderer that records every callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingRenderer {
    events: Vec<RaceEvent>,
}

impl RecordingRenderer {
    /// Empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All callbacks in order.
    #[must_use]
    pub fn events(&self) -> &[RaceEvent] {
        &self.events
    }

    /// Only the snapshot callbacks, in order.
    pub fn snapshot_events(&self) -> impl Iterator<Item = &SnapshotEvent> {
        self.events.iter().filter_map(|e| match e {
            RaceEvent::Snapshot(event) => Some(event),
            RaceEvent::Winner(_) => None,
        })
    }

    /// Snapshot callbacks for one side.
    pub fn events_for(&self, side: Side) -> impl Iterator<Item = &SnapshotEvent> {
        self.snapshot_events().filter(move |e| e.side == side)
    }

    /// Most recent snapshot for one side.
    #[must_use]
    pub fn last_snapshot(&self, side: Side) -> Option<&Snapshot> {
        self.events_for(side).last().map(|e| &e.snapshot)
    }

    /// Number of `on_winner` calls.
    #[must_use]
    pub fn winner_calls(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, RaceEvent::Winner(_)))
            .count()
    }

    /// First announced verdict.
    #[must_use]
    pub fn winner_message(&self) -> Option<&str> {
        self.events.iter().find_map(|e| match e {
            RaceEvent::Winner(message) => Some(message.as_str()),
            RaceEvent::Snapshot(_) => None,
        })
    }

    /// Consume the recorder, returning the event log.
    #[must_use]
    pub fn into_events(self) -> Vec<RaceEvent> {
        self.events
    }
}

impl RaceRenderer for RecordingRenderer {
    fn on_snapshot(&mut self, side: Side, snapshot: Snapshot, steps: u64) {
        self.events.push(RaceEvent::Snapshot(SnapshotEvent {
            side,
            steps,
            snapshot,
        }));
    }

    fn on_winner(&mut self, message: &str) {
        self.events.push(RaceEvent::Winner(message.to_string()));
    }
}
