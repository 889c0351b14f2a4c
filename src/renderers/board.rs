//! Display state for interactive front-ends.
//!
//! [`RaceBoard`] holds what a screen shows for each lane: the latest array,
//! its step count and the algorithm name, plus the winner line once there
//! is one. It knows nothing about terminals, so any front-end can draw it.

use super::RaceRenderer;

/// Empty space kept above the tallest bar.
pub const BAR_HEADROOM: Value = 10;
use crate::engine::state::Side;
use crate::steppers::{Snapshot, Value};

/// What one half of the screen shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneView {
    /// Algorithm display name.
    pub name: String,
    /// Latest array state.
    pub values: Vec<Value>,
    /// Step counter shown in the caption.
    pub steps: u64,
}

impl LaneView {
    /// Caption under the chart.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("Steps: {}", self.steps)
    }

    /// Largest value on display, used to scale bars.
    #[must_use]
    pub fn max_value(&self) -> Value {
        self.values.iter().copied().max().unwrap_or(0)
    }
}

/// Renderer-agnostic race display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceBoard {
    left: LaneView,
    right: LaneView,
    winner: Option<String>,
}

impl RaceBoard {
    /// Board showing the initial array on both sides, zero steps.
    #[must_use]
    pub fn new(left_name: &str, right_name: &str, input: &[Value]) -> Self {
        let lane = |name: &str| LaneView {
            name: name.to_string(),
            values: input.to_vec(),
            steps: 0,
        };
        Self {
            left: lane(left_name),
            right: lane(right_name),
            winner: None,
        }
    }

    /// View for one side.
    #[must_use]
    pub const fn lane(&self, side: Side) -> &LaneView {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Winner line, once announced.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Largest value across both sides so the two charts share a scale.
    #[must_use]
    pub fn shared_max(&self) -> Value {
        self.left.max_value().max(self.right.max_value())
    }

    /// Top of the shared value axis: the tallest bar plus headroom.
    #[must_use]
    pub fn chart_ceiling(&self) -> Value {
        self.shared_max().saturating_add(BAR_HEADROOM)
    }

    /// Heading naming both contestants.
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{} vs {} - Side-by-Side Animation",
            self.left.name, self.right.name
        )
    }

    fn lane_mut(&mut self, side: Side) -> &mut LaneView {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl RaceRenderer for RaceBoard {
    fn on_snapshot(&mut self, side: Side, snapshot: Snapshot, steps: u64) {
        let lane = self.lane_mut(side);
        lane.values = snapshot.into_vec();
        lane.steps = steps;
    }

    fn on_winner(&mut self, message: &str) {
        self.winner = Some(message.to_string());
    }
}
