//! Race state: the two lanes and their counters.
//!
//! A lane pairs one stepper with its step counter and completion flag. The
//! counter only moves while the lane is running; once the stepper reports
//! exhaustion the lane is frozen for the rest of the race.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::steppers::{Snapshot, SortAlgorithm, Step, Stepper};

/// One of the two race positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// First contestant, advanced first within a tick.
    Left,
    /// Second contestant; also the winner on equal step counts.
    Right,
}

impl Side {
    /// Both sides in tick order.
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// Lowercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One contestant: a stepper, its step count and completion flag.
#[derive(Debug)]
pub struct Lane {
    stepper: Box<dyn Stepper>,
    steps: u64,
    done: bool,
}

impl Lane {
    /// Wrap a fresh stepper.
    #[must_use]
    pub fn new(stepper: Box<dyn Stepper>) -> Self {
        Self {
            stepper,
            steps: 0,
            done: false,
        }
    }

    /// Pull one step from the stepper.
    ///
    /// Returns the produced snapshot, or `None` when the lane is (or just
    /// became) done. A done lane never calls its stepper again.
    pub fn advance(&mut self) -> Option<Snapshot> {
        if self.done {
            return None;
        }
        match self.stepper.advance() {
            Step::Snapshot(snapshot) => {
                self.steps += 1;
                Some(snapshot)
            }
            Step::Done => {
                self.done = true;
                None
            }
        }
    }

    /// Snapshots produced so far.
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Whether the stepper has reported exhaustion.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Algorithm raced in this lane.
    #[must_use]
    pub fn algorithm(&self) -> SortAlgorithm {
        self.stepper.algorithm()
    }

    /// Display name of the lane's algorithm.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.stepper.name()
    }

    /// Serializable view of the lane.
    #[must_use]
    pub fn summary(&self) -> LaneSummary {
        LaneSummary {
            algorithm: self.algorithm(),
            name: self.name().to_string(),
            steps: self.steps,
            done: self.done,
        }
    }
}

/// Snapshot of a lane's counters for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneSummary {
    /// Algorithm raced in the lane.
    pub algorithm: SortAlgorithm,
    /// Display name.
    pub name: String,
    /// Snapshots produced.
    pub steps: u64,
    /// Whether the lane finished.
    pub done: bool,
}
