//! Stepwise sorting algorithms.
//!
//! Each algorithm is an explicit state machine over a private working array.
//! Callers pull progress one step at a time with [`Stepper::advance`]; the
//! stepper does no work between calls. Every step yields an owned
//! [`Snapshot`], so earlier snapshots can never be altered by later progress.
//!
//! Step granularity differs by algorithm:
//!
//! | Algorithm | One step is            | Steps for n values |
//! |-----------|------------------------|--------------------|
//! | Bubble    | one adjacent compare   | n(n-1)/2           |
//! | Selection | one outer placement    | n                  |

pub mod bubble;
pub mod selection;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use bubble::BubbleStepper;
pub use selection::SelectionStepper;

use crate::error::RaceError;

/// Element type of raced arrays.
pub type Value = i64;

/// Immutable copy of a working array at one step of a sort.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Snapshot {
    values: Vec<Value>,
}

impl Snapshot {
    /// Copy the given values into a new snapshot.
    #[must_use]
    pub fn from_slice(values: &[Value]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// View the snapshot's values.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the snapshot holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the values are in non-decreasing order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    /// Consume the snapshot and return its values.
    #[must_use]
    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }
}

impl AsRef<[Value]> for Snapshot {
    fn as_ref(&self) -> &[Value] {
        &self.values
    }
}

impl From<Vec<Value>> for Snapshot {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

/// Outcome of one [`Stepper::advance`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The sort made one step of progress.
    Snapshot(Snapshot),
    /// The sort is finished; no further snapshots will be produced.
    Done,
}

impl Step {
    /// Whether this is the terminal signal.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Convert into the produced snapshot, if any.
    #[must_use]
    pub fn into_snapshot(self) -> Option<Snapshot> {
        match self {
            Self::Snapshot(snapshot) => Some(snapshot),
            Self::Done => None,
        }
    }
}

/// A pull-based, deterministic, finite producer of snapshots for one sort.
///
/// Once [`Step::Done`] has been returned the stepper is permanently
/// exhausted and every later call returns [`Step::Done`] again.
pub trait Stepper: fmt::Debug {
    /// Which algorithm this stepper runs.
    fn algorithm(&self) -> SortAlgorithm;

    /// Perform exactly one step of the sort.
    fn advance(&mut self) -> Step;

    /// Whether the terminal signal has been returned.
    fn is_exhausted(&self) -> bool;

    /// Number of snapshots produced so far.
    fn steps_emitted(&self) -> u64;

    /// Current contents of the working array.
    fn working(&self) -> &[Value];

    /// Display name of the algorithm.
    fn name(&self) -> &'static str {
        self.algorithm().display_name()
    }
}

/// Drain a stepper as an iterator of snapshots.
///
/// ```rust
/// use sortrace::steppers::{snapshots, SortAlgorithm};
///
/// let mut stepper = SortAlgorithm::Selection.stepper(&[3, 1, 2]);
/// let all: Vec<_> = snapshots(stepper.as_mut()).collect();
/// assert_eq!(all.len(), 3);
/// assert_eq!(all[2].as_slice(), &[1, 2, 3]);
/// ```
pub fn snapshots(stepper: &mut dyn Stepper) -> impl Iterator<Item = Snapshot> + '_ {
    std::iter::from_fn(move || stepper.advance().into_snapshot())
}

/// Sorting algorithms that can enter a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    /// Adjacent-pair bubble sort, one snapshot per comparison.
    Bubble,
    /// Selection sort, one snapshot per placed element.
    Selection,
}

impl SortAlgorithm {
    /// Every available algorithm.
    pub const ALL: [Self; 2] = [Self::Bubble, Self::Selection];

    /// Human-readable name used in verdict messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
        }
    }

    /// Short identifier used in configuration files and on the command line.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
        }
    }

    /// Number of snapshots the algorithm produces for `n` values.
    #[must_use]
    pub const fn expected_steps(self, n: usize) -> u64 {
        let n = n as u64;
        match self {
            Self::Bubble => n * n.saturating_sub(1) / 2,
            Self::Selection => n,
        }
    }

    /// Build a fresh stepper over an independent copy of `values`.
    #[must_use]
    pub fn stepper(self, values: &[Value]) -> Box<dyn Stepper> {
        match self {
            Self::Bubble => Box::new(BubbleStepper::new(values)),
            Self::Selection => Box::new(SelectionStepper::new(values)),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = RaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" | "bubble-sort" | "bubble_sort" => Ok(Self::Bubble),
            "selection" | "selection-sort" | "selection_sort" => Ok(Self::Selection),
            other => Err(RaceError::UnknownAlgorithm(other.to_string())),
        }
    }
}
