//! Selection sort, one snapshot per placed element.

use super::{Snapshot, SortAlgorithm, Step, Stepper, Value};

/// Selection sort over a private working array.
///
/// Each step scans the unsorted suffix for its minimum (first occurrence
/// wins), swaps it into the next slot and emits a snapshot. The swap happens
/// even when the minimum is already in place, so `n` values always take
/// exactly `n` steps.
#[derive(Debug, Clone)]
pub struct SelectionStepper {
    data: Vec<Value>,
    next: usize,
    emitted: u64,
    exhausted: bool,
}

impl SelectionStepper {
    /// Create a stepper over a copy of `values`.
    #[must_use]
    pub fn new(values: &[Value]) -> Self {
        Self {
            data: values.to_vec(),
            next: 0,
            emitted: 0,
            exhausted: false,
        }
    }

    /// Length of the sorted prefix.
    #[must_use]
    pub const fn placed(&self) -> usize {
        self.next
    }

    fn min_index_from(&self, start: usize) -> usize {
        let mut min_i = start;
        for j in start + 1..self.data.len() {
            if self.data[j] < self.data[min_i] {
                min_i = j;
            }
        }
        min_i
    }
}

impl Stepper for SelectionStepper {
    fn algorithm(&self) -> SortAlgorithm {
        SortAlgorithm::Selection
    }

    fn advance(&mut self) -> Step {
        if self.exhausted {
            return Step::Done;
        }
        if self.next >= self.data.len() {
            self.exhausted = true;
            return Step::Done;
        }

        let i = self.next;
        let min_i = self.min_index_from(i);
        self.data.swap(i, min_i);
        self.next += 1;

        self.emitted += 1;
        Step::Snapshot(Snapshot::from_slice(&self.data))
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn steps_emitted(&self) -> u64 {
        self.emitted
    }

    fn working(&self) -> &[Value] {
        &self.data
    }
}
