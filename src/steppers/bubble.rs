//! Bubble sort, one snapshot per comparison.

use super::{Snapshot, SortAlgorithm, Step, Stepper, Value};

/// Bubble sort over a private working array.
///
/// Pass `i` runs `j = 0..n-i-2` inclusive and compares `a[j]` with `a[j+1]`,
/// swapping when the left value is strictly greater. A snapshot is emitted
/// after every comparison, swap or not.
#[derive(Debug, Clone)]
pub struct BubbleStepper {
    data: Vec<Value>,
    pass: usize,
    index: usize,
    emitted: u64,
    exhausted: bool,
}

impl BubbleStepper {
    /// Create a stepper over a copy of `values`.
    #[must_use]
    pub fn new(values: &[Value]) -> Self {
        Self {
            data: values.to_vec(),
            pass: 0,
            index: 0,
            emitted: 0,
            exhausted: false,
        }
    }

    /// Current outer pass.
    #[must_use]
    pub const fn pass(&self) -> usize {
        self.pass
    }

    /// Index of the next comparison within the current pass.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl Stepper for BubbleStepper {
    fn algorithm(&self) -> SortAlgorithm {
        SortAlgorithm::Bubble
    }

    fn advance(&mut self) -> Step {
        if self.exhausted {
            return Step::Done;
        }

        let n = self.data.len();
        // Passes run while at least one comparison remains (pass <= n - 2)
        if self.pass + 1 >= n {
            self.exhausted = true;
            return Step::Done;
        }

        let j = self.index;
        if self.data[j] > self.data[j + 1] {
            self.data.swap(j, j + 1);
        }

        self.index += 1;
        if self.index >= n - self.pass - 1 {
            self.pass += 1;
            self.index = 0;
        }

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
