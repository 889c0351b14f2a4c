//! Deterministic random number generation for race input.
//!
//! Wraps PCG-64 so that a recorded seed reproduces the exact input array of
//! a race, bit for bit, on every platform.

use rand::prelude::*;
use rand::seq::index;
use rand_pcg::Pcg64;

use crate::error::{RaceError, RaceResult};
use crate::steppers::Value;

/// Seeded PCG generator producing race input arrays.
#[derive(Debug, Clone)]
pub struct InputRng {
    /// Seed the generator was created from.
    seed: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl InputRng {
    /// Create a generator from an explicit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Create a generator from fresh OS entropy.
    ///
    /// The drawn seed is kept so the race can be reproduced later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed the generator was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Sample `count` distinct values from `[min, max)` without replacement.
    ///
    /// The order of the result is random.
    ///
    /// # Errors
    ///
    /// Returns [`RaceError::Input`] when the range is empty or holds fewer
    /// than `count` values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sortrace::engine::rng::InputRng;
    ///
    /// let mut rng = InputRng::new(42);
    /// let values = rng.sample_distinct(40, 10, 100).unwrap();
    /// assert_eq!(values.len(), 40);
    /// assert!(values.iter().all(|v| (10..100).contains(v)));
    /// ```
    pub fn sample_distinct(&mut self, count: usize, min: Value, max: Value) -> RaceResult<Vec<Value>> {
        if min >= max {
            return Err(RaceError::input(format!(
                "empty range [{min}, {max})"
            )));
        }
        let span = usize::try_from(i128::from(max) - i128::from(min)).map_err(|_| {
            RaceError::input(format!("range [{min}, {max}) is too wide to sample"))
        })?;
        if span < count {
            return Err(RaceError::input(format!(
                "cannot draw {count} distinct values from [{min}, {max}) ({span} available)"
            )));
        }

        index::sample(&mut self.rng, span, count)
            .into_iter()
            .map(|offset| {
                let value = i128::from(min) + offset as i128;
                Value::try_from(value).map_err(|_| {
                    RaceError::input(format!("sampled value {value} outside [{min}, {max})"))
                })
            })
            .collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: samples are always distinct and in range.
        #[test]
        fn prop_sample_distinct(seed in any::<u64>(), count in 0usize..50, min in -100i64..100) {
            let max = min + 50;
            let mut rng = InputRng::new(seed);
            let mut values = rng.sample_distinct(count, min, max).expect("sample");

            prop_assert_eq!(values.len(), count);
            prop_assert!(values.iter().all(|v| (min..max).contains(v)));
            values.sort_unstable();
            values.dedup();
            prop_assert_eq!(values.len(), count);
        }
    }
}
