//! Race input sources.
//!
//! The race core accepts any array. Where that array comes from is decided
//! here: a seeded random sample or an explicit list of values.

use crate::config::InputConfig;
use crate::engine::rng::InputRng;
use crate::error::RaceResult;
use crate::steppers::Value;

/// Producer of the shared initial array of a race.
pub trait InputSource {
    /// Produce the array both lanes start from.
    ///
    /// # Errors
    ///
    /// Returns an error when no valid array can be produced.
    fn generate(&mut self) -> RaceResult<Vec<Value>>;

    /// Seed behind the array, for sources that are random.
    fn seed(&self) -> Option<u64> {
        None
    }
}

/// Distinct values sampled from a half-open range.
#[derive(Debug, Clone)]
pub struct RandomInput {
    size: usize,
    min: Value,
    max: Value,
    rng: InputRng,
}

impl RandomInput {
    /// Sample `size` distinct values from `[min, max)` using `rng`.
    #[must_use]
    pub const fn new(size: usize, min: Value, max: Value, rng: InputRng) -> Self {
        Self { size, min, max, rng }
    }
}

impl InputSource for RandomInput {
    fn generate(&mut self) -> RaceResult<Vec<Value>> {
        self.rng.sample_distinct(self.size, self.min, self.max)
    }

    fn seed(&self) -> Option<u64> {
        Some(self.rng.seed())
    }
}

/// A caller-supplied array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedInput {
    values: Vec<Value>,
}

impl FixedInput {
    /// Use exactly these values.
    #[must_use]
    pub const fn new(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl InputSource for FixedInput {
    fn generate(&mut self) -> RaceResult<Vec<Value>> {
        Ok(self.values.clone())
    }
}

/// Pick the input source described by a configuration section.
///
/// Explicit values win over random generation. A missing seed draws one
/// from OS entropy.
#[must_use]
pub fn source_from_config(config: &InputConfig) -> Box<dyn InputSource> {
    if let Some(values) = &config.values {
        return Box::new(FixedInput::new(values.clone()));
    }
    let rng = config.seed.map_or_else(InputRng::from_entropy, InputRng::new);
    Box::new(RandomInput::new(config.size, config.min, config.max, rng))
}

/// Parse a comma-separated list of integers, e.g. `5,3,4,1,2`.
///
/// # Errors
///
/// Returns [`crate::RaceError::Input`] naming the first entry that is not an
/// integer.
pub fn parse_values(text: &str) -> RaceResult<Vec<Value>> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<Value>()
                .map_err(|e| crate::RaceError::input(format!("'{part}' is not an integer: {e}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_input_returns_copy() {
        let mut source = FixedInput::new(vec![3, 1, 2]);
        let mut first = source.generate().expect("generate");
        first[0] = 100;
        assert_eq!(source.generate().expect("generate"), vec![3, 1, 2]);
        assert_eq!(source.seed(), None);
    }

    #[test]
    fn test_random_input_reports_seed() {
        let mut source = RandomInput::new(5, 0, 10, InputRng::new(11));
        assert_eq!(source.seed(), Some(11));
        assert_eq!(source.generate().expect("generate").len(), 5);
    }

    #[test]
    fn test_source_from_config_prefers_values() {
        let config = InputConfig {
            values: Some(vec![9, 8]),
            seed: Some(1),
            ..InputConfig::default()
        };
        let mut source = source_from_config(&config);
        assert_eq!(source.generate().expect("generate"), vec![9, 8]);
        assert_eq!(source.seed(), None);
    }

    #[test]
    fn test_source_from_config_seeded() {
        let config = InputConfig {
            seed: Some(42),
            ..InputConfig::default()
        };
        let a = source_from_config(&config).generate().expect("generate");
        let b = source_from_config(&config).generate().expect("generate");
        assert_eq!(a, b);
        assert_eq!(a.len(), config.size);
    }

    #[test]
    fn test_source_from_config_entropy_has_seed() {
        let source = source_from_config(&InputConfig::default());
        assert!(source.seed().is_some());
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("5,3,4,1,2").expect("parse"), vec![5, 3, 4, 1, 2]);
        assert_eq!(parse_values(" -1 , 0, 7 ").expect("parse"), vec![-1, 0, 7]);
        assert_eq!(parse_values("").expect("parse"), Vec::<Value>::new());
        assert_eq!(parse_values("4,,2").expect("parse"), vec![4, 2]);
    }

    #[test]
    fn test_parse_values_rejects_garbage() {
        let err = parse_values("1,two,3").unwrap_err();
        assert!(err.to_string().contains("'two' is not an integer"));
    }
}
