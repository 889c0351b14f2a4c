//! Race configuration with YAML schema and validation.
//!
//! Implements Poka-Yoke (mistake-proofing) through:
//! - Type-safe configuration structs
//! - Field constraints via `validator`
//! - A semantic pass for rules that span fields
//!
//! ```yaml
//! race:
//!   left: bubble
//!   right: selection
//! input:
//!   size: 40
//!   min: 10
//!   max: 100
//!   seed: 42
//! schedule:
//!   interval_ms: 40
//!   max_frames: 2000
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::engine::clock::{FrameClock, DEFAULT_INTERVAL_MS, DEFAULT_MAX_FRAMES};
use crate::error::{RaceError, RaceResult};
use crate::steppers::{SortAlgorithm, Value};

/// Largest array a race accepts.
pub const MAX_INPUT_SIZE: usize = 1000;

/// `MAX_INPUT_SIZE` in the unit `validator` measures lengths with.
const MAX_INPUT_LEN: u64 = MAX_INPUT_SIZE as u64;

/// Top-level race configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RaceConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Which algorithms race on which side.
    #[serde(default)]
    pub race: RaceSection,

    /// Initial array settings.
    #[validate(nested)]
    #[serde(default)]
    pub input: InputConfig,

    /// Frame cadence and cap.
    #[validate(nested)]
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl RaceConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> RaceResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> RaceResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Run field and semantic validation.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn check(&self) -> RaceResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> RaceConfigBuilder {
        RaceConfigBuilder::default()
    }

    /// Validate constraints that span fields.
    fn validate_semantic(&self) -> RaceResult<()> {
        let input = &self.input;
        if input.values.is_some() {
            return Ok(());
        }

        if input.min >= input.max {
            return Err(RaceError::config(format!(
                "input.min ({}) must be below input.max ({})",
                input.min, input.max
            )));
        }

        // Sampling is without replacement
        let span = i128::from(input.max) - i128::from(input.min);
        if span < input.size as i128 {
            return Err(RaceError::config(format!(
                "input range [{}, {}) holds {span} values, fewer than input.size ({})",
                input.min, input.max, input.size
            )));
        }

        Ok(())
    }
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            race: RaceSection::default(),
            input: InputConfig::default(),
            schedule: ScheduleConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct RaceConfigBuilder {
    left: Option<SortAlgorithm>,
    right: Option<SortAlgorithm>,
    size: Option<usize>,
    range: Option<(Value, Value)>,
    seed: Option<u64>,
    values: Option<Vec<Value>>,
    interval_ms: Option<u64>,
    max_frames: Option<u64>,
}

impl RaceConfigBuilder {
    /// Set the left algorithm.
    #[must_use]
    pub const fn left(mut self, algorithm: SortAlgorithm) -> Self {
        self.left = Some(algorithm);
        self
    }

    /// Set the right algorithm.
    #[must_use]
    pub const fn right(mut self, algorithm: SortAlgorithm) -> Self {
        self.right = Some(algorithm);
        self
    }

    /// Set the number of generated values.
    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the half-open value range `[min, max)`.
    #[must_use]
    pub const fn range(mut self, min: Value, max: Value) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Race on exactly these values instead of a random sample.
    #[must_use]
    pub fn values(mut self, values: Vec<Value>) -> Self {
        self.values = Some(values);
        self
    }

    /// Set the frame interval in milliseconds.
    #[must_use]
    pub const fn interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = Some(interval_ms);
        self
    }

    /// Set the frame cap.
    #[must_use]
    pub const fn max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> RaceConfig {
        let mut config = RaceConfig::default();

        if let Some(left) = self.left {
            config.race.left = left;
        }
        if let Some(right) = self.right {
            config.race.right = right;
        }
        if let Some(size) = self.size {
            config.input.size = size;
        }
        if let Some((min, max)) = self.range {
            config.input.min = min;
            config.input.max = max;
        }
        if self.seed.is_some() {
            config.input.seed = self.seed;
        }
        if self.values.is_some() {
            config.input.values = self.values;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.schedule.interval_ms = interval_ms;
        }
        if let Some(max_frames) = self.max_frames {
            config.schedule.max_frames = max_frames;
        }

        config
    }
}

/// Contestants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RaceSection {
    /// Algorithm on the left.
    #[serde(default = "default_left")]
    pub left: SortAlgorithm,
    /// Algorithm on the right; wins ties.
    #[serde(default = "default_right")]
    pub right: SortAlgorithm,
}

const fn default_left() -> SortAlgorithm {
    SortAlgorithm::Bubble
}

const fn default_right() -> SortAlgorithm {
    SortAlgorithm::Selection
}

impl Default for RaceSection {
    fn default() -> Self {
        Self {
            left: default_left(),
            right: default_right(),
        }
    }
}

/// Initial array settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Number of values to generate.
    #[validate(range(max = "MAX_INPUT_SIZE"))]
    #[serde(default = "default_size")]
    pub size: usize,
    /// Smallest value (inclusive).
    #[serde(default = "default_min")]
    pub min: Value,
    /// Upper bound (exclusive).
    #[serde(default = "default_max")]
    pub max: Value,
    /// Seed for generation; `None` draws one from OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Explicit array, overriding generation.
    #[validate(length(max = "MAX_INPUT_LEN"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Value>>,
}

const fn default_size() -> usize {
    40
}

const fn default_min() -> Value {
    10
}

const fn default_max() -> Value {
    100
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            min: default_min(),
            max: default_max(),
            seed: None,
            values: None,
        }
    }
}

/// Frame cadence and cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Milliseconds between frames.
    #[validate(range(min = 1, max = 10_000))]
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Hard cap on serviced frames.
    #[validate(range(min = 1))]
    #[serde(default = "default_max_frames")]
    pub max_frames: u64,
}

const fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

const fn default_max_frames() -> u64 {
    DEFAULT_MAX_FRAMES
}

impl ScheduleConfig {
    /// Fresh frame clock for this schedule.
    #[must_use]
    pub const fn clock(&self) -> FrameClock {
        FrameClock::new(self.interval_ms, self.max_frames)
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            max_frames: default_max_frames(),
        }
    }
}
