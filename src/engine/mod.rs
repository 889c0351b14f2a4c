//! Race engine.
//!
//! - [`state`]: the two lanes, their counters and completion flags
//! - [`scheduler`]: the frame-by-frame race driver and the verdict
//! - [`clock`]: frame cadence and the fail-safe frame cap
//! - [`rng`]: seeded input generation

pub mod clock;
pub mod rng;
pub mod scheduler;
pub mod state;

pub use clock::FrameClock;
pub use rng::InputRng;
pub use scheduler::{RaceDriver, RaceSummary, TickOutcome, Verdict};
pub use state::{Lane, LaneSummary, Side};

use crate::config::RaceConfig;
use crate::error::RaceResult;
use crate::input::{source_from_config, InputSource};
use crate::steppers::Value;

/// Everything needed to run one race from a configuration.
#[derive(Debug)]
pub struct RaceSetup {
    /// The shared initial array both lanes start from.
    pub input: Vec<Value>,
    /// Seed the input was generated from, if it was generated.
    pub seed: Option<u64>,
    /// Driver ready for its first tick.
    pub driver: RaceDriver,
}

/// Build the input array and a fresh driver from a configuration.
///
/// # Errors
///
/// Returns an error if the input cannot be generated.
pub fn prepare_race(config: &RaceConfig) -> RaceResult<RaceSetup> {
    let mut source = source_from_config(&config.input);
    let input = source.generate()?;
    let seed = source.seed();

    tracing::debug!(
        left = %config.race.left,
        right = %config.race.right,
        len = input.len(),
        seed = ?seed,
        "race prepared"
    );

    let driver = RaceDriver::from_algorithms(
        config.race.left,
        config.race.right,
        &input,
        config.schedule.clock(),
    );

    Ok(RaceSetup {
        input,
        seed,
        driver,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::NullRenderer;
    use crate::steppers::SortAlgorithm;

    #[test]
    fn test_prepare_race_fixed_values() {
        let config = RaceConfig::builder().values(vec![5, 3, 4, 1, 2]).build();
        let mut setup = prepare_race(&config).expect("prepare");

        assert_eq!(setup.input, vec![5, 3, 4, 1, 2]);
        assert_eq!(setup.seed, None);
        assert_eq!(setup.driver.lane(Side::Left).algorithm(), SortAlgorithm::Bubble);
        assert_eq!(setup.driver.lane(Side::Right).algorithm(), SortAlgorithm::Selection);

        let summary = setup.driver.run_to_completion(&mut NullRenderer);
        assert_eq!(
            summary.verdict.map(|v| v.message()),
            Some("Selection Sort is Faster (5 steps < 10 steps)".to_string())
        );
    }

    #[test]
    fn test_prepare_race_seeded_is_reproducible() {
        let config = RaceConfig::builder().seed(42).build();
        let a = prepare_race(&config).expect("prepare");
        let b = prepare_race(&config).expect("prepare");

        assert_eq!(a.input, b.input);
        assert_eq!(a.input.len(), 40);
        assert_eq!(a.seed, Some(42));
    }

    #[test]
    fn test_prepare_race_uses_schedule() {
        let config = RaceConfig::builder()
            .values(vec![1, 2, 3])
            .max_frames(7)
            .interval_ms(15)
            .build();
        let setup = prepare_race(&config).expect("prepare");
        assert_eq!(setup.driver.clock().max_frames(), 7);
        assert_eq!(setup.driver.clock().interval_ms(), 15);
    }

    #[test]
    fn test_prepare_race_full_value_range() {
        let config = RaceConfig::builder()
            .range(Value::MIN, Value::MAX)
            .size(10)
            .seed(1)
            .build();
        assert!(config.check().is_ok());

        let mut setup = prepare_race(&config).expect("prepare");
        assert_eq!(setup.input.len(), 10);
        let summary = setup.driver.run_to_completion(&mut NullRenderer);
        assert!(summary.verdict.is_some());
    }

    #[test]
    fn test_prepare_race_bad_range() {
        let mut config = RaceConfig::builder().seed(1).build();
        config.input.size = 100;
        assert!(prepare_race(&config).is_err());
    }
}
