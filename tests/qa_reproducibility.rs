//! Reproducibility QA.
//!
//! Each test states a null hypothesis about seeding and tries to falsify it.

use sortrace::engine::InputRng;
use sortrace::prelude::*;
use sortrace::replay::race_digest;

// H0: Different seeds produce identical races
// Falsification: Digest races with seeds 42, 43, 44; compare
#[test]
fn h0_1_different_seeds_produce_different_races() {
    let digests: Vec<String> = [42, 43, 44]
        .into_iter()
        .map(|seed| {
            race_digest(&RaceConfig::builder().seed(seed).build())
                .unwrap()
                .hex
        })
        .collect();

    assert_ne!(digests[0], digests[1], "Seed 42 and 43 produced identical races");
    assert_ne!(digests[1], digests[2], "Seed 43 and 44 produced identical races");
    assert_ne!(digests[0], digests[2], "Seed 42 and 44 produced identical races");
}

// H0: The same seed produces different races across runs
// Falsification: Digest 100 races with seed=42
#[test]
fn h0_2_same_seed_produces_identical_races() {
    let config = RaceConfig::builder().seed(42).build();
    let first = race_digest(&config).unwrap();

    for i in 1..100 {
        let digest = race_digest(&config).unwrap();
        assert_eq!(first, digest, "Run {i} diverged from run 0");
    }
}

// H0: Input generation depends on something other than the seed
// Falsification: Compare inputs from config path and direct generator
#[test]
fn h0_3_input_depends_only_on_seed() {
    let config = RaceConfig::builder().seed(2024).size(25).range(0, 500).build();
    let setup = prepare_race(&config).unwrap();
    let direct = InputRng::new(2024).sample_distinct(25, 0, 500).unwrap();
    assert_eq!(setup.input, direct);
}

// H0: Unseeded races cannot be reproduced
// Falsification: Replay an entropy-seeded race from its reported seed
#[test]
fn h0_4_entropy_seed_is_recoverable() {
    let original = prepare_race(&RaceConfig::default()).unwrap();
    let seed = original.seed.unwrap();

    let replay = prepare_race(&RaceConfig::builder().seed(seed).build()).unwrap();
    assert_eq!(original.input, replay.input);
}

// H0: Serialized summaries differ between identical races
// Falsification: Compare JSON of two runs
#[test]
fn h0_5_summaries_serialize_identically() {
    let config = RaceConfig::builder().seed(9).size(30).build();
    let run = || {
        let mut setup = prepare_race(&config).unwrap();
        let summary = setup.driver.run_to_completion(&mut NullRenderer);
        serde_json::to_string(&summary).unwrap()
    };
    assert_eq!(run(), run());
}
