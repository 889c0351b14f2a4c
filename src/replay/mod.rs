//! Race fingerprints for reproducibility checks.
//!
//! A race is replayed into a [`RecordingRenderer`]; the bincode encoding of
//! the event log is hashed with Blake3. Two runs that produce the same
//! snapshots in the same order with the same verdict share a digest.

use serde::{Deserialize, Serialize};

use crate::config::RaceConfig;
use crate::engine::{prepare_race, RaceSummary};
use crate::error::{RaceError, RaceResult};
use crate::renderers::{RaceEvent, RecordingRenderer};

/// Fingerprint of one replayed race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceDigest {
    /// Blake3 of the encoded event log, lowercase hex.
    pub hex: String,
    /// Number of renderer callbacks hashed.
    pub events: usize,
    /// Seed the input came from, if generated.
    pub seed: Option<u64>,
    /// Outcome of the replayed race.
    pub summary: RaceSummary,
}

/// Hash an event log.
///
/// # Errors
///
/// Returns [`RaceError::Serialization`] if encoding fails.
pub fn hash_events(events: &[RaceEvent]) -> RaceResult<blake3::Hash> {
    let bytes = bincode::serialize(events)
        .map_err(|e| RaceError::serialization(format!("event log: {e}")))?;
    Ok(blake3::hash(&bytes))
}

/// Run the configured race headlessly and fingerprint it.
///
/// # Errors
///
/// Returns an error if the input cannot be generated or the log cannot be
/// encoded.
pub fn race_digest(config: &RaceConfig) -> RaceResult<RaceDigest> {
    let mut setup = prepare_race(config)?;
    let mut recorder = RecordingRenderer::new();
    let summary = setup.driver.run_to_completion(&mut recorder);

    let events = recorder.into_events();
    let hash = hash_events(&events)?;

    Ok(RaceDigest {
        hex: hash.to_hex().to_string(),
        events: events.len(),
        seed: setup.seed,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steppers::SortAlgorithm;

    #[test]
    fn test_digest_reference_race() {
        let config = RaceConfig::builder().values(vec![5, 3, 4, 1, 2]).build();
        let digest = race_digest(&config).expect("digest");

        assert_eq!(digest.hex.len(), 64);
        // 10 bubble + 5 selection snapshots + 1 winner
        assert_eq!(digest.events, 16);
        assert_eq!(digest.seed, None);
        assert_eq!(digest.summary.frames, 11);
    }

    #[test]
    fn test_digest_is_deterministic() {
        let config = RaceConfig::builder().seed(42).size(25).build();
        let a = race_digest(&config).expect("digest");
        let b = race_digest(&config).expect("digest");
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_changes_with_seed() {
        let a = race_digest(&RaceConfig::builder().seed(1).size(10).build()).expect("digest");
        let b = race_digest(&RaceConfig::builder().seed(2).size(10).build()).expect("digest");
        assert_ne!(a.hex, b.hex);
    }

    #[test]
    fn test_digest_changes_with_sides() {
        let base = RaceConfig::builder().values(vec![3, 1, 2]);
        let a = race_digest(&base.build()).expect("digest");
        let swapped = RaceConfig::builder()
            .values(vec![3, 1, 2])
            .left(SortAlgorithm::Selection)
            .right(SortAlgorithm::Bubble)
            .build();
        let b = race_digest(&swapped).expect("digest");
        assert_ne!(a.hex, b.hex);
    }

    #[test]
    fn test_hash_events_empty() {
        let a = hash_events(&[]).expect("hash");
        let b = hash_events(&[]).expect("hash");
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_hex_matches_hash() {
        let config = RaceConfig::builder().values(vec![2, 1]).build();
        let digest = race_digest(&config).expect("digest");

        let mut setup = prepare_race(&config).expect("prepare");
        let mut recorder = RecordingRenderer::new();
        let _ = setup.driver.run_to_completion(&mut recorder);
        let hash = hash_events(recorder.events()).expect("hash");

        assert_eq!(digest.hex, hash.to_hex().as_str());
        assert!(digest.hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
