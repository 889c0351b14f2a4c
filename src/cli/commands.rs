//! CLI command handlers.
//!
//! Each handler returns an [`ExitCode`]: success when the command did what
//! was asked, 1 otherwise.

use std::path::Path;
use std::process::ExitCode;

use tracing::{debug, warn};

use crate::config::RaceConfig;
use crate::engine::prepare_race;
use crate::error::{RaceError, RaceResult};
use crate::input::parse_values;
use crate::renderers::LogRenderer;
use crate::replay::{race_digest, RaceDigest};
use crate::steppers::SortAlgorithm;

use super::args::RunOverrides;
use super::output::{
    all_match, print_help, print_race_summary, print_verify_result, print_version, RaceReport,
};
use super::{Args, Command};

/// Seed used by `verify` when the config leaves input unseeded.
pub const DEFAULT_VERIFY_SEED: u64 = 42;

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            config_path,
            overrides,
            json,
            verbose: _,
        } => run_race(config_path.as_deref(), &overrides, json),
        Command::Verify { config_path, runs } => {
            verify_reproducibility(config_path.as_deref(), runs)
        }
        Command::Validate { config_path } => validate_config(&config_path),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Load a config file, or defaults when no path was given.
///
/// # Errors
///
/// Returns error if the file cannot be read or is invalid.
pub fn load_config(path: Option<&Path>) -> RaceResult<RaceConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading race config");
            RaceConfig::load(path)
        }
        None => Ok(RaceConfig::default()),
    }
}

/// Apply command-line overrides and re-validate.
///
/// # Errors
///
/// Returns error if an override does not parse or the result is invalid.
pub fn apply_overrides(mut config: RaceConfig, overrides: &RunOverrides) -> RaceResult<RaceConfig> {
    if let Some(text) = &overrides.seed {
        let seed = text
            .trim()
            .parse::<u64>()
            .map_err(|e| RaceError::config(format!("--seed '{text}' is not a valid seed: {e}")))?;
        config.input.seed = Some(seed);
    }
    if let Some(text) = &overrides.size {
        let size = text
            .trim()
            .parse::<usize>()
            .map_err(|e| RaceError::config(format!("--size '{text}' is not a valid size: {e}")))?;
        config.input.size = size;
    }
    if let Some(text) = &overrides.input {
        config.input.values = Some(parse_values(text)?);
    }
    if let Some(name) = &overrides.left {
        config.race.left = name.parse::<SortAlgorithm>()?;
    }
    if let Some(name) = &overrides.right {
        config.race.right = name.parse::<SortAlgorithm>()?;
    }
    config.check()?;
    Ok(config)
}

/// Run one race headlessly and print the outcome.
///
/// Exits 0 when a winner was declared, 1 when the frame cap stopped the
/// race or anything failed.
#[must_use]
pub fn run_race(path: Option<&Path>, overrides: &RunOverrides, json: bool) -> ExitCode {
    match execute_race(path, overrides, json) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn execute_race(path: Option<&Path>, overrides: &RunOverrides, json: bool) -> RaceResult<bool> {
    let config = apply_overrides(load_config(path)?, overrides)?;
    let mut setup = prepare_race(&config)?;
    let summary = setup.driver.run_to_completion(&mut LogRenderer::new());

    if json {
        let report = RaceReport::new(&setup.input, setup.seed, &summary);
        let text = serde_json::to_string_pretty(&report)
            .map_err(|e| RaceError::serialization(e.to_string()))?;
        println!("{text}");
    } else {
        print_race_summary(&setup.input, setup.seed, &summary);
    }

    Ok(summary.verdict.is_some())
}

/// Replay a race `runs` times and compare digests.
#[must_use]
pub fn verify_reproducibility(path: Option<&Path>, runs: usize) -> ExitCode {
    match collect_digests(path, runs) {
        Ok(digests) => {
            print_verify_result(&digests);
            if all_match(&digests) {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Digest the configured race `runs` times.
///
/// An unseeded generated input is pinned to [`DEFAULT_VERIFY_SEED`] so the
/// runs are comparable.
///
/// # Errors
///
/// Returns error if `runs` is zero or a race cannot be built.
pub fn collect_digests(path: Option<&Path>, runs: usize) -> RaceResult<Vec<RaceDigest>> {
    if runs == 0 {
        return Err(RaceError::config("--runs must be at least 1"));
    }
    let mut config = load_config(path)?;
    if config.input.values.is_none() && config.input.seed.is_none() {
        warn!(seed = DEFAULT_VERIFY_SEED, "config has no seed, pinning one for verification");
        config.input.seed = Some(DEFAULT_VERIFY_SEED);
    }

    (0..runs).map(|_| race_digest(&config)).collect()
}

/// Load and validate a config file.
#[must_use]
pub fn validate_config(path: &Path) -> ExitCode {
    match RaceConfig::load(path) {
        Ok(config) => {
            println!("✓ {} is valid", path.display());
            println!(
                "  {} vs {}, interval {} ms, cap {} frames",
                config.race.left.display_name(),
                config.race.right.display_name(),
                config.schedule.interval_ms,
                config.schedule.max_frames
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ {} is invalid: {e}", path.display());
            ExitCode::from(1)
        }
    }
}
