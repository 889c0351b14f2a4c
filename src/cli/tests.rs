//! CLI module tests.

use super::args::{Args, Command, RunOverrides};
use super::commands::{apply_overrides, collect_digests, load_config, DEFAULT_VERIFY_SEED};
use super::output::{all_match, format_race_summary, format_verify_result, format_version, RaceReport};
use crate::config::RaceConfig;
use crate::engine::prepare_race;
use crate::error::RaceError;
use crate::renderers::NullRenderer;
use crate::steppers::SortAlgorithm;
use std::io::Write;
use std::path::PathBuf;

fn write_temp_config(name: &str, yaml: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("sortrace-{}-{name}.yaml", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("create");
    file.write_all(yaml.as_bytes()).expect("write");
    path
}

// ============================================================================
// Args parsing tests
// ============================================================================

#[test]
fn test_parse_no_args_shows_help() {
    let args = Args::parse_from(["sortrace"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_help_variants() {
    for flag in ["-h", "--help", "help"] {
        assert_eq!(Args::parse_from(["sortrace", flag]).command, Command::Help);
    }
}

#[test]
fn test_parse_version_variants() {
    for flag in ["-V", "--version", "version"] {
        assert_eq!(Args::parse_from(["sortrace", flag]).command, Command::Version);
    }
}

#[test]
fn test_parse_unknown_command() {
    let args = Args::parse_from(["sortrace", "unknown-cmd"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_run_bare() {
    let args = Args::parse_from(["sortrace", "run"]);
    assert_eq!(
        args.command,
        Command::Run {
            config_path: None,
            overrides: RunOverrides::default(),
            json: false,
            verbose: false,
        }
    );
    assert!(!args.verbose());
}

#[test]
fn test_parse_run_all_options() {
    let args = Args::parse_from([
        "sortrace", "run", "race.yaml", "--seed", "7", "--size", "12", "--input", "5,3,4",
        "--left", "selection", "--right", "bubble", "--json", "-v",
    ]);
    match &args.command {
        Command::Run {
            config_path,
            overrides,
            json,
            verbose,
        } => {
            assert_eq!(config_path.as_deref(), Some(std::path::Path::new("race.yaml")));
            assert_eq!(overrides.seed.as_deref(), Some("7"));
            assert_eq!(overrides.size.as_deref(), Some("12"));
            assert_eq!(overrides.input.as_deref(), Some("5,3,4"));
            assert_eq!(overrides.left.as_deref(), Some("selection"));
            assert_eq!(overrides.right.as_deref(), Some("bubble"));
            assert!(*json);
            assert!(*verbose);
        }
        other => panic!("expected Run, got {other:?}"),
    }
    assert!(args.verbose());
}

#[test]
fn test_parse_run_keeps_raw_seed_and_size() {
    let args = Args::parse_from(["sortrace", "run", "--seed", "abc", "--size", "12x"]);
    match args.command {
        Command::Run { overrides, .. } => {
            assert_eq!(overrides.seed.as_deref(), Some("abc"));
            assert_eq!(overrides.size.as_deref(), Some("12x"));
        }
        other => panic!("expected Run, got {other:?}"),
    }
}

#[test]
fn test_parse_verify() {
    let args = Args::parse_from(["sortrace", "verify", "race.yaml", "--runs", "5"]);
    assert_eq!(
        args.command,
        Command::Verify {
            config_path: Some(PathBuf::from("race.yaml")),
            runs: 5,
        }
    );

    let args = Args::parse_from(["sortrace", "verify"]);
    assert_eq!(
        args.command,
        Command::Verify {
            config_path: None,
            runs: 3,
        }
    );
}

#[test]
fn test_parse_validate() {
    let args = Args::parse_from(["sortrace", "validate", "race.yaml"]);
    assert_eq!(
        args.command,
        Command::Validate {
            config_path: PathBuf::from("race.yaml"),
        }
    );
    assert_eq!(Args::parse_from(["sortrace", "validate"]).command, Command::Help);
}

// ============================================================================
// Command tests
// ============================================================================

#[test]
fn test_load_config_default() {
    assert_eq!(load_config(None).expect("load"), RaceConfig::default());
}

#[test]
fn test_load_config_from_file() {
    let path = write_temp_config("load", "input:\n  values: [3, 1, 2]\n");
    let config = load_config(Some(&path)).expect("load");
    assert_eq!(config.input.values, Some(vec![3, 1, 2]));
    let _ = std::fs::remove_file(path);
}

#[test]
fn test_apply_overrides() {
    let overrides = RunOverrides {
        seed: Some("9".to_string()),
        size: Some("15".to_string()),
        left: Some("selection".to_string()),
        right: Some("bubble-sort".to_string()),
        ..RunOverrides::default()
    };
    let config = apply_overrides(RaceConfig::default(), &overrides).expect("overrides");
    assert_eq!(config.input.seed, Some(9));
    assert_eq!(config.input.size, 15);
    assert_eq!(config.race.left, SortAlgorithm::Selection);
    assert_eq!(config.race.right, SortAlgorithm::Bubble);
}

#[test]
fn test_apply_overrides_input() {
    let overrides = RunOverrides {
        input: Some("5,3,4,1,2".to_string()),
        ..RunOverrides::default()
    };
    let config = apply_overrides(RaceConfig::default(), &overrides).expect("overrides");
    let mut setup = prepare_race(&config).expect("prepare");
    let summary = setup.driver.run_to_completion(&mut NullRenderer);
    assert_eq!(
        summary.verdict.map(|v| v.message()),
        Some("Selection Sort is Faster (5 steps < 10 steps)".to_string())
    );
}

#[test]
fn test_apply_overrides_rejects_unknown_algorithm() {
    let overrides = RunOverrides {
        left: Some("quick".to_string()),
        ..RunOverrides::default()
    };
    let err = apply_overrides(RaceConfig::default(), &overrides).unwrap_err();
    assert!(matches!(err, RaceError::UnknownAlgorithm(_)));
}

#[test]
fn test_apply_overrides_rejects_bad_input() {
    let overrides = RunOverrides {
        input: Some("1,x".to_string()),
        ..RunOverrides::default()
    };
    let err = apply_overrides(RaceConfig::default(), &overrides).unwrap_err();
    assert!(matches!(err, RaceError::Input(_)));
}

#[test]
fn test_apply_overrides_rejects_bad_size() {
    let args = Args::parse_from(["sortrace", "run", "--size", "12x"]);
    let Command::Run { overrides, .. } = args.command else {
        panic!("expected Run");
    };
    let err = apply_overrides(RaceConfig::default(), &overrides).unwrap_err();
    assert!(matches!(err, RaceError::Config { .. }));
    assert!(err.to_string().contains("--size '12x'"));
}

#[test]
fn test_apply_overrides_rejects_bad_seed() {
    let overrides = RunOverrides {
        seed: Some("abc".to_string()),
        ..RunOverrides::default()
    };
    let err = apply_overrides(RaceConfig::default(), &overrides).unwrap_err();
    assert!(matches!(err, RaceError::Config { .. }));
    assert!(err.to_string().contains("--seed 'abc'"));
}

#[test]
fn test_apply_overrides_revalidates() {
    let overrides = RunOverrides {
        size: Some("500".to_string()),
        ..RunOverrides::default()
    };
    assert!(apply_overrides(RaceConfig::default(), &overrides).is_err());
}

#[test]
fn test_collect_digests_pins_seed() {
    let digests = collect_digests(None, 3).expect("digests");
    assert_eq!(digests.len(), 3);
    assert!(all_match(&digests));
    assert!(digests.iter().all(|d| d.seed == Some(DEFAULT_VERIFY_SEED)));
}

#[test]
fn test_collect_digests_zero_runs() {
    assert!(collect_digests(None, 0).is_err());
}

#[test]
fn test_collect_digests_missing_file() {
    let err = collect_digests(Some(std::path::Path::new("/nonexistent/race.yaml")), 2).unwrap_err();
    assert!(matches!(err, RaceError::Io(_)));
}

// ============================================================================
// Output tests
// ============================================================================

#[test]
fn test_format_version() {
    let version = format_version();
    assert!(version.starts_with("sortrace "));
    assert!(version.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_format_race_summary_winner() {
    let config = RaceConfig::builder().values(vec![5, 3, 4, 1, 2]).build();
    let mut setup = prepare_race(&config).expect("prepare");
    let summary = setup.driver.run_to_completion(&mut NullRenderer);

    let text = format_race_summary(&setup.input, setup.seed, &summary);
    assert!(text.contains("Input (5 values): [5, 3, 4, 1, 2]"));
    assert!(text.contains("Bubble Sort"));
    assert!(text.contains("Frames: 11/2000"));
    assert!(text.contains("✓ Selection Sort is Faster (5 steps < 10 steps)"));
    assert!(!text.contains("Seed:"));
}

#[test]
fn test_format_race_summary_capped() {
    let config = RaceConfig::builder()
        .values(vec![5, 3, 4, 1, 2])
        .seed(3)
        .max_frames(4)
        .build();
    let mut setup = prepare_race(&config).expect("prepare");
    let summary = setup.driver.run_to_completion(&mut NullRenderer);

    let text = format_race_summary(&setup.input, Some(3), &summary);
    assert!(text.contains("Seed: 3"));
    assert!(text.contains("✗ Frame cap of 4 reached"));
    assert!(text.contains("(running)"));
}

#[test]
fn test_race_report_json() {
    let config = RaceConfig::builder().values(vec![2, 1]).build();
    let mut setup = prepare_race(&config).expect("prepare");
    let summary = setup.driver.run_to_completion(&mut NullRenderer);

    let report = RaceReport::new(&setup.input, setup.seed, &summary);
    let value = serde_json::to_value(&report).expect("json");
    assert_eq!(value["input"], serde_json::json!([2, 1]));
    assert_eq!(value["seed"], serde_json::Value::Null);
    assert_eq!(value["message"], "Bubble Sort is Faster (1 steps < 2 steps)");
    assert_eq!(value["summary"]["verdict"]["winner"], "left");
}

#[test]
fn test_format_verify_result() {
    let digests = collect_digests(None, 2).expect("digests");
    let text = format_verify_result(&digests);
    assert!(text.contains("Run 1:"));
    assert!(text.contains("Run 2:"));
    assert!(text.contains("✓ Reproducible: 2 runs"));

    let mut tampered = digests;
    tampered[1].hex = "0".repeat(64);
    assert!(!all_match(&tampered));
    assert!(format_verify_result(&tampered).contains("NOT reproducible"));
}

#[test]
fn test_all_match_empty() {
    assert!(!all_match(&[]));
}
