//! CLI output formatting.
//!
//! Formatting returns strings so it can be tested; the `print_*` wrappers
//! write them to stdout.

use serde::Serialize;

use crate::engine::{RaceSummary, Side};
use crate::replay::RaceDigest;
use crate::steppers::Value;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Everything `run --json` prints.
#[derive(Debug, Clone, Serialize)]
pub struct RaceReport<'a> {
    /// Shared initial array.
    pub input: &'a [Value],
    /// Seed behind the input, if generated.
    pub seed: Option<u64>,
    /// Verdict line, if both lanes finished.
    pub message: Option<String>,
    /// Counters and verdict.
    pub summary: &'a RaceSummary,
}

impl<'a> RaceReport<'a> {
    /// Assemble a report.
    #[must_use]
    pub fn new(input: &'a [Value], seed: Option<u64>, summary: &'a RaceSummary) -> Self {
        Self {
            input,
            seed,
            message: summary.verdict.as_ref().map(crate::engine::Verdict::message),
            summary,
        }
    }
}

/// Print version information.
pub fn print_version() {
    println!("{}", format_version());
}

/// Version line with build metadata.
#[must_use]
pub fn format_version() -> String {
    format!(
        "sortrace {} (git {}, built {})",
        env!("SORTRACE_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP")
    )
}

/// Print help message.
pub fn print_help() {
    println!(
        r"sortrace - Visual race between two stepwise sorting algorithms

USAGE:
    sortrace <COMMAND> [OPTIONS]

COMMANDS:
    run [race.yaml]             Run a race headlessly and print the verdict
        --seed <N>              Seed for the generated input
        --size <N>              Number of generated values
        --input <a,b,c>         Race on exactly these values
        --left <ALG>            Left algorithm (bubble, selection)
        --right <ALG>           Right algorithm; wins ties
        --json                  Print the summary as JSON
        -v, --verbose           Enable debug logging

    verify [race.yaml]          Replay a race and compare digests
        --runs <N>              Number of runs (default: 3)

    validate <race.yaml>        Validate a race config file

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    sortrace run --input 5,3,4,1,2
    sortrace run race.yaml --seed 42 --json
    sortrace verify race.yaml --runs 5

The interactive view is a separate binary: race-tui [race.yaml]
"
    );
}

/// Human-readable race summary.
#[must_use]
pub fn format_race_summary(input: &[Value], seed: Option<u64>, summary: &RaceSummary) -> String {
    let mut lines = vec![RULE.to_string()];
    lines.push(format!("Input ({} values): {input:?}", input.len()));
    if let Some(seed) = seed {
        lines.push(format!("Seed: {seed}"));
    }
    lines.push(RULE.to_string());

    for (side, lane) in [(Side::Left, &summary.left), (Side::Right, &summary.right)] {
        let state = if lane.done { "done" } else { "running" };
        lines.push(format!(
            "  {:<6} {:<16} {:>8} steps  ({state})",
            side.label(),
            lane.name,
            lane.steps
        ));
    }
    lines.push(format!(
        "  Frames: {}/{}",
        summary.frames, summary.max_frames
    ));
    lines.push(String::new());

    match &summary.verdict {
        Some(verdict) => lines.push(format!("✓ {}", verdict.message())),
        None if summary.capped => lines.push(format!(
            "✗ Frame cap of {} reached before both lanes finished",
            summary.max_frames
        )),
        None => lines.push("✗ Race did not finish".to_string()),
    }

    lines.join("\n")
}

/// Print a race summary.
pub fn print_race_summary(input: &[Value], seed: Option<u64>, summary: &RaceSummary) {
    println!("{}", format_race_summary(input, seed, summary));
}

/// Human-readable reproducibility report.
#[must_use]
pub fn format_verify_result(digests: &[RaceDigest]) -> String {
    let mut lines = vec![RULE.to_string()];
    for (i, digest) in digests.iter().enumerate() {
        lines.push(format!(
            "  Run {}: {} ({} events)",
            i + 1,
            digest.hex,
            digest.events
        ));
    }
    lines.push(RULE.to_string());

    if all_match(digests) {
        lines.push(format!(
            "✓ Reproducible: {} runs produced identical digests",
            digests.len()
        ));
    } else {
        lines.push("✗ NOT reproducible: digests differ between runs".to_string());
    }
    lines.join("\n")
}

/// Print a reproducibility report.
pub fn print_verify_result(digests: &[RaceDigest]) {
    println!("{}", format_verify_result(digests));
}

/// True when there is at least one digest and all are equal.
#[must_use]
pub fn all_match(digests: &[RaceDigest]) -> bool {
    digests
        .first()
        .is_some_and(|first| digests.iter().all(|d| d.hex == first.hex))
}
