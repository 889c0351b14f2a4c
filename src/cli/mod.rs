//! CLI module for sortrace.
//!
//! All CLI logic lives here so it can be tested; `main.rs` only parses
//! arguments, sets up logging and calls [`run_cli`].

mod args;
mod commands;
mod output;

pub use args::{Args, Command, RunOverrides};
pub use commands::{
    apply_overrides, collect_digests, load_config, run_cli, run_race, validate_config,
    verify_reproducibility, DEFAULT_VERIFY_SEED,
};
pub use output::{
    format_race_summary, format_verify_result, format_version, print_help, print_race_summary,
    print_verify_result, print_version, RaceReport,
};

#[cfg(test)]
mod tests;
