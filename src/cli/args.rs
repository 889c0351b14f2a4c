//! CLI argument parsing.
//!
//! Parsing is kept separate from execution so it can be tested with plain
//! string slices.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Command-line overrides applied on top of a race config.
///
/// Values are kept as typed by the user and checked when the race is built,
/// so a bad value produces a proper error instead of a help screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOverrides {
    /// Seed for generated input.
    pub seed: Option<String>,
    /// Number of generated values.
    pub size: Option<String>,
    /// Explicit comma-separated input.
    pub input: Option<String>,
    /// Left algorithm name.
    pub left: Option<String>,
    /// Right algorithm name.
    pub right: Option<String>,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a headless race
    Run {
        /// Optional race config YAML; defaults apply without one.
        config_path: Option<PathBuf>,
        /// Flag overrides.
        overrides: RunOverrides,
        /// Print the summary as JSON.
        json: bool,
        /// Enable debug logging.
        verbose: bool,
    },
    /// Verify that a race replays identically
    Verify {
        /// Optional race config YAML.
        config_path: Option<PathBuf>,
        /// Number of verification runs.
        runs: usize,
    },
    /// Validate a race config file
    Validate {
        /// Path to the config file.
        config_path: PathBuf,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Whether debug logging was requested.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        matches!(self.command, Command::Run { verbose: true, .. })
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(&args[2..]),
            "verify" => Self::parse_verify_command(&args[2..]),
            "validate" => Self::parse_validate_command(&args[2..]),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'run' command arguments.
    fn parse_run_command(rest: &[String]) -> Command {
        let mut config_path = None;
        let mut overrides = RunOverrides::default();
        let mut json = false;
        let mut verbose = false;

        let mut i = 0;
        while i < rest.len() {
            let value = rest.get(i + 1);
            match rest[i].as_str() {
                "--seed" => {
                    overrides.seed = value.cloned();
                    i += 2;
                }
                "--size" => {
                    overrides.size = value.cloned();
                    i += 2;
                }
                "--input" => {
                    overrides.input = value.cloned();
                    i += 2;
                }
                "--left" => {
                    overrides.left = value.cloned();
                    i += 2;
                }
                "--right" => {
                    overrides.right = value.cloned();
                    i += 2;
                }
                "--json" => {
                    json = true;
                    i += 1;
                }
                "-v" | "--verbose" => {
                    verbose = true;
                    i += 1;
                }
                flag if flag.starts_with('-') => {
                    eprintln!("Ignoring unknown option: {flag}");
                    i += 1;
                }
                path => {
                    if config_path.is_none() {
                        config_path = Some(PathBuf::from(path));
                    }
                    i += 1;
                }
            }
        }

        Command::Run {
            config_path,
            overrides,
            json,
            verbose,
        }
    }

    /// Parse the 'verify' command arguments.
    fn parse_verify_command(rest: &[String]) -> Command {
        let mut config_path = None;
        let mut runs = 3;

        let mut i = 0;
        while i < rest.len() {
            match rest[i].as_str() {
                "--runs" => {
                    if let Some(n) = rest.get(i + 1).and_then(|v| v.parse().ok()) {
                        runs = n;
                    }
                    i += 2;
                }
                path if !path.starts_with('-') && config_path.is_none() => {
                    config_path = Some(PathBuf::from(path));
                    i += 1;
                }
                _ => i += 1,
            }
        }

        Command::Verify { config_path, runs }
    }

    /// Parse the 'validate' command arguments.
    fn parse_validate_command(rest: &[String]) -> Command {
        match rest.first() {
            Some(path) => Command::Validate {
                config_path: PathBuf::from(path),
            },
            None => {
                eprintln!("Error: 'validate' command requires a config path");
                Command::Help
            }
        }
    }
}
