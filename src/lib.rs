//! # sortrace
//!
//! A visual race between two stepwise sorting algorithms.
//!
//! Both sides start from the same array. Every frame each unfinished side
//! performs one step and hands the resulting array to a renderer. When both
//! are sorted, the side that needed strictly fewer steps wins; a tie goes to
//! the right side. A frame cap stops runaway races.
//!
//! ## Example
//!
//! ```rust
//! use sortrace::prelude::*;
//!
//! let config = RaceConfig::builder().values(vec![5, 3, 4, 1, 2]).build();
//! let mut setup = prepare_race(&config).unwrap();
//! let summary = setup.driver.run_to_completion(&mut NullRenderer);
//!
//! let verdict = summary.verdict.unwrap();
//! assert_eq!(verdict.message(), "Selection Sort is Faster (5 steps < 10 steps)");
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod renderers;
pub mod replay;
pub mod steppers;
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{RaceConfig, RaceConfigBuilder};
    pub use crate::engine::{
        prepare_race, FrameClock, RaceDriver, RaceSetup, RaceSummary, Side, TickOutcome, Verdict,
    };
    pub use crate::error::{RaceError, RaceResult};
    pub use crate::renderers::{NullRenderer, RaceBoard, RaceRenderer, RecordingRenderer};
    pub use crate::steppers::{SortAlgorithm, Snapshot, Step, Stepper, Value};
}

/// Re-export for public API
pub use error::{RaceError, RaceResult};
