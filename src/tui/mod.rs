//! TUI module for sortrace.
//!
//! Testable application state lives here. The terminal loop itself stays in
//! `src/bin/race_tui.rs`.

#[cfg(feature = "tui")]
pub mod race_app;
