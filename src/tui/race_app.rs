//! Sorting race TUI application state and logic.
//!
//! Terminal I/O is handled by the `race-tui` binary; everything it draws
//! comes from [`RaceApp`].
//!
//! ```bash
//! cargo run --bin race-tui -- race.yaml
//! ```

use crossterm::event::KeyCode;
use std::path::Path;
use std::time::Duration;

use crate::config::RaceConfig;
use crate::engine::{prepare_race, RaceDriver, Side, TickOutcome};
use crate::error::RaceResult;
use crate::renderers::RaceBoard;
use crate::steppers::Value;

/// Application state for the race TUI.
#[derive(Debug)]
pub struct RaceApp {
    /// Configuration the race was built from.
    pub config: RaceConfig,
    /// Shared initial array, kept for resets.
    pub input: Vec<Value>,
    /// Seed behind the input, if generated.
    pub seed: Option<u64>,
    /// The race itself.
    pub driver: RaceDriver,
    /// What the screen shows.
    pub board: RaceBoard,
    /// Whether frames are held.
    pub paused: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Outcome of the latest serviced frame.
    pub last_outcome: Option<TickOutcome>,
}

impl RaceApp {
    /// Build the race described by `config`.
    ///
    /// # Errors
    ///
    /// Returns error if the config is invalid or input cannot be generated.
    pub fn new(config: RaceConfig) -> RaceResult<Self> {
        config.check()?;
        let setup = prepare_race(&config)?;
        let board = board_for(&setup.driver, &setup.input);

        Ok(Self {
            config,
            input: setup.input,
            seed: setup.seed,
            driver: setup.driver,
            board,
            paused: false,
            should_quit: false,
            last_outcome: None,
        })
    }

    /// Load the race from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is invalid.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> RaceResult<Self> {
        Self::new(RaceConfig::load(path)?)
    }

    /// Restart on the same input.
    pub fn reset(&mut self) {
        self.driver = RaceDriver::from_algorithms(
            self.config.race.left,
            self.config.race.right,
            &self.input,
            self.config.schedule.clock(),
        );
        self.board = board_for(&self.driver, &self.input);
        self.last_outcome = None;
    }

    /// Service one frame regardless of pause.
    pub fn step(&mut self) -> TickOutcome {
        let outcome = self.driver.tick(&mut self.board);
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    /// Service one frame unless paused or already over.
    pub fn update(&mut self) {
        if !self.paused && !self.is_over() {
            let _ = self.step();
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('s') => {
                self.paused = true;
                if !self.is_over() {
                    let _ = self.step();
                }
            }
            KeyCode::Char('r') => self.reset(),
            _ => {}
        }
    }

    /// Check if the app should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True once a verdict exists or the frame cap stopped the race.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.driver.is_finished() || self.driver.is_capped()
    }

    /// Time between frames.
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        self.driver.clock().interval()
    }

    /// Title of one chart.
    #[must_use]
    pub fn chart_title(&self, side: Side) -> String {
        format!(" {} ", self.board.lane(side).name)
    }

    /// Bottom line of the screen.
    #[must_use]
    pub fn status_line(&self) -> String {
        if let Some(winner) = self.board.winner() {
            return winner.to_string();
        }
        if self.driver.is_capped() {
            return format!(
                "Stopped after {} frames without a winner",
                self.driver.frames()
            );
        }
        let state = if self.paused { "Paused" } else { "Racing" };
        let clock = self.driver.clock();
        format!(
            "{state} | frame {} ({} left) | [Space] pause  [s] step  [r] reset  [q] quit",
            clock.frame_count(),
            clock.remaining()
        )
    }
}

fn board_for(driver: &RaceDriver, input: &[Value]) -> RaceBoard {
    RaceBoard::new(
        driver.lane(Side::Left).name(),
        driver.lane(Side::Right).name(),
        input,
    )
}
