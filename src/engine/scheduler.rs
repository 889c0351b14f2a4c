//! Dual-lane frame scheduler.
//!
//! Each tick pulls at most one snapshot from every lane that is still
//! running, left first. Completion is tracked per lane; once both lanes are
//! done the verdict is computed exactly once and handed to the renderer.
//!
//! The frame clock caps the number of serviced ticks so a race always ends,
//! even with a stepper that never reports exhaustion.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

use crate::engine::clock::FrameClock;
use crate::engine::state::{Lane, LaneSummary, Side};
use crate::renderers::RaceRenderer;
use crate::steppers::{SortAlgorithm, Stepper, Value};

/// Result of one [`RaceDriver::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// At least one lane is still running.
    Running,
    /// Both lanes finished during this tick.
    Finished(Verdict),
    /// The race was already decided; nothing happened.
    Idle,
    /// The frame cap was reached before both lanes finished.
    CapReached,
}

impl TickOutcome {
    /// Whether the caller should keep issuing ticks.
    #[must_use]
    pub const fn should_continue(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Which side was faster, with both step counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Side declared faster.
    pub winner: Side,
    /// Display name of the faster algorithm.
    pub winner_name: String,
    /// Steps taken by the faster side.
    pub winner_steps: u64,
    /// Display name of the slower algorithm.
    pub loser_name: String,
    /// Steps taken by the slower side.
    pub loser_steps: u64,
}

impl Verdict {
    /// Decide between two finished lanes.
    ///
    /// Left wins only on strictly fewer steps. Equal counts go to the right.
    #[must_use]
    pub fn decide(left_name: &str, left_steps: u64, right_name: &str, right_steps: u64) -> Self {
        if left_steps < right_steps {
            Self {
                winner: Side::Left,
                winner_name: left_name.to_string(),
                winner_steps: left_steps,
                loser_name: right_name.to_string(),
                loser_steps: right_steps,
            }
        } else {
            Self {
                winner: Side::Right,
                winner_name: right_name.to_string(),
                winner_steps: right_steps,
                loser_name: left_name.to_string(),
                loser_steps: left_steps,
            }
        }
    }

    /// Human-readable verdict, e.g. `Selection Sort is Faster (5 steps < 10 steps)`.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is Faster ({} steps < {} steps)",
            self.winner_name, self.winner_steps, self.loser_steps
        )
    }
}

/// Serializable account of a race at some point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceSummary {
    /// Left lane counters.
    pub left: LaneSummary,
    /// Right lane counters.
    pub right: LaneSummary,
    /// Ticks serviced.
    pub frames: u64,
    /// Frame cap.
    pub max_frames: u64,
    /// Whether the cap stopped the race before a verdict.
    pub capped: bool,
    /// The verdict, once both lanes finished.
    pub verdict: Option<Verdict>,
}

/// Coordinates two lanes tick by tick and computes the winner.
#[derive(Debug)]
pub struct RaceDriver {
    left: Lane,
    right: Lane,
    clock: FrameClock,
    verdict: Option<Verdict>,
    capped: bool,
}

impl RaceDriver {
    /// Race two steppers under the given frame clock.
    #[must_use]
    pub fn new(left: Box<dyn Stepper>, right: Box<dyn Stepper>, clock: FrameClock) -> Self {
        Self {
            left: Lane::new(left),
            right: Lane::new(right),
            clock,
            verdict: None,
            capped: false,
        }
    }

    /// Race two algorithms, each over its own copy of `input`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sortrace::engine::{FrameClock, RaceDriver};
    /// use sortrace::renderers::NullRenderer;
    /// use sortrace::steppers::SortAlgorithm;
    ///
    /// let mut driver = RaceDriver::from_algorithms(
    ///     SortAlgorithm::Bubble,
    ///     SortAlgorithm::Selection,
    ///     &[5, 3, 4, 1, 2],
    ///     FrameClock::default(),
    /// );
    /// let summary = driver.run_to_completion(&mut NullRenderer);
    /// let verdict = summary.verdict.expect("race finishes");
    /// assert_eq!(verdict.message(), "Selection Sort is Faster (5 steps < 10 steps)");
    /// ```
    #[must_use]
    pub fn from_algorithms(
        left: SortAlgorithm,
        right: SortAlgorithm,
        input: &[Value],
        clock: FrameClock,
    ) -> Self {
        Self::new(left.stepper(input), right.stepper(input), clock)
    }

    /// Service one frame.
    pub fn tick<R: RaceRenderer + ?Sized>(&mut self, renderer: &mut R) -> TickOutcome {
        if self.verdict.is_some() {
            return TickOutcome::Idle;
        }
        if !self.clock.tick() {
            if !self.capped {
                self.capped = true;
                warn!(
                    max_frames = self.clock.max_frames(),
                    left_steps = self.left.steps(),
                    right_steps = self.right.steps(),
                    "frame cap reached before both lanes finished"
                );
            }
            return TickOutcome::CapReached;
        }

        for side in Side::BOTH {
            let lane = self.lane_mut(side);
            if lane.is_done() {
                continue;
            }
            match lane.advance() {
                Some(snapshot) => {
                    let steps = lane.steps();
                    renderer.on_snapshot(side, snapshot, steps);
                }
                None => {
                    debug!(
                        %side,
                        algorithm = lane.name(),
                        steps = lane.steps(),
                        "lane finished"
                    );
                }
            }
        }

        if self.left.is_done() && self.right.is_done() {
            let verdict = Verdict::decide(
                self.left.name(),
                self.left.steps(),
                self.right.name(),
                self.right.steps(),
            );
            let message = verdict.message();
            info!(
                winner = %verdict.winner,
                frames = self.clock.frame_count(),
                "{message}"
            );
            renderer.on_winner(&message);
            self.verdict = Some(verdict.clone());
            return TickOutcome::Finished(verdict);
        }

        TickOutcome::Running
    }

    /// Tick until the race is decided or the frame cap stops it.
    pub fn run_to_completion<R: RaceRenderer + ?Sized>(&mut self, renderer: &mut R) -> RaceSummary {
        while self.tick(renderer).should_continue() {}
        self.summary()
    }

    /// Lane on the given side.
    #[must_use]
    pub const fn lane(&self, side: Side) -> &Lane {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn lane_mut(&mut self, side: Side) -> &mut Lane {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// The verdict, once both lanes finished.
    #[must_use]
    pub const fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Whether a verdict exists.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.verdict.is_some()
    }

    /// Whether the frame cap stopped the race.
    #[must_use]
    pub const fn is_capped(&self) -> bool {
        self.capped
    }

    /// The frame clock.
    #[must_use]
    pub const fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Ticks serviced so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.clock.frame_count()
    }

    /// Current counters and verdict.
    #[must_use]
    pub fn summary(&self) -> RaceSummary {
        RaceSummary {
            left: self.left.summary(),
            right: self.right.summary(),
            frames: self.clock.frame_count(),
            max_frames: self.clock.max_frames(),
            capped: self.capped,
            verdict: self.verdict.clone(),
        }
    }
}
