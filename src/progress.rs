//! Mining progress reporting.
//!
//! The server mines synchronously inside its request handler and exposes no
//! progress signal, so the visible progress bar is driven by a simulated
//! stepper: a fixed-period timer that advances a percentage by a fixed step
//! until it reaches 100. The stepper is one implementation of the
//! [`ProgressReporter`] seam; an operation that can push true progress
//! would report through the same interface.
//!
//! With the defaults (100 ms period, step 2) the animation completes after
//! exactly 50 ticks, about five seconds, independent of how long the server
//! actually takes. Once started it runs to completion; there is no
//! cancellation hook.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::constants::{PROGRESS_STEP, PROGRESS_TICK_MS};
use crate::state::AppMessage;

// ============================================================================
// Progress State
// ============================================================================

/// An integer percentage in `[0, 100]`, owned by the driving task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressState {
    percent: u8,
}

impl ProgressState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `step`, saturating at 100.
    ///
    /// Returns `true` once the state has reached 100. Advancing a finished
    /// state changes nothing.
    pub fn advance(&mut self, step: u8) -> bool {
        self.percent = self.percent.saturating_add(step).min(100);
        self.is_done()
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.percent >= 100
    }
}

// ============================================================================
// Progress Reporting
// ============================================================================

/// Sink for progress updates from a long-running operation.
pub trait ProgressReporter: Send {
    /// Report the current percentage.
    fn report(&mut self, percent: u8);

    /// Signal that the operation's progress has reached completion.
    fn finished(&mut self);
}

/// Forwards progress updates onto the app message channel.
#[derive(Debug)]
pub struct ChannelReporter {
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl ChannelReporter {
    #[must_use]
    pub fn new(message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self { message_tx }
    }
}

impl ProgressReporter for ChannelReporter {
    fn report(&mut self, percent: u8) {
        // Receiver may be dropped during shutdown - safe to ignore
        let _ = self.message_tx.send(AppMessage::MiningProgress(percent));
    }

    fn finished(&mut self) {
        let _ = self.message_tx.send(AppMessage::MiningAnimationDone);
    }
}

// ============================================================================
// Simulated Stepper
// ============================================================================

/// Default progress source: a fixed-period, fixed-step timer.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedStepper {
    period: Duration,
    step: u8,
}

impl Default for SimulatedStepper {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(PROGRESS_TICK_MS),
            step: PROGRESS_STEP,
        }
    }
}

impl SimulatedStepper {
    /// Create a stepper with custom timing. A zero step is bumped to 1 so
    /// the animation always terminates.
    #[must_use]
    pub fn new(period: Duration, step: u8) -> Self {
        Self {
            period,
            step: step.max(1),
        }
    }

    /// Drive the reporter from 0 to 100, one step per period.
    ///
    /// Consumes the stepper; intended to be spawned as a task. Reports
    /// after every step and calls `finished` exactly once at the end.
    pub async fn drive<R: ProgressReporter>(self, mut reporter: R) {
        let mut state = ProgressState::new();
        let mut ticker = tokio::time::interval(self.period);

        // The first interval tick completes immediately; consume it so each
        // step lands one full period apart.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let done = state.advance(self.step);
            reporter.report(state.percent());
            if done {
                break;
            }
        }

        reporter.finished();
    }
}

// ============================================================================
// Tests
// ============================================================================
