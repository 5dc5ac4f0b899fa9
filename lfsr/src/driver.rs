//! Sequence driver: runs a register from its start state to a stop condition.
//!
//! A [`SequenceDriver`] is created from a configuration (validation happens
//! here, before any step), then consumed by [`SequenceDriver::run`]. Each
//! step is forwarded to a [`StepSink`] as it is produced; when the run ends,
//! successfully or not, the sink receives one [`RunSummary`].
//!
//! With error checking enabled every step must satisfy the maximal-length
//! period invariant:
//! - the state is never zero
//! - the state equals the start state exactly when the step index is a
//!   multiple of `2^width - 1`
//!
//! The invariant only holds for primitive feedback polynomials. A caller
//! supplied mask with a shorter period is reported as a violation at the
//! first early return to the start state.
//!
//! Default table taps describe a right-shifting Fibonacci register. They are
//! mirrored for a Galois register and mirrored again for a left shift, so a
//! left-shifting Fibonacci or a right-shifting Galois register runs the
//! mirrored mask.

use auto_impl::auto_impl;
use log::debug;
use serde::Serialize;

use crate::config::{LfsrConfig, ResolvedRun};
use crate::error::{ConfigError, SequenceError};
use crate::word::Word;

/// One generated bit and the register state right after it was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<W: Word> {
    /// 1-based step number
    pub index: u64,
    pub state: W,
    pub output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunOutcome {
    Completed,
    Faulted,
}

/// Termination notice: how the run ended, after how many steps and in which state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary<W: Word> {
    pub outcome: RunOutcome,
    pub steps: u64,
    pub state: W,
}

/// Receiver of the per-step notifications of a run.
#[auto_impl(&mut, Box)]
pub trait StepSink<W: Word> {
    fn on_step(&mut self, step: &Step<W>);

    /// Called exactly once, after the last step, for completed and faulted runs alike.
    fn on_finish(&mut self, summary: &RunSummary<W>);
}

impl<W: Word> StepSink<W> for Vec<Step<W>> {
    fn on_step(&mut self, step: &Step<W>) {
        self.push(*step);
    }

    fn on_finish(&mut self, _summary: &RunSummary<W>) {}
}

pub struct SequenceDriver<W: Word> {
    run: ResolvedRun<W>,
    state: W,
    step_index: u64,
}

impl<W: Word> SequenceDriver<W> {
    pub fn new(config: &LfsrConfig<W>) -> Result<Self, ConfigError> {
        Ok(Self::from_resolved(config.resolve()?))
    }

    pub fn from_resolved(run: ResolvedRun<W>) -> Self {
        Self {
            state: run.start,
            step_index: 0,
            run,
        }
    }

    /// The effective parameters of this run.
    pub fn resolved(&self) -> &ResolvedRun<W> {
        &self.run
    }

    /// Runs the register until the stop condition or the first invariant violation.
    ///
    /// Without a step limit the run stops when the state returns to the start
    /// state; with one it stops once `limit` steps were produced, whatever the
    /// state. The driver is consumed: a finished run cannot be resumed.
    pub fn run<S: StepSink<W>>(mut self, sink: &mut S) -> Result<RunSummary<W>, SequenceError<W>> {
        debug!(
            "size={} start={:#x} taps={:#x} lfsr={} shift={} limit={:?} errchk={}",
            self.run.width,
            self.run.start,
            self.run.taps,
            self.run.variant,
            self.run.shift,
            self.run.step_limit,
            self.run.error_check
        );

        loop {
            let step = self.advance();
            sink.on_step(&step);

            if self.run.error_check {
                if let Err(err) = self.check_period(&step) {
                    let summary = self.summary(RunOutcome::Faulted);
                    sink.on_finish(&summary);
                    debug!("run faulted: {}", err);
                    return Err(err);
                }
            }

            if self.reached_stop(&step) {
                let summary = self.summary(RunOutcome::Completed);
                sink.on_finish(&summary);
                debug!(
                    "run completed after {} steps, state={:#x}",
                    summary.steps, summary.state
                );
                return Ok(summary);
            }
        }
    }

    fn advance(&mut self) -> Step<W> {
        let output = self.run.variant.step(
            self.run.width,
            self.run.shift,
            self.run.taps,
            &mut self.state,
        );
        self.step_index += 1;
        Step {
            index: self.step_index,
            state: self.state,
            output,
        }
    }

    fn check_period(&self, step: &Step<W>) -> Result<(), SequenceError<W>> {
        let at_period_boundary = (step.index as u128) % self.run.max_period.widen() == 0;
        let at_start = step.state == self.run.start;
        if step.state.is_zero() || at_start != at_period_boundary {
            return Err(SequenceError::PeriodViolation {
                step_index: step.index,
                state: step.state,
            });
        }
        Ok(())
    }

    fn reached_stop(&self, step: &Step<W>) -> bool {
        match self.run.step_limit {
            Some(limit) => step.index >= limit,
            None => step.state == self.run.start,
        }
    }

    fn summary(&self, outcome: RunOutcome) -> RunSummary<W> {
        RunSummary {
            outcome,
            steps: self.step_index,
            state: self.state,
        }
    }
}
