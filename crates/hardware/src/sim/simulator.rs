//! Simulator: drives a `Cpu` until its run mode says stop.
//!
//! The driver checks the cycle budget before every tick, so a budget of `n`
//! runs at most `n` ticks. An observer callback sees the machine after every
//! tick; single-step front ends use it to prompt and may ask to quit.

use serde::Serialize;
use tracing::info;

use crate::common::SimError;
use crate::config::{Config, RunMode};
use crate::core::Cpu;
use crate::core::cpu::TickOutcome;
use crate::isa::Program;

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// HALT retired.
    Halted,
    /// The cycle budget ran out first.
    CycleLimit,
    /// The single-step controller asked to stop.
    UserQuit,
}

/// Outcome of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Ticks executed.
    pub cycles: u64,
    /// Instructions retired by writeback.
    pub instructions_retired: u64,
    /// Why the run ended.
    pub stop_reason: StopReason,
}

/// What the single-step controller wants after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepControl {
    /// Advance another cycle.
    Continue,
    /// Stop the run.
    Quit,
}

/// Top-level simulator owning the machine state.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// Machine state.
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a simulator for `program`.
    ///
    /// # Errors
    ///
    /// Any construction error from [`Cpu::new`].
    pub fn new(program: Program, run_mode: RunMode, config: &Config) -> Result<Self, SimError> {
        Ok(Self {
            cpu: Cpu::new(program, run_mode, config)?,
        })
    }

    /// Advances one clock cycle.
    ///
    /// # Errors
    ///
    /// Any fatal stage error.
    pub fn step(&mut self) -> Result<TickOutcome, SimError> {
        self.cpu.tick()
    }

    /// Runs until HALT retires or the cycle budget of the run mode is spent.
    ///
    /// A single-step machine run through this method behaves like `RunMode::Run`;
    /// use [`Simulator::run_with`] to interpose a controller.
    ///
    /// # Examples
    ///
    /// ```
    /// use apex_pipe_core::config::{Config, RunMode};
    /// use apex_pipe_core::sim::{Simulator, StopReason};
    /// use apex_pipe_core::sim::loader::parse_program;
    ///
    /// let program = parse_program("MOVC,R0,#5\nMOVC,R1,#10\nADD,R2,R0,R1\nHALT").unwrap();
    /// let mut sim = Simulator::new(program, RunMode::Run, &Config::default()).unwrap();
    /// let summary = sim.run().unwrap();
    /// assert_eq!(summary.stop_reason, StopReason::Halted);
    /// assert_eq!((summary.cycles, summary.instructions_retired), (8, 4));
    /// assert_eq!(sim.cpu.regs.read(2), 15);
    /// ```
    ///
    /// # Errors
    ///
    /// Any fatal stage error.
    pub fn run(&mut self) -> Result<RunSummary, SimError> {
        self.run_with(|_| StepControl::Continue)
    }

    /// Runs like [`Simulator::run`], calling `after_tick` after every cycle.
    ///
    /// Returning [`StepControl::Quit`] ends the run with [`StopReason::UserQuit`]
    /// unless that tick already retired HALT.
    ///
    /// # Errors
    ///
    /// Any fatal stage error.
    pub fn run_with<F>(&mut self, mut after_tick: F) -> Result<RunSummary, SimError>
    where
        F: FnMut(&Cpu) -> StepControl,
    {
        let limit = self.cpu.run_mode.cycle_limit();
        info!(mode = ?self.cpu.run_mode, "simulation started");

        let stop_reason = loop {
            if self.cpu.halted {
                break StopReason::Halted;
            }
            if limit.is_some_and(|n| self.cpu.clock >= n) {
                break StopReason::CycleLimit;
            }
            let outcome = self.cpu.tick()?;
            let control = after_tick(&self.cpu);
            if outcome == TickOutcome::Running && control == StepControl::Quit {
                break StopReason::UserQuit;
            }
        };

        let summary = RunSummary {
            cycles: self.cpu.clock,
            instructions_retired: self.cpu.stats.instructions_retired,
            stop_reason,
        };
        info!(
            cycles = summary.cycles,
            retired = summary.instructions_retired,
            reason = ?summary.stop_reason,
            "simulation stopped"
        );
        Ok(summary)
    }
}
