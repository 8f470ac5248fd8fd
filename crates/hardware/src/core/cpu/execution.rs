//! Main Execution Loop.
//!
//! This module implements the per-cycle advance of the pipeline. It performs the following:
//! 1. **Stage Ordering:** Invokes the stages in [`STAGE_ORDER`] so that each stage drains its
//!    latch before the upstream stage refills it.
//! 2. **Halt Detection:** Stops the tick as soon as HALT retires.
//! 3. **Timing Management:** Advances the cycle counter once per tick, the halting tick included.

use tracing::{debug, info};

use super::Cpu;
use crate::common::SimError;
use crate::core::pipeline::stages::{
    STAGE_ORDER, Stage, decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The machine can tick again.
    Running,
    /// HALT has retired; further ticks do nothing.
    Halted,
}

impl Cpu {
    /// Advances the machine by one clock cycle.
    ///
    /// Runs Writeback, Memory, Execute, Decode and Fetch in that order and then
    /// increments `clock`. When Writeback retires HALT the remaining stages are
    /// skipped but the cycle still counts.
    ///
    /// # Errors
    ///
    /// Any fatal stage error (`FetchOutOfRange`, `MemoryOutOfRange`, `DivideByZero`).
    /// The machine state is left as it was at the failing stage.
    pub fn tick(&mut self) -> Result<TickOutcome, SimError> {
        if self.halted {
            return Ok(TickOutcome::Halted);
        }
        self.view.clear();

        for stage in STAGE_ORDER {
            match stage {
                Stage::Writeback => {
                    if wb_stage(self) {
                        self.halted = true;
                        break;
                    }
                }
                Stage::Memory => mem_stage(self)?,
                Stage::Execute => execute_stage(self)?,
                Stage::Decode => decode_stage(self)?,
                Stage::Fetch => fetch_stage(self),
            }
        }

        self.clock += 1;
        self.stats.cycles = self.clock;

        if self.halted {
            info!(
                cycles = self.clock,
                retired = self.stats.instructions_retired,
                "simulation complete"
            );
            Ok(TickOutcome::Halted)
        } else {
            debug!(cycle = self.clock, pc = self.pc, "tick");
            Ok(TickOutcome::Running)
        }
    }
}
