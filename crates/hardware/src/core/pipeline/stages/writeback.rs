//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline.
//! It commits results to the register file, releases the scoreboard slots
//! the retiring instruction owns, updates retirement statistics and reports
//! when HALT retires.

use tracing::{debug, trace};

use crate::core::Cpu;
use crate::core::pipeline::stages::Stage;
use crate::isa::Opcode;

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Returns
///
/// `true` if the retiring instruction is HALT.
pub fn wb_stage(cpu: &mut Cpu) -> bool {
    let Some(entry) = cpu.writeback_latch.take() else {
        return false;
    };
    let inst = entry.inst;

    // The base update is committed first so a load into its own base register wins.
    if let Some(base) = entry.base_update {
        cpu.regs.write(inst.rs1, base);
    }
    if inst.opcode.writes_rd() {
        cpu.regs.write(inst.rd, entry.result);
    }

    if entry.base_update.is_some() {
        cpu.scoreboard.release(inst.rs1, entry.seq);
    }
    if inst.opcode.writes_rd() {
        cpu.scoreboard.release(inst.rd, entry.seq);
    }

    cpu.stats.record_retire(inst.opcode.class());

    if cpu.trace {
        trace!(cycle = cpu.clock, pc = entry.pc, inst = %inst, result = entry.result, "WB");
    }
    cpu.view.record(Stage::Writeback, entry);

    let halted = inst.opcode == Opcode::Halt;
    if halted {
        debug!(cycle = cpu.clock, pc = entry.pc, "WB  HALT retired");
    }
    halted
}
