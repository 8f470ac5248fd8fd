//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline.
//! Instructions arrive already decoded from the instruction table, so this
//! stage only reads the source operands each opcode needs, forwarding
//! in-flight values from the scoreboard.

use tracing::trace;

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::pipeline::hazards::{HazardKind, OperandSource, read_operand};
use crate::core::pipeline::stages::Stage;

/// Executes the instruction decode stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - Reads `rs1`/`rs2` for opcodes that use them (MOVC, NOP, HALT and the
///   flag branches read nothing)
/// - Prefers a scoreboard value over the committed register value
/// - Flags a load-use hazard when the producer has not published yet
/// - Moves the entry into the execute latch
///
/// # Errors
///
/// `SimError::FetchOutOfRange` when the entry is a fetch outside the
/// instruction table that no redirect flushed.
pub fn decode_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let Some(mut entry) = cpu.decode_latch.take() else {
        return Ok(());
    };
    if entry.fetch_fault {
        return Err(SimError::FetchOutOfRange { pc: entry.pc });
    }
    let inst = entry.inst;

    if inst.opcode.reads_rs1() {
        entry.rs1_value = read_source(cpu, inst.rs1, entry.pc);
    }
    if inst.opcode.reads_rs2() {
        entry.rs2_value = read_source(cpu, inst.rs2, entry.pc);
    }

    if cpu.trace {
        trace!(
            cycle = cpu.clock,
            pc = entry.pc,
            inst = %inst,
            rs1 = entry.rs1_value,
            rs2 = entry.rs2_value,
            "ID"
        );
    }

    cpu.view.record(Stage::Decode, entry);
    cpu.execute_latch.put(entry);
    Ok(())
}

fn read_source(cpu: &mut Cpu, reg: usize, pc: i32) -> i32 {
    let operand = read_operand(&cpu.regs, &cpu.scoreboard, reg);
    match operand.source {
        OperandSource::RegisterFile => {}
        OperandSource::Forwarded => cpu.stats.forwarded_reads += 1,
        OperandSource::LoadUse => cpu.flag_hazard(HazardKind::LoadUse, reg, pc),
    }
    operand.value
}
