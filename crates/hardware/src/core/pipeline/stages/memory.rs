//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline.
//! Loads read data memory and publish the loaded value to the scoreboard so
//! that later consumers can forward it; stores write the operand read at decode.

use tracing::trace;

use crate::common::SimError;
use crate::core::Cpu;
use crate::core::pipeline::stages::Stage;

/// Executes the memory stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Errors
///
/// `SimError::MemoryOutOfRange` when the effective address is outside data memory.
pub fn mem_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let Some(mut entry) = cpu.memory_latch.take() else {
        return Ok(());
    };
    let op = entry.inst.opcode;

    if op.is_load() {
        entry.result = cpu.memory.read(entry.memory_address, entry.pc)?;
        cpu.scoreboard.resolve(entry.inst.rd, entry.seq, entry.result);
    } else if op.is_store() {
        cpu.memory
            .write(entry.memory_address, entry.rs2_value, entry.pc)?;
    }

    if cpu.trace {
        trace!(
            cycle = cpu.clock,
            pc = entry.pc,
            inst = %entry.inst,
            addr = entry.memory_address,
            "MEM"
        );
    }

    cpu.view.record(Stage::Memory, entry);
    cpu.writeback_latch.put(entry);
    Ok(())
}
