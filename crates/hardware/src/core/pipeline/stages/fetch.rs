//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It reads the instruction table at the current Program Counter (PC),
//! tags the instruction with a fetch sequence number, and hands it to decode.
//! It also honours the one-cycle bubble that follows a taken redirect and
//! stops fetching once HALT has been fetched.
//!
//! A pc outside the instruction table is not an error here: fetch may run
//! past the end on a path an older branch is about to flush. The slot is
//! handed to decode as a fault entry instead.

use tracing::{debug, trace};

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::pipeline::latches::LatchEntry;
use crate::core::pipeline::stages::Stage;
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::Opcode;

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Behavior
///
/// - Does nothing once HALT has been fetched
/// - Spends one cycle idle after a taken branch or jump
/// - Otherwise fetches one instruction, advances the PC and fills the decode latch
/// - A PC that names no instruction slot fills the decode latch with a fault entry
pub fn fetch_stage(cpu: &mut Cpu) {
    if cpu.fetch_halted {
        return;
    }

    if cpu.fetch_suspended_one_cycle {
        cpu.fetch_suspended_one_cycle = false;
        cpu.fetch_latch.flush();
        cpu.stats.fetch_bubbles += 1;
        debug!(cycle = cpu.clock, pc = cpu.pc, "IF  bubble");
        return;
    }

    let pc = cpu.pc;
    let Some(&inst) = cpu.program.fetch(cpu.base_address, pc) else {
        cpu.fetch_latch.flush();
        cpu.decode_latch.put(LatchEntry::fetch_fault(cpu.next_seq, pc));
        cpu.pc = pc.wrapping_add(INSTRUCTION_SIZE);
        debug!(cycle = cpu.clock, pc, "IF  outside program");
        return;
    };

    let entry = LatchEntry::new(cpu.next_seq, pc, inst);
    cpu.next_seq += 1;
    cpu.pc = pc.wrapping_add(INSTRUCTION_SIZE);

    if cpu.trace {
        trace!(cycle = cpu.clock, pc, inst = %inst, "IF");
    }

    cpu.fetch_latch.put(entry);
    cpu.decode_latch.put(entry);
    cpu.view.record(Stage::Fetch, entry);

    if inst.opcode == Opcode::Halt {
        cpu.fetch_halted = true;
        debug!(cycle = cpu.clock, pc, "IF  HALT fetched, fetch stopped");
    }
}
