//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline.
//! It performs the following:
//! 1. **ALU:** Arithmetic and logic results, with the condition flag update.
//! 2. **Address Generation:** Effective addresses and post-increment values for memory ops.
//! 3. **Control Flow:** Resolves branches and jumps, redirecting fetch and flushing decode.
//! 4. **Scoreboard:** Marks every destination pending and publishes forwarded values.

use tracing::{debug, trace};

use crate::common::SimError;
use crate::common::constants::POST_INCREMENT;
use crate::core::Cpu;
use crate::core::pipeline::hazards::HazardKind;
use crate::core::pipeline::latches::LatchEntry;
use crate::core::pipeline::stages::Stage;
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::units::alu::{Alu, AluOp};
use crate::core::units::bru::Bru;
use crate::isa::{Opcode, OperandFormat};

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
///
/// # Errors
///
/// `SimError::DivideByZero` for a DIV with a zero divisor.
pub fn execute_stage(cpu: &mut Cpu) -> Result<(), SimError> {
    let Some(mut entry) = cpu.execute_latch.take() else {
        return Ok(());
    };
    let inst = entry.inst;
    let rs1 = entry.rs1_value;

    match inst.opcode {
        Opcode::Add
        | Opcode::Sub
        | Opcode::Mul
        | Opcode::Div
        | Opcode::And
        | Opcode::Or
        | Opcode::Xor
        | Opcode::Addl
        | Opcode::Subl => execute_alu(cpu, &mut entry)?,
        Opcode::Movc => {
            entry.result = inst.imm;
            cpu.flags.update_zero(inst.imm);
        }
        Opcode::Load | Opcode::Ldi | Opcode::Store | Opcode::Sti => {
            entry.memory_address = rs1.wrapping_add(inst.imm);
            if inst.opcode.updates_base() {
                entry.base_update = Some(rs1.wrapping_add(POST_INCREMENT));
            }
        }
        Opcode::Cmp => cpu.flags.update_compare(rs1, entry.rs2_value),
        Opcode::Bz | Opcode::Bnz | Opcode::Bp | Opcode::Bnp | Opcode::Jump => {
            if let Some(target) = Bru::resolve(inst.opcode, entry.pc, rs1, inst.imm, cpu.flags) {
                redirect(cpu, &entry, target);
            }
        }
        Opcode::Nop | Opcode::Halt => {}
    }

    // Base first so that an LDI with rd == rs1 leaves the load as the producer.
    if let Some(base) = entry.base_update {
        mark_pending(cpu, inst.rs1, &entry, Some(base));
    }
    if inst.opcode.writes_rd() {
        let value = (!inst.opcode.is_load()).then_some(entry.result);
        mark_pending(cpu, inst.rd, &entry, value);
    }

    if cpu.trace {
        trace!(
            cycle = cpu.clock,
            pc = entry.pc,
            inst = %inst,
            result = entry.result,
            addr = entry.memory_address,
            "EX"
        );
    }

    cpu.view.record(Stage::Execute, entry);
    cpu.memory_latch.put(entry);
    Ok(())
}

fn execute_alu(cpu: &mut Cpu, entry: &mut LatchEntry) -> Result<(), SimError> {
    let inst = entry.inst;
    let Some(op) = AluOp::from_opcode(inst.opcode) else {
        return Ok(());
    };
    let rhs = if inst.opcode.format() == OperandFormat::RegRegReg {
        entry.rs2_value
    } else {
        inst.imm
    };
    let result =
        Alu::execute(op, entry.rs1_value, rhs).ok_or(SimError::DivideByZero { pc: entry.pc })?;
    entry.result = result;
    cpu.flags.update_alu(op, result, cpu.flag_policy);
    Ok(())
}

fn redirect(cpu: &mut Cpu, entry: &LatchEntry, target: i32) {
    if let Some(flushed) = cpu.decode_latch.entry() {
        debug!(cycle = cpu.clock, pc = flushed.pc, "EX  flushed from decode");
        cpu.stats.flushed += 1;
    }
    cpu.decode_latch.flush();

    cpu.pc = target;
    cpu.fetch_suspended_one_cycle = true;
    cpu.fetch_halted = false;
    cpu.stats.branches_taken += 1;
    debug!(cycle = cpu.clock, from = entry.pc, to = target, "EX  redirect");
}

fn mark_pending(cpu: &mut Cpu, reg: usize, entry: &LatchEntry, value: Option<i32>) {
    let previous = cpu.scoreboard.mark_pending(reg, entry.seq, value);
    if previous.is_some_and(|p| p.seq != entry.seq) {
        cpu.flag_hazard(HazardKind::MultipleProducers, reg, entry.pc);
    }
}
