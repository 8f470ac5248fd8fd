//! Branch Resolution Unit (BRU).
//!
//! APEX resolves control flow in the execute stage with no prediction. This
//! module decides whether a control instruction redirects fetch and where to.

use crate::core::arch::Flags;
use crate::isa::Opcode;

/// Branch resolution logic.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Resolves a control instruction.
    ///
    /// # Arguments
    ///
    /// * `opcode` - The instruction's opcode.
    /// * `pc` - Address of the instruction itself.
    /// * `rs1` - Operand value of `rs1` (used by JUMP).
    /// * `imm` - Offset literal.
    /// * `flags` - Current condition flags.
    ///
    /// # Returns
    ///
    /// The redirect target when control leaves the sequential path, `None`
    /// when the instruction is not control flow or its condition fails.
    pub const fn resolve(opcode: Opcode, pc: i32, rs1: i32, imm: i32, flags: Flags) -> Option<i32> {
        if matches!(opcode, Opcode::Jump) {
            return Some(rs1.wrapping_add(imm));
        }
        if !opcode.is_conditional_branch() {
            return None;
        }
        let taken = match opcode {
            Opcode::Bz => flags.zero,
            Opcode::Bnz => !flags.zero,
            Opcode::Bp => flags.positive,
            // BNP
            _ => !flags.positive,
        };
        if taken { Some(pc.wrapping_add(imm)) } else { None }
    }
}
