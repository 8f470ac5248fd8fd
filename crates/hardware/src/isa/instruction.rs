//! Decoded instruction records and the instruction table.
//!
//! An `Instruction` is created once at load time and never mutated. The
//! `Program` owns them for the whole run and is indexed by program counter.

use std::fmt;

use serde::Serialize;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::isa::opcode::{Opcode, OperandFormat};

/// A decoded APEX instruction.
///
/// Register fields an opcode does not use are left at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Instruction {
    /// Operation to perform.
    pub opcode: Opcode,
    /// Destination register index.
    pub rd: usize,
    /// First source (or base) register index.
    pub rs1: usize,
    /// Second source (or store data) register index.
    pub rs2: usize,
    /// Signed literal operand.
    pub imm: i32,
}

impl Instruction {
    /// Creates an instruction with no operands.
    pub const fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            rd: 0,
            rs1: 0,
            rs2: 0,
            imm: 0,
        }
    }

    /// `OP,Rd,Rs1,Rs2`
    pub const fn reg3(opcode: Opcode, rd: usize, rs1: usize, rs2: usize) -> Self {
        Self {
            opcode,
            rd,
            rs1,
            rs2,
            imm: 0,
        }
    }

    /// `OP,Rd,Rs1,#imm`
    pub const fn reg_imm(opcode: Opcode, rd: usize, rs1: usize, imm: i32) -> Self {
        Self {
            opcode,
            rd,
            rs1,
            rs2: 0,
            imm,
        }
    }

    /// `OP,Rs2,Rs1,#imm` for STORE and STI.
    pub const fn store(opcode: Opcode, rs2: usize, rs1: usize, imm: i32) -> Self {
        Self {
            opcode,
            rd: 0,
            rs1,
            rs2,
            imm,
        }
    }

    /// `MOVC,Rd,#imm`
    pub const fn movc(rd: usize, imm: i32) -> Self {
        Self {
            opcode: Opcode::Movc,
            rd,
            rs1: 0,
            rs2: 0,
            imm,
        }
    }

    /// `CMP,Rs1,Rs2`
    pub const fn cmp(rs1: usize, rs2: usize) -> Self {
        Self {
            opcode: Opcode::Cmp,
            rd: 0,
            rs1,
            rs2,
            imm: 0,
        }
    }

    /// `BZ`/`BNZ`/`BP`/`BNP` with a pc-relative offset.
    pub const fn branch(opcode: Opcode, offset: i32) -> Self {
        Self {
            opcode,
            rd: 0,
            rs1: 0,
            rs2: 0,
            imm: offset,
        }
    }

    /// `JUMP,Rs1,#imm`
    pub const fn jump(rs1: usize, imm: i32) -> Self {
        Self {
            opcode: Opcode::Jump,
            rd: 0,
            rs1,
            rs2: 0,
            imm,
        }
    }

    /// Assembly mnemonic of the opcode.
    pub const fn mnemonic(&self) -> &'static str {
        self.opcode.mnemonic()
    }

    /// Register indices named by this instruction's operand format.
    pub fn registers(&self) -> Vec<usize> {
        match self.opcode.format() {
            OperandFormat::RegRegReg => vec![self.rd, self.rs1, self.rs2],
            OperandFormat::RegRegImm => vec![self.rd, self.rs1],
            OperandFormat::StoreRegRegImm | OperandFormat::RegReg => vec![self.rs1, self.rs2],
            OperandFormat::RegImm => vec![self.rd],
            OperandFormat::JumpRegImm => vec![self.rs1],
            OperandFormat::Imm | OperandFormat::Bare => Vec::new(),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.mnemonic();
        match self.opcode.format() {
            OperandFormat::RegRegReg => {
                write!(f, "{m},R{},R{},R{}", self.rd, self.rs1, self.rs2)
            }
            OperandFormat::RegRegImm => write!(f, "{m},R{},R{},#{}", self.rd, self.rs1, self.imm),
            OperandFormat::StoreRegRegImm => {
                write!(f, "{m},R{},R{},#{}", self.rs2, self.rs1, self.imm)
            }
            OperandFormat::RegImm => write!(f, "{m},R{},#{}", self.rd, self.imm),
            OperandFormat::RegReg => write!(f, "{m},R{},R{}", self.rs1, self.rs2),
            OperandFormat::JumpRegImm => write!(f, "{m},R{},#{}", self.rs1, self.imm),
            OperandFormat::Imm => write!(f, "{m},#{}", self.imm),
            OperandFormat::Bare => f.write_str(m),
        }
    }
}

/// The instruction table: an immutable, ordered sequence of instructions
/// addressed by `base + INSTRUCTION_SIZE * index`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Wraps a decoded instruction sequence.
    pub const fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Number of instructions in the table.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// All instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Returns the instruction stored at `pc`, given the table's base address.
    ///
    /// `None` when `pc` is below the base, not slot-aligned, or past the end.
    pub fn fetch(&self, base: i32, pc: i32) -> Option<&Instruction> {
        let offset = pc.checked_sub(base)?;
        if offset < 0 || offset % INSTRUCTION_SIZE != 0 {
            return None;
        }
        self.instructions
            .get(usize::try_from(offset / INSTRUCTION_SIZE).ok()?)
    }
}
