//! APEX opcode table.
//!
//! Each opcode carries its assembly mnemonic, its operand layout and the set of
//! register-file interactions the pipeline stages dispatch on (which sources are
//! read at decode, whether a destination is produced, whether the base register
//! is post-incremented).

use serde::Serialize;

/// Operand layout of an instruction, in assembly order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandFormat {
    /// `OP,Rd,Rs1,Rs2`
    RegRegReg,
    /// `OP,Rd,Rs1,#imm`
    RegRegImm,
    /// `OP,Rs2,Rs1,#imm` (stores: data register first, then base).
    StoreRegRegImm,
    /// `OP,Rd,#imm`
    RegImm,
    /// `OP,Rs1,Rs2`
    RegReg,
    /// `OP,Rs1,#imm`
    JumpRegImm,
    /// `OP,#imm`
    Imm,
    /// `OP`
    Bare,
}

/// Coarse instruction category used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum InstClass {
    /// Register or immediate arithmetic/logic.
    Alu,
    /// Memory read.
    Load,
    /// Memory write.
    Store,
    /// Conditional branch or jump.
    Control,
    /// Everything else (MOVC, CMP, NOP, HALT).
    Other,
}

/// APEX instruction opcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Opcode {
    /// `Rd = Rs1 + Rs2`
    Add,
    /// `Rd = Rs1 - Rs2`
    Sub,
    /// `Rd = Rs1 * Rs2`
    Mul,
    /// `Rd = Rs1 / Rs2`
    Div,
    /// `Rd = Rs1 & Rs2`
    And,
    /// `Rd = Rs1 | Rs2`
    Or,
    /// `Rd = Rs1 ^ Rs2`
    Xor,
    /// `Rd = Rs1 + imm`
    Addl,
    /// `Rd = Rs1 - imm`
    Subl,
    /// `Rd = imm`
    Movc,
    /// `Rd = MEM[Rs1 + imm]`
    Load,
    /// `Rd = MEM[Rs1 + imm]; Rs1 = Rs1 + 4`
    Ldi,
    /// `MEM[Rs1 + imm] = Rs2`
    Store,
    /// `MEM[Rs1 + imm] = Rs2; Rs1 = Rs1 + 4`
    Sti,
    /// Set flags from `Rs1` compared with `Rs2`.
    Cmp,
    /// Branch if the zero flag is set.
    Bz,
    /// Branch if the zero flag is clear.
    Bnz,
    /// Branch if the positive flag is set.
    Bp,
    /// Branch if the positive flag is clear.
    Bnp,
    /// Unconditional jump to `Rs1 + imm`.
    Jump,
    /// No operation.
    Nop,
    /// Stop fetching; the run ends when HALT retires.
    Halt,
}

impl Opcode {
    /// Every opcode, in table order.
    pub const ALL: [Self; 22] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Addl,
        Self::Subl,
        Self::Movc,
        Self::Load,
        Self::Ldi,
        Self::Store,
        Self::Sti,
        Self::Cmp,
        Self::Bz,
        Self::Bnz,
        Self::Bp,
        Self::Bnp,
        Self::Jump,
        Self::Nop,
        Self::Halt,
    ];

    /// Assembly mnemonic in canonical upper case.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Addl => "ADDL",
            Self::Subl => "SUBL",
            Self::Movc => "MOVC",
            Self::Load => "LOAD",
            Self::Ldi => "LDI",
            Self::Store => "STORE",
            Self::Sti => "STI",
            Self::Cmp => "CMP",
            Self::Bz => "BZ",
            Self::Bnz => "BNZ",
            Self::Bp => "BP",
            Self::Bnp => "BNP",
            Self::Jump => "JUMP",
            Self::Nop => "NOP",
            Self::Halt => "HALT",
        }
    }

    /// Looks up an opcode by mnemonic, ignoring case.
    pub fn from_mnemonic(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(text))
    }

    /// Operand layout used by the loader and by disassembly.
    pub const fn format(self) -> OperandFormat {
        match self {
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::And | Self::Or | Self::Xor => {
                OperandFormat::RegRegReg
            }
            Self::Addl | Self::Subl | Self::Load | Self::Ldi => OperandFormat::RegRegImm,
            Self::Store | Self::Sti => OperandFormat::StoreRegRegImm,
            Self::Movc => OperandFormat::RegImm,
            Self::Cmp => OperandFormat::RegReg,
            Self::Jump => OperandFormat::JumpRegImm,
            Self::Bz | Self::Bnz | Self::Bp | Self::Bnp => OperandFormat::Imm,
            Self::Nop | Self::Halt => OperandFormat::Bare,
        }
    }

    /// Whether decode reads `rs1` from the register file or scoreboard.
    pub const fn reads_rs1(self) -> bool {
        matches!(
            self.format(),
            OperandFormat::RegRegReg
                | OperandFormat::RegRegImm
                | OperandFormat::StoreRegRegImm
                | OperandFormat::RegReg
                | OperandFormat::JumpRegImm
        )
    }

    /// Whether decode reads `rs2` from the register file or scoreboard.
    pub const fn reads_rs2(self) -> bool {
        matches!(
            self.format(),
            OperandFormat::RegRegReg | OperandFormat::StoreRegRegImm | OperandFormat::RegReg
        )
    }

    /// Whether the instruction produces a value for `rd`.
    pub const fn writes_rd(self) -> bool {
        matches!(
            self.format(),
            OperandFormat::RegRegReg | OperandFormat::RegRegImm | OperandFormat::RegImm
        )
    }

    /// Whether the instruction post-increments its base register `rs1`.
    pub const fn updates_base(self) -> bool {
        matches!(self, Self::Ldi | Self::Sti)
    }

    /// Whether the memory stage reads data memory.
    pub const fn is_load(self) -> bool {
        matches!(self, Self::Load | Self::Ldi)
    }

    /// Whether the memory stage writes data memory.
    pub const fn is_store(self) -> bool {
        matches!(self, Self::Store | Self::Sti)
    }

    /// Whether the opcode is a flag-conditional branch.
    pub const fn is_conditional_branch(self) -> bool {
        matches!(self, Self::Bz | Self::Bnz | Self::Bp | Self::Bnp)
    }

    /// Statistics category.
    pub const fn class(self) -> InstClass {
        match self {
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::And
            | Self::Or
            | Self::Xor
            | Self::Addl
            | Self::Subl => InstClass::Alu,
            Self::Load | Self::Ldi => InstClass::Load,
            Self::Store | Self::Sti => InstClass::Store,
            Self::Bz | Self::Bnz | Self::Bp | Self::Bnp | Self::Jump => InstClass::Control,
            Self::Movc | Self::Cmp | Self::Nop | Self::Halt => InstClass::Other,
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
