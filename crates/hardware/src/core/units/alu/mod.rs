//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage for the
//! register-register and register-immediate instruction forms. All arithmetic
//! is 32-bit two's complement with wrapping overflow.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div
//! - [`logic`]:      And, Or, Xor

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Bitwise logical operations (and, or, xor).
pub mod logic;

use crate::isa::Opcode;

/// ALU operation selected by the execute stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Wrapping multiplication.
    Mul,
    /// Signed division truncating toward zero.
    Div,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
}

impl AluOp {
    /// Maps an opcode onto its ALU operation; the immediate forms share the
    /// register forms' operation.
    pub const fn from_opcode(opcode: Opcode) -> Option<Self> {
        match opcode {
            Opcode::Add | Opcode::Addl => Some(Self::Add),
            Opcode::Sub | Opcode::Subl => Some(Self::Sub),
            Opcode::Mul => Some(Self::Mul),
            Opcode::Div => Some(Self::Div),
            Opcode::And => Some(Self::And),
            Opcode::Or => Some(Self::Or),
            Opcode::Xor => Some(Self::Xor),
            _ => None,
        }
    }

    /// Whether this is a bitwise operation.
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Xor)
    }
}

/// Arithmetic Logic Unit for 32-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (`rs1`)
    /// * `b`  - Second operand (`rs2` or the immediate)
    ///
    /// # Returns
    ///
    /// The result, or `None` when `op` is `Div` and `b` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use apex_pipe_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 5, 10), Some(15));
    /// assert_eq!(Alu::execute(AluOp::Add, i32::MAX, 1), Some(i32::MIN));
    /// assert_eq!(Alu::execute(AluOp::Div, -7, 2), Some(-3));
    /// assert_eq!(Alu::execute(AluOp::Div, 1, 0), None);
    /// assert_eq!(Alu::execute(AluOp::Xor, 0b1100, 0b1010), Some(0b0110));
    /// ```
    pub const fn execute(op: AluOp, a: i32, b: i32) -> Option<i32> {
        match op {
            AluOp::Add => Some(arithmetic::add(a, b)),
            AluOp::Sub => Some(arithmetic::sub(a, b)),
            AluOp::Mul => Some(arithmetic::mul(a, b)),
            AluOp::Div => arithmetic::div(a, b),
            AluOp::And => Some(logic::and(a, b)),
            AluOp::Or => Some(logic::or(a, b)),
            AluOp::Xor => Some(logic::xor(a, b)),
        }
    }
}
