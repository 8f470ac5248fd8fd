//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the APEX opcode table and the decoded instruction record.
//!
//! # Contents
//!
//! * `opcode`: Opcodes, operand layouts and per-opcode register usage.
//! * `instruction`: The immutable `Instruction` record and the `Program` table.

/// Decoded instruction records and the instruction table.
pub mod instruction;

/// Opcode definitions and classification.
pub mod opcode;

pub use instruction::{Instruction, Program};
pub use opcode::{InstClass, Opcode, OperandFormat};
