//! Core processor implementation.
//!
//! This module contains the APEX CPU implementation including the instruction
//! pipeline, execution units, and architectural flag state.

/// Architectural state outside the register file (condition flags).
pub mod arch;

/// CPU state container and per-tick execution.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, scoreboard, hazards).
pub mod pipeline;

/// Execution units (ALU, branch resolution).
pub mod units;

pub use self::cpu::Cpu;
