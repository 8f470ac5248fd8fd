//! APEX in-order pipeline simulator library.
//!
//! This crate implements a cycle-accurate model of the five-stage APEX pipeline with the following:
//! 1. **Core:** Fetch, decode, execute, memory and writeback stages over single-buffered latches,
//!    a register scoreboard for operand forwarding, and the condition flags.
//! 2. **ISA:** The APEX opcode table and decoded instruction records.
//! 3. **Memory:** A word-addressed data memory.
//! 4. **Simulation:** Assembly loader, configuration, run driver and statistics.

/// Common types and constants (registers, errors, machine layout).
pub mod common;
/// Simulator configuration (defaults, flag policy, run mode).
pub mod config;
/// CPU core (pipeline, arch state, execution units).
pub mod core;
/// Instruction set (opcodes, instructions, program table).
pub mod isa;
/// Program loader and run driver.
pub mod sim;
/// Data memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Error type returned by every fallible operation.
pub use crate::common::SimError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the pipeline, registers, memory and stats.
pub use crate::core::Cpu;
/// Top-level run driver.
pub use crate::sim::Simulator;
