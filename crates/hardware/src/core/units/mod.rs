//! Execution units and functional components.
//!
//! This module contains the functional units used by the execute stage: the
//! integer ALU and the branch resolution unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit for conditional branches and jumps.
pub mod bru;
