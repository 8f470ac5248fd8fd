//! Architectural Register File.
//!
//! This module provides the `RegisterFile` struct holding the committed values of
//! the sixteen APEX registers. It provides:
//! 1. **Committed Storage:** The values visible once an instruction has retired.
//! 2. **Access:** Read and write by register index.
//! 3. **Observability:** A copy of all values for inspection dumps.
//!
//! Only the writeback stage writes here; in-flight values live in the scoreboard.

use crate::common::constants::REG_FILE_SIZE;

/// Committed register values for `R0`-`R15`.
///
/// There is no hardwired zero register; `R0` is an ordinary register.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i32; REG_FILE_SIZE],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a committed register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15). Callers validate indices at load time.
    pub fn read(&self, idx: usize) -> i32 {
        self.regs[idx]
    }

    /// Writes a committed register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    /// * `val` - The value to commit.
    pub fn write(&mut self, idx: usize, val: i32) {
        self.regs[idx] = val;
    }

    /// Returns all committed values in register order.
    pub fn values(&self) -> [i32; REG_FILE_SIZE] {
        self.regs
    }
}
