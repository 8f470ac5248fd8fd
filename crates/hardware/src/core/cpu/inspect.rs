//! Machine state inspection.
//!
//! Builds serializable snapshots of the architectural state and renders the
//! register-file and data-memory dumps printed at the end of a run.

use std::fmt;

use serde::Serialize;

use super::Cpu;
use crate::core::arch::Flags;

/// One architectural register as seen from outside the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterState {
    /// Register index.
    pub index: usize,
    /// Committed value.
    pub value: i32,
    /// Whether an in-flight producer will overwrite it.
    pub pending: bool,
}

/// Point-in-time copy of the machine's architectural state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MachineSnapshot {
    /// Program Counter of the next fetch.
    pub pc: i32,
    /// Ticks executed.
    pub clock: u64,
    /// Condition flags.
    pub flags: Flags,
    /// All registers in index order.
    pub registers: Vec<RegisterState>,
    /// Leading data memory words.
    pub memory: Vec<i32>,
}

impl Cpu {
    /// Captures the current state.
    ///
    /// # Arguments
    ///
    /// * `memory_words` - How many leading data memory words to include.
    pub fn snapshot(&self, memory_words: usize) -> MachineSnapshot {
        let registers = self
            .regs
            .values()
            .iter()
            .enumerate()
            .map(|(index, &value)| RegisterState {
                index,
                value,
                pending: self.scoreboard.is_pending(index),
            })
            .collect();

        MachineSnapshot {
            pc: self.pc,
            clock: self.clock,
            flags: self.flags,
            registers,
            memory: self.memory.prefix(memory_words).to_vec(),
        }
    }
}

impl MachineSnapshot {
    /// Committed value of register `index`, if it exists.
    pub fn register(&self, index: usize) -> Option<i32> {
        self.registers.get(index).map(|r| r.value)
    }
}

impl fmt::Display for MachineSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RULE: &str = "-------------------------------------------";

        writeln!(f, "{RULE}\nSTATE OF ARCHITECTURAL REGISTER FILE:\n{RULE}")?;
        for reg in &self.registers {
            let status = if reg.pending { "invalid" } else { "valid" };
            writeln!(
                f,
                "|\tR[{}]\t|\tValue={:<6}\t|\tstatus={status}",
                reg.index, reg.value
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Z={} P={} pc={} clock={}",
            u8::from(self.flags.zero),
            u8::from(self.flags.positive),
            self.pc,
            self.clock
        )?;
        writeln!(f)?;

        writeln!(f, "{RULE}\nSTATE OF DATA MEMORY:\n{RULE}")?;
        for (i, value) in self.memory.iter().enumerate() {
            writeln!(f, "|\tMEM[{i}]\t|\tData Value={value}")?;
        }
        Ok(())
    }
}
