//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the record carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** A single `LatchEntry` is created by fetch and copied
//!    forward; each stage fills in the fields it computes.
//! 2. **Occupancy:** Each stage owns exactly one single-buffered latch that is
//!    either empty or holds one live instruction.
//! 3. **Flushing:** A redirect empties the decode latch through `PipelineLatch`.

use std::fmt;

use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::{Instruction, Opcode};

/// In-flight instruction record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatchEntry {
    /// Fetch order; orders producers in the scoreboard.
    pub seq: u64,
    /// Address the instruction was fetched from.
    pub pc: i32,
    /// Decoded instruction fields.
    pub inst: Instruction,
    /// Operand value of `rs1`, read at decode.
    pub rs1_value: i32,
    /// Operand value of `rs2`, read at decode.
    pub rs2_value: i32,
    /// Value destined for `rd`.
    pub result: i32,
    /// Effective data memory address for loads and stores.
    pub memory_address: i32,
    /// Post-incremented base value committed to `rs1` by LDI/STI.
    pub base_update: Option<i32>,
    /// Fetch found no instruction at `pc`. Fatal once decoded.
    pub fetch_fault: bool,
}

impl LatchEntry {
    /// Creates the fetch-time record for `inst` at `pc`.
    pub const fn new(seq: u64, pc: i32, inst: Instruction) -> Self {
        Self {
            seq,
            pc,
            inst,
            rs1_value: 0,
            rs2_value: 0,
            result: 0,
            memory_address: 0,
            base_update: None,
            fetch_fault: false,
        }
    }

    /// Placeholder for a fetch outside the instruction table.
    ///
    /// A redirect that flushes it leaves no trace; decoding it is fatal.
    pub const fn fetch_fault(seq: u64, pc: i32) -> Self {
        let mut entry = Self::new(seq, pc, Instruction::new(Opcode::Nop));
        entry.fetch_fault = true;
        entry
    }
}

impl fmt::Display for LatchEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fetch_fault {
            write!(f, "pc({}) <outside program>", self.pc)
        } else {
            write!(f, "pc({}) {}", self.pc, self.inst)
        }
    }
}

/// A single-buffered stage latch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Latch {
    /// No instruction is present.
    #[default]
    Empty,
    /// One live instruction.
    Occupied(LatchEntry),
}

impl Latch {
    /// The held entry, if any.
    pub const fn entry(&self) -> Option<&LatchEntry> {
        match self {
            Self::Empty => None,
            Self::Occupied(entry) => Some(entry),
        }
    }

    /// Removes and returns the held entry, leaving the latch empty.
    pub const fn take(&mut self) -> Option<LatchEntry> {
        match std::mem::replace(self, Self::Empty) {
            Self::Empty => None,
            Self::Occupied(entry) => Some(entry),
        }
    }

    /// Places `entry` in the latch, replacing anything already there.
    pub const fn put(&mut self, entry: LatchEntry) {
        *self = Self::Occupied(entry);
    }
}

impl PipelineLatch for Latch {
    fn flush(&mut self) {
        *self = Self::Empty;
    }

    fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Latch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Occupied(entry) => entry.fmt(f),
        }
    }
}
