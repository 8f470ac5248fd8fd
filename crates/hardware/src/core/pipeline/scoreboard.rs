//! Register scoreboard with single-slot forwarding.
//!
//! Maps each architectural register to its latest in-flight producer, or `None`
//! if the committed value in the register file is current. A producer enters the
//! scoreboard when it executes and publishes its value there (loads publish later,
//! from the memory stage). Decode reads forwarded values from here instead of
//! waiting for writeback.

use serde::Serialize;

use crate::common::constants::REG_FILE_SIZE;

/// The latest in-flight producer of a register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Producer {
    /// Fetch sequence number of the producing instruction.
    pub seq: u64,
    /// Forwarded value; `None` until a load's memory stage runs.
    pub value: Option<i32>,
}

/// Per-register pending producer table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    slots: [Option<Producer>; REG_FILE_SIZE],
}

impl Scoreboard {
    /// Create a new scoreboard with all registers clear (no pending writers).
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a register as pending with the given producer.
    ///
    /// # Returns
    ///
    /// The producer that previously owned the slot, so the caller can detect a
    /// second writer still in flight.
    pub const fn mark_pending(&mut self, reg: usize, seq: u64, value: Option<i32>) -> Option<Producer> {
        self.slots[reg].replace(Producer { seq, value })
    }

    /// Publish a value for a producer that marked the register earlier with no
    /// value. Ignored when a newer producer owns the slot.
    pub fn resolve(&mut self, reg: usize, seq: u64, value: i32) {
        if let Some(p) = self.slots[reg].as_mut().filter(|p| p.seq == seq) {
            p.value = Some(value);
        }
    }

    /// Current producer of a register.
    pub const fn producer(&self, reg: usize) -> Option<Producer> {
        self.slots[reg]
    }

    /// Whether a register has an in-flight producer.
    pub const fn is_pending(&self, reg: usize) -> bool {
        self.slots[reg].is_some()
    }

    /// Clear a register's pending writer, but ONLY if `seq` still owns it.
    /// A retiring producer must not clear the slot of a newer writer.
    pub fn release(&mut self, reg: usize, seq: u64) {
        let slot = &mut self.slots[reg];
        if slot.is_some_and(|p| p.seq == seq) {
            *slot = None;
        }
    }
}
