//! Data Memory.
//!
//! This module implements the flat data memory touched by the memory stage. It provides:
//! 1. **Storage:** A zero-initialised array of signed 32-bit words.
//! 2. **Access:** Bounds-checked word reads and writes addressed by signed effective address.
//! 3. **Inspection:** A prefix view used by dumps and snapshots.

use crate::common::SimError;

/// Word-addressed data memory.
///
/// Effective addresses index words directly; there is no byte addressing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    words: Vec<i32>,
}

impl DataMemory {
    /// Creates a zeroed memory of `size` words.
    pub fn new(size: usize) -> Self {
        Self {
            words: vec![0; size],
        }
    }

    /// Number of words in the array.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the array has zero words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn index(&self, address: i32, pc: i32) -> Result<usize, SimError> {
        usize::try_from(address)
            .ok()
            .filter(|&i| i < self.words.len())
            .ok_or(SimError::MemoryOutOfRange { address, pc })
    }

    /// Reads the word at `address`.
    ///
    /// # Arguments
    ///
    /// * `address` - Effective word address.
    /// * `pc` - Program counter of the accessing instruction, for error reporting.
    pub fn read(&self, address: i32, pc: i32) -> Result<i32, SimError> {
        let i = self.index(address, pc)?;
        Ok(self.words[i])
    }

    /// Writes `value` to the word at `address`.
    ///
    /// # Arguments
    ///
    /// * `address` - Effective word address.
    /// * `value` - Word to store.
    /// * `pc` - Program counter of the accessing instruction, for error reporting.
    pub fn write(&mut self, address: i32, value: i32, pc: i32) -> Result<(), SimError> {
        let i = self.index(address, pc)?;
        self.words[i] = value;
        Ok(())
    }

    /// The first `count` words, clamped to the array length.
    pub fn prefix(&self, count: usize) -> &[i32] {
        &self.words[..count.min(self.words.len())]
    }
}
