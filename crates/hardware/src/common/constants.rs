//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Code Memory Constants:** Base address and slot size of the instruction table.
//! 2. **Register Constants:** Size of the architectural register file.
//! 3. **Data Memory Constants:** Default size of the word-addressed data memory.
//! 4. **Reporting Constants:** Defaults for post-run inspection dumps.

/// Architectural address of the first instruction slot.
///
/// Code memory is addressed in the "4000 series": instruction `i` lives at
/// `CODE_BASE_ADDRESS + INSTRUCTION_SIZE * i`.
pub const CODE_BASE_ADDRESS: i32 = 4000;

/// Size of one instruction slot in bytes.
pub const INSTRUCTION_SIZE: i32 = 4;

/// Number of architectural registers (`R0`-`R15`).
pub const REG_FILE_SIZE: usize = 16;

/// Default number of words in the data memory array.
pub const DATA_MEMORY_SIZE: usize = 4096;

/// Increment applied to the base register by post-increment memory operations.
pub const POST_INCREMENT: i32 = 4;

/// Number of data memory words shown in the default post-run dump.
pub const DEFAULT_MEMORY_DUMP_WORDS: usize = 10;
