//! Memory-side components of the simulated machine.
//!
//! APEX has no bus or devices; the only component here is the word-addressed
//! data memory accessed by the memory stage.

/// Word-addressed data memory.
pub mod memory;

pub use memory::DataMemory;
