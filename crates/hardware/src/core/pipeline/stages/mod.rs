//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! instruction pipeline. It includes:
//! 1. **Fetch:** Reads the instruction table at the PC and fills the decode latch.
//! 2. **Decode:** Reads source operands through the scoreboard.
//! 3. **Execute:** Performs ALU operations, sets flags and resolves control flow.
//! 4. **Memory:** Handles data load and store operations.
//! 5. **Writeback:** Commits results to the register file and detects HALT.
//!
//! Stages run in reverse pipeline order each tick (see [`STAGE_ORDER`]) so that every
//! stage consumes its latch before the upstream stage overwrites it.

use std::fmt;

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::mem_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;

/// One of the five pipeline stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Instruction fetch.
    Fetch,
    /// Decode and register read.
    Decode,
    /// Execute.
    Execute,
    /// Data memory access.
    Memory,
    /// Register writeback.
    Writeback,
}

/// Order in which the driver invokes the stages within one tick.
pub const STAGE_ORDER: [Stage; 5] = [
    Stage::Writeback,
    Stage::Memory,
    Stage::Execute,
    Stage::Decode,
    Stage::Fetch,
];

impl Stage {
    /// Stages in program-flow order, as printed by dumps.
    pub const PIPELINE_ORDER: [Self; 5] = [
        Self::Fetch,
        Self::Decode,
        Self::Execute,
        Self::Memory,
        Self::Writeback,
    ];

    /// Position of the stage in program-flow order.
    pub const fn index(self) -> usize {
        match self {
            Self::Fetch => 0,
            Self::Decode => 1,
            Self::Execute => 2,
            Self::Memory => 3,
            Self::Writeback => 4,
        }
    }

    /// Display label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fetch => "Fetch",
            Self::Decode => "Decode/RF",
            Self::Execute => "Execute",
            Self::Memory => "Memory",
            Self::Writeback => "Writeback",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
