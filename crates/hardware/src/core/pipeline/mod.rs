//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage in-order pipeline.
//! It includes the following components:
//! 1. **Hazards:** Operand forwarding and flagging of the hazards the pipeline does not stall for.
//! 2. **Latches:** Single-buffered inter-stage latches.
//! 3. **Scoreboard:** Per-register pending producer and forwarded value.
//! 4. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//! 5. **Traits:** Common interface for pipeline latches.
//! 6. **View:** Record of what each stage handled in the last tick.

/// Operand forwarding and hazard records.
pub mod hazards;

/// Inter-stage pipeline latches.
pub mod latches;

/// Register scoreboard.
pub mod scoreboard;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Traits for pipeline components.
pub mod traits;

/// Per-tick stage occupancy view.
pub mod view;

pub use stages::{STAGE_ORDER, Stage};
