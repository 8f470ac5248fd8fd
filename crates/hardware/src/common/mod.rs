//! Common utilities and types used throughout the APEX pipeline simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Code memory layout, register file and data memory sizes.
//! 2. **Error Handling:** The `SimError` type returned by every fallible operation.
//! 3. **Register Management:** The committed architectural register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for construction, precondition and execution failures.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use error::SimError;
pub use reg::RegisterFile;
