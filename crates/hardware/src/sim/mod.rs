//! Simulation front end.
//!
//! 1. **Loader:** Parses APEX assembly text into a `Program`.
//! 2. **Simulator:** Drives the machine and reports why the run ended.

/// Assembly program loader.
pub mod loader;

/// Run loop and run summaries.
pub mod simulator;

pub use simulator::{RunSummary, Simulator, StepControl, StopReason};
