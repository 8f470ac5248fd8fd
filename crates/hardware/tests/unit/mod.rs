//! # Unit Components
//!
//! Tests grouped by the part of the simulator they exercise.

/// Configuration parsing and defaults.
pub mod config;

/// Pipeline stages, hazards and the CPU tick.
pub mod core;


/// Loader and run driver.
pub mod sim;
