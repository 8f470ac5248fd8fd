//! Pipeline Latch Interface.
//!
//! This module defines the common trait for inter-stage buffers. It provides
//! methods for flushing and status checking.

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the state of instructions as they move between stages. They support
/// flushing and status checks.
pub trait PipelineLatch {
    /// Clears the latch.
    ///
    /// Called on the decode latch when a taken branch or jump redirects fetch.
    fn flush(&mut self);

    /// Checks if the latch is empty.
    ///
    /// # Returns
    ///
    /// `true` if there is no valid instruction in the latch, `false` otherwise.
    fn is_empty(&self) -> bool;
}
