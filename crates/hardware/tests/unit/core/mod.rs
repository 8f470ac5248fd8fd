//! Core tests: machine construction, flags and the pipeline.

/// Condition flag policies.
pub mod flags;

/// Machine construction, snapshots and the stage view.
pub mod machine;
