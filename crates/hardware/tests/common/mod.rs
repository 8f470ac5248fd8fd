//! Shared test infrastructure.


/// Simulator harness.
pub mod harness;

pub use builder::ProgramBuilder;
pub use harness::{TestContext, init_tracing};
