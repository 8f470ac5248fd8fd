//! Loader and run driver tests.

/// Reading program files from disk.
pub mod loader;
