//! APEX architectural state that is not part of the register file.
//!
//! 1. **Flags:** The zero and positive condition flags.

/// Zero/positive condition flag register.
pub mod flags;

pub use flags::Flags;
