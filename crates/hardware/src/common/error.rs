//! Simulator error definitions.
//!
//! This module defines the single error type used across the simulator. It covers:
//! 1. **Construction Failures:** Unreadable or malformed program input, invalid configuration.
//! 2. **Precondition Violations:** Fetching outside the instruction table or addressing
//!    outside the data memory array.
//! 3. **Execution Faults:** Arithmetic faults raised at execute dispatch time.
//!
//! None of these are recoverable; a run that produces one stops immediately.

use thiserror::Error;

/// Errors raised while building or running the simulated machine.
#[derive(Debug, Error)]
pub enum SimError {
    /// The program file could not be read.
    #[error("could not read program '{path}': {source}")]
    Io {
        /// Path that failed to open.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A program line could not be parsed into an instruction.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based source line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// The instruction table contains no instructions.
    #[error("program contains no instructions")]
    EmptyProgram,

    /// An instruction names a register outside the register file.
    #[error("instruction at pc {pc} references register R{index}, which does not exist")]
    InvalidRegister {
        /// Program counter of the offending instruction.
        pc: i32,
        /// Register index that was out of range.
        index: usize,
    },

    /// The program counter left the loaded instruction table.
    #[error("fetch from pc {pc} is outside the instruction table")]
    FetchOutOfRange {
        /// Program counter that could not be fetched.
        pc: i32,
    },

    /// A load or store addressed a word outside the data memory array.
    #[error("memory address {address} (pc {pc}) is outside the data memory array")]
    MemoryOutOfRange {
        /// Computed effective address.
        address: i32,
        /// Program counter of the memory instruction.
        pc: i32,
    },

    /// A DIV instruction had a zero divisor.
    #[error("division by zero at pc {pc}")]
    DivideByZero {
        /// Program counter of the DIV instruction.
        pc: i32,
    },

    /// The configuration file could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
