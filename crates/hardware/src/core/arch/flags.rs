//! Condition flag register.
//!
//! APEX keeps two condition flags, written in the execute stage and read by the
//! conditional branches in the same stage:
//! 1. **Zero:** The last flag-setting result was zero (or a CMP found equality).
//! 2. **Positive:** The last flag-setting result was positive (or CMP found `rs1 > rs2`).

use serde::Serialize;

use crate::config::FlagPolicy;
use crate::core::units::alu::AluOp;

/// Zero and positive condition flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Flags {
    /// Zero flag.
    pub zero: bool,
    /// Positive flag.
    pub positive: bool,
}

impl Flags {
    /// Updates both flags after an ALU instruction.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation that produced `result`.
    /// * `result` - The value written to `rd`.
    /// * `policy` - Which flag rules to apply.
    pub const fn update_alu(&mut self, op: AluOp, result: i32, policy: FlagPolicy) {
        match policy {
            FlagPolicy::Corrected => {
                self.zero = result == 0;
                self.positive = result > 0;
            }
            FlagPolicy::Legacy => {
                if op.is_logical() {
                    return;
                }
                self.zero = result == 0;
                self.positive = result != 0;
            }
        }
    }

    /// MOVC only touches the zero flag.
    pub const fn update_zero(&mut self, result: i32) {
        self.zero = result == 0;
    }

    /// Sets the flags from a signed comparison of `lhs` against `rhs`.
    pub const fn update_compare(&mut self, lhs: i32, rhs: i32) {
        self.zero = lhs == rhs;
        self.positive = lhs > rhs;
    }
}
