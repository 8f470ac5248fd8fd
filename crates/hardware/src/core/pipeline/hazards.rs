//! Data Hazard Handling and Forwarding.
//!
//! This module implements the logic for reading source operands while earlier
//! producers are still in flight. It provides:
//! 1. **Operand Forwarding:** Resolves Read-After-Write (RAW) hazards from the scoreboard.
//! 2. **Hazard Flagging:** Describes the hazards the pipeline does not stall for
//!    (a second producer in flight, a load consumed the very next cycle).
//!
//! The pipeline never stalls. Hazards it cannot resolve are recorded as
//! `HazardEvent`s and counted in the statistics.

use std::fmt;

use serde::Serialize;

use crate::common::RegisterFile;
use crate::core::pipeline::scoreboard::Scoreboard;

/// Where a decoded operand value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandSource {
    /// No producer in flight; the committed register value.
    RegisterFile,
    /// The value published by an in-flight producer.
    Forwarded,
    /// A load producer has not reached memory yet; the committed value is used.
    LoadUse,
}

/// A source operand value together with its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operand {
    /// The value handed to execute.
    pub value: i32,
    /// Where it came from.
    pub source: OperandSource,
}

/// Reads a source register through the scoreboard.
///
/// # Arguments
///
/// * `regs` - Committed register file.
/// * `scoreboard` - Pending producer table.
/// * `reg` - Register index to read.
///
/// # Returns
///
/// The forwarded value when the register's producer has published one, the
/// committed value otherwise.
pub fn read_operand(regs: &RegisterFile, scoreboard: &Scoreboard, reg: usize) -> Operand {
    match scoreboard.producer(reg) {
        None => Operand {
            value: regs.read(reg),
            source: OperandSource::RegisterFile,
        },
        Some(p) => p.value.map_or_else(
            || Operand {
                value: regs.read(reg),
                source: OperandSource::LoadUse,
            },
            |value| Operand {
                value,
                source: OperandSource::Forwarded,
            },
        ),
    }
}

/// Category of a flagged hazard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HazardKind {
    /// A producer executed while an older producer of the same register was
    /// still in flight.
    MultipleProducers,
    /// A consumer was decoded in the same cycle its load producer executed.
    LoadUse,
}

/// A recorded hazard occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HazardEvent {
    /// Cycle the hazard was observed in.
    pub cycle: u64,
    /// Hazard category.
    pub kind: HazardKind,
    /// Register involved.
    pub register: usize,
    /// Address of the instruction that observed the hazard.
    pub pc: i32,
}

impl fmt::Display for HazardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            HazardKind::MultipleProducers => "second producer in flight",
            HazardKind::LoadUse => "load-use at distance 1",
        };
        write!(
            f,
            "cycle {}: {what} on R{} (pc {})",
            self.cycle, self.register, self.pc
        )
    }
}
