//! Per-tick stage occupancy view.
//!
//! Records which instruction each stage handled during the most recent tick.
//! The display and single-step front ends print it after every cycle.

use std::fmt;

use crate::core::pipeline::latches::LatchEntry;
use crate::core::pipeline::stages::Stage;

/// What each stage handled during the last tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PipelineView {
    slots: [Option<LatchEntry>; 5],
}

impl PipelineView {
    /// Forgets the previous tick.
    pub fn clear(&mut self) {
        self.slots = [None; 5];
    }

    /// Notes that `stage` handled `entry` this tick.
    pub const fn record(&mut self, stage: Stage, entry: LatchEntry) {
        self.slots[stage.index()] = Some(entry);
    }

    /// The instruction `stage` handled, if any.
    pub const fn get(&self, stage: Stage) -> Option<&LatchEntry> {
        self.slots[stage.index()].as_ref()
    }
}

impl fmt::Display for PipelineView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stage in Stage::PIPELINE_ORDER {
            match self.get(stage) {
                Some(entry) => writeln!(f, "{:<15}: {entry}", stage.name())?,
                None => writeln!(f, "{:<15}: Empty", stage.name())?,
            }
        }
        Ok(())
    }
}
