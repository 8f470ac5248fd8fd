//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the APEX pipeline. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics (IPC, CPI).
//! 2. **Instruction mix:** Retired counts by category (ALU, load, store, control, other).
//! 3. **Control flow:** Taken redirects, fetch bubbles and flushed instructions.
//! 4. **Hazards:** Forwarded operand reads and the hazards the pipeline flags but does not stall for.

use serde::Serialize;

use crate::isa::InstClass;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired by writeback.
    pub instructions_retired: u64,

    /// Count of ALU (register and literal arithmetic/logic) instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of branch/jump instructions retired.
    pub inst_control: u64,
    /// Count of MOVC, CMP, NOP and HALT instructions retired.
    pub inst_other: u64,

    /// Branches and jumps that redirected fetch.
    pub branches_taken: u64,
    /// Fetch cycles lost to a redirect bubble.
    pub fetch_bubbles: u64,
    /// Instructions discarded from the decode latch by a redirect.
    pub flushed: u64,

    /// Source operands satisfied from the scoreboard rather than the register file.
    pub forwarded_reads: u64,
    /// Producers that executed while an older producer of the same register was in flight.
    pub waw_hazards: u64,
    /// Operands read in the same cycle their load producer executed.
    pub load_use_hazards: u64,
}

impl SimStats {
    /// Counts one retired instruction of the given class.
    pub const fn record_retire(&mut self, class: InstClass) {
        self.instructions_retired += 1;
        match class {
            InstClass::Alu => self.inst_alu += 1,
            InstClass::Load => self.inst_load += 1,
            InstClass::Store => self.inst_store += 1,
            InstClass::Control => self.inst_control += 1,
            InstClass::Other => self.inst_other += 1,
        }
    }

    /// Instructions retired per cycle; `0.0` before the first cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions_retired as f64 / self.cycles as f64
        }
    }

    /// Cycles per retired instruction; `0.0` before the first retirement.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        println!("\n==========================================================");
        println!("APEX PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", self.ipc());
        println!("sim_cpi                  {:.4}", self.cpi());
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
        println!("  op.load                {} ({:.2}%)", self.inst_load, pct(self.inst_load));
        println!("  op.store               {} ({:.2}%)", self.inst_store, pct(self.inst_store));
        println!(
            "  op.control             {} ({:.2}%)",
            self.inst_control,
            pct(self.inst_control)
        );
        println!("  op.other               {} ({:.2}%)", self.inst_other, pct(self.inst_other));
        println!("----------------------------------------------------------");
        println!("CONTROL FLOW");
        println!("  redirects.taken        {}", self.branches_taken);
        println!("  fetch.bubbles          {}", self.fetch_bubbles);
        println!("  decode.flushed         {}", self.flushed);
        println!("----------------------------------------------------------");
        println!("HAZARDS");
        println!("  operands.forwarded     {}", self.forwarded_reads);
        println!("  hazards.waw            {}", self.waw_hazards);
        println!("  hazards.load_use       {}", self.load_use_hazards);
        println!("==========================================================");
    }
}
