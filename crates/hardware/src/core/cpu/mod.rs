//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Maintains registers, scoreboard, flags and program counter.
//! 2. **Pipeline Control:** Owns the five single-buffered stage latches and fetch control flags.
//! 3. **Memory:** Holds the instruction table and the word-addressed data memory.
//! 4. **Observability:** Statistics, the hazard log and the per-tick stage view.

/// Per-tick pipeline advance.
pub mod execution;

/// Read-only machine snapshots and dumps.
pub mod inspect;

use tracing::warn;

use crate::common::constants::{INSTRUCTION_SIZE, REG_FILE_SIZE};
use crate::common::{RegisterFile, SimError};
use crate::config::{Config, FlagPolicy, RunMode};
use crate::core::arch::Flags;
use crate::core::pipeline::hazards::{HazardEvent, HazardKind};
use crate::core::pipeline::latches::Latch;
use crate::core::pipeline::scoreboard::Scoreboard;
use crate::core::pipeline::view::PipelineView;
use crate::isa::Program;
use crate::soc::DataMemory;
use crate::stats::SimStats;

pub use execution::TickOutcome;
pub use inspect::{MachineSnapshot, RegisterState};

/// Main CPU structure containing all machine state.
///
/// The driver owns the `Cpu`; stage handlers borrow it mutably one at a time.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Instruction table.
    pub program: Program,
    /// Address of instruction 0.
    pub base_address: i32,

    /// Committed architectural registers.
    pub regs: RegisterFile,
    /// In-flight producers and forwarded values.
    pub scoreboard: Scoreboard,
    /// Data memory.
    pub memory: DataMemory,
    /// Zero and positive condition flags.
    pub flags: Flags,

    /// Last instruction fetched (empty during a bubble).
    pub fetch_latch: Latch,
    /// Instruction waiting for decode.
    pub decode_latch: Latch,
    /// Instruction waiting for execute.
    pub execute_latch: Latch,
    /// Instruction waiting for memory.
    pub memory_latch: Latch,
    /// Instruction waiting for writeback.
    pub writeback_latch: Latch,

    /// Program Counter of the next fetch.
    pub pc: i32,
    /// Ticks executed so far.
    pub clock: u64,
    /// Set by a taken redirect; fetch idles for one tick and clears it.
    pub fetch_suspended_one_cycle: bool,
    /// Set once HALT is fetched; cleared by a redirect.
    pub fetch_halted: bool,
    /// Set once HALT retires.
    pub halted: bool,
    /// Sequence number for the next fetched instruction.
    pub next_seq: u64,

    /// Stop condition for the driver.
    pub run_mode: RunMode,
    /// Flag update behaviour for ALU instructions.
    pub flag_policy: FlagPolicy,
    /// Emit per-stage trace events.
    pub trace: bool,

    /// Performance counters.
    pub stats: SimStats,
    /// Hazards flagged so far, oldest first.
    pub hazards: Vec<HazardEvent>,
    /// What each stage handled during the last tick.
    pub view: PipelineView,
}

impl Cpu {
    /// Creates a machine ready to fetch the first instruction.
    ///
    /// # Arguments
    ///
    /// * `program` - Instruction table; instruction `i` lives at `base + 4 * i`.
    /// * `run_mode` - Stop condition used by the driver.
    /// * `config` - Base address, data memory size, flag policy and tracing.
    ///
    /// # Errors
    ///
    /// `SimError::EmptyProgram` for an empty table, `SimError::InvalidRegister`
    /// when an instruction names a register outside `R0`-`R15`.
    pub fn new(program: Program, run_mode: RunMode, config: &Config) -> Result<Self, SimError> {
        if program.is_empty() {
            return Err(SimError::EmptyProgram);
        }
        let base = config.pipeline.base_address;
        let mut pc = base;
        for inst in program.instructions() {
            if let Some(&index) = inst.registers().iter().find(|&&r| r >= REG_FILE_SIZE) {
                return Err(SimError::InvalidRegister { pc, index });
            }
            pc = pc.wrapping_add(INSTRUCTION_SIZE);
        }

        Ok(Self {
            program,
            base_address: base,
            regs: RegisterFile::new(),
            scoreboard: Scoreboard::new(),
            memory: DataMemory::new(config.memory.data_words),
            flags: Flags::default(),
            fetch_latch: Latch::Empty,
            decode_latch: Latch::Empty,
            execute_latch: Latch::Empty,
            memory_latch: Latch::Empty,
            writeback_latch: Latch::Empty,
            pc: base,
            clock: 0,
            fetch_suspended_one_cycle: false,
            fetch_halted: false,
            halted: false,
            next_seq: 0,
            run_mode,
            flag_policy: config.pipeline.flag_policy,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
            hazards: Vec::new(),
            view: PipelineView::default(),
        })
    }

    /// Records a hazard the pipeline does not stall for.
    ///
    /// # Arguments
    ///
    /// * `kind` - Hazard category.
    /// * `register` - Register involved.
    /// * `pc` - Address of the instruction that observed it.
    pub fn flag_hazard(&mut self, kind: HazardKind, register: usize, pc: i32) {
        let event = HazardEvent {
            cycle: self.clock,
            kind,
            register,
            pc,
        };
        warn!(cycle = self.clock, register, pc, ?kind, "hazard flagged");
        match kind {
            HazardKind::MultipleProducers => self.stats.waw_hazards += 1,
            HazardKind::LoadUse => self.stats.load_use_hazards += 1,
        }
        self.hazards.push(event);
    }
}
