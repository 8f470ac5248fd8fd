use apex_pipe_core::Simulator;
use apex_pipe_core::config::{Config, RunMode};
use apex_pipe_core::core::Cpu;
use apex_pipe_core::core::cpu::{MachineSnapshot, TickOutcome};
use apex_pipe_core::isa::Program;
use apex_pipe_core::sim::RunSummary;
use apex_pipe_core::sim::loader::parse_program;

/// Installs a test-writer subscriber once; `RUST_LOG` selects the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct TestContext {
    pub sim: Simulator,
}

impl TestContext {
    pub fn new(program: Program) -> Self {
        Self::with_config(program, RunMode::Run, &Config::default())
    }

    pub fn with_config(program: Program, mode: RunMode, config: &Config) -> Self {
        init_tracing();
        let sim = Simulator::new(program, mode, config).expect("program should build a machine");
        Self { sim }
    }

    /// Parses assembly text and builds a default harness.
    pub fn from_asm(text: &str) -> Self {
        Self::new(parse_program(text).expect("test program should parse"))
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Committed value of a register.
    pub fn reg(&self, idx: usize) -> i32 {
        self.sim.cpu.regs.read(idx)
    }

    /// Data memory word.
    pub fn mem(&self, addr: i32) -> i32 {
        self.sim.cpu.memory.read(addr, 0).expect("address in range")
    }

    /// Advances exactly `n` ticks (fewer if HALT retires first).
    pub fn step(&mut self, n: u64) -> TickOutcome {
        let mut outcome = TickOutcome::Running;
        for _ in 0..n {
            outcome = self.sim.step().expect("tick should not fault");
            if outcome == TickOutcome::Halted {
                break;
            }
        }
        outcome
    }

    /// Runs to completion under the configured run mode.
    pub fn run(&mut self) -> RunSummary {
        self.sim.run().expect("run should not fault")
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        self.sim.cpu.snapshot(16)
    }
}
