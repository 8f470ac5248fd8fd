//! APEX pipeline simulator CLI.
//!
//! This binary provides a single entry point for all simulation modes. It performs:
//! 1. **Simulate:** Run a program silently for a fixed number of cycles.
//! 2. **Display:** Same, printing the stage view after every cycle.
//! 3. **Single step:** Print the stage view and wait for input after every cycle.
//! 4. **Run:** Run a program until HALT retires.
//!
//! Every mode ends with the run summary, the register file, the first data
//! memory words, statistics and the hazard log (or all of that as JSON).

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use apex_pipe_core::SimError;
use apex_pipe_core::config::{Config, RunMode};
use apex_pipe_core::core::Cpu;
use apex_pipe_core::core::cpu::MachineSnapshot;
use apex_pipe_core::core::pipeline::hazards::HazardEvent;
use apex_pipe_core::sim::loader;
use apex_pipe_core::sim::{RunSummary, Simulator, StepControl};
use apex_pipe_core::stats::SimStats;

#[derive(Parser, Debug)]
#[command(
    name = "apex",
    author,
    version,
    about = "APEX five-stage in-order pipeline simulator",
    long_about = "Load an APEX assembly program and run it through the five-stage pipeline.\n\nExamples:\n  apex simulate prog.asm 50\n  apex display prog.asm 20\n  apex single-step prog.asm\n  apex run prog.asm --json"
)]
struct Cli {
    /// JSON configuration file; built-in defaults when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Trace every instruction movement (also raises the default log level).
    #[arg(long, global = true)]
    trace: bool,

    /// Print the final report as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run for at most N cycles without per-cycle output.
    Simulate {
        /// Assembly program.
        file: PathBuf,
        /// Cycle budget.
        cycles: u64,
    },

    /// Run for at most N cycles, printing every stage after each cycle.
    Display {
        /// Assembly program.
        file: PathBuf,
        /// Cycle budget.
        cycles: u64,
    },

    /// Advance one cycle per line of input; `q` quits.
    SingleStep {
        /// Assembly program.
        file: PathBuf,
    },

    /// Run until HALT retires.
    Run {
        /// Assembly program.
        file: PathBuf,
    },
}

impl Commands {
    fn file(&self) -> &Path {
        match self {
            Self::Simulate { file, .. }
            | Self::Display { file, .. }
            | Self::SingleStep { file }
            | Self::Run { file } => file,
        }
    }

    const fn run_mode(&self) -> RunMode {
        match *self {
            Self::Simulate { cycles, .. } | Self::Display { cycles, .. } => RunMode::Cycles(cycles),
            Self::SingleStep { .. } => RunMode::SingleStep,
            Self::Run { .. } => RunMode::Run,
        }
    }
}

/// Everything `--json` prints.
#[derive(Serialize)]
struct Report<'a> {
    summary: RunSummary,
    snapshot: MachineSnapshot,
    stats: &'a SimStats,
    hazards: &'a [HazardEvent],
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.trace);

    if let Err(e) = run(&cli) {
        eprintln!("apex: {e}");
        process::exit(1);
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--trace`.
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Loads the configuration and program, drives the selected mode and prints the report.
fn run(cli: &Cli) -> Result<(), SimError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if cli.trace {
        config.general.trace_instructions = true;
    }

    let program = loader::load_program(cli.command.file())?;
    let mut sim = Simulator::new(program, cli.command.run_mode(), &config)?;

    let summary = match cli.command {
        Commands::Simulate { .. } | Commands::Run { .. } => sim.run()?,
        Commands::Display { .. } => sim.run_with(|cpu| {
            print_cycle(cpu);
            StepControl::Continue
        })?,
        Commands::SingleStep { .. } => sim.run_with(|cpu| {
            print_cycle(cpu);
            prompt()
        })?,
    };

    report(&sim.cpu, summary, config.general.memory_dump_words, cli.json)
}

fn print_cycle(cpu: &Cpu) {
    println!("--------------------------------");
    println!("Clock Cycle #: {}", cpu.clock);
    println!("--------------------------------");
    print!("{}", cpu.view);
}

/// Waits for a line on stdin. `q`, end of input or an I/O error quits.
fn prompt() -> StepControl {
    prompt_on(&mut io::stdin().lock(), &mut io::stdout())
}

fn prompt_on(input: &mut impl BufRead, out: &mut impl Write) -> StepControl {
    if write!(out, "Press any key to advance CPU Clock or <q> to quit: ").is_err()
        || out.flush().is_err()
    {
        return StepControl::Quit;
    }

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => StepControl::Quit,
        Ok(_) if line.trim().eq_ignore_ascii_case("q") => StepControl::Quit,
        Ok(_) => StepControl::Continue,
    }
}

fn report(cpu: &Cpu, summary: RunSummary, dump_words: usize, json: bool) -> Result<(), SimError> {
    let snapshot = cpu.snapshot(dump_words);

    if json {
        let report = Report {
            summary,
            snapshot,
            stats: &cpu.stats,
            hazards: &cpu.hazards,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "\nAPEX_CPU: Simulation stopped ({:?}) after {} cycles, {} instructions retired",
        summary.stop_reason, summary.cycles, summary.instructions_retired
    );
    print!("{snapshot}");
    cpu.stats.print();

    if !cpu.hazards.is_empty() {
        println!("FLAGGED HAZARDS");
        for event in &cpu.hazards {
            println!("  {event}");
        }
    }
    Ok(())
}
