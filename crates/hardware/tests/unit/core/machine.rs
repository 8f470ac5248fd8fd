//! Machine Construction and Inspection Tests.

use apex_pipe_core::SimError;
use apex_pipe_core::config::{Config, RunMode};
use apex_pipe_core::core::Cpu;
use apex_pipe_core::isa::Program;
use pretty_assertions::assert_eq;

use crate::common::ProgramBuilder;

#[test]
fn test_empty_program_is_rejected() {
    let err = Cpu::new(Program::default(), RunMode::Run, &Config::default()).unwrap_err();
    assert!(matches!(err, SimError::EmptyProgram));
}

#[test]
fn test_out_of_range_register_is_rejected() {
    let program = ProgramBuilder::new().movc(1, 1).movc(16, 2).halt().build();
    let err = Cpu::new(program, RunMode::Run, &Config::default()).unwrap_err();
    assert!(
        matches!(err, SimError::InvalidRegister { pc: 4004, index: 16 }),
        "unexpected error: {err}"
    );
}

#[test]
fn test_initial_state() {
    let program = ProgramBuilder::new().halt().build();
    let cpu = Cpu::new(program, RunMode::Run, &Config::default()).unwrap();
    assert_eq!(cpu.pc, 4000);
    assert_eq!(cpu.clock, 0);
    assert!(!cpu.halted && !cpu.fetch_halted);
    assert!(cpu.regs.values().iter().all(|&v| v == 0));
    assert_eq!(cpu.memory.len(), 4096);
}

#[test]
fn test_divide_by_zero_is_fatal() {
    let mut ctx = ProgramBuilder::new()
        .movc(1, 8)
        .div(2, 1, 0)
        .halt()
        .context();
    let err = ctx.sim.run().unwrap_err();
    assert!(matches!(err, SimError::DivideByZero { pc: 4004 }));
}

#[test]
fn test_fetch_past_end_is_fatal() {
    let mut ctx = ProgramBuilder::new().movc(1, 8).context();
    let err = ctx.sim.run().unwrap_err();
    assert!(matches!(err, SimError::FetchOutOfRange { pc: 4004 }));
}

#[test]
fn test_snapshot_serializes() {
    let mut ctx = ProgramBuilder::new()
        .movc(0, 5)
        .movc(1, 10)
        .add(2, 0, 1)
        .halt()
        .context();
    let _ = ctx.run();

    let snapshot = ctx.snapshot();
    assert_eq!(snapshot.register(2), Some(15));
    assert_eq!(snapshot.register(16), None);
    assert_eq!(snapshot.memory.len(), 16);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["clock"], 8);
    assert_eq!(json["pc"], 4016);
    assert_eq!(json["flags"]["positive"], true);
    assert_eq!(json["registers"][2]["value"], 15);
    assert_eq!(json["registers"][2]["pending"], false);
}

#[test]
fn test_snapshot_display_marks_pending_registers() {
    let mut ctx = ProgramBuilder::new().movc(7, 3).halt().context();
    let _ = ctx.step(3);

    let dump = ctx.snapshot().to_string();
    assert!(dump.contains("STATE OF ARCHITECTURAL REGISTER FILE"));
    assert!(dump.contains("R[7]\t|\tValue=0     \t|\tstatus=invalid"));
    assert!(dump.contains("R[0]\t|\tValue=0     \t|\tstatus=valid"));
    assert!(dump.contains("MEM[15]"));
}
