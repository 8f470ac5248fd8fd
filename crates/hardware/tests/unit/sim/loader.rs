use std::io::Write;

use apex_pipe_core::SimError;
use apex_pipe_core::config::{Config, RunMode};
use apex_pipe_core::isa::Opcode;
use apex_pipe_core::sim::loader::load_program;
use apex_pipe_core::sim::{Simulator, StopReason};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn test_load_program_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "; add two constants\nMOVC,R0,#5\nMOVC,R1,#10\nADD,R2,R0,R1\nHALT"
    )
    .unwrap();

    let program = load_program(file.path()).unwrap();
    assert_eq!(program.len(), 4);
    assert_eq!(program.instructions()[2].opcode, Opcode::Add);

    let mut sim = Simulator::new(program, RunMode::Run, &Config::default()).unwrap();
    let summary = sim.run().unwrap();
    assert_eq!(summary.stop_reason, StopReason::Halted);
    assert_eq!(sim.cpu.regs.read(2), 15);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_program(dir.path().join("nope.asm")).unwrap_err();
    assert!(matches!(err, SimError::Io { .. }), "{err}");
    assert!(err.to_string().contains("nope.asm"));
}

#[test]
fn test_parse_error_in_file_reports_line() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "MOVC,R0,#5\n\nADD,R2,R0\nHALT").unwrap();
    let err = load_program(file.path()).unwrap_err();
    assert!(matches!(err, SimError::Parse { line: 3, .. }), "{err}");
}

#[test]
fn test_comment_only_file_cannot_build_machine() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "; nothing here\n").unwrap();
    let program = load_program(file.path()).unwrap();
    assert!(program.is_empty());
    assert!(matches!(
        Simulator::new(program, RunMode::Run, &Config::default()),
        Err(SimError::EmptyProgram)
    ));
}
