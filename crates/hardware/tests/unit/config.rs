//! Configuration Tests.

use apex_pipe_core::SimError;
use apex_pipe_core::config::{Config, FlagPolicy, RunMode};
use std::io::Write;

use crate::common::{ProgramBuilder, TestContext};

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.pipeline.base_address, 4000);
    assert_eq!(config.pipeline.flag_policy, FlagPolicy::Corrected);
    assert_eq!(config.memory.data_words, 4096);
    assert_eq!(config.general.memory_dump_words, 10);
    assert!(!config.general.trace_instructions);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.pipeline.base_address, 4000);
    assert_eq!(config.memory.data_words, 4096);
}

#[test]
fn test_partial_sections_fill_defaults() {
    let config =
        Config::from_json(r#"{ "pipeline": { "flag_policy": "Legacy" }, "memory": {} }"#).unwrap();
    assert_eq!(config.pipeline.flag_policy, FlagPolicy::Legacy);
    assert_eq!(config.pipeline.base_address, 4000);
    assert_eq!(config.memory.data_words, 4096);
}

#[test]
fn test_malformed_json_is_config_error() {
    let err = Config::from_json("{ \"pipeline\": ").unwrap_err();
    assert!(matches!(err, SimError::Config(_)), "{err}");
}

#[test]
fn test_unknown_flag_policy_rejected() {
    let err = Config::from_json(r#"{ "pipeline": { "flag_policy": "Sideways" } }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)), "{err}");
}

#[test]
fn test_zero_sized_memory_rejected() {
    let err = Config::from_json(r#"{ "memory": { "data_words": 0 } }"#).unwrap_err();
    assert!(err.to_string().contains("data_words"), "{err}");
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "general": {{ "memory_dump_words": 3 }} }}"#).unwrap();
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.general.memory_dump_words, 3);
}

#[test]
fn test_load_missing_file() {
    let err = Config::load("/nonexistent/apex-config.json").unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn test_run_mode_cycle_limit() {
    assert_eq!(RunMode::Cycles(12).cycle_limit(), Some(12));
    assert_eq!(RunMode::Run.cycle_limit(), None);
    assert_eq!(RunMode::SingleStep.cycle_limit(), None);
}

#[test]
fn test_custom_base_address_moves_code() {
    let config = Config::from_json(r#"{ "pipeline": { "base_address": 0 } }"#).unwrap();
    let program = ProgramBuilder::new().movc(1, 12).jump(1, 0).movc(2, 9).halt().build();
    let mut ctx = TestContext::with_config(program, RunMode::Run, &config);

    assert_eq!(ctx.cpu().pc, 0);
    let summary = ctx.run();
    // Address 12 is the HALT slot when code starts at 0.
    assert_eq!(ctx.reg(2), 0);
    assert_eq!(summary.instructions_retired, 3);
}

#[test]
fn test_memory_size_bounds_accesses() {
    let config = Config::from_json(r#"{ "memory": { "data_words": 8 } }"#).unwrap();
    let program = ProgramBuilder::new().movc(1, 8).store(1, 1, 0).halt().build();
    let mut ctx = TestContext::with_config(program, RunMode::Run, &config);
    let err = ctx.sim.run().unwrap_err();
    assert!(
        matches!(err, SimError::MemoryOutOfRange { address: 8, pc: 4004 }),
        "{err}"
    );
}
