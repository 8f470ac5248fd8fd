//! Condition Flag Tests.
//!
//! Flags are written in execute by ALU operations, MOVC and CMP, and read by
//! the conditional branches. The flag policy selects between corrected and
//! legacy update rules.

use apex_pipe_core::config::{Config, FlagPolicy, RunMode};
use apex_pipe_core::core::arch::flags::Flags;
use apex_pipe_core::isa::Program;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{ProgramBuilder, TestContext};

fn run_with_policy(program: Program, policy: FlagPolicy) -> Flags {
    let mut config = Config::default();
    config.pipeline.flag_policy = policy;
    let mut ctx = TestContext::with_config(program, RunMode::Run, &config);
    let _ = ctx.run();
    ctx.cpu().flags
}

fn flags(zero: bool, positive: bool) -> Flags {
    Flags { zero, positive }
}

#[rstest]
#[case::corrected(FlagPolicy::Corrected, flags(false, false))]
#[case::legacy(FlagPolicy::Legacy, flags(false, true))]
fn test_negative_sub_result(#[case] policy: FlagPolicy, #[case] expected: Flags) {
    let program = ProgramBuilder::new()
        .movc(1, 2)
        .movc(2, 5)
        .sub(3, 1, 2)
        .halt()
        .build();
    assert_eq!(run_with_policy(program, policy), expected);
}

#[rstest]
#[case::corrected(FlagPolicy::Corrected, flags(false, true))]
#[case::legacy(FlagPolicy::Legacy, flags(true, false))]
fn test_logical_result_after_cmp(#[case] policy: FlagPolicy, #[case] expected: Flags) {
    // CMP R1,R1 leaves Z=1 P=0; AND then produces 6 & 3 = 2.
    let program = ProgramBuilder::new()
        .movc(1, 6)
        .movc(2, 3)
        .cmp(1, 1)
        .and(3, 1, 2)
        .halt()
        .build();
    assert_eq!(run_with_policy(program, policy), expected);
}

#[rstest]
#[case(FlagPolicy::Corrected)]
#[case(FlagPolicy::Legacy)]
fn test_zero_result_sets_zero(#[case] policy: FlagPolicy) {
    let program = ProgramBuilder::new()
        .movc(1, 4)
        .subl(2, 1, 4)
        .halt()
        .build();
    assert_eq!(run_with_policy(program, policy), flags(true, false));
}

#[rstest]
#[case(FlagPolicy::Corrected)]
#[case(FlagPolicy::Legacy)]
fn test_movc_only_touches_zero(#[case] policy: FlagPolicy) {
    let program = ProgramBuilder::new()
        .movc(1, 5)
        .movc(2, 3)
        .cmp(1, 2)
        .movc(3, 0)
        .halt()
        .build();
    assert_eq!(run_with_policy(program, policy), flags(true, true));
}

#[rstest]
#[case::greater(9, 2, flags(false, true))]
#[case::equal(4, 4, flags(true, false))]
#[case::less(-3, 2, flags(false, false))]
fn test_cmp_is_signed(#[case] a: i32, #[case] b: i32, #[case] expected: Flags) {
    let program = ProgramBuilder::new()
        .movc(1, a)
        .movc(2, b)
        .cmp(1, 2)
        .halt()
        .build();
    assert_eq!(run_with_policy(program, FlagPolicy::Corrected), expected);
}
