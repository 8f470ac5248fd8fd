//! Control Hazard Tests.
//!
//! Branches and jumps resolve in execute. A taken redirect discards the
//! instruction waiting in decode, idles fetch for one cycle and then fetches
//! from the target.

use apex_pipe_core::core::cpu::TickOutcome;
use apex_pipe_core::core::pipeline::Stage;
use apex_pipe_core::core::pipeline::traits::PipelineLatch;
use pretty_assertions::assert_eq;

use crate::common::{ProgramBuilder, TestContext};

// ══════════════════════════════════════════════════════════
// 1. Taken branch: one bubble, one flush
// ══════════════════════════════════════════════════════════

#[test]
fn test_taken_bz_flushes_decode_and_bubbles_fetch() {
    let mut ctx = ProgramBuilder::new()
        .movc(0, 0)
        .bz(8)
        .movc(1, 1)
        .movc(1, 2)
        .halt()
        .context();

    // Ticks 0-3: BZ resolves in the fourth tick.
    let _ = ctx.step(4);
    let cpu = ctx.cpu();
    assert_eq!(cpu.view.get(Stage::Execute).map(|e| e.pc), Some(4004));
    assert!(cpu.decode_latch.is_empty(), "MOVC R1,#1 must be flushed");
    assert!(cpu.fetch_latch.is_empty(), "fetch idles for one cycle");
    assert_eq!(cpu.view.get(Stage::Fetch), None);
    assert_eq!(cpu.pc, 4012);
    assert_eq!(cpu.stats.flushed, 1);
    assert_eq!(cpu.stats.fetch_bubbles, 1);

    // The next fetch comes from the target.
    let _ = ctx.step(1);
    assert_eq!(ctx.cpu().fetch_latch.entry().map(|e| e.pc), Some(4012));

    let summary = ctx.run();
    assert_eq!(ctx.reg(1), 2);
    assert_eq!(summary.instructions_retired, 4);
    assert_eq!(summary.cycles, 10);
    assert_eq!(ctx.cpu().stats.branches_taken, 1);
}

#[test]
fn test_not_taken_branch_falls_through() {
    let mut ctx = ProgramBuilder::new()
        .movc(0, 0)
        .bnz(8)
        .movc(1, 1)
        .halt()
        .context();
    let summary = ctx.run();
    assert_eq!(ctx.reg(1), 1);
    assert_eq!(summary.cycles, 8);
    let stats = &ctx.cpu().stats;
    assert_eq!(
        (stats.branches_taken, stats.fetch_bubbles, stats.flushed),
        (0, 0, 0)
    );
}

#[test]
fn test_bp_and_bnp_follow_positive_flag() {
    let mut ctx = ProgramBuilder::new()
        .movc(1, 5)
        .movc(2, 3)
        .cmp(1, 2)
        .bnp(8)
        .movc(3, 1)
        .bp(8)
        .movc(4, 1)
        .halt()
        .context();
    let _ = ctx.run();
    assert_eq!(ctx.reg(3), 1, "BNP not taken when R1 > R2");
    assert_eq!(ctx.reg(4), 0, "BP taken when R1 > R2");
}

// ══════════════════════════════════════════════════════════
// 2. JUMP
// ══════════════════════════════════════════════════════════

#[test]
fn test_jump_uses_forwarded_base() {
    let mut ctx = ProgramBuilder::new()
        .movc(1, 4012)
        .jump(1, 0)
        .movc(2, 9)
        .halt()
        .context();
    let summary = ctx.run();
    assert_eq!(ctx.reg(2), 0, "MOVC R2 is skipped");
    assert_eq!(summary.instructions_retired, 3);
    assert_eq!(summary.cycles, 9);
}

#[test]
fn test_jump_with_offset() {
    let mut ctx = ProgramBuilder::new()
        .movc(1, 4000)
        .jump(1, 16)
        .movc(2, 9)
        .movc(3, 9)
        .halt()
        .context();
    let _ = ctx.run();
    assert_eq!((ctx.reg(2), ctx.reg(3)), (0, 0));
}

// ══════════════════════════════════════════════════════════
// 3. Redirect after HALT was fetched
// ══════════════════════════════════════════════════════════

#[test]
fn test_redirect_discards_fetched_halt_and_resumes() {
    let mut ctx = ProgramBuilder::new()
        .movc(0, 0)
        .bz(8)
        .halt()
        .movc(1, 7)
        .halt()
        .context();

    let _ = ctx.step(3);
    assert!(ctx.cpu().fetch_halted, "HALT at 4008 stops fetch");

    let _ = ctx.step(1);
    assert!(!ctx.cpu().fetch_halted, "taken branch re-enables fetch");

    let summary = ctx.run();
    assert_eq!(ctx.reg(1), 7);
    assert_eq!(summary.instructions_retired, 4);
    assert_eq!(summary.cycles, 10);
}

// ══════════════════════════════════════════════════════════
// 4. Loops
// ══════════════════════════════════════════════════════════

#[test]
fn test_countdown_loop() {
    let mut ctx = TestContext::from_asm(
        "\
MOVC,R1,#3
MOVC,R2,#0
; loop body
ADDL,R2,R2,#1
SUBL,R1,R1,#1
BNZ,#-8
HALT",
    );
    let summary = ctx.run();
    assert_eq!((ctx.reg(1), ctx.reg(2)), (0, 3));
    assert_eq!(summary.instructions_retired, 12);
    assert_eq!(summary.cycles, 20);

    let stats = &ctx.cpu().stats;
    assert_eq!(stats.branches_taken, 2);
    assert_eq!(stats.fetch_bubbles, 2);
    assert_eq!(stats.flushed, 2, "the HALT fetched behind each taken BNZ");
}

// ══════════════════════════════════════════════════════════
// 5. Fetch past the end on a path that gets flushed
// ══════════════════════════════════════════════════════════

/// HALT sits before the loop body and the last slot is a backward JUMP, so
/// fetch reads one slot past the table while the JUMP is still in decode.
fn trailing_jump_loop() -> TestContext {
    ProgramBuilder::new()
        .movc(1, 2)
        .movc(5, 4016)
        .jump(5, 0)
        .halt()
        .subl(1, 1, 1)
        .bz(-8)
        .jump(5, 0)
        .context()
}

#[test]
fn test_fetch_past_end_is_flushed_by_trailing_jump() {
    let mut ctx = trailing_jump_loop();
    let summary = ctx.run();
    assert_eq!(ctx.reg(1), 0);
    assert!(ctx.cpu().halted);
    assert_eq!(ctx.cpu().stats.branches_taken, 3);
    assert_eq!(summary.instructions_retired, 9);
}

#[test]
fn test_fetch_fault_entry_waits_in_decode() {
    let mut ctx = trailing_jump_loop();
    let mut fault_pcs = Vec::new();
    while ctx.step(1) == TickOutcome::Running {
        if let Some(entry) = ctx.cpu().decode_latch.entry().filter(|e| e.fetch_fault) {
            fault_pcs.push(entry.pc);
        }
    }
    assert_eq!(fault_pcs, vec![4028]);
    assert_eq!(ctx.reg(1), 0);
}
