//! Flagged Hazard Tests.
//!
//! The pipeline never stalls. A second in-flight producer of a register and a
//! load consumed at distance one are recorded in the hazard log and counted,
//! and execution carries on with whatever value decode could see.

use apex_pipe_core::core::pipeline::hazards::{HazardEvent, HazardKind};
use pretty_assertions::assert_eq;

use crate::common::ProgramBuilder;

#[test]
fn test_second_producer_is_flagged() {
    let mut ctx = ProgramBuilder::new()
        .movc(1, 1)
        .movc(1, 2)
        .add(2, 1, 1)
        .halt()
        .context();
    let _ = ctx.run();

    assert_eq!(
        ctx.cpu().hazards,
        vec![HazardEvent {
            cycle: 3,
            kind: HazardKind::MultipleProducers,
            register: 1,
            pc: 4004,
        }]
    );
    assert_eq!(ctx.cpu().stats.waw_hazards, 1);
    assert_eq!(ctx.reg(2), 4, "consumer sees the younger producer");
    assert_eq!(ctx.reg(1), 2);
}

#[test]
fn test_older_writeback_keeps_younger_reservation() {
    let mut ctx = ProgramBuilder::new()
        .movc(1, 1)
        .movc(1, 2)
        .halt()
        .context();

    let _ = ctx.step(5);
    assert_eq!(ctx.reg(1), 1, "first MOVC committed");
    assert!(
        ctx.cpu().scoreboard.is_pending(1),
        "second MOVC still owns the slot"
    );

    let _ = ctx.step(1);
    assert_eq!(ctx.reg(1), 2);
    assert!(!ctx.cpu().scoreboard.is_pending(1));
}

#[test]
fn test_load_use_reads_stale_register() {
    let mut ctx = ProgramBuilder::new()
        .movc(1, 33)
        .store(1, 0, 2)
        .load(4, 0, 2)
        .add(5, 4, 0)
        .halt()
        .context();
    let _ = ctx.run();

    assert_eq!(
        ctx.cpu().hazards,
        vec![HazardEvent {
            cycle: 4,
            kind: HazardKind::LoadUse,
            register: 4,
            pc: 4012,
        }]
    );
    assert_eq!(ctx.cpu().stats.load_use_hazards, 1);
    assert_eq!(ctx.reg(5), 0, "ADD used the committed R4");
    assert_eq!(ctx.reg(4), 33);
}

#[test]
fn test_one_instruction_gap_hides_load_latency() {
    let mut ctx = ProgramBuilder::new()
        .movc(1, 33)
        .store(1, 0, 2)
        .load(4, 0, 2)
        .nop()
        .add(5, 4, 0)
        .halt()
        .context();
    let _ = ctx.run();

    assert!(ctx.cpu().hazards.is_empty());
    assert_eq!(ctx.reg(5), 33);
}

#[test]
fn test_hazard_display() {
    let event = HazardEvent {
        cycle: 4,
        kind: HazardKind::LoadUse,
        register: 4,
        pc: 4012,
    };
    assert_eq!(
        event.to_string(),
        "cycle 4: load-use at distance 1 on R4 (pc 4012)"
    );
}
