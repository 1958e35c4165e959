//! # Statistics Tests
//!
//! Instruction mix, taken branches, discarded writes, and the report text.

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::{COUNTDOWN_SUM, TestContext};
use mipsim_core::HaltReason;
use mipsim_core::stats::SimStats;

#[test]
fn test_countdown_mix() {
    let mut tc = TestContext::new().load_program(&COUNTDOWN_SUM);
    tc.run_steps(22);
    let s = &tc.sim.stats;

    assert_eq!(s.cycles, 22);
    assert_eq!(s.instructions_retired, 22);
    // 2 setup ADDI + 5 x (ADD, ADDI)
    assert_eq!(s.inst_alu, 12);
    // exit test runs 5 times, back edge 4 times
    assert_eq!(s.inst_branch, 9);
    assert_eq!(s.inst_store, 1);
    assert_eq!(s.inst_load, 0);
    assert_eq!(s.branches_taken, 5);
    assert_eq!(s.halt, None);
}

#[test]
fn test_fault_step_counts_cycle_not_retirement() {
    let mut tc = TestContext::new().load_program(&[
        InstructionBuilder::new().addi(0, 0, 1).build(),
        InstructionBuilder::new().sw(0, 0, 4094).build(),
    ]);
    let reason = tc.run_to_halt(5);
    let s = &tc.sim.stats;

    assert_eq!(s.cycles, 2);
    assert_eq!(s.instructions_retired, 1);
    assert_eq!(s.zero_register_writes, 1);
    assert_eq!(s.inst_store, 0);
    assert_eq!(s.halt, Some(reason));
    assert!(matches!(reason, HaltReason::MemoryFault { addr: 4094, .. }));
}

#[test]
fn test_report_lists_counters() {
    let mut tc = TestContext::new().load_program(&COUNTDOWN_SUM);
    tc.run_steps(22);
    let report = tc.sim.stats.to_string();

    assert!(report.contains("SIMULATION STATISTICS"));
    assert!(report.contains("sim_cycles               22"));
    assert!(report.contains("op.store"));
    assert!(report.contains("branch.taken           5"));
    assert!(report.contains("(running)"));
}

#[test]
fn test_empty_report_has_no_division_by_zero() {
    let report = SimStats::default().to_string();
    assert!(report.contains("0.00%"));
}
