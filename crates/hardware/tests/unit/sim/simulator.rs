//! # Simulator Tests
//!
//! Stepping through the session type: halt latching, run budgets, and reset.

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::{SUM_TO_TEN, TestContext};
use mipsim_core::config::Config;
use mipsim_core::core::pipeline::trace::Verdict;
use mipsim_core::{HaltReason, Simulator};

#[test]
fn test_with_program_sets_length_and_pc() {
    let sim = Simulator::with_program(&Config::default(), &SUM_TO_TEN).unwrap();
    assert_eq!(sim.program_words(), 4);
    assert_eq!(sim.cpu.pc, 0);
    assert_eq!(sim.cycles(), 0);
    assert_eq!(sim.halted(), None);
}

#[test]
fn test_halted_simulator_stays_halted() {
    let mut tc = TestContext::with_memory(8)
        .load_program(&[InstructionBuilder::new().addi(8, 0, 1).build()]);
    let reason = tc.run_to_halt(10);
    assert_eq!(reason, HaltReason::OutOfRange { pc: 8 });

    let snapshot = tc.sim.cpu.clone();
    let cycles = tc.sim.cycles();
    for _ in 0..3 {
        let out = tc.step();
        assert_eq!(out.verdict, Verdict::Halt(reason));
        assert!(out.trace.is_none());
    }
    assert_eq!(tc.sim.cpu, snapshot);
    assert_eq!(tc.sim.cycles(), cycles);
}

#[test]
fn test_fault_is_latched() {
    let mut tc =
        TestContext::new().load_program(&[InstructionBuilder::new().lw(8, 0, -4).build()]);
    let reason = tc.run_to_halt(2);
    assert!(matches!(reason, HaltReason::MemoryFault { .. }));
    assert_eq!(tc.sim.halted(), Some(reason));
    assert_eq!(tc.sim.cycles(), 1);
    assert_eq!(tc.sim.step().verdict, Verdict::Halt(reason));
}

#[test]
fn test_run_respects_budget() {
    let spin = InstructionBuilder::new().beq(0, 0, -1).build();
    let mut sim = Simulator::with_program(&Config::default(), &[spin]).unwrap();
    let summary = sim.run(50);
    assert_eq!(summary.steps, 50);
    assert_eq!(summary.halt, None);
    assert_eq!(sim.cpu.pc, 0);
    assert_eq!(sim.stats.branches_taken, 50);
}

#[test]
fn test_run_stops_at_halt() {
    let mut config = Config::default();
    config.memory.size = 16;
    let mut sim = Simulator::with_program(&config, &SUM_TO_TEN).unwrap();
    let summary = sim.run(100);
    assert_eq!(summary.steps, 4);
    assert_eq!(summary.halt, Some(HaltReason::OutOfRange { pc: 16 }));
}

#[test]
fn test_reset_clears_session() {
    let mut sim = Simulator::with_program(&Config::default(), &SUM_TO_TEN).unwrap();
    let _ = sim.run(10);
    sim.reset();
    assert_eq!(sim.cycles(), 0);
    assert_eq!(sim.halted(), None);
    assert_eq!(sim.program_words(), 0);
    assert_eq!(sim.cpu.registers(), [0; 32]);
    assert_eq!(sim.stats.instructions_retired, 0);
}

#[test]
fn test_initial_memory_image_via_from_cpu() {
    let mut cpu = mipsim_core::Cpu::with_memory_size(64);
    cpu.store_data_word(32, 41).unwrap();
    let mut sim = Simulator::from_cpu(cpu);
    sim.load_program(&[
        InstructionBuilder::new().lw(8, 0, 32).build(),
        InstructionBuilder::new().addi(8, 8, 1).build(),
    ])
    .unwrap();
    let _ = sim.run(2);
    assert_eq!(sim.cpu.get_register(8), 42);
}

#[test]
fn test_load_program_after_halt_starts_new_run() {
    let mut tc =
        TestContext::new().load_program(&[InstructionBuilder::new().lw(8, 0, -4).build()]);
    let reason = tc.run_to_halt(2);
    assert!(matches!(reason, HaltReason::MemoryFault { .. }));

    tc.sim.load_program(&SUM_TO_TEN).unwrap();
    assert_eq!(tc.sim.halted(), None);
    assert_eq!(tc.sim.cycles(), 0);
    assert_eq!(tc.sim.stats.cycles, 0);
    assert_eq!(tc.sim.stats.halt, None);

    let out = tc.step();
    assert_eq!(out.verdict, Verdict::Continue);
    let rec = out.trace.unwrap();
    assert_eq!(rec.pc, 0);
    assert_eq!(rec.inst, SUM_TO_TEN[0]);
    assert_eq!(tc.sim.cycles(), 1);
}
