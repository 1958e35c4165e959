//! # Whole-Program Tests
//!
//! Runs the sample programs end to end and checks final machine state.

use crate::common::harness::{COUNTDOWN_SUM, SUM_TO_TEN, TestContext};
use mipsim_core::HaltReason;
use mipsim_core::isa::abi::{REG_T0, REG_T1, REG_T2};
use pretty_assertions::assert_eq;

#[test]
fn countdown_sum_stores_fifteen() {
    let mut tc = TestContext::new().load_program(&COUNTDOWN_SUM);
    // 2 setup + 4 full iterations + last ADD/ADDI/BEQ + SW
    tc.run_steps(22);

    assert_eq!(tc.get_reg(REG_T0), 0);
    assert_eq!(tc.get_reg(REG_T1), 15);
    assert_eq!(tc.data_word(0), 15);
    assert_eq!(tc.cpu().mem.window(0, 4), &[0x0F, 0x00, 0x00, 0x00]);
    assert_eq!(tc.last_record().mnemonic, "SW");
    assert_eq!(tc.cpu().pc, 28);
}

#[test]
fn countdown_sum_runs_to_end_of_memory() {
    let mut tc = TestContext::new().load_program(&COUNTDOWN_SUM);
    let reason = tc.run_to_halt(2000);

    assert_eq!(reason, HaltReason::OutOfRange { pc: 4096 });
    // everything after the program is zero words, retired as no-ops
    assert_eq!(tc.sim.cycles(), 22 + (4096 - 28) / 4);
    assert_eq!(tc.sim.stats.inst_unimplemented, (4096 - 28) / 4);
    assert_eq!(tc.sim.stats.branches_taken, 5);
    assert_eq!(tc.data_word(0), 15);
    assert_eq!(tc.sim.stats.halt, Some(reason));
}

#[test]
fn countdown_sum_trace_records_store() {
    let mut tc = TestContext::new().load_program(&COUNTDOWN_SUM);
    tc.run_steps(22);
    let rec = tc.last_record();
    assert_eq!(rec.cycle, 22);
    assert_eq!(rec.pc, 24);
    assert_eq!(rec.mem_write.map(|m| (m.addr, m.value)), Some((0, 15)));
}

#[test]
fn sum_to_ten_stores_eleven() {
    let mut tc = TestContext::new().load_program(&SUM_TO_TEN);
    tc.run_steps(4);

    assert_eq!(tc.get_reg(REG_T0), 10);
    assert_eq!(tc.get_reg(REG_T1), 1);
    assert_eq!(tc.get_reg(REG_T2), 11);
    assert_eq!(tc.data_word(0), 11);
}

#[test]
fn overflowing_add_wraps() {
    let mut tc = TestContext::new().load_program(&[0x0109_5020]);
    tc.set_reg(REG_T0, 0x7FFF_FFFF);
    tc.set_reg(REG_T1, 1);
    tc.run_steps(1);
    assert_eq!(tc.get_reg(REG_T2), 0x8000_0000);
}
