//! Fetch Stage Unit Tests.
//!
//! Verifies that `fetch_stage` correctly performs:
//!   1. Instruction fetching: reads big-endian words from memory
//!   2. PC advancement: sequential PC += 4 before decode
//!   3. Fetch guard: an out-of-range PC halts without touching state

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::TestContext;
use mipsim_core::HaltReason;
use mipsim_core::core::pipeline::stages::fetch_stage;

#[test]
fn fetches_word_and_advances_pc() {
    let nop = InstructionBuilder::new().addi(0, 0, 0).build();
    let mut tc = TestContext::new().load_program(&[nop, 0x2008_0005]);
    tc.cpu_mut().pc = 4;

    let entry = fetch_stage(tc.cpu_mut()).unwrap();
    assert_eq!(entry.pc, 4);
    assert_eq!(entry.inst, 0x2008_0005);
    assert_eq!(tc.cpu().pc, 8);
}

#[test]
fn last_full_word_is_fetchable() {
    let mut tc = TestContext::with_memory(64);
    tc.cpu_mut().store_instruction_word(60, 0x2008_0001).unwrap();
    tc.cpu_mut().pc = 60;

    let entry = fetch_stage(tc.cpu_mut()).unwrap();
    assert_eq!(entry.inst, 0x2008_0001);
    assert_eq!(tc.cpu().pc, 64);
}

#[test]
fn pc_at_memory_end_halts_out_of_range() {
    let mut tc = TestContext::with_memory(64);
    tc.cpu_mut().pc = 64;
    tc.set_reg(8, 3);

    let err = fetch_stage(tc.cpu_mut()).unwrap_err();
    assert_eq!(err, HaltReason::OutOfRange { pc: 64 });
    assert_eq!(tc.cpu().pc, 64, "PC must not move on a failed fetch");
    assert_eq!(tc.get_reg(8), 3);
}

#[test]
fn straddling_word_halts_out_of_range() {
    let mut tc = TestContext::with_memory(64);
    tc.cpu_mut().pc = 62;
    assert_eq!(
        fetch_stage(tc.cpu_mut()).unwrap_err(),
        HaltReason::OutOfRange { pc: 62 }
    );
}
