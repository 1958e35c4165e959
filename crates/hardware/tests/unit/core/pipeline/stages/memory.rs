//! Memory Stage Unit Tests.
//!
//! Verifies little-endian data reads and writes and the reported accesses.

use crate::common::harness::TestContext;
use mipsim_core::core::pipeline::latches::ExMemEntry;
use mipsim_core::core::pipeline::signals::ControlSignals;
use mipsim_core::core::pipeline::stages::mem_stage;
use mipsim_core::core::pipeline::trace::MemAccess;
use mipsim_core::isa::decode;

fn entry(inst: u32, alu: u32, store_data: u32, ctrl: ControlSignals) -> ExMemEntry {
    ExMemEntry {
        pc: 0,
        inst,
        decoded: decode(inst),
        rd: decode(inst).dest(),
        alu,
        store_data,
        branch_taken: false,
        ctrl,
    }
}

#[test]
fn store_writes_little_endian() {
    let mut tc = TestContext::new();
    let ctrl = ControlSignals {
        mem_write: true,
        ..ControlSignals::default()
    };
    let wb = mem_stage(tc.cpu_mut(), &entry(0xAC09_0010, 16, 0x0102_0304, ctrl)).unwrap();

    assert_eq!(tc.cpu().mem.window(16, 4), &[0x04, 0x03, 0x02, 0x01]);
    assert_eq!(
        wb.mem_write,
        Some(MemAccess {
            addr: 16,
            value: 0x0102_0304
        })
    );
    assert_eq!(wb.mem_read, None);
}

#[test]
fn load_reads_little_endian() {
    let mut tc = TestContext::new();
    tc.cpu_mut().store_data_word(32, 0xDEAD_BEEF).unwrap();
    let ctrl = ControlSignals {
        mem_read: true,
        reg_write: true,
        ..ControlSignals::default()
    };
    let wb = mem_stage(tc.cpu_mut(), &entry(0x8C08_0020, 32, 0, ctrl)).unwrap();

    assert_eq!(wb.load_data, 0xDEAD_BEEF);
    assert_eq!(
        wb.mem_read,
        Some(MemAccess {
            addr: 32,
            value: 0xDEAD_BEEF
        })
    );
}

#[test]
fn alu_instruction_passes_through() {
    let mut tc = TestContext::new();
    let ctrl = ControlSignals {
        reg_write: true,
        ..ControlSignals::default()
    };
    let wb = mem_stage(tc.cpu_mut(), &entry(0x0109_5020, 11, 0, ctrl)).unwrap();
    assert_eq!(wb.alu, 11);
    assert_eq!(wb.mem_read, None);
    assert_eq!(wb.mem_write, None);
}

#[test]
fn out_of_range_access_is_reported() {
    let mut tc = TestContext::with_memory(64);
    let ctrl = ControlSignals {
        mem_write: true,
        ..ControlSignals::default()
    };
    assert!(mem_stage(tc.cpu_mut(), &entry(0xAC09_0040, 64, 1, ctrl)).is_err());
    assert!(tc.cpu().mem.as_slice().iter().all(|&b| b == 0));
}
