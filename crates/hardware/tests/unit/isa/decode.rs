//! # Decode Tests
//!
//! Field extraction, sign extension, and the opcode/funct dispatch.

use crate::common::builder::instruction::InstructionBuilder;
use mipsim_core::isa::instruction::{InstructionBits, sign_extend16};
use mipsim_core::isa::{Instruction, Unimplemented, decode};
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_field_extraction() {
    let w: u32 = 0x0128_4820;
    assert_eq!(w.opcode(), 0);
    assert_eq!(w.rs(), 9);
    assert_eq!(w.rt(), 8);
    assert_eq!(w.rd(), 9);
    assert_eq!(w.shamt(), 0);
    assert_eq!(w.funct(), 0x20);
    assert_eq!(w.imm16(), 0x4820);
}

#[rstest]
#[case(0x0000, 0)]
#[case(0x7FFF, 32767)]
#[case(0x8000, -32768)]
#[case(0xFFFF, -1)]
#[case(0xFFFC, -4)]
fn test_sign_extend16(#[case] imm: u16, #[case] want: i32) {
    assert_eq!(sign_extend16(imm), want);
}

#[rstest]
#[case(0x2008_0005, Instruction::Addi { rt: 8, rs: 0, imm: 5 })]
#[case(0x2108_FFFF, Instruction::Addi { rt: 8, rs: 8, imm: -1 })]
#[case(0x0128_4820, Instruction::Add { rd: 9, rs: 9, rt: 8 })]
#[case(0x0109_5022, Instruction::Sub { rd: 10, rs: 8, rt: 9 })]
#[case(0x8C0A_0004, Instruction::Lw { rt: 10, rs: 0, offset: 4 })]
#[case(0xAC09_0000, Instruction::Sw { rt: 9, rs: 0, offset: 0 })]
#[case(0x1100_0003, Instruction::Beq { rs: 8, rt: 0, offset: 3 })]
#[case(0x1000_FFFC, Instruction::Beq { rs: 0, rt: 0, offset: -4 })]
fn test_decode_supported(#[case] word: u32, #[case] want: Instruction) {
    assert_eq!(decode(word), want);
}

#[rstest]
#[case(0x0000_0000, Instruction::Unimplemented(Unimplemented::Funct { funct: 0 }), "R-UNIMPL")]
#[case(0x0109_5025, Instruction::Unimplemented(Unimplemented::Funct { funct: 0x25 }), "R-UNIMPL")]
#[case(0x0800_0000, Instruction::Unimplemented(Unimplemented::Opcode { opcode: 0x02 }), "UNIMPL_OP")]
#[case(0xFFFF_FFFF, Instruction::Unimplemented(Unimplemented::Opcode { opcode: 0x3F }), "UNIMPL_OP")]
fn test_decode_unimplemented(
    #[case] word: u32,
    #[case] want: Instruction,
    #[case] mnemonic: &str,
) {
    let got = decode(word);
    assert_eq!(got, want);
    assert_eq!(got.mnemonic(), mnemonic);
    assert!(got.is_unimplemented());
    assert_eq!(got.dest(), None);
}

#[test]
fn test_mnemonics_and_destinations() {
    let add = decode(InstructionBuilder::new().add(3, 1, 2).build());
    assert_eq!(add.mnemonic(), "ADD");
    assert_eq!(add.dest(), Some(3));
    assert_eq!(add.to_string(), "ADD");

    let lw = decode(InstructionBuilder::new().lw(7, 1, 0).build());
    assert_eq!(lw.dest(), Some(7));

    let sw = decode(InstructionBuilder::new().sw(7, 1, 0).build());
    assert_eq!(sw.mnemonic(), "SW");
    assert_eq!(sw.dest(), None);

    let beq = decode(InstructionBuilder::new().beq(1, 2, 0).build());
    assert_eq!(beq.mnemonic(), "BEQ");
    assert_eq!(beq.dest(), None);
}

proptest! {
    #[test]
    fn prop_decode_never_panics(word in any::<u32>()) {
        let d = decode(word);
        prop_assert!(!d.mnemonic().is_empty());
    }

    #[test]
    fn prop_addi_roundtrips_through_builder(rt in 0usize..32, rs in 0usize..32, imm in -32768i32..32768) {
        let word = InstructionBuilder::new().addi(rt, rs, imm).build();
        prop_assert_eq!(decode(word), Instruction::Addi { rt, rs, imm });
    }
}
