//! # ALU Tests
//!
//! Wrapping two's-complement arithmetic on raw register bits.

use mipsim_core::core::pipeline::signals::AluOp;
use mipsim_core::core::units::alu::{execute, offset_address};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(AluOp::Add, 5, 10, 15)]
#[case(AluOp::Add, 0x7FFF_FFFF, 1, 0x8000_0000)]
#[case(AluOp::Add, 0xFFFF_FFFF, 1, 0)]
#[case(AluOp::Sub, 10, 3, 7)]
#[case(AluOp::Sub, 0, 1, 0xFFFF_FFFF)]
#[case(AluOp::Sub, 0x8000_0000, 1, 0x7FFF_FFFF)]
fn test_alu_wraps(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] want: u32) {
    assert_eq!(execute(op, a, b), want);
}

#[test]
fn test_offset_address_negative_offset() {
    assert_eq!(offset_address(24, -16), 8);
    assert_eq!(offset_address(0, -4), 0xFFFF_FFFC);
    assert_eq!(offset_address(0xFFFF_FFFC, 8), 4);
}

proptest! {
    #[test]
    fn prop_add_matches_wrapping_add(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(execute(AluOp::Add, a, b), a.wrapping_add(b));
    }

    #[test]
    fn prop_sub_inverts_add(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(execute(AluOp::Sub, execute(AluOp::Add, a, b), b), a);
    }
}
