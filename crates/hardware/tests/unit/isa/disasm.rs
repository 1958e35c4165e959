//! # Disassembler Tests
//!
//! Checks the listing text for every supported form.

use mipsim_core::isa::abi::reg_name;
use mipsim_core::isa::disasm::disassemble;
use rstest::rstest;

#[rstest]
#[case(0x2008_0005, "addi $t0, $zero, 5")]
#[case(0x2108_FFFF, "addi $t0, $t0, -1")]
#[case(0x0128_4820, "add $t1, $t1, $t0")]
#[case(0x0109_5022, "sub $t2, $t0, $t1")]
#[case(0x8FAA_FFFC, "lw $t2, -4($sp)")]
#[case(0xAC09_0000, "sw $t1, 0($zero)")]
#[case(0x1000_FFFC, "beq $zero, $zero, -4")]
#[case(0x0000_0000, "r-unimpl funct=0x00")]
#[case(0x0800_0000, "unimpl opcode=0x02")]
fn test_disassemble(#[case] word: u32, #[case] want: &str) {
    assert_eq!(disassemble(word), want);
}

#[test]
fn test_register_names() {
    assert_eq!(reg_name(0), "zero");
    assert_eq!(reg_name(8), "t0");
    assert_eq!(reg_name(29), "sp");
    assert_eq!(reg_name(31), "ra");
    assert_eq!(reg_name(32), "??");
}
