//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction encoding into a human-readable string for
//! traces, listings, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x2008_0005), "addi $t0, $zero, 5");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, Unimplemented};

/// Disassembles a 32-bit instruction into assembly-like text.
///
/// Branch offsets are printed in instructions, exactly as encoded.
/// Unrecognized encodings render as `r-unimpl funct=0x..` or
/// `unimpl opcode=0x..`.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    format_instruction(&decode(inst))
}

/// Formats an already decoded instruction.
pub fn format_instruction(decoded: &Instruction) -> String {
    match *decoded {
        Instruction::Add { rd, rs, rt } => {
            format!("add ${}, ${}, ${}", reg_name(rd), reg_name(rs), reg_name(rt))
        }
        Instruction::Sub { rd, rs, rt } => {
            format!("sub ${}, ${}, ${}", reg_name(rd), reg_name(rs), reg_name(rt))
        }
        Instruction::Addi { rt, rs, imm } => {
            format!("addi ${}, ${}, {imm}", reg_name(rt), reg_name(rs))
        }
        Instruction::Lw { rt, rs, offset } => {
            format!("lw ${}, {offset}(${})", reg_name(rt), reg_name(rs))
        }
        Instruction::Sw { rt, rs, offset } => {
            format!("sw ${}, {offset}(${})", reg_name(rt), reg_name(rs))
        }
        Instruction::Beq { rs, rt, offset } => {
            format!("beq ${}, ${}, {offset}", reg_name(rs), reg_name(rt))
        }
        Instruction::Unimplemented(Unimplemented::Funct { funct }) => {
            format!("r-unimpl funct={funct:#04x}")
        }
        Instruction::Unimplemented(Unimplemented::Opcode { opcode }) => {
            format!("unimpl opcode={opcode:#04x}")
        }
    }
}
