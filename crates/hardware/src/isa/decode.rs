//! Instruction Decoder.
//!
//! Decodes a 32-bit instruction word into an [`Instruction`]. Opcode 0 selects
//! the R-type family and dispatches on funct; every other opcode dispatches
//! directly. Anything unrecognized becomes [`Instruction::Unimplemented`].

use crate::isa::instruction::{Instruction, InstructionBits, Unimplemented};
use crate::isa::mips32::{funct, opcodes};

/// Decodes an instruction word into its operation and operands.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode.
///
/// # Returns
///
/// The decoded [`Instruction`]. Decoding never fails.
pub fn decode(inst: u32) -> Instruction {
    let rs = inst.rs();
    let rt = inst.rt();

    match inst.opcode() {
        opcodes::OP_SPECIAL => decode_special(inst),
        opcodes::OP_ADDI => Instruction::Addi {
            rt,
            rs,
            imm: inst.simm(),
        },
        opcodes::OP_LW => Instruction::Lw {
            rt,
            rs,
            offset: inst.simm(),
        },
        opcodes::OP_SW => Instruction::Sw {
            rt,
            rs,
            offset: inst.simm(),
        },
        opcodes::OP_BEQ => Instruction::Beq {
            rs,
            rt,
            offset: inst.simm(),
        },
        opcode => Instruction::Unimplemented(Unimplemented::Opcode { opcode }),
    }
}

/// Decodes the R-type family by funct.
fn decode_special(inst: u32) -> Instruction {
    let (rd, rs, rt) = (inst.rd(), inst.rs(), inst.rt());
    match inst.funct() {
        funct::FUNCT_ADD => Instruction::Add { rd, rs, rt },
        funct::FUNCT_SUB => Instruction::Sub { rd, rs, rt },
        funct => Instruction::Unimplemented(Unimplemented::Funct { funct }),
    }
}
