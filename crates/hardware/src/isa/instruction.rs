//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the two encoding families and the decoded
//! instruction representation.
//!
//! ```text
//! R-type: opcode[31:26] | rs[25:21] | rt[20:16] | rd[15:11] | shamt[10:6] | funct[5:0]
//! I-type: opcode[31:26] | rs[25:21] | rt[20:16] | imm16[15:0]
//! ```

use serde::Serialize;
use std::fmt;

/// Bit shift for the opcode field.
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the opcode field (6 bits).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift for the rs field.
pub const RS_SHIFT: u32 = 21;
/// Bit shift for the rt field.
pub const RT_SHIFT: u32 = 16;
/// Bit shift for the rd field.
pub const RD_SHIFT: u32 = 11;
/// Bit shift for the shamt field.
pub const SHAMT_SHIFT: u32 = 6;
/// Bit mask for any 5-bit register or shamt field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the funct field (6 bits).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate.
pub const IMM16_MASK: u32 = 0xFFFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 21-25).
    fn rs(&self) -> usize;

    /// Extracts the second source register field (bits 16-20).
    ///
    /// This is the destination register for ADDI and LW.
    fn rt(&self) -> usize;

    /// Extracts the R-type destination register field (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the shift amount field (bits 6-10). Unused by the supported set.
    fn shamt(&self) -> u32;

    /// Extracts the funct field (bits 0-5).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate (bits 0-15).
    fn imm16(&self) -> u16;

    /// Extracts the immediate sign-extended to 32 bits.
    fn simm(&self) -> i32 {
        sign_extend16(self.imm16())
    }
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u16 {
        (self & IMM16_MASK) as u16
    }
}

/// Sign-extends a 16-bit immediate to 32 bits.
///
/// If bit 15 is set the upper 16 bits are filled with ones, otherwise zeros.
#[inline(always)]
pub const fn sign_extend16(imm: u16) -> i32 {
    imm as i16 as i32
}

/// Why an instruction word was not recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Unimplemented {
    /// Opcode 0 with a funct value outside the supported set.
    Funct {
        /// The unrecognized funct field.
        funct: u32,
    },
    /// A primary opcode outside the supported set.
    Opcode {
        /// The unrecognized opcode field.
        opcode: u32,
    },
}

/// A decoded instruction.
///
/// Register fields are 5-bit indices; immediates are already sign-extended.
/// Unrecognized encodings decode to [`Instruction::Unimplemented`], which
/// retires as a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    /// `rd = rs + rt` (wrapping).
    Add {
        /// Destination register.
        rd: usize,
        /// First source register.
        rs: usize,
        /// Second source register.
        rt: usize,
    },
    /// `rd = rs - rt` (wrapping).
    Sub {
        /// Destination register.
        rd: usize,
        /// First source register.
        rs: usize,
        /// Second source register.
        rt: usize,
    },
    /// `rt = rs + imm` (wrapping).
    Addi {
        /// Destination register.
        rt: usize,
        /// Source register.
        rs: usize,
        /// Sign-extended immediate.
        imm: i32,
    },
    /// `rt = mem[rs + offset]` (little-endian data word).
    Lw {
        /// Destination register.
        rt: usize,
        /// Base register.
        rs: usize,
        /// Sign-extended byte offset.
        offset: i32,
    },
    /// `mem[rs + offset] = rt` (little-endian data word).
    Sw {
        /// Register holding the value to store.
        rt: usize,
        /// Base register.
        rs: usize,
        /// Sign-extended byte offset.
        offset: i32,
    },
    /// `if rs == rt { pc = pc + 4 + (offset << 2) }`.
    Beq {
        /// First compared register.
        rs: usize,
        /// Second compared register.
        rt: usize,
        /// Sign-extended offset in instructions.
        offset: i32,
    },
    /// An encoding outside the supported set.
    Unimplemented(Unimplemented),
}

impl Instruction {
    /// Returns the trace mnemonic for this instruction.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::Add { .. } => "ADD",
            Self::Sub { .. } => "SUB",
            Self::Addi { .. } => "ADDI",
            Self::Lw { .. } => "LW",
            Self::Sw { .. } => "SW",
            Self::Beq { .. } => "BEQ",
            Self::Unimplemented(Unimplemented::Funct { .. }) => "R-UNIMPL",
            Self::Unimplemented(Unimplemented::Opcode { .. }) => "UNIMPL_OP",
        }
    }

    /// Returns the register written back by this instruction, if any.
    pub const fn dest(&self) -> Option<usize> {
        match *self {
            Self::Add { rd, .. } | Self::Sub { rd, .. } => Some(rd),
            Self::Addi { rt, .. } | Self::Lw { rt, .. } => Some(rt),
            Self::Sw { .. } | Self::Beq { .. } | Self::Unimplemented(_) => None,
        }
    }

    /// Returns `true` for encodings outside the supported set.
    pub const fn is_unimplemented(&self) -> bool {
        matches!(self, Self::Unimplemented(_))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
