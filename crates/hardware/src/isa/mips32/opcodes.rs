//! Primary opcodes (bits 31-26).

/// R-type family; the operation is selected by the funct field.
pub const OP_SPECIAL: u32 = 0x00;

/// Branch on equal.
pub const OP_BEQ: u32 = 0x04;

/// Add immediate.
pub const OP_ADDI: u32 = 0x08;

/// Load word.
pub const OP_LW: u32 = 0x23;

/// Store word.
pub const OP_SW: u32 = 0x2B;
