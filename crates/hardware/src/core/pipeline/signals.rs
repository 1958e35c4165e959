//! Pipeline control signals and operation types.
//!
//! This module defines the signals that steer an instruction through the stages. It performs:
//! 1. **Operation Classification:** Selects the ALU operation.
//! 2. **Operand Selection:** Chooses the register or the immediate as the second ALU input.
//! 3. **Memory Control:** Flags data reads and writes for the memory stage.
//! 4. **Write-back Control:** Flags whether the destination register is updated.

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition (ADD, ADDI, and effective-address computation).
    #[default]
    Add,

    /// Wrapping subtraction.
    Sub,
}

/// Source of the second ALU operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Value of the `rt` register.
    #[default]
    Reg,

    /// Sign-extended 16-bit immediate.
    Imm,
}

/// Control signals produced by decode and consumed by later stages.
///
/// The default value is a bubble: no register, memory, or PC effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Write the result back to the destination register.
    pub reg_write: bool,
    /// Read a data word from memory.
    pub mem_read: bool,
    /// Write a data word to memory.
    pub mem_write: bool,
    /// Conditional branch on register equality.
    pub branch: bool,
    /// ALU operation to perform.
    pub alu: AluOp,
    /// Source of the second ALU operand.
    pub b_src: OpBSrc,
}
