//! ALU arithmetic operations.
//!
//! Operands are the raw 32-bit register contents; the result is the same bit
//! pattern two's-complement signed arithmetic would produce. Overflow wraps
//! silently.

use crate::core::pipeline::signals::AluOp;

/// Executes an integer ALU operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform.
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The wrapped 32-bit result.
#[inline]
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => (a as i32).wrapping_add(b as i32) as u32,
        AluOp::Sub => (a as i32).wrapping_sub(b as i32) as u32,
    }
}

/// Computes `base + offset` for effective addresses and branch targets.
#[inline]
pub const fn offset_address(base: u32, offset: i32) -> u32 {
    base.wrapping_add_signed(offset)
}
