//! Conventional register names.
//!
//! Defines the customary MIPS register names and a few indices the sample
//! programs and tests refer to. The simulator itself gives no register any
//! meaning except `$zero`.

/// Register $0 (always zero).
pub const REG_ZERO: usize = 0;
/// Register $8 (temporary, t0).
pub const REG_T0: usize = 8;
/// Register $9 (temporary, t1).
pub const REG_T1: usize = 9;
/// Register $10 (temporary, t2).
pub const REG_T2: usize = 10;
/// Register $29 (stack pointer, sp).
pub const REG_SP: usize = 29;
/// Register $31 (return address, ra).
pub const REG_RA: usize = 31;

/// Conventional names for $0-$31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the conventional name for a register index, or `"??"` if out of range.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("??")
}
