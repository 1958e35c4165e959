//! Function codes (bits 5-0) for the R-type family.

/// Add (wrapping).
pub const FUNCT_ADD: u32 = 0x20;

/// Subtract (wrapping).
pub const FUNCT_SUB: u32 = 0x22;
