//! ALU arithmetic operations.
//!
//! Implements integer addition and subtraction for both the 64-bit (`X`)
//! and 32-bit (`W`) register views. Results wrap on overflow and no
//! condition flags are produced.
//!
//! All 32-bit (`is32 == true`) results are zero-extended from bit 31 to
//! 64 bits, matching a write to a `W` register.

/// Adds two operands.
///
/// # Arguments
///
/// * `a`    - First operand (64-bit value).
/// * `b`    - Second operand (64-bit value).
/// * `is32` - If true, add the low 32 bits only.
///
/// # Returns
///
/// The wrapped sum; zero-extended from 32 bits when `is32` is set.
pub const fn add(a: u64, b: u64, is32: bool) -> u64 {
    if is32 {
        (a as u32).wrapping_add(b as u32) as u64
    } else {
        a.wrapping_add(b)
    }
}

/// Subtracts `b` from `a`.
///
/// # Arguments
///
/// * `a`    - Minuend (64-bit value).
/// * `b`    - Subtrahend (64-bit value).
/// * `is32` - If true, subtract the low 32 bits only.
///
/// # Returns
///
/// The wrapped difference; zero-extended from 32 bits when `is32` is set.
pub const fn sub(a: u64, b: u64, is32: bool) -> u64 {
    if is32 {
        (a as u32).wrapping_sub(b as u32) as u64
    } else {
        a.wrapping_sub(b)
    }
}
