//! Operand shift operations.
//!
//! Implements the shifter applied to the second operand of shifted-register
//! instructions: logical shift left (LSL), logical shift right (LSR), and
//! arithmetic shift right (ASR).
//!
//! Exactly one shift kind is applied per operand. Amounts are masked to
//! 5 bits for the 32-bit form; decode rejects larger amounts beforehand.

use crate::isa::instruction::ShiftKind;

/// Bit mask for the shift amount of a 32-bit operand (0-31).
const SHAMT_MASK_32: u32 = 0x1f;

/// Shifts a 32-bit operand.
///
/// # Arguments
///
/// * `kind`   - The shift to apply.
/// * `value`  - The operand (the `W` view of a register).
/// * `amount` - Shift amount; only the low five bits are used.
///
/// # Returns
///
/// The shifted 32-bit value.
pub const fn shift32(kind: ShiftKind, value: u32, amount: u32) -> u32 {
    let sh = amount & SHAMT_MASK_32;
    match kind {
        ShiftKind::Lsl => value.wrapping_shl(sh),
        ShiftKind::Lsr => value.wrapping_shr(sh),
        ShiftKind::Asr => ((value as i32) >> sh) as u32,
    }
}
