//! AArch64 General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file for the A64 instruction set.
//! It performs the following:
//! 1. **Storage:** Maintains 31 integer registers (`X0`-`X30`).
//! 2. **Views:** Exposes both the 64-bit `X` view and the 32-bit `W` view of each register.
//! 3. **Debugging:** Provides utilities for rendering the complete register state.
//!
//! Encoding value 31 is not a general register: depending on context it names the stack
//! pointer or the zero register. Callers resolve it before reaching this file.

use std::fmt;

use crate::common::constants::GPR_COUNT;

/// General-Purpose Register file.
///
/// Contains the 31 general-purpose registers used for integer operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u64; GPR_COUNT],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    ///
    /// # Returns
    ///
    /// A new `Gpr` instance with all registers set to 0.
    pub const fn new() -> Self {
        Self {
            regs: [0; GPR_COUNT],
        }
    }

    /// Reads the 64-bit `X` view of a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-30).
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..=30`.
    pub const fn read(&self, idx: usize) -> u64 {
        self.regs[idx]
    }

    /// Writes the 64-bit `X` view of a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-30).
    /// * `val` - The 64-bit value to write.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..=30`.
    pub const fn write(&mut self, idx: usize, val: u64) {
        self.regs[idx] = val;
    }

    /// Reads the 32-bit `W` view of a register (the low 32 bits).
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..=30`.
    pub const fn read_word(&self, idx: usize) -> u32 {
        self.regs[idx] as u32
    }

    /// Writes the 32-bit `W` view of a register, clearing the upper 32 bits.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..=30`.
    pub const fn write_word(&mut self, idx: usize, val: u32) {
        self.regs[idx] = val as u64;
    }
}

impl fmt::Display for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..GPR_COUNT).step_by(2) {
            if i + 1 < GPR_COUNT {
                writeln!(
                    f,
                    "x{:<2}={:#018x} x{:<2}={:#018x}",
                    i,
                    self.regs[i],
                    i + 1,
                    self.regs[i + 1]
                )?;
            } else {
                writeln!(f, "x{:<2}={:#018x}", i, self.regs[i])?;
            }
        }
        Ok(())
    }
}
