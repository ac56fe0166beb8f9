//! Architectural Register File.
//!
//! This module provides the `RegisterFile` struct, the single interface for all
//! architectural register state, and `RegRef`, a resolved register reference.
//! It provides:
//! 1. **Unified Storage:** The 31 general-purpose registers, the stack pointer, and the program counter.
//! 2. **Width Views:** 32-bit (`W`) and 64-bit (`X`) accessors for every register.
//! 3. **Resolved References:** Reads and writes through a `RegRef`, so that encoding value 31
//!    can never be mistaken for a 32nd general register.
//! 4. **Observability:** A textual dump of the register state for tracing.

use std::fmt;

use crate::common::constants::{REG_FIELD_MASK, SP_FIELD};
use crate::core::arch::gpr::Gpr;

/// A register named by an instruction, resolved once at decode time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegRef {
    /// General-purpose register `X0`-`X30`.
    General(u8),
    /// The stack pointer.
    StackPointer,
}

impl RegRef {
    /// Resolves a 5-bit register field into a register reference.
    ///
    /// Only the low five bits of `field` are considered. Value 31 names the stack pointer.
    pub const fn from_field(field: u32) -> Self {
        let idx = (field & REG_FIELD_MASK) as u8;
        if idx == SP_FIELD {
            Self::StackPointer
        } else {
            Self::General(idx)
        }
    }
}

impl fmt::Display for RegRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::General(idx) => write!(f, "x{idx}"),
            Self::StackPointer => f.write_str("sp"),
        }
    }
}

/// Architectural register state of the processor.
///
/// Holds the general-purpose registers, the stack pointer, and the program counter.
/// 32-bit writes zero-extend into the full 64-bit register.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
    sp: u64,
    pc: u64,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    ///
    /// # Returns
    ///
    /// A new `RegisterFile` instance with SP and PC at 0.
    pub const fn new() -> Self {
        Self {
            gpr: Gpr::new(),
            sp: 0,
            pc: 0,
        }
    }

    /// Reads the 32-bit view of a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-30).
    ///
    /// # Returns
    ///
    /// The low 32 bits of the register.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..=30`.
    pub const fn read_word(&self, idx: usize) -> u32 {
        self.gpr.read_word(idx)
    }

    /// Writes the 32-bit view of a general-purpose register.
    ///
    /// The upper 32 bits of the register are cleared.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-30).
    /// * `val` - The 32-bit value to write.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..=30`.
    pub const fn write_word(&mut self, idx: usize, val: u32) {
        self.gpr.write_word(idx, val);
    }

    /// Reads the 64-bit view of a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-30).
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..=30`.
    pub const fn read_double_word(&self, idx: usize) -> u64 {
        self.gpr.read(idx)
    }

    /// Writes the 64-bit view of a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-30).
    /// * `val` - The 64-bit value to write.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not in `0..=30`.
    pub const fn write_double_word(&mut self, idx: usize, val: u64) {
        self.gpr.write(idx, val);
    }

    /// Returns the stack pointer.
    pub const fn sp(&self) -> u64 {
        self.sp
    }

    /// Sets the stack pointer.
    pub const fn set_sp(&mut self, val: u64) {
        self.sp = val;
    }

    /// Returns the program counter.
    pub const fn pc(&self) -> u64 {
        self.pc
    }

    /// Sets the program counter.
    pub const fn set_pc(&mut self, val: u64) {
        self.pc = val;
    }

    /// Reads the 64-bit value of a resolved register reference.
    ///
    /// # Panics
    ///
    /// Panics if `reg` is `General(n)` with `n > 30`; [`RegRef::from_field`] never builds one.
    pub const fn read(&self, reg: RegRef) -> u64 {
        match reg {
            RegRef::General(idx) => self.read_double_word(idx as usize),
            RegRef::StackPointer => self.sp,
        }
    }

    /// Reads the 32-bit view of a resolved register reference (`Wn` or `WSP`).
    ///
    /// # Panics
    ///
    /// Panics if `reg` is `General(n)` with `n > 30`; [`RegRef::from_field`] never builds one.
    pub const fn read_word_ref(&self, reg: RegRef) -> u32 {
        self.read(reg) as u32
    }

    /// Writes a 64-bit value through a resolved register reference.
    ///
    /// # Panics
    ///
    /// Panics if `reg` is `General(n)` with `n > 30`; [`RegRef::from_field`] never builds one.
    pub const fn write(&mut self, reg: RegRef, val: u64) {
        match reg {
            RegRef::General(idx) => self.write_double_word(idx as usize, val),
            RegRef::StackPointer => self.sp = val,
        }
    }

    /// Renders the contents of all registers, one pair of GPRs per line.
    ///
    /// Useful for debugging and tracing register state during simulation.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gpr)?;
        writeln!(f, "sp ={:#018x} pc ={:#018x}", self.sp, self.pc)
    }
}
