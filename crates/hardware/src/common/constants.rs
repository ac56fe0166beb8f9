//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Instruction Constants:** Instruction width and register field layout.
//! 2. **Register Constants:** Architectural register counts and the stack-pointer encoding.
//! 3. **Memory Constants:** Default sizing of the simulated memory.

/// Size of an A64 instruction in bytes. All instructions are 32 bits wide.
pub const INSTRUCTION_SIZE: u64 = 4;

/// Number of general-purpose registers (`X0`-`X30`).
pub const GPR_COUNT: usize = 31;

/// Register field value that names the stack pointer instead of a general register.
pub const SP_FIELD: u8 = 31;

/// Bit mask for a 5-bit register field (`Rd`, `Rn`, `Rm`, `Rt`).
pub const REG_FIELD_MASK: u32 = 0x1F;

/// Bit position of the destination/transfer register field (`Rd`/`Rt`).
pub const RD_SHIFT: u32 = 0;

/// Bit position of the first source/base register field (`Rn`).
pub const RN_SHIFT: u32 = 5;

/// Bit position of the second source/index register field (`Rm`).
pub const RM_SHIFT: u32 = 16;

/// Bit mask for the 12-bit unsigned immediate field.
pub const IMM12_MASK: u32 = 0xFFF;

/// Bit position of the 12-bit unsigned immediate field.
pub const IMM12_SHIFT: u32 = 10;

/// Bit mask for the 6-bit shift amount field.
pub const IMM6_MASK: u32 = 0x3F;

/// Bit position of the 6-bit shift amount field.
pub const IMM6_SHIFT: u32 = 10;

/// Bit mask for the 2-bit shift kind field.
pub const SHIFT_KIND_MASK: u32 = 0x3;

/// Bit position of the 2-bit shift kind field.
pub const SHIFT_KIND_SHIFT: u32 = 22;

/// Mask selecting the top-level group field `op0` (bits 28..25).
pub const GROUP_MASK: u32 = 0x1E00_0000;

/// Bit position of the top-level group field.
pub const GROUP_SHIFT: u32 = 25;

/// Default size of the simulated memory in bytes (1 MiB).
pub const DEFAULT_MEMORY_SIZE: usize = 1024 * 1024;
