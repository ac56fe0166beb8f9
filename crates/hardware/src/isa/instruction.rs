//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for A64 instruction fields and the
//! structured `Instruction` form produced by the decoder.

use crate::common::constants::{
    IMM6_MASK, IMM6_SHIFT, IMM12_MASK, IMM12_SHIFT, RD_SHIFT, REG_FIELD_MASK, RM_SHIFT, RN_SHIFT,
    SHIFT_KIND_MASK, SHIFT_KIND_SHIFT,
};
use crate::common::reg::RegRef;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Register accessors return the raw 5-bit field; resolve them with
/// [`RegRef::from_field`] before touching the register file.
pub trait InstructionBits {
    /// Extracts the destination register field `Rd` (bits 4-0).
    fn rd(&self) -> u32;

    /// Extracts the transfer register field `Rt` (bits 4-0) of loads and stores.
    fn rt(&self) -> u32;

    /// Extracts the first source or base register field `Rn` (bits 9-5).
    fn rn(&self) -> u32;

    /// Extracts the second source or index register field `Rm` (bits 20-16).
    fn rm(&self) -> u32;

    /// Extracts the 12-bit unsigned immediate (bits 21-10).
    fn imm12(&self) -> u32;

    /// Extracts the 6-bit shift amount (bits 15-10).
    fn imm6(&self) -> u32;

    /// Extracts the 2-bit shift kind (bits 23-22).
    fn shift_kind(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn rd(&self) -> u32 {
        (self >> RD_SHIFT) & REG_FIELD_MASK
    }

    #[inline(always)]
    fn rt(&self) -> u32 {
        self.rd()
    }

    #[inline(always)]
    fn rn(&self) -> u32 {
        (self >> RN_SHIFT) & REG_FIELD_MASK
    }

    #[inline(always)]
    fn rm(&self) -> u32 {
        (self >> RM_SHIFT) & REG_FIELD_MASK
    }

    #[inline(always)]
    fn imm12(&self) -> u32 {
        (self >> IMM12_SHIFT) & IMM12_MASK
    }

    #[inline(always)]
    fn imm6(&self) -> u32 {
        (self >> IMM6_SHIFT) & IMM6_MASK
    }

    #[inline(always)]
    fn shift_kind(&self) -> u32 {
        (self >> SHIFT_KIND_SHIFT) & SHIFT_KIND_MASK
    }
}

/// Shift applied to the second operand of a shifted-register instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftKind {
    /// Logical shift left (`00`).
    Lsl,
    /// Logical shift right (`01`).
    Lsr,
    /// Arithmetic shift right (`10`).
    Asr,
}

impl ShiftKind {
    /// Maps the 2-bit `shift` field to a shift kind; `11` is reserved.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits & SHIFT_KIND_MASK {
            0b00 => Some(Self::Lsl),
            0b01 => Some(Self::Lsr),
            0b10 => Some(Self::Asr),
            _ => None,
        }
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Lsl => "lsl",
            Self::Lsr => "lsr",
            Self::Asr => "asr",
        }
    }
}

/// Data transfer performed by an unsigned-offset load or store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transfer {
    /// `LDR Wt`: 32-bit load, zero-extended.
    LoadWord,
    /// `LDRSW Xt`: 32-bit load, sign-extended.
    LoadSignedWord,
    /// `LDR Xt`: 64-bit load.
    LoadDoubleWord,
    /// `STR Wt`: 32-bit store.
    StoreWord,
    /// `STR Xt`: 64-bit store.
    StoreDoubleWord,
}

impl Transfer {
    /// Returns the access width in bytes, which is also the immediate scale.
    pub const fn width(self) -> u64 {
        match self {
            Self::LoadWord | Self::LoadSignedWord | Self::StoreWord => 4,
            Self::LoadDoubleWord | Self::StoreDoubleWord => 8,
        }
    }

    /// Returns `true` if the transfer register is named as an `X` register.
    pub const fn is64(self) -> bool {
        matches!(
            self,
            Self::LoadSignedWord | Self::LoadDoubleWord | Self::StoreDoubleWord
        )
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::LoadWord | Self::LoadDoubleWord => "ldr",
            Self::LoadSignedWord => "ldrsw",
            Self::StoreWord | Self::StoreDoubleWord => "str",
        }
    }
}

/// A decoded instruction with its register fields resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `SUB Xd|SP, Xn|SP, #imm12`.
    SubImm {
        /// Destination register.
        rd: RegRef,
        /// Source register.
        rn: RegRef,
        /// Unsigned 12-bit immediate.
        imm12: u32,
    },

    /// `ADD Wd, Wn, Wm{, shift #amount}`.
    AddShifted {
        /// Destination register.
        rd: RegRef,
        /// First source register.
        rn: RegRef,
        /// Second source register, shifted before the add.
        rm: RegRef,
        /// Shift applied to `rm`.
        shift: ShiftKind,
        /// Shift amount (0-31).
        amount: u32,
    },

    /// Load or store with a scaled unsigned immediate offset.
    LoadStoreImm {
        /// Kind and width of the transfer.
        transfer: Transfer,
        /// Transfer register (destination of loads, source of stores).
        rt: RegRef,
        /// Base address register.
        rn: RegRef,
        /// Byte offset (`imm12` scaled by the access width).
        offset: u64,
    },

    /// `LDR Wt, [Xn|SP, Xm, LSL #2]`.
    LoadRegOffset {
        /// Destination register.
        rt: RegRef,
        /// Base address register.
        rn: RegRef,
        /// Index register, shifted left by two.
        rm: RegRef,
    },
}
