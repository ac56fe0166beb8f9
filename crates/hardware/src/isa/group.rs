//! Top-level A64 instruction groups.
//!
//! The A64 encoding space is partitioned by `op0`, bits 28..25 of the instruction word.
//! This module classifies a word into its group before any sub-decoder runs.

use std::fmt;

use crate::common::constants::{GROUP_MASK, GROUP_SHIFT};

/// Top-level encoding group selected by `op0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstructionGroup {
    /// `00xx`: reserved, unallocated, and SVE encodings.
    Reserved,
    /// `100x`: data processing with an immediate operand.
    DataProcessingImmediate,
    /// `101x`: branches, exception generation, and system instructions.
    BranchExceptionSystem,
    /// `x1x0`: loads and stores.
    LoadsAndStores,
    /// `x101`: data processing with register operands.
    DataProcessingRegister,
    /// `x111`: scalar floating-point and Advanced SIMD.
    ScalarFpSimd,
}

impl InstructionGroup {
    /// Classifies an instruction word by its `op0` field.
    pub const fn classify(inst: u32) -> Self {
        let op0 = (inst & GROUP_MASK) >> GROUP_SHIFT;
        match op0 {
            0b1000 | 0b1001 => Self::DataProcessingImmediate,
            0b1010 | 0b1011 => Self::BranchExceptionSystem,
            0b0100 | 0b0110 | 0b1100 | 0b1110 => Self::LoadsAndStores,
            0b0101 | 0b1101 => Self::DataProcessingRegister,
            0b0111 | 0b1111 => Self::ScalarFpSimd,
            _ => Self::Reserved,
        }
    }

    /// Returns `true` if this group has a decoder.
    pub const fn is_supported(self) -> bool {
        matches!(
            self,
            Self::DataProcessingImmediate | Self::LoadsAndStores | Self::DataProcessingRegister
        )
    }
}

impl fmt::Display for InstructionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reserved => "reserved",
            Self::DataProcessingImmediate => "data processing (immediate)",
            Self::BranchExceptionSystem => "branches, exception generating and system",
            Self::LoadsAndStores => "loads and stores",
            Self::DataProcessingRegister => "data processing (register)",
            Self::ScalarFpSimd => "scalar floating-point and SIMD",
        };
        f.write_str(name)
    }
}
