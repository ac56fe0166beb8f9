//! Error definitions for every layer of the simulator.
//!
//! This module defines the failure types produced while running a program. It provides:
//! 1. **Memory Errors:** Out-of-bounds, misaligned, and oversized-image accesses.
//! 2. **Decode Errors:** Unsupported instruction groups and unknown encodings.
//! 3. **Control Errors:** Control-signal combinations with no execution path.
//! 4. **Stage Errors:** A per-stage wrapper carrying the faulting program counter.

use std::fmt;

use thiserror::Error;

use crate::common::data::AccessType;
use crate::core::pipeline::signals::AluOp;
use crate::isa::group::InstructionGroup;

/// Failure raised by a memory access.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MemoryError {
    /// The access touches bytes past the end of memory.
    #[error("{kind} of {width} bytes at {addr:#x} is out of bounds (memory size {size:#x})")]
    OutOfBounds {
        /// Kind of access that faulted.
        kind: AccessType,
        /// Start address of the access.
        addr: u64,
        /// Width of the access in bytes.
        width: usize,
        /// Total size of the memory in bytes.
        size: usize,
    },

    /// The address is not a multiple of the access width.
    #[error("{kind} of {width} bytes at {addr:#x} is misaligned")]
    Misaligned {
        /// Kind of access that faulted.
        kind: AccessType,
        /// Start address of the access.
        addr: u64,
        /// Width of the access in bytes.
        width: usize,
    },

    /// A program image does not fit in memory.
    #[error("image of {len} bytes does not fit in {size} bytes of memory")]
    ImageTooLarge {
        /// Length of the image in bytes.
        len: usize,
        /// Total size of the memory in bytes.
        size: usize,
    },
}

/// Failure raised while decoding an instruction word.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The top-level group of the instruction has no decoder.
    #[error("instruction {inst:#010x}: group {group} is not supported")]
    UnsupportedGroup {
        /// Raw instruction word.
        inst: u32,
        /// Group selected by bits 28..25.
        group: InstructionGroup,
    },

    /// The group is supported but no encoding pattern matched.
    #[error("instruction {inst:#010x}: unknown encoding in group {group}")]
    UnknownEncoding {
        /// Raw instruction word.
        inst: u32,
        /// Group selected by bits 28..25.
        group: InstructionGroup,
    },
}

/// Failure raised when control signals select behaviour that does not exist.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    /// The ALU was asked to perform an operation it does not implement.
    #[error("ALU operation {0:?} is not implemented")]
    AluOpNotImplemented(AluOp),

    /// The floating-point execute path was selected.
    #[error("floating-point execution is not implemented")]
    FloatingPointNotImplemented,

    /// Write-back selected the memory data register but no load produced it.
    #[error("write-back selects memory data but no load was performed")]
    MemoryDataUnavailable,
}

/// Pipeline stage in which a cycle failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Instruction fetch.
    Fetch,
    /// Instruction decode and operand read.
    Decode,
    /// ALU execution.
    Execute,
    /// Data memory access.
    Memory,
    /// Register write-back.
    WriteBack,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::Decode => "decode",
            Self::Execute => "execute",
            Self::Memory => "memory",
            Self::WriteBack => "write-back",
        };
        f.write_str(name)
    }
}

/// Fatal failure of a simulated cycle.
///
/// Each variant records the program counter of the instruction being
/// processed together with the underlying cause.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// The instruction word could not be fetched.
    #[error("fetch failed at pc {pc:#x}: {source}")]
    Fetch {
        /// Program counter of the faulting instruction.
        pc: u64,
        /// Underlying memory error.
        source: MemoryError,
    },

    /// The instruction word could not be decoded.
    #[error("decode failed at pc {pc:#x}: {source}")]
    Decode {
        /// Program counter of the faulting instruction.
        pc: u64,
        /// Underlying decode error.
        source: DecodeError,
    },

    /// The execute stage rejected the control signals.
    #[error("execute failed at pc {pc:#x}: {source}")]
    Execute {
        /// Program counter of the faulting instruction.
        pc: u64,
        /// Underlying control error.
        source: ControlError,
    },

    /// The data memory access failed.
    #[error("memory access failed at pc {pc:#x}: {source}")]
    Memory {
        /// Program counter of the faulting instruction.
        pc: u64,
        /// Underlying memory error.
        source: MemoryError,
    },

    /// The write-back stage rejected the control signals.
    #[error("write-back failed at pc {pc:#x}: {source}")]
    WriteBack {
        /// Program counter of the faulting instruction.
        pc: u64,
        /// Underlying control error.
        source: ControlError,
    },
}

impl SimError {
    /// Returns the stage in which the cycle failed.
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Fetch { .. } => Stage::Fetch,
            Self::Decode { .. } => Stage::Decode,
            Self::Execute { .. } => Stage::Execute,
            Self::Memory { .. } => Stage::Memory,
            Self::WriteBack { .. } => Stage::WriteBack,
        }
    }

    /// Returns the program counter of the faulting instruction.
    pub const fn pc(&self) -> u64 {
        match self {
            Self::Fetch { pc, .. }
            | Self::Decode { pc, .. }
            | Self::Execute { pc, .. }
            | Self::Memory { pc, .. }
            | Self::WriteBack { pc, .. } => *pc,
        }
    }
}
