//! Pipeline control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **Operation Classification:** Selects the ALU operation for the Execute stage.
//! 2. **Memory Control:** Specifies the access kind and width for the Memory stage.
//! 3. **Write-back Control:** Selects whether and from where a result is committed.
//!
//! A `ControlSignals` value is built by decode for a single instruction and handed to the
//! later stages through the pipeline latches. Its default is the "undefined" state.

/// ALU operation selected by decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// No operation selected.
    #[default]
    None,

    /// Integer addition.
    Add,

    /// Integer subtraction.
    Sub,
}

/// Data memory operation selected by decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MemOp {
    /// No memory access.
    #[default]
    None,

    /// 32-bit load into the memory data register.
    Read32,

    /// 64-bit load into the memory data register.
    Read64,

    /// 32-bit store of the transfer register.
    Write32,

    /// 64-bit store of the transfer register.
    Write64,
}

impl MemOp {
    /// Returns `true` for the load variants.
    pub const fn is_load(self) -> bool {
        matches!(self, Self::Read32 | Self::Read64)
    }

    /// Returns `true` for the store variants.
    pub const fn is_store(self) -> bool {
        matches!(self, Self::Write32 | Self::Write64)
    }
}

/// Write-back policy selected by decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteBackOp {
    /// Nothing is committed.
    #[default]
    None,

    /// The result is written to the destination register.
    RegisterWrite,
}

/// Control signals for one instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// ALU operation.
    pub alu: AluOp,
    /// Data memory operation.
    pub mem: MemOp,
    /// Write-back policy.
    pub wb: WriteBackOp,
    /// Commit the memory data register instead of the ALU result.
    pub mem_to_reg: bool,
    /// Route the instruction to the floating-point execute path.
    pub fp_op: bool,
    /// Operate on the low 32 bits and zero-extend the ALU result.
    pub is32: bool,
    /// Sign-extend a 32-bit load into 64 bits.
    pub signed_load: bool,
}
