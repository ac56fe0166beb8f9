//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** Structures for carrying per-instruction state between stages.
//! 2. **Control Propagation:** The decoded `ControlSignals` travel with the instruction,
//!    so no stage can observe signals left over from a previous cycle.

use crate::common::reg::RegRef;
use crate::core::pipeline::signals::ControlSignals;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u64,
    /// Address of the sequentially next instruction.
    pub next_pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u64,
    /// Address of the sequentially next instruction.
    pub next_pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// First ALU operand.
    pub a: u64,
    /// Second ALU operand.
    pub b: u64,
    /// Destination of loads and ALU results; source of stores.
    pub rt: RegRef,
    /// Control signals built by decode.
    pub ctrl: ControlSignals,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u64,
    /// Address of the sequentially next instruction.
    pub next_pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// ALU result; the effective address for memory operations.
    pub alu: u64,
    /// Destination of loads and ALU results; source of stores.
    pub rt: RegRef,
    /// Control signals built by decode.
    pub ctrl: ControlSignals,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u64,
    /// Address of the sequentially next instruction.
    pub next_pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// ALU result.
    pub alu: u64,
    /// Memory data register; set only by loads.
    pub mdr: Option<u64>,
    /// Destination register.
    pub rt: RegRef,
    /// Control signals built by decode.
    pub ctrl: ControlSignals,
}
