//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline.
//! It reads the instruction word at the current Program Counter (PC) and
//! computes the address of the sequentially next instruction. The PC
//! register itself is only advanced once the whole cycle has completed.

use tracing::trace;

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::IfIdEntry;

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Reference to the CPU state
///
/// # Returns
///
/// The IF/ID latch entry holding the instruction word and its next PC.
///
/// # Errors
///
/// Returns `SimError::Fetch` if the PC is out of bounds or not word-aligned.
pub fn fetch_stage(cpu: &Cpu) -> Result<IfIdEntry, SimError> {
    let pc = cpu.regs.pc();
    let inst = cpu
        .mem
        .read_instruction32(pc)
        .map_err(|source| SimError::Fetch { pc, source })?;

    trace!("IF  pc={pc:#x} inst={inst:#010x}");

    Ok(IfIdEntry {
        pc,
        next_pc: pc.wrapping_add(INSTRUCTION_SIZE),
        inst,
    })
}
