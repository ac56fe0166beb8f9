//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline.
//! It commits the result to the destination register when requested by the
//! control signals, selecting the memory data register for loads and the ALU
//! result otherwise, and updates the retirement statistics.

use tracing::trace;

use crate::common::error::{ControlError, SimError};
use crate::core::Cpu;
use crate::core::pipeline::latches::MemWbEntry;
use crate::core::pipeline::signals::WriteBackOp;

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `wb`  - The instruction from the MEM/WB latch
///
/// # Errors
///
/// Returns `SimError::WriteBack` if `mem_to_reg` is set but no load produced
/// a memory data value.
pub fn wb_stage(cpu: &mut Cpu, wb: &MemWbEntry) -> Result<(), SimError> {
    let pc = wb.pc;

    if wb.ctrl.wb == WriteBackOp::RegisterWrite {
        let val = if wb.ctrl.mem_to_reg {
            wb.mdr.ok_or(SimError::WriteBack {
                pc,
                source: ControlError::MemoryDataUnavailable,
            })?
        } else {
            wb.alu
        };
        cpu.regs.write(wb.rt, val);
        trace!("WB  pc={pc:#x} {}={val:#x}", wb.rt);
    }

    cpu.stats.instructions_retired += 1;
    if wb.ctrl.mem.is_load() {
        cpu.stats.inst_load += 1;
    } else if wb.ctrl.mem.is_store() {
        cpu.stats.inst_store += 1;
    } else {
        cpu.stats.inst_alu += 1;
    }
    Ok(())
}
