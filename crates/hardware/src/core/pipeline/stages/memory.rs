//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline.
//! It performs the data memory transaction selected by decode, using the
//! ALU result as the effective address:
//! 1. **Loads:** Read 32 or 64 bits into the memory data register (MDR),
//!    zero- or sign-extending 32-bit values.
//! 2. **Stores:** Write the current value of the transfer register `Rt`.

use tracing::trace;

use crate::common::error::SimError;
use crate::core::Cpu;
use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use crate::core::pipeline::signals::MemOp;

/// Executes the memory stage of the pipeline.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state
/// * `ex`  - The executed instruction from the EX/MEM latch
///
/// # Returns
///
/// The MEM/WB latch entry; `mdr` is set only for loads.
///
/// # Errors
///
/// Returns `SimError::Memory` if the effective address is out of bounds or misaligned.
pub fn mem_stage(cpu: &mut Cpu, ex: &ExMemEntry) -> Result<MemWbEntry, SimError> {
    let pc = ex.pc;
    let addr = ex.alu;
    let to_sim = |source| SimError::Memory { pc, source };

    let mdr = match ex.ctrl.mem {
        MemOp::None => None,
        MemOp::Read32 => {
            let word = cpu.mem.read_data32(addr).map_err(to_sim)?;
            Some(if ex.ctrl.signed_load {
                word as i32 as i64 as u64
            } else {
                u64::from(word)
            })
        }
        MemOp::Read64 => Some(cpu.mem.read_data64(addr).map_err(to_sim)?),
        MemOp::Write32 => {
            cpu.mem
                .write_data32(addr, cpu.regs.read_word_ref(ex.rt))
                .map_err(to_sim)?;
            None
        }
        MemOp::Write64 => {
            cpu.mem
                .write_data64(addr, cpu.regs.read(ex.rt))
                .map_err(to_sim)?;
            None
        }
    };

    if ex.ctrl.mem != MemOp::None {
        trace!("MEM pc={pc:#x} {:?} addr={addr:#x} mdr={mdr:x?}", ex.ctrl.mem);
    }

    Ok(MemWbEntry {
        pc,
        next_pc: ex.next_pc,
        inst: ex.inst,
        alu: ex.alu,
        mdr,
        rt: ex.rt,
        ctrl: ex.ctrl,
    })
}
