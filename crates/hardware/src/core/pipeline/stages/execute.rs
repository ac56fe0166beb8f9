//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Path Selection:** Routes the instruction to the integer or floating-point path.
//! 2. **Arithmetic Execution:** Performs the selected ALU operation on operands A and B.
//!
//! The floating-point path is not implemented and always fails.

use tracing::trace;

use crate::common::error::{ControlError, SimError};
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry};
use crate::core::units::alu::Alu;

/// Executes the instruction execute stage.
///
/// # Arguments
///
/// * `id` - The decoded instruction from the ID/EX latch.
///
/// # Returns
///
/// The EX/MEM latch entry holding the ALU result.
///
/// # Errors
///
/// Returns `SimError::Execute` if the control signals select the floating-point
/// path or an unimplemented ALU operation.
pub fn execute_stage(id: &IdExEntry) -> Result<ExMemEntry, SimError> {
    let pc = id.pc;
    let alu = if id.ctrl.fp_op {
        execute_fp_stage(id)
    } else {
        Alu::execute(id.ctrl.alu, id.a, id.b, id.ctrl.is32)
    }
    .map_err(|source| SimError::Execute { pc, source })?;

    trace!("EX  pc={pc:#x} {:?} alu={alu:#x}", id.ctrl.alu);

    Ok(ExMemEntry {
        pc,
        next_pc: id.next_pc,
        inst: id.inst,
        alu,
        rt: id.rt,
        ctrl: id.ctrl,
    })
}

/// Floating-point execute path.
///
/// # Errors
///
/// Always returns `ControlError::FloatingPointNotImplemented`.
pub const fn execute_fp_stage(_id: &IdExEntry) -> Result<u64, ControlError> {
    Err(ControlError::FloatingPointNotImplemented)
}
