//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage.
//! It handles addition and subtraction for both 32-bit and 64-bit
//! operands, and provides the barrel-shifter used by decode for
//! shifted-register operands.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`shifts`]:     LSL, LSR, ASR operand shifts

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Operand shift operations (lsl, lsr, asr).
pub mod shifts;

use crate::common::error::ControlError;
use crate::core::pipeline::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Condition flags are not modelled: none of the supported instructions set them.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    /// Supports both 32-bit and 64-bit operations based on the `is32` flag.
    ///
    /// # Arguments
    ///
    /// * `op`   - The ALU operation to perform
    /// * `a`    - First operand (64-bit value)
    /// * `b`    - Second operand (64-bit value)
    /// * `is32` - If true, operate on the low 32 bits (`W` registers)
    ///
    /// # Returns
    ///
    /// The 64-bit result of the ALU operation. For 32-bit operations,
    /// the result is zero-extended to 64 bits.
    ///
    /// # Errors
    ///
    /// Returns `ControlError::AluOpNotImplemented` for `AluOp::None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use a64sim_core::core::units::alu::Alu;
    /// use a64sim_core::core::pipeline::signals::AluOp;
    ///
    /// // 64-bit subtraction
    /// assert_eq!(Alu::execute(AluOp::Sub, 10, 5, false), Ok(5));
    ///
    /// // 32-bit addition wraps and zero-extends
    /// assert_eq!(Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1, true), Ok(0));
    /// ```
    pub const fn execute(op: AluOp, a: u64, b: u64, is32: bool) -> Result<u64, ControlError> {
        match op {
            AluOp::Add => Ok(arithmetic::add(a, b, is32)),
            AluOp::Sub => Ok(arithmetic::sub(a, b, is32)),
            AluOp::None => Err(ControlError::AluOpNotImplemented(op)),
        }
    }
}
