//! Execution units and functional components.
//!
//! This module contains implementations of the processor execution units.
//! Only the integer ALU is modelled; floating-point execution is an
//! explicit extension point that fails in the Execute stage.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
