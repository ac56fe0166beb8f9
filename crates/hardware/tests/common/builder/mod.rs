//! Builders for test inputs.

/// Encoders for the supported A64 instructions.
pub mod instruction;
