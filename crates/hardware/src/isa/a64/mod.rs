//! A64 Base Instruction Encodings.
//!
//! Defines the fixed bit patterns of the supported A64 integer instructions.
//!
//! # Structure
//!
//! - `opcodes`: Mask/value pairs identifying each supported encoding.

/// Mask/value pairs for the supported A64 encodings.
pub mod opcodes;
