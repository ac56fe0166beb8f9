//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the encoding patterns, field extraction, and decoding logic for the
//! supported subset of the A64 instruction set.
//!
//! # Groups
//!
//! * Data Processing -- Immediate: `SUB (immediate)`.
//! * Data Processing -- Register: `ADD (shifted register)`, 32-bit.
//! * Loads and Stores: `LDR`, `LDRSW`, `STR` (unsigned offset) and `LDR` (register offset).
//!
//! Branches, system instructions, and floating-point/SIMD encodings are classified
//! but rejected by the decoder.

/// Mask/value patterns for the supported encodings.
pub mod a64;

/// Instruction decoding logic.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Top-level instruction group classification.
pub mod group;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;
