//! AArch64 instruction-set simulator library.
//!
//! This crate implements a teaching-oriented simulator for a reduced A64 integer subset with the following:
//! 1. **Core:** Fetch, decode, execute, memory, and writeback stages over a register file with SP and PC.
//! 2. **Memory:** A flat, little-endian, bounds- and alignment-checked memory behind `MemoryInterface`.
//! 3. **ISA:** Group classification, pattern decoding, and disassembly of the supported encodings.
//! 4. **Simulation:** Loader, hex dump, configuration, and statistics collection.

/// Common types and constants (registers, errors, access types).
pub mod common;
/// Simulator configuration (defaults and JSON-backed config structures).
pub mod config;
/// CPU core (pipeline, arch, execution units, run loop).
pub mod core;
/// Instruction set (groups, decode, instruction fields, disassembly).
pub mod isa;
/// Binary loader, hex dump, and top-level simulator.
pub mod sim;
/// Memory interface and flat memory implementation.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse it from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, and stats.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
