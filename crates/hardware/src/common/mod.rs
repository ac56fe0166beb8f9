//! Common utilities and types used throughout the AArch64 simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Instruction layout, register counts, and memory defaults.
//! 2. **Memory Access:** Definitions for categorizing memory operations (Fetch/Read/Write).
//! 3. **Error Handling:** Memory, decode, control, and per-stage error types.
//! 4. **Register Management:** The architectural register file and resolved register references.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for every simulator layer.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::INSTRUCTION_SIZE;
pub use data::AccessType;
pub use error::{ControlError, DecodeError, MemoryError, SimError, Stage};
pub use reg::{RegRef, RegisterFile};
