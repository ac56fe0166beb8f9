//! System-on-Chip (SoC) Components.
//!
//! This module organizes the storage attached to the simulated processor:
//! the `MemoryInterface` trait seen by the pipeline and the flat `Memory` that
//! implements it.

/// Flat, byte-addressable memory implementation.
pub mod memory;

/// Memory interface trait definitions.
pub mod traits;

pub use memory::Memory;
pub use traits::MemoryInterface;
