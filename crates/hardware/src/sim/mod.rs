//! Simulation utilities and program loading.
//!
//! Provides utilities for loading binaries into memory, rendering images as
//! text, and the top-level `Simulator` that drives the CPU.

/// Hex listing of program images.
pub mod dump;

/// Binary image loading.
pub mod loader;

/// Top-level simulator.
pub mod simulator;

pub use simulator::Simulator;
