/// Decode: operands and control signals.
pub mod decode;

/// Execute: ALU and floating-point path selection.
pub mod execute;


/// Memory: loads and stores.
pub mod memory;
