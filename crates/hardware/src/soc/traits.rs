//! Memory interface trait.
//!
//! This module defines the `MemoryInterface` trait implemented by every simulated memory. It provides:
//! 1. **Instruction Access:** 32-bit instruction reads for the Fetch stage.
//! 2. **Data Access:** 32- and 64-bit data reads and writes for the Memory stage.
//! 3. **Introspection:** The total addressable size.
//!
//! All accesses are little-endian and must be in bounds and naturally aligned; violations
//! are reported as `MemoryError` and never wrap or truncate silently. Implementors must be
//! `Send` so that independent simulators can run on separate threads.

use crate::common::error::MemoryError;

/// Byte-addressable store seen by the processor.
///
/// Addresses are byte offsets from 0. A `width`-byte access at `addr` is valid when
/// `addr + width <= size()` and `addr % width == 0`.
pub trait MemoryInterface: Send {
    /// Reads a 32-bit instruction word.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError` if the access is out of bounds or misaligned.
    fn read_instruction32(&self, addr: u64) -> Result<u32, MemoryError>;

    /// Reads a 32-bit data word.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError` if the access is out of bounds or misaligned.
    fn read_data32(&self, addr: u64) -> Result<u32, MemoryError>;

    /// Reads a 64-bit data doubleword.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError` if the access is out of bounds or misaligned.
    fn read_data64(&self, addr: u64) -> Result<u64, MemoryError>;

    /// Writes a 32-bit data word.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError` if the access is out of bounds or misaligned.
    fn write_data32(&mut self, addr: u64, val: u32) -> Result<(), MemoryError>;

    /// Writes a 64-bit data doubleword.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError` if the access is out of bounds or misaligned.
    fn write_data64(&mut self, addr: u64, val: u64) -> Result<(), MemoryError>;

    /// Returns the size of the memory in bytes.
    fn size(&self) -> usize;
}
