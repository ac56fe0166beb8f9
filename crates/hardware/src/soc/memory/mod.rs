//! Flat System Memory.
//!
//! This module implements the unified code and data memory. It provides:
//! 1. **Storage:** A zero-initialised byte buffer sized at construction.
//! 2. **Access:** Little-endian, bounds- and alignment-checked word and doubleword accesses.
//! 3. **Image Loading:** Copying a raw program image to address 0.

use crate::common::data::AccessType;
use crate::common::error::MemoryError;
use crate::soc::traits::MemoryInterface;

/// Flat little-endian memory backed by a `Vec<u8>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    data: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled memory.
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the memory in bytes.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size],
        }
    }

    /// Copies a raw program image into memory starting at address 0.
    ///
    /// Bytes past the end of the image keep their previous contents.
    ///
    /// # Arguments
    ///
    /// * `image` - The bytes to load.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::ImageTooLarge` if the image is longer than the memory.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), MemoryError> {
        let size = self.data.len();
        match self.data.get_mut(..image.len()) {
            Some(dst) => {
                dst.copy_from_slice(image);
                Ok(())
            }
            None => Err(MemoryError::ImageTooLarge {
                len: image.len(),
                size,
            }),
        }
    }

    /// Returns the backing bytes of the memory.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Validates an access and returns its offset into the buffer.
    fn check(&self, kind: AccessType, addr: u64, width: usize) -> Result<usize, MemoryError> {
        let size = self.data.len();
        let oob = MemoryError::OutOfBounds {
            kind,
            addr,
            width,
            size,
        };
        let off = usize::try_from(addr).map_err(|_| oob)?;
        let end = off.checked_add(width).ok_or(oob)?;
        if end > size {
            return Err(oob);
        }
        if !off.is_multiple_of(width) {
            return Err(MemoryError::Misaligned { kind, addr, width });
        }
        Ok(off)
    }

    fn read_bytes<const N: usize>(&self, kind: AccessType, addr: u64) -> Result<[u8; N], MemoryError> {
        let off = self.check(kind, addr, N)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[off..off + N]);
        Ok(buf)
    }

    fn write_bytes<const N: usize>(&mut self, addr: u64, bytes: [u8; N]) -> Result<(), MemoryError> {
        let off = self.check(AccessType::Write, addr, N)?;
        self.data[off..off + N].copy_from_slice(&bytes);
        Ok(())
    }
}

impl MemoryInterface for Memory {
    fn read_instruction32(&self, addr: u64) -> Result<u32, MemoryError> {
        self.read_bytes(AccessType::Fetch, addr).map(u32::from_le_bytes)
    }

    fn read_data32(&self, addr: u64) -> Result<u32, MemoryError> {
        self.read_bytes(AccessType::Read, addr).map(u32::from_le_bytes)
    }

    fn read_data64(&self, addr: u64) -> Result<u64, MemoryError> {
        self.read_bytes(AccessType::Read, addr).map(u64::from_le_bytes)
    }

    fn write_data32(&mut self, addr: u64, val: u32) -> Result<(), MemoryError> {
        self.write_bytes(addr, val.to_le_bytes())
    }

    fn write_data64(&mut self, addr: u64, val: u64) -> Result<(), MemoryError> {
        self.write_bytes(addr, val.to_le_bytes())
    }

    fn size(&self) -> usize {
        self.data.len()
    }
}
