//! Binary Loader.
//!
//! This module provides utilities for reading program images from disk. It performs:
//! 1. **Binary loading:** Reads a raw image (no header) into a byte buffer.
//! 2. **Memory setup:** Creates a memory of the configured size with the image at address 0.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::common::error::MemoryError;
use crate::soc::memory::Memory;

/// Failure to load a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("could not read file '{}': {source}", path.display())]
    Io {
        /// Path of the image.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The image does not fit in memory.
    #[error(transparent)]
    Memory(#[from] MemoryError),
}

/// Loads a binary file from disk into a byte vector.
///
/// # Arguments
///
/// * `path` - Path to the binary file.
///
/// # Returns
///
/// The raw bytes of the file.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates a memory of `size` bytes holding `image` at address 0.
///
/// # Errors
///
/// Returns `LoadError::Memory` if the image is larger than the memory.
pub fn load_memory(image: &[u8], size: usize) -> Result<Memory, LoadError> {
    let mut mem = Memory::new(size);
    mem.load_image(image)?;
    Ok(mem)
}
