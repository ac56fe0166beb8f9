//! Simulator: owns the CPU and drives it cycle by cycle.

use std::path::Path;

use crate::common::error::{MemoryError, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::sim::loader::{self, LoadError};
use crate::soc::memory::Memory;
use crate::soc::traits::MemoryInterface;
use crate::stats::SimStats;

/// Top-level simulator: CPU architectural state plus its memory.
#[derive(Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, stats).
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a simulator with a flat memory holding `image` at address 0.
    ///
    /// # Errors
    ///
    /// Returns `MemoryError::ImageTooLarge` if the image does not fit in `config.memory.size`.
    pub fn new(image: &[u8], config: &Config) -> Result<Self, MemoryError> {
        let mut mem = Memory::new(config.memory.size);
        mem.load_image(image)?;
        Ok(Self::with_memory(Box::new(mem), config))
    }

    /// Creates a simulator from a raw image file on disk.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file cannot be read or does not fit in memory.
    pub fn from_file(path: impl AsRef<Path>, config: &Config) -> Result<Self, LoadError> {
        let image = loader::load_binary(path)?;
        let mem = loader::load_memory(&image, config.memory.size)?;
        Ok(Self::with_memory(Box::new(mem), config))
    }

    /// Creates a simulator around an existing memory.
    pub fn with_memory(mem: Box<dyn MemoryInterface>, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(mem, config),
        }
    }

    /// Advances the simulator by one cycle.
    ///
    /// # Errors
    ///
    /// Returns the `SimError` of the stage that failed.
    pub fn tick(&mut self) -> Result<(), SimError> {
        self.cpu.tick()
    }

    /// Runs until the CPU finishes or a stage fails.
    ///
    /// # Errors
    ///
    /// Returns the first `SimError` raised by any stage.
    pub fn run(&mut self) -> Result<(), SimError> {
        self.cpu.run()
    }

    /// Requests that the run stop after the current cycle.
    pub const fn finish(&mut self) {
        self.cpu.finish();
    }

    /// Returns the collected statistics.
    pub const fn stats(&self) -> &SimStats {
        &self.cpu.stats
    }
}
