//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Maintains the register file, including SP and PC.
//! 2. **Memory Integration:** Owns the memory the pipeline fetches from and accesses.
//! 3. **Run Control:** Tracks the finished flag and the optional cycle limit.

/// Instruction execution orchestration and pipeline coordination.
pub mod execution;

use std::fmt;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::soc::traits::MemoryInterface;
use crate::stats::SimStats;

/// Main CPU structure containing all processor state and components.
pub struct Cpu {
    /// General Purpose Registers, stack pointer, and program counter.
    pub regs: RegisterFile,
    /// Unified instruction and data memory.
    pub mem: Box<dyn MemoryInterface>,
    /// Set when the run should stop after the current cycle.
    pub finished: bool,
    /// Number of completed cycles after which the run finishes.
    pub max_cycles: Option<u64>,
    /// Performance statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a new CPU attached to the given memory.
    ///
    /// # Arguments
    ///
    /// * `mem` - The memory holding the program image.
    /// * `config` - The simulator configuration parameters.
    ///
    /// # Returns
    ///
    /// A new `Cpu` with PC at `general.start_pc` and SP at `general.initial_sp`,
    /// or at the top of memory when no initial SP is configured.
    pub fn new(mem: Box<dyn MemoryInterface>, config: &Config) -> Self {
        let mut regs = RegisterFile::new();
        regs.set_pc(config.general.start_pc);
        regs.set_sp(config.general.initial_sp.unwrap_or(mem.size() as u64));

        Self {
            regs,
            mem,
            finished: false,
            max_cycles: config.general.max_cycles,
            stats: SimStats::default(),
        }
    }

    /// Requests that the run stop after the current cycle.
    pub const fn finish(&mut self) {
        self.finished = true;
    }

    /// Returns `true` once the run has been asked to stop.
    pub const fn is_finished(&self) -> bool {
        self.finished
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("mem_size", &self.mem.size())
            .field("finished", &self.finished)
            .field("max_cycles", &self.max_cycles)
            .field("stats", &self.stats)
            .finish()
    }
}
