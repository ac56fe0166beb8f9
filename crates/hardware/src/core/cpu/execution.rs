//! Main Execution Loop.
//!
//! This module implements the core execution cycle of the CPU. It performs the following:
//! 1. **Pipeline Coordination:** Moves one instruction through Fetch, Decode, Execute,
//!    Memory, and Writeback per cycle.
//! 2. **PC Management:** Advances the program counter only after a cycle completes.
//! 3. **Run Control:** Loops while no stage has failed and the finished flag is clear.

use tracing::{debug, info, warn};

use super::Cpu;
use crate::common::error::SimError;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};

impl Cpu {
    /// Executes one full cycle.
    ///
    /// On success the PC moves to the next sequential instruction and the cycle
    /// counter is incremented. On failure nothing is committed past the failing
    /// stage and the PC still points at the faulting instruction.
    ///
    /// # Errors
    ///
    /// Returns the `SimError` of the first stage that failed.
    pub fn tick(&mut self) -> Result<(), SimError> {
        let if_id = fetch_stage(self)?;
        let id_ex = decode_stage(self, &if_id)?;
        let ex_mem = execute_stage(&id_ex)?;
        let mem_wb = mem_stage(self, &ex_mem)?;
        wb_stage(self, &mem_wb)?;

        self.regs.set_pc(mem_wb.next_pc);
        self.stats.cycles += 1;
        debug!(
            "cycle {} complete, pc={:#x}",
            self.stats.cycles,
            self.regs.pc()
        );

        if self.max_cycles.is_some_and(|max| self.stats.cycles >= max) {
            self.finish();
        }
        Ok(())
    }

    /// Runs cycles until the finished flag is set or a stage fails.
    ///
    /// # Errors
    ///
    /// Returns the first `SimError` raised by any stage; the run does not retry.
    pub fn run(&mut self) -> Result<(), SimError> {
        info!("run start, pc={:#x} sp={:#x}", self.regs.pc(), self.regs.sp());

        if self.max_cycles.is_some_and(|max| self.stats.cycles >= max) {
            self.finish();
        }
        while !self.finished {
            if let Err(err) = self.tick() {
                warn!("{} stage failed: {err}", err.stage());
                return Err(err);
            }
        }

        info!(
            "run finished after {} cycles, pc={:#x}",
            self.stats.cycles,
            self.regs.pc()
        );
        Ok(())
    }
}
