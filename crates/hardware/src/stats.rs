//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the simulator. It provides:
//! 1. **Cycles:** Total completed cycles and retired instructions.
//! 2. **Instruction mix:** Counts by category (ALU, load, store).
//! 3. **Reporting:** A `Display` rendering of all counters for the command line.

use std::fmt;
use std::time::Instant;

/// Rule printed between report sections.
const RULE: &str = "----------------------------------------------------------";

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total completed cycles.
    pub cycles: u64,
    /// Number of instructions committed (retired).
    pub instructions_retired: u64,

    /// Count of integer load instructions retired.
    pub inst_load: u64,
    /// Count of integer store instructions retired.
    pub inst_store: u64,
    /// Count of ALU (non-load/store) instructions retired.
    pub inst_alu: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_alu: 0,
        }
    }
}

impl SimStats {
    /// Returns the percentage of retired instructions that `count` represents.
    fn share(&self, count: u64) -> f64 {
        let total = self.instructions_retired.max(1);
        (count as f64 / total as f64) * 100.0
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.start_time.elapsed().as_secs_f64();
        writeln!(f, "{RULE}")?;
        writeln!(f, "AARCH64 SIMULATION STATISTICS")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "INSTRUCTION MIX")?;
        writeln!(
            f,
            "  op.alu                 {} ({:.2}%)",
            self.inst_alu,
            self.share(self.inst_alu)
        )?;
        writeln!(
            f,
            "  op.load                {} ({:.2}%)",
            self.inst_load,
            self.share(self.inst_load)
        )?;
        writeln!(
            f,
            "  op.store               {} ({:.2}%)",
            self.inst_store,
            self.share(self.inst_store)
        )?;
        writeln!(f, "{RULE}")
    }
}
