//! Instruction pipeline implementation.
//!
//! This module contains the implementation of the five-stage instruction pipeline.
//! It includes the following components:
//! 1. **Latches:** Inter-stage buffers for communication between pipeline stages.
//! 2. **Signals:** Control signals generated during instruction decoding.
//! 3. **Stages:** Implementation of Fetch, Decode, Execute, Memory, and Writeback stages.
//!
//! Stages run one after another within a cycle; there is no overlap between instructions.

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations (fetch, decode, execute, memory, writeback).
pub mod stages;
