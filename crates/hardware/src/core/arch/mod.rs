//! AArch64 architecture-specific components.
//!
//! This module contains the implementation of core architectural elements.
//! It includes the following modules:
//! 1. **GPRs:** General-Purpose Register file implementation (`X0`-`X30`).

/// General-Purpose Register file implementation.
pub mod gpr;
