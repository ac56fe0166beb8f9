//! Instruction Disassembler for the supported A64 subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use a64sim_core::isa::disasm::disassemble;
//! let text = disassemble(0xD100_1443); // SUB X3, X2, #5
//! assert_eq!(text, "sub x3, x2, #5");
//! ```

use crate::common::reg::RegRef;
use crate::isa::decode::decode;
use crate::isa::instruction::{Instruction, ShiftKind};

/// Text returned for encodings the decoder rejects.
pub const UNKNOWN: &str = "<unknown>";

/// Returns the `X`-view name of a register (`x0`-`x30`, `sp`).
fn xreg(reg: RegRef) -> String {
    reg.to_string()
}

/// Returns the `W`-view name of a register (`w0`-`w30`, `wsp`).
fn wreg(reg: RegRef) -> String {
    match reg {
        RegRef::General(idx) => format!("w{idx}"),
        RegRef::StackPointer => "wsp".to_string(),
    }
}

/// Formats a base-plus-immediate address operand, omitting a zero offset.
fn address(rn: RegRef, offset: u64) -> String {
    if offset == 0 {
        format!("[{}]", xreg(rn))
    } else {
        format!("[{}, #{offset}]", xreg(rn))
    }
}

/// Disassembles a 32-bit A64 instruction into a human-readable string.
///
/// Returns a mnemonic like `"add w1, w1, w0, lsl #2"` or [`UNKNOWN`] for
/// encodings the decoder does not support.
pub fn disassemble(inst: u32) -> String {
    let Ok(decoded) = decode(inst) else {
        return UNKNOWN.to_string();
    };

    match decoded {
        Instruction::SubImm { rd, rn, imm12 } => {
            format!("sub {}, {}, #{imm12}", xreg(rd), xreg(rn))
        }
        Instruction::AddShifted {
            rd,
            rn,
            rm,
            shift,
            amount,
        } => {
            let base = format!("add {}, {}, {}", wreg(rd), wreg(rn), wreg(rm));
            if shift == ShiftKind::Lsl && amount == 0 {
                base
            } else {
                format!("{base}, {} #{amount}", shift.mnemonic())
            }
        }
        Instruction::LoadStoreImm {
            transfer,
            rt,
            rn,
            offset,
        } => {
            let rt = if transfer.is64() { xreg(rt) } else { wreg(rt) };
            format!("{} {rt}, {}", transfer.mnemonic(), address(rn, offset))
        }
        Instruction::LoadRegOffset { rt, rn, rm } => {
            format!("ldr {}, [{}, {}, lsl #2]", wreg(rt), xreg(rn), xreg(rm))
        }
    }
}
