//! A64 Instruction Decoder.
//!
//! This module maps a raw 32-bit instruction word to a structured `Instruction`.
//! Decoding proceeds in two steps:
//! 1. **Group Dispatch:** `op0` (bits 28..25) selects a group; unsupported groups fail immediately.
//! 2. **Pattern Match:** Each group decoder compares the word against fixed mask/value pairs
//!    and extracts the register and immediate fields of the first match.
//!
//! Every register field is resolved through [`RegRef::from_field`], so field value 31
//! always names the stack pointer. Decoding is pure and never touches machine state.

use crate::common::error::DecodeError;
use crate::common::reg::RegRef;
use crate::isa::a64::opcodes;
use crate::isa::group::InstructionGroup;
use crate::isa::instruction::{Instruction, InstructionBits, ShiftKind, Transfer};

/// Unsigned-offset load/store patterns and the transfer each one performs.
const LOAD_STORE_UIMM: [(u32, Transfer); 5] = [
    (opcodes::LDR_W_UIMM, Transfer::LoadWord),
    (opcodes::LDRSW_UIMM, Transfer::LoadSignedWord),
    (opcodes::STR_W_UIMM, Transfer::StoreWord),
    (opcodes::LDR_X_UIMM, Transfer::LoadDoubleWord),
    (opcodes::STR_X_UIMM, Transfer::StoreDoubleWord),
];

/// Decodes a 32-bit instruction word.
///
/// # Arguments
///
/// * `inst` - The raw instruction word.
///
/// # Returns
///
/// The decoded instruction with resolved register references.
///
/// # Errors
///
/// * `DecodeError::UnsupportedGroup` if `op0` selects a group with no decoder.
/// * `DecodeError::UnknownEncoding` if the group is supported but no pattern matches,
///   or the match uses a reserved field value.
pub fn decode(inst: u32) -> Result<Instruction, DecodeError> {
    let group = InstructionGroup::classify(inst);
    let decoded = match group {
        InstructionGroup::DataProcessingImmediate => decode_dp_immediate(inst),
        InstructionGroup::DataProcessingRegister => decode_dp_register(inst),
        InstructionGroup::LoadsAndStores => decode_load_store(inst),
        InstructionGroup::Reserved
        | InstructionGroup::BranchExceptionSystem
        | InstructionGroup::ScalarFpSimd => {
            return Err(DecodeError::UnsupportedGroup { inst, group });
        }
    };
    decoded.ok_or(DecodeError::UnknownEncoding { inst, group })
}

/// Data Processing -- Immediate.
fn decode_dp_immediate(inst: u32) -> Option<Instruction> {
    if inst & opcodes::SUB_IMM_MASK == opcodes::SUB_IMM_64 {
        // LSL #12 form not implemented
        if inst & opcodes::SUB_IMM_SH_BIT != 0 {
            return None;
        }
        return Some(Instruction::SubImm {
            rd: RegRef::from_field(inst.rd()),
            rn: RegRef::from_field(inst.rn()),
            imm12: inst.imm12(),
        });
    }
    None
}

/// Data Processing -- Register.
fn decode_dp_register(inst: u32) -> Option<Instruction> {
    if inst & opcodes::ADD_SHIFTED_MASK == opcodes::ADD_SHIFTED_32 {
        let shift = ShiftKind::from_bits(inst.shift_kind())?;
        if inst & opcodes::IMM6_HIGH_BIT != 0 {
            return None;
        }
        return Some(Instruction::AddShifted {
            rd: RegRef::from_field(inst.rd()),
            rn: RegRef::from_field(inst.rn()),
            rm: RegRef::from_field(inst.rm()),
            shift,
            amount: inst.imm6(),
        });
    }
    None
}

/// Loads and Stores.
fn decode_load_store(inst: u32) -> Option<Instruction> {
    let rt = RegRef::from_field(inst.rt());
    let rn = RegRef::from_field(inst.rn());

    if let Some(&(_, transfer)) = LOAD_STORE_UIMM
        .iter()
        .find(|(value, _)| inst & opcodes::LDST_UIMM_MASK == *value)
    {
        return Some(Instruction::LoadStoreImm {
            transfer,
            rt,
            rn,
            offset: u64::from(inst.imm12()) * transfer.width(),
        });
    }

    if inst & opcodes::LDR_REG_MASK == opcodes::LDR_W_REG_LSL2 {
        return Some(Instruction::LoadRegOffset {
            rt,
            rn,
            rm: RegRef::from_field(inst.rm()),
        });
    }

    None
}
