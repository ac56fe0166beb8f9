//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Decoding:** Converts raw 32-bit instruction bits into an `Instruction` using the ISA decoder.
//! 2. **Register Read:** Reads the source operands from the Register File.
//! 3. **Operand Shaping:** Applies shifts and immediate scaling to form operands A and B.
//! 4. **Control Generation:** Builds a fresh `ControlSignals` bundle for the later stages.
//!
//! Decoding never writes register or memory state. A failed decode produces no operands
//! and no control signals.

use tracing::trace;

use crate::common::error::{DecodeError, SimError};
use crate::common::reg::{RegRef, RegisterFile};
use crate::core::Cpu;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::core::pipeline::signals::{AluOp, ControlSignals, MemOp, WriteBackOp};
use crate::core::units::alu::shifts;
use crate::isa::a64::opcodes::LDR_W_REG_SCALE;
use crate::isa::decode::decode as instruction_decode;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::{Instruction, Transfer};

/// Operands and control signals produced by decoding one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// First ALU operand.
    pub a: u64,
    /// Second ALU operand.
    pub b: u64,
    /// Destination of loads and ALU results; source of stores.
    pub rt: RegRef,
    /// Control signals for Execute, Memory, and Writeback.
    pub ctrl: ControlSignals,
}

/// Decodes an instruction word and reads its operands.
///
/// # Arguments
///
/// * `inst` - The raw instruction word.
/// * `regs` - Register file the operands are read from.
///
/// # Returns
///
/// Operands A and B, the resolved destination/transfer register, and the control signals.
///
/// # Errors
///
/// Returns the `DecodeError` of the ISA decoder.
pub fn decode(inst: u32, regs: &RegisterFile) -> Result<Decoded, DecodeError> {
    let decoded = match instruction_decode(inst)? {
        Instruction::SubImm { rd, rn, imm12 } => Decoded {
            a: regs.read(rn),
            b: u64::from(imm12),
            rt: rd,
            ctrl: ControlSignals {
                alu: AluOp::Sub,
                wb: WriteBackOp::RegisterWrite,
                ..ControlSignals::default()
            },
        },

        Instruction::AddShifted {
            rd,
            rn,
            rm,
            shift,
            amount,
        } => Decoded {
            a: u64::from(regs.read_word_ref(rn)),
            b: u64::from(shifts::shift32(shift, regs.read_word_ref(rm), amount)),
            rt: rd,
            ctrl: ControlSignals {
                alu: AluOp::Add,
                wb: WriteBackOp::RegisterWrite,
                is32: true,
                ..ControlSignals::default()
            },
        },

        Instruction::LoadStoreImm {
            transfer,
            rt,
            rn,
            offset,
        } => Decoded {
            a: regs.read(rn),
            b: offset,
            rt,
            ctrl: transfer_signals(transfer),
        },

        Instruction::LoadRegOffset { rt, rn, rm } => Decoded {
            a: regs.read(rn),
            b: regs.read(rm).wrapping_shl(LDR_W_REG_SCALE),
            rt,
            ctrl: transfer_signals(Transfer::LoadWord),
        },
    };
    Ok(decoded)
}

/// Control signals for a load or store: the ALU adds base and offset.
const fn transfer_signals(transfer: Transfer) -> ControlSignals {
    let (mem, load) = match transfer {
        Transfer::LoadWord | Transfer::LoadSignedWord => (MemOp::Read32, true),
        Transfer::LoadDoubleWord => (MemOp::Read64, true),
        Transfer::StoreWord => (MemOp::Write32, false),
        Transfer::StoreDoubleWord => (MemOp::Write64, false),
    };
    ControlSignals {
        alu: AluOp::Add,
        mem,
        wb: if load {
            WriteBackOp::RegisterWrite
        } else {
            WriteBackOp::None
        },
        mem_to_reg: load,
        fp_op: false,
        is32: false,
        signed_load: matches!(transfer, Transfer::LoadSignedWord),
    }
}

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `cpu`   - Reference to the CPU state
/// * `if_id` - The fetched instruction
///
/// # Returns
///
/// The ID/EX latch entry for the Execute stage.
///
/// # Errors
///
/// Returns `SimError::Decode` if the instruction word is not supported.
pub fn decode_stage(cpu: &Cpu, if_id: &IfIdEntry) -> Result<IdExEntry, SimError> {
    let pc = if_id.pc;
    let Decoded { a, b, rt, ctrl } =
        decode(if_id.inst, &cpu.regs).map_err(|source| SimError::Decode { pc, source })?;

    trace!(
        "ID  pc={pc:#x} {} a={a:#x} b={b:#x} rt={rt} {ctrl:?}",
        disassemble(if_id.inst)
    );

    Ok(IdExEntry {
        pc,
        next_pc: if_id.next_pc,
        inst: if_id.inst,
        a,
        b,
        rt,
        ctrl,
    })
}
