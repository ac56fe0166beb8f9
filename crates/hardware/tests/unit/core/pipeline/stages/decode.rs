//! Decode Stage Unit Tests.
//!
//! Verifies that `decode_stage` produces the operands, the resolved
//! transfer register, and the control signals for each supported form,
//! and that rejected words produce nothing.

use crate::common::builder::instruction::*;
use crate::common::harness::TestContext;
use a64sim_core::common::RegRef;
use a64sim_core::common::error::{DecodeError, SimError};
use a64sim_core::core::pipeline::latches::{IdExEntry, IfIdEntry};
use a64sim_core::core::pipeline::signals::{AluOp, ControlSignals, MemOp, WriteBackOp};
use a64sim_core::core::pipeline::stages::decode_stage;
use a64sim_core::isa::group::InstructionGroup;
use pretty_assertions::assert_eq;

// ══════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════

const PC: u64 = 0x100;

fn fetched(inst: u32) -> IfIdEntry {
    IfIdEntry {
        pc: PC,
        next_pc: PC + 4,
        inst,
    }
}

fn decode_one(ctx: &TestContext, inst: u32) -> IdExEntry {
    decode_stage(ctx.cpu(), &fetched(inst)).unwrap()
}

// ══════════════════════════════════════════════════════════
// Data processing
// ══════════════════════════════════════════════════════════

#[test]
fn sub_immediate_signals() {
    let mut ctx = TestContext::new();
    ctx.set_reg(2, 10);

    let id = decode_one(&ctx, sub_imm(3, 2, 5));
    assert_eq!(
        id,
        IdExEntry {
            pc: PC,
            next_pc: PC + 4,
            inst: sub_imm(3, 2, 5),
            a: 10,
            b: 5,
            rt: RegRef::General(3),
            ctrl: ControlSignals {
                alu: AluOp::Sub,
                wb: WriteBackOp::RegisterWrite,
                ..ControlSignals::default()
            },
        }
    );
    assert!(!id.ctrl.mem_to_reg);
    assert_eq!(id.ctrl.mem, MemOp::None);
}

#[test]
fn sub_reads_stack_pointer_for_field_31() {
    let mut ctx = TestContext::new();
    ctx.set_sp(0x8000);
    let id = decode_one(&ctx, sub_imm(31, 31, 16));
    assert_eq!(id.a, 0x8000);
    assert_eq!(id.rt, RegRef::StackPointer);
}

#[test]
fn add_shifted_applies_shift_to_second_operand() {
    let mut ctx = TestContext::new();
    ctx.set_reg(2, 0xFFFF_FFFF_0000_0007);
    ctx.set_reg(3, 5);

    let id = decode_one(&ctx, add_shifted(1, 2, 3, 0, 2));
    assert_eq!(id.a, 7, "operand A is the W view of Rn");
    assert_eq!(id.b, 20);
    assert_eq!(id.ctrl.alu, AluOp::Add);
    assert!(id.ctrl.is32);
    assert_eq!(id.ctrl.wb, WriteBackOp::RegisterWrite);
}

#[test]
fn add_shifted_asr_keeps_word_sign() {
    let mut ctx = TestContext::new();
    ctx.set_reg(3, 0x8000_0000);
    let id = decode_one(&ctx, add_shifted(1, 2, 3, 0b10, 31));
    assert_eq!(id.b, 0xFFFF_FFFF);
}

// ══════════════════════════════════════════════════════════
// Loads and stores
// ══════════════════════════════════════════════════════════

#[test]
fn load_word_signals() {
    let mut ctx = TestContext::new();
    ctx.set_reg(1, 0x100);

    let id = decode_one(&ctx, ldr_w(0, 1, 3));
    assert_eq!(id.a, 0x100);
    assert_eq!(id.b, 12);
    assert_eq!(id.rt, RegRef::General(0));
    assert_eq!(
        id.ctrl,
        ControlSignals {
            alu: AluOp::Add,
            mem: MemOp::Read32,
            wb: WriteBackOp::RegisterWrite,
            mem_to_reg: true,
            ..ControlSignals::default()
        }
    );
}

#[test]
fn load_signed_word_is_a_32_bit_read() {
    let ctx = TestContext::new();
    let id = decode_one(&ctx, ldrsw(0, 1, 0));
    assert_eq!(id.ctrl.mem, MemOp::Read32);
    assert!(id.ctrl.signed_load);
    assert!(id.ctrl.mem_to_reg);
}

#[test]
fn store_word_signals() {
    let mut ctx = TestContext::new();
    ctx.set_reg(1, 0x100);

    let id = decode_one(&ctx, str_w(0, 1, 3));
    assert_eq!(id.b, 12);
    assert_eq!(id.rt, RegRef::General(0));
    assert_eq!(
        id.ctrl,
        ControlSignals {
            alu: AluOp::Add,
            mem: MemOp::Write32,
            ..ControlSignals::default()
        }
    );
}

#[test]
fn doubleword_forms() {
    let ctx = TestContext::new();
    let load = decode_one(&ctx, ldr_x(2, 31, 1));
    assert_eq!(load.b, 8);
    assert_eq!(load.ctrl.mem, MemOp::Read64);

    let store = decode_one(&ctx, str_x(2, 31, 1));
    assert_eq!(store.ctrl.mem, MemOp::Write64);
    assert_eq!(store.ctrl.wb, WriteBackOp::None);
}

#[test]
fn register_offset_scales_index() {
    let mut ctx = TestContext::new();
    ctx.set_reg(1, 0x200);
    ctx.set_reg(2, 3);

    let id = decode_one(&ctx, ldr_w_reg(0, 1, 2));
    assert_eq!(id.a, 0x200);
    assert_eq!(id.b, 12);
    assert_eq!(id.ctrl.mem, MemOp::Read32);
    assert!(id.ctrl.mem_to_reg);
}

// ══════════════════════════════════════════════════════════
// Rejections
// ══════════════════════════════════════════════════════════

#[test]
fn branch_is_unsupported_group() {
    let ctx = TestContext::new();
    assert_eq!(
        decode_stage(ctx.cpu(), &fetched(BRANCH)),
        Err(SimError::Decode {
            pc: PC,
            source: DecodeError::UnsupportedGroup {
                inst: BRANCH,
                group: InstructionGroup::BranchExceptionSystem,
            },
        })
    );
}

#[test]
fn fp_is_unsupported_group() {
    let ctx = TestContext::new();
    assert!(matches!(
        decode_stage(ctx.cpu(), &fetched(FADD_S)),
        Err(SimError::Decode {
            source: DecodeError::UnsupportedGroup {
                group: InstructionGroup::ScalarFpSimd,
                ..
            },
            ..
        })
    ));
}

#[test]
fn unknown_pattern_is_unknown_encoding() {
    let ctx = TestContext::new();
    assert!(matches!(
        decode_stage(ctx.cpu(), &fetched(ADD_IMM_64)),
        Err(SimError::Decode {
            source: DecodeError::UnknownEncoding { .. },
            ..
        })
    ));
}
