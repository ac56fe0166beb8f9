//! Execute Stage Unit Tests.

use a64sim_core::common::RegRef;
use a64sim_core::common::error::{ControlError, SimError};
use a64sim_core::core::pipeline::latches::IdExEntry;
use a64sim_core::core::pipeline::signals::{AluOp, ControlSignals, MemOp, WriteBackOp};
use a64sim_core::core::pipeline::stages::execute_stage;

const PC: u64 = 0x20;

fn entry(a: u64, b: u64, ctrl: ControlSignals) -> IdExEntry {
    IdExEntry {
        pc: PC,
        next_pc: PC + 4,
        inst: 0,
        a,
        b,
        rt: RegRef::General(3),
        ctrl,
    }
}

#[test]
fn sub_result_is_forwarded() {
    let ctrl = ControlSignals {
        alu: AluOp::Sub,
        wb: WriteBackOp::RegisterWrite,
        ..ControlSignals::default()
    };
    let ex = execute_stage(&entry(10, 5, ctrl)).unwrap();
    assert_eq!(ex.alu, 5);
    assert_eq!(ex.pc, PC);
    assert_eq!(ex.next_pc, PC + 4);
    assert_eq!(ex.rt, RegRef::General(3));
    assert_eq!(ex.ctrl, ctrl);
}

#[test]
fn effective_address_is_base_plus_offset() {
    let ctrl = ControlSignals {
        alu: AluOp::Add,
        mem: MemOp::Read32,
        ..ControlSignals::default()
    };
    let ex = execute_stage(&entry(0x100, 12, ctrl)).unwrap();
    assert_eq!(ex.alu, 0x10C);
}

#[test]
fn word_add_wraps() {
    let ctrl = ControlSignals {
        alu: AluOp::Add,
        is32: true,
        ..ControlSignals::default()
    };
    let ex = execute_stage(&entry(0xFFFF_FFFF, 2, ctrl)).unwrap();
    assert_eq!(ex.alu, 1);
}

#[test]
fn missing_alu_op_fails() {
    assert_eq!(
        execute_stage(&entry(1, 1, ControlSignals::default())),
        Err(SimError::Execute {
            pc: PC,
            source: ControlError::AluOpNotImplemented(AluOp::None),
        })
    );
}

#[test]
fn floating_point_path_fails() {
    let ctrl = ControlSignals {
        alu: AluOp::Add,
        fp_op: true,
        ..ControlSignals::default()
    };
    assert_eq!(
        execute_stage(&entry(1, 1, ctrl)),
        Err(SimError::Execute {
            pc: PC,
            source: ControlError::FloatingPointNotImplemented,
        })
    );
}
