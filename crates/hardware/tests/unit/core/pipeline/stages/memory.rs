//! Memory Stage Unit Tests.
//!
//! Verifies that `mem_stage` correctly performs:
//!   1. Loads: 32-bit zero/sign extension and 64-bit reads into the MDR
//!   2. Stores: the current value of `Rt` is written at the effective address
//!   3. Pass-through: non-memory instructions touch no memory and set no MDR
//!   4. Faults: access errors are reported with the instruction's PC

use std::sync::{Arc, Mutex};

use crate::common::harness::TestContext;
use crate::common::mocks::memory::{Access, LoggingMemory, MockMem};
use a64sim_core::common::error::{MemoryError, SimError};
use a64sim_core::common::{AccessType, RegRef};
use a64sim_core::config::Config;
use a64sim_core::core::Cpu;
use a64sim_core::soc::MemoryInterface;
use a64sim_core::core::pipeline::latches::ExMemEntry;
use a64sim_core::core::pipeline::signals::{AluOp, ControlSignals, MemOp, WriteBackOp};
use a64sim_core::core::pipeline::stages::mem_stage;
use mockall::predicate::eq;

// ══════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════

const PC: u64 = 0x40;

fn entry(addr: u64, rt: RegRef, mem: MemOp, signed_load: bool) -> ExMemEntry {
    let load = mem.is_load();
    ExMemEntry {
        pc: PC,
        next_pc: PC + 4,
        inst: 0,
        alu: addr,
        rt,
        ctrl: ControlSignals {
            alu: AluOp::Add,
            mem,
            wb: if load {
                WriteBackOp::RegisterWrite
            } else {
                WriteBackOp::None
            },
            mem_to_reg: load,
            signed_load,
            ..ControlSignals::default()
        },
    }
}

fn logging_cpu() -> (Cpu, Arc<Mutex<Vec<Access>>>) {
    let mem = LoggingMemory::new(0x1000);
    let log = mem.log();
    (Cpu::new(Box::new(mem), &Config::default()), log)
}

// ══════════════════════════════════════════════════════════
// Loads
// ══════════════════════════════════════════════════════════

#[test]
fn load_word_reads_effective_address() {
    let (mut cpu, log) = logging_cpu();
    cpu.mem.write_data32(0x10C, 0xCAFE_F00D).unwrap();
    log.lock().unwrap().clear();

    let wb = mem_stage(&mut cpu, &entry(0x10C, RegRef::General(0), MemOp::Read32, false)).unwrap();
    assert_eq!(wb.mdr, Some(0xCAFE_F00D));
    assert_eq!(wb.alu, 0x10C);
    assert_eq!(*log.lock().unwrap(), vec![Access::Read32(0x10C)]);
}

#[test]
fn signed_word_load_sign_extends() {
    let mut ctx = TestContext::new();
    ctx.write_word(0x20, 0x8000_0001);
    let wb = mem_stage(
        ctx.cpu_mut(),
        &entry(0x20, RegRef::General(0), MemOp::Read32, true),
    )
    .unwrap();
    assert_eq!(wb.mdr, Some(0xFFFF_FFFF_8000_0001));
}

#[test]
fn unsigned_word_load_zero_extends() {
    let mut ctx = TestContext::new();
    ctx.write_word(0x20, 0x8000_0001);
    let wb = mem_stage(
        ctx.cpu_mut(),
        &entry(0x20, RegRef::General(0), MemOp::Read32, false),
    )
    .unwrap();
    assert_eq!(wb.mdr, Some(0x8000_0001));
}

#[test]
fn doubleword_load() {
    let mut ctx = TestContext::new();
    ctx.write_double(0x28, 0x0123_4567_89AB_CDEF);
    let wb = mem_stage(
        ctx.cpu_mut(),
        &entry(0x28, RegRef::General(0), MemOp::Read64, false),
    )
    .unwrap();
    assert_eq!(wb.mdr, Some(0x0123_4567_89AB_CDEF));
}

#[test]
fn load_does_not_write_registers() {
    let mut ctx = TestContext::new();
    ctx.set_reg(0, 0x55);
    ctx.write_word(0x20, 0x99);
    let _ = mem_stage(
        ctx.cpu_mut(),
        &entry(0x20, RegRef::General(0), MemOp::Read32, false),
    )
    .unwrap();
    assert_eq!(ctx.get_reg(0), 0x55);
}

// ══════════════════════════════════════════════════════════
// Stores
// ══════════════════════════════════════════════════════════

#[test]
fn store_word_writes_low_half_of_rt() {
    let (mut cpu, log) = logging_cpu();
    cpu.regs.write_double_word(0, 0xAAAA_BBBB_1234_5678);
    let before = cpu.regs.clone();

    let wb = mem_stage(&mut cpu, &entry(0x10C, RegRef::General(0), MemOp::Write32, false)).unwrap();
    assert_eq!(wb.mdr, None);
    assert_eq!(
        *log.lock().unwrap(),
        vec![Access::Write32(0x10C, 0x1234_5678)]
    );
    assert_eq!(cpu.mem.read_data32(0x10C).unwrap(), 0x1234_5678);
    assert_eq!(cpu.regs, before);
}

#[test]
fn store_doubleword() {
    let mut ctx = TestContext::new();
    ctx.set_reg(2, 0xFEED_FACE_DEAD_BEEF);
    let _ = mem_stage(
        ctx.cpu_mut(),
        &entry(0x30, RegRef::General(2), MemOp::Write64, false),
    )
    .unwrap();
    assert_eq!(ctx.read_double(0x30), 0xFEED_FACE_DEAD_BEEF);
}

#[test]
fn store_issues_exactly_one_write() {
    let mut mem = MockMem::new();
    let _ = mem.expect_size().return_const(0x1000usize);
    let _ = mem
        .expect_write_data32()
        .with(eq(0x10Cu64), eq(0x42u32))
        .times(1)
        .returning(|_, _| Ok(()));
    let _ = mem.expect_read_data32().never();
    let _ = mem.expect_write_data64().never();

    let mut cpu = Cpu::new(Box::new(mem), &Config::default());
    cpu.regs.write_double_word(0, 0x42);
    let wb = mem_stage(&mut cpu, &entry(0x10C, RegRef::General(0), MemOp::Write32, false)).unwrap();
    assert_eq!(wb.mdr, None);
}

// ══════════════════════════════════════════════════════════
// Pass-through and faults
// ══════════════════════════════════════════════════════════

#[test]
fn alu_instruction_touches_no_memory() {
    let (mut cpu, log) = logging_cpu();
    let ex = ExMemEntry {
        ctrl: ControlSignals {
            alu: AluOp::Sub,
            wb: WriteBackOp::RegisterWrite,
            ..ControlSignals::default()
        },
        ..entry(5, RegRef::General(3), MemOp::None, false)
    };
    let wb = mem_stage(&mut cpu, &ex).unwrap();
    assert_eq!(wb.mdr, None);
    assert_eq!(wb.alu, 5);
    assert!(log.lock().unwrap().is_empty());
}

#[test]
fn out_of_bounds_load_faults() {
    let mut ctx = TestContext::new();
    let addr = 0x1_0000_0000;
    assert_eq!(
        mem_stage(
            ctx.cpu_mut(),
            &entry(addr, RegRef::General(0), MemOp::Read32, false)
        ),
        Err(SimError::Memory {
            pc: PC,
            source: MemoryError::OutOfBounds {
                kind: AccessType::Read,
                addr,
                width: 4,
                size: crate::common::harness::TEST_MEM_SIZE,
            },
        })
    );
}

#[test]
fn misaligned_store_faults_without_writing() {
    let mut ctx = TestContext::new();
    ctx.set_reg(0, u64::MAX);
    let result = mem_stage(
        ctx.cpu_mut(),
        &entry(0x22, RegRef::General(0), MemOp::Write32, false),
    );
    assert!(matches!(
        result,
        Err(SimError::Memory {
            source: MemoryError::Misaligned { .. },
            ..
        })
    ));
    assert_eq!(ctx.read_word(0x20), 0);
    assert_eq!(ctx.read_word(0x24), 0);
}
