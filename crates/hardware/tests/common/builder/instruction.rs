//! A64 instruction encoders.
//!
//! Each helper ORs register and immediate fields into the fixed pattern of one
//! supported encoding. Register arguments are raw 5-bit fields, so 31 encodes SP.

use a64sim_core::isa::a64::opcodes::*;

/// Unconditional branch `B #4` (branches/system group).
pub const BRANCH: u32 = 0x1400_0001;

/// `FADD S0, S1, S2` (scalar FP/SIMD group).
pub const FADD_S: u32 = 0x1E22_2820;

/// `ADD X0, X1, #1` (data processing immediate, but not a supported pattern).
pub const ADD_IMM_64: u32 = 0x9100_0420;

/// `SUB Xd, Xn, #imm12`.
pub fn sub_imm(rd: u32, rn: u32, imm12: u32) -> u32 {
    SUB_IMM_64 | (imm12 & 0xFFF) << 10 | (rn & 0x1F) << 5 | (rd & 0x1F)
}

/// `ADD Wd, Wn, Wm, <shift> #amount` with the raw 2-bit shift kind.
pub fn add_shifted(rd: u32, rn: u32, rm: u32, shift: u32, amount: u32) -> u32 {
    ADD_SHIFTED_32
        | (shift & 0x3) << 22
        | (rm & 0x1F) << 16
        | (amount & 0x3F) << 10
        | (rn & 0x1F) << 5
        | (rd & 0x1F)
}

/// Unsigned-offset load/store with the given base pattern.
fn ldst_uimm(base: u32, rt: u32, rn: u32, imm12: u32) -> u32 {
    base | (imm12 & 0xFFF) << 10 | (rn & 0x1F) << 5 | (rt & 0x1F)
}

/// `LDR Wt, [Xn, #imm12*4]`.
pub fn ldr_w(rt: u32, rn: u32, imm12: u32) -> u32 {
    ldst_uimm(LDR_W_UIMM, rt, rn, imm12)
}

/// `LDRSW Xt, [Xn, #imm12*4]`.
pub fn ldrsw(rt: u32, rn: u32, imm12: u32) -> u32 {
    ldst_uimm(LDRSW_UIMM, rt, rn, imm12)
}

/// `STR Wt, [Xn, #imm12*4]`.
pub fn str_w(rt: u32, rn: u32, imm12: u32) -> u32 {
    ldst_uimm(STR_W_UIMM, rt, rn, imm12)
}

/// `LDR Xt, [Xn, #imm12*8]`.
pub fn ldr_x(rt: u32, rn: u32, imm12: u32) -> u32 {
    ldst_uimm(LDR_X_UIMM, rt, rn, imm12)
}

/// `STR Xt, [Xn, #imm12*8]`.
pub fn str_x(rt: u32, rn: u32, imm12: u32) -> u32 {
    ldst_uimm(STR_X_UIMM, rt, rn, imm12)
}

/// `LDR Wt, [Xn, Xm, LSL #2]`.
pub fn ldr_w_reg(rt: u32, rn: u32, rm: u32) -> u32 {
    LDR_W_REG_LSL2 | (rm & 0x1F) << 16 | (rn & 0x1F) << 5 | (rt & 0x1F)
}
