//! A64 Instruction Patterns.
//!
//! Each supported encoding is identified by `inst & MASK == VALUE`. Masks cover the
//! fixed opcode bits only; register, immediate, and shift fields are left free.

/// Mask for the add/subtract (immediate) class, 64-bit subtract without flags.
pub const SUB_IMM_MASK: u32 = 0xFF80_0000;

/// `SUB Xd|SP, Xn|SP, #imm12{, LSL #12}`.
pub const SUB_IMM_64: u32 = 0xD100_0000;

/// Bit 22 of add/subtract (immediate): shift the immediate left by 12.
pub const SUB_IMM_SH_BIT: u32 = 1 << 22;

/// Mask for the add/subtract (shifted register) class.
pub const ADD_SHIFTED_MASK: u32 = 0xFF20_0000;

/// `ADD Wd, Wn, Wm{, shift #amount}`.
pub const ADD_SHIFTED_32: u32 = 0x0B00_0000;

/// Bit 5 of the `imm6` shift amount; reserved for 32-bit forms.
pub const IMM6_HIGH_BIT: u32 = 1 << 15;

/// Mask for load/store register (unsigned immediate).
pub const LDST_UIMM_MASK: u32 = 0xFFC0_0000;

/// `LDR Wt, [Xn|SP{, #pimm}]`.
pub const LDR_W_UIMM: u32 = 0xB940_0000;

/// `LDRSW Xt, [Xn|SP{, #pimm}]`.
pub const LDRSW_UIMM: u32 = 0xB980_0000;

/// `STR Wt, [Xn|SP{, #pimm}]`.
pub const STR_W_UIMM: u32 = 0xB900_0000;

/// `LDR Xt, [Xn|SP{, #pimm}]`.
pub const LDR_X_UIMM: u32 = 0xF940_0000;

/// `STR Xt, [Xn|SP{, #pimm}]`.
pub const STR_X_UIMM: u32 = 0xF900_0000;

/// Mask for load register (register offset) with `LSL #2` extend.
pub const LDR_REG_MASK: u32 = 0xFFE0_FC00;

/// `LDR Wt, [Xn|SP, Xm, LSL #2]`.
pub const LDR_W_REG_LSL2: u32 = 0xB860_7800;

/// Index shift applied by the register-offset word load.
pub const LDR_W_REG_SCALE: u32 = 2;
