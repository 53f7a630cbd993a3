//! # Status Register
//!
//! Bit masks for the processor status register (P) and the register snapshot
//! reported to callers.
//!
//! Bit layout (NV-BDIZC):
//! - Bit 7: N (Negative)
//! - Bit 6: V (Overflow)
//! - Bit 5: U (unused, set after reset)
//! - Bit 4: B (Break)
//! - Bit 3: D (Decimal, stored but ignored by the 2A03)
//! - Bit 2: I (Interrupt Disable)
//! - Bit 1: Z (Zero)
//! - Bit 0: C (Carry)

pub const CARRY: u8 = 1 << 0;
pub const ZERO: u8 = 1 << 1;
pub const INTERRUPT_DISABLE: u8 = 1 << 2;
pub const DECIMAL: u8 = 1 << 3;
pub const BREAK: u8 = 1 << 4;
pub const UNUSED: u8 = 1 << 5;
pub const OVERFLOW: u8 = 1 << 6;
pub const NEGATIVE: u8 = 1 << 7;

/// Programmer-visible register file.
///
/// The CPU keeps one working copy and one retired copy of this record; the
/// public getters read the retired copy.
///
/// # Examples
///
/// ```
/// use nes6502::{CPU, FlatMemory, MemoryBus};
/// use nes6502::flags::UNUSED;
///
/// let mut mem = FlatMemory::new();
/// mem.write(0xFFFC, 0x34);
/// mem.write(0xFFFD, 0x12);
///
/// let cpu = CPU::new(mem);
/// let regs = cpu.registers();
/// assert_eq!(regs.pc, 0x1234);
/// assert_eq!(regs.sp, 0xFD);
/// assert_eq!(regs.status, UNUSED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Stack pointer (offset into page 0x01)
    pub sp: u8,
    /// Program counter
    pub pc: u16,
    /// Packed status flags
    pub status: u8,
}

impl Registers {
    /// Returns true if every bit of `flag` is set.
    pub fn flag(&self, flag: u8) -> bool {
        self.status & flag == flag
    }

    /// Sets or clears the bits of `flag`.
    pub fn set_flag(&mut self, flag: u8, value: bool) {
        if value {
            self.status |= flag;
        } else {
            self.status &= !flag;
        }
    }

    /// Updates Z and N from a result byte.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.set_flag(ZERO, value == 0);
        self.set_flag(NEGATIVE, value & 0x80 != 0);
    }
}
