//! # Addressing Modes
//!
//! This module defines the addressing modes of the 6502 and the resolver that turns
//! an instruction's operand bytes into an effective operand location.
//!
//! Resolution consumes the operand bytes at PC, leaves the result in the CPU's
//! effective-address (or relative-offset) latch, and reports whether the mode may
//! cost an extra cycle. The extra cycle is only billed when the operation agrees.

use crate::{CPU, MemoryBus};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    ///
    /// This variant is also the tag the executor checks to decide whether an
    /// operand is read from (and written back to) A instead of the bus.
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// A pointer ending in 0xFF fetches its high byte from the start of the
    /// same page, as the NMOS part does.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// True when `a` and `b` lie on different 256-byte pages.
#[inline]
pub(crate) fn page_crossed(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves the operand location for `mode`, advancing PC past the operand bytes.
    ///
    /// Returns true when the resolution crossed a page and may owe an extra cycle.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> bool {
        match mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => false,
            AddressingMode::Immediate => {
                self.effective_address = self.regs.pc;
                self.regs.pc = self.regs.pc.wrapping_add(1);
                false
            }
            AddressingMode::ZeroPage => self.zero_page_indexed(0),
            AddressingMode::ZeroPageX => self.zero_page_indexed(self.regs.x),
            AddressingMode::ZeroPageY => self.zero_page_indexed(self.regs.y),
            AddressingMode::Relative => {
                let offset = self.fetch_pc_byte() as i8;
                self.relative_offset = offset as i16 as u16;
                false
            }
            AddressingMode::Absolute => {
                self.effective_address = self.fetch_pc_word();
                false
            }
            AddressingMode::AbsoluteX => self.absolute_indexed(self.regs.x),
            AddressingMode::AbsoluteY => self.absolute_indexed(self.regs.y),
            AddressingMode::Indirect => {
                let ptr = self.fetch_pc_word();
                let lo = self.memory.read(ptr) as u16;
                // The high byte never carries into the next page.
                let hi_ptr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let hi = self.memory.read(hi_ptr) as u16;
                self.effective_address = (hi << 8) | lo;
                false
            }
            AddressingMode::IndirectX => {
                let ptr = self.fetch_pc_byte().wrapping_add(self.regs.x);
                let lo = self.memory.read(ptr as u16) as u16;
                let hi = self.memory.read(ptr.wrapping_add(1) as u16) as u16;
                self.effective_address = (hi << 8) | lo;
                false
            }
            AddressingMode::IndirectY => {
                let ptr = self.fetch_pc_byte();
                let lo = self.memory.read(ptr as u16) as u16;
                let hi = self.memory.read(ptr.wrapping_add(1) as u16) as u16;
                let base = (hi << 8) | lo;
                self.effective_address = base.wrapping_add(self.regs.y as u16);
                page_crossed(base, self.effective_address)
            }
        }
    }

    fn zero_page_indexed(&mut self, index: u8) -> bool {
        self.effective_address = self.fetch_pc_byte().wrapping_add(index) as u16;
        false
    }

    fn absolute_indexed(&mut self, index: u8) -> bool {
        let base = self.fetch_pc_word();
        self.effective_address = base.wrapping_add(index as u16);
        page_crossed(base, self.effective_address)
    }

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_pc_byte(&mut self) -> u8 {
        let byte = self.memory.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        byte
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_pc_word(&mut self) -> u16 {
        let lo = self.fetch_pc_byte() as u16;
        let hi = self.fetch_pc_byte() as u16;
        (hi << 8) | lo
    }
}
