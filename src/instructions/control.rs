//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR / RTS: Call and return from subroutine
//! - RTI: Return from interrupt
//! - BRK: Break
//! - NOP, and the no-op used for illegal opcodes

use crate::flags::{BREAK, UNUSED};
use crate::{CPU, MemoryBus};

/// Executes the JMP (Jump) instruction.
///
/// The resolver has already handled the indirect-pointer page bug, so JMP only
/// commits the effective address.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.pc = cpu.effective_address;
    false
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return address - 1),
/// high byte first, then jumps.
///
/// # Examples
///
/// ```
/// use nes6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x10);
/// memory.write(0x1000, 0x20); // JSR $2000
/// memory.write(0x1001, 0x00);
/// memory.write(0x1002, 0x20);
///
/// let mut cpu = CPU::new(memory);
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.pc(), 0x2000);
/// assert_eq!(cpu.memory().read(0x01FD), 0x10);
/// assert_eq!(cpu.memory().read(0x01FC), 0x02);
/// ```
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let return_address = cpu.regs.pc.wrapping_sub(1);
    cpu.push_word(return_address);
    cpu.regs.pc = cpu.effective_address;
    false
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the return address (low byte first) and adds one.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.pc = cpu.pull_word().wrapping_add(1);
    false
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls status with Break and Unused cleared from the pulled value, then pulls PC.
/// Unlike RTS the address is used as is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.status = cpu.pull() & !(BREAK | UNUSED);
    cpu.regs.pc = cpu.pull_word();
    false
}

/// Executes the BRK (Break) instruction.
///
/// Sets the Break flag and skips the padding byte after the opcode. BRK does not
/// vector through 0xFFFE on this core.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.set_flag(BREAK, true);
    cpu.regs.pc = cpu.regs.pc.wrapping_add(1);
    false
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>) -> bool {
    false
}

/// Executes an undocumented opcode.
///
/// Operand bytes were consumed by the resolver; nothing else happens. Never
/// page-sensitive, so only the base cycles are billed.
pub(crate) fn execute_illegal<M: MemoryBus>(_cpu: &mut CPU<M>) -> bool {
    false
}
