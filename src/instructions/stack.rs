//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! A push writes at 0x0100 | SP and then decrements SP; a pull increments SP first.
//! SP wraps within the page.

use crate::flags::{BREAK, UNUSED};
use crate::{CPU, MemoryBus};

/// Executes the PHA (Push Accumulator) instruction.
///
/// # Examples
///
/// ```
/// use nes6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0x48); // PHA
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_a(0x42);
///
/// assert_eq!(cpu.step(), Ok(3));
/// assert_eq!(cpu.memory().read(0x01FD), 0x42);
/// assert_eq!(cpu.sp(), 0xFC);
/// ```
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let a = cpu.regs.a;
    cpu.push(a);
    false
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy has Break and Unused set; the live register is untouched.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let status = cpu.regs.status | BREAK | UNUSED;
    cpu.push(status);
    false
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.pull();
    cpu.regs.a = value;
    cpu.regs.set_zn(value);
    false
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Break only exists in pushed copies, so it is dropped; Unused is forced back on.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.pull();
    cpu.regs.status = (value & !BREAK) | UNUSED;
    false
}
