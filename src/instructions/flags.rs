//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC / SEC: Clear / Set Carry
//! - CLI / SEI: Clear / Set Interrupt Disable
//! - CLD / SED: Clear / Set Decimal Mode
//! - CLV: Clear Overflow
//!
//! These instructions use implied addressing mode and execute in 2 cycles.

use crate::flags::{CARRY, DECIMAL, INTERRUPT_DISABLE, OVERFLOW};
use crate::{CPU, MemoryBus};

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.set_flag(CARRY, false);
    false
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.set_flag(CARRY, true);
    false
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
///
/// A held IRQ line is serviced at the next instruction boundary.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.set_flag(INTERRUPT_DISABLE, false);
    false
}

/// Executes the SEI (Set Interrupt Disable) instruction.
///
/// Masks IRQ; NMI is unaffected.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.set_flag(INTERRUPT_DISABLE, true);
    false
}

/// Executes the CLD (Clear Decimal Flag) instruction.
///
/// The D flag is stored but has no arithmetic effect on the 2A03.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.set_flag(DECIMAL, false);
    false
}

/// Executes the SED (Set Decimal Flag) instruction.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.set_flag(DECIMAL, true);
    false
}

/// Executes the CLV (Clear Overflow Flag) instruction.
///
/// There is no matching set instruction; only ADC, SBC, BIT, PLP and RTI set V.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.set_flag(OVERFLOW, false);
    false
}
