//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC / DEC: Read-modify-write on memory
//! - INX / DEX: X register
//! - INY / DEY: Y register
//!
//! All wrap modulo 256 and update Z and N. Memory variants carry their write-back
//! cost in the base cycle count, so none of these are page-sensitive.

use crate::{CPU, MemoryBus};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let result = cpu.fetch_operand().wrapping_add(1);
    cpu.write_operand(result);
    cpu.regs.set_zn(result);
    false
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let result = cpu.fetch_operand().wrapping_sub(1);
    cpu.write_operand(result);
    cpu.regs.set_zn(result);
    false
}

/// Executes the INX (Increment X Register) instruction.
///
/// Adds one to X, wrapping 0xFF to 0x00.
/// Updates Z and N flags.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    let x = cpu.regs.x;
    cpu.regs.set_zn(x);
    false
}

/// Executes the DEX (Decrement X Register) instruction.
///
/// Subtracts one from X, wrapping 0x00 to 0xFF.
/// Updates Z and N flags.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    let x = cpu.regs.x;
    cpu.regs.set_zn(x);
    false
}

/// Executes the INY (Increment Y Register) instruction.
///
/// Adds one to Y, wrapping 0xFF to 0x00.
/// Updates Z and N flags.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    let y = cpu.regs.y;
    cpu.regs.set_zn(y);
    false
}

/// Executes the DEY (Decrement Y Register) instruction.
///
/// Subtracts one from Y, wrapping 0x00 to 0xFF.
/// Updates Z and N flags.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    let y = cpu.regs.y;
    cpu.regs.set_zn(y);
    false
}
