//! # Register Transfer Instructions
//!
//! This module implements register-to-register copies:
//! - TAX, TAY: Accumulator to index register
//! - TXA, TYA: Index register to accumulator
//! - TSX: Stack pointer to X
//! - TXS: X to stack pointer
//!
//! All but TXS update Z and N from the copied value.

use crate::{CPU, MemoryBus};

/// Executes the TAX (Transfer Accumulator to X) instruction.
///
/// Copies the accumulator into X.
/// Updates Z and N flags.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.regs.a;
    cpu.regs.x = value;
    cpu.regs.set_zn(value);
    false
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
///
/// Copies the accumulator into Y.
/// Updates Z and N flags.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.regs.a;
    cpu.regs.y = value;
    cpu.regs.set_zn(value);
    false
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
///
/// Copies X into the accumulator.
/// Updates Z and N flags.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.regs.x;
    cpu.regs.a = value;
    cpu.regs.set_zn(value);
    false
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
///
/// Copies Y into the accumulator.
/// Updates Z and N flags.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.regs.y;
    cpu.regs.a = value;
    cpu.regs.set_zn(value);
    false
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
///
/// Copies SP into X, the only way to read the stack pointer.
/// Updates Z and N flags.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.regs.sp;
    cpu.regs.x = value;
    cpu.regs.set_zn(value);
    false
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// TXS is the only transfer that leaves the flags alone.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.regs.sp = cpu.regs.x;
    false
}
