//! # Load and Store Instructions
//!
//! This module implements register load and store operations:
//! - LDA, LDX, LDY: Load a register from memory, updating Z and N
//! - STA, STX, STY: Store a register to memory, no flags affected
//!
//! Loads are page-sensitive. Indexed stores always pay for the fix-up cycle, which is
//! already included in their base cycle count.

use crate::{CPU, MemoryBus};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    cpu.regs.a = value;
    cpu.regs.set_zn(value);
    true
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    cpu.regs.x = value;
    cpu.regs.set_zn(value);
    true
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    cpu.regs.y = value;
    cpu.regs.set_zn(value);
    true
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.memory.write(cpu.effective_address, cpu.regs.a);
    false
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.memory.write(cpu.effective_address, cpu.regs.x);
    false
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    cpu.memory.write(cpu.effective_address, cpu.regs.y);
    false
}
