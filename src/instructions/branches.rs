//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Branch on Carry clear / set
//! - BNE / BEQ: Branch on Zero clear / set
//! - BPL / BMI: Branch on Negative clear / set
//! - BVC / BVS: Branch on Overflow clear / set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset that the
//! resolver has already sign-extended into the relative-offset latch.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::addressing::page_crossed;
use crate::flags::{CARRY, NEGATIVE, OVERFLOW, ZERO};
use crate::{CPU, MemoryBus};

fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, condition: bool) -> bool {
    if condition {
        cpu.remaining_cycles += 1;

        let target = cpu.regs.pc.wrapping_add(cpu.relative_offset);
        if page_crossed(target, cpu.regs.pc) {
            cpu.remaining_cycles += 1;
        }

        cpu.effective_address = target;
        cpu.regs.pc = target;
    }

    // Branch penalties are billed above, never through the shared page rule
    false
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = !cpu.regs.flag(CARRY);
    branch_if(cpu, condition)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = cpu.regs.flag(CARRY);
    branch_if(cpu, condition)
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = !cpu.regs.flag(ZERO);
    branch_if(cpu, condition)
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = cpu.regs.flag(ZERO);
    branch_if(cpu, condition)
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = !cpu.regs.flag(NEGATIVE);
    branch_if(cpu, condition)
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = cpu.regs.flag(NEGATIVE);
    branch_if(cpu, condition)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = !cpu.regs.flag(OVERFLOW);
    branch_if(cpu, condition)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let condition = cpu.regs.flag(OVERFLOW);
    branch_if(cpu, condition)
}
