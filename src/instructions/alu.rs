//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - CMP, CPX, CPY: Register comparison
//! - BIT: Bit test
//!
//! The 2A03 has no decimal unit, so ADC and SBC are always binary regardless of the
//! D flag.

use crate::flags::{CARRY, NEGATIVE, OVERFLOW, ZERO};
use crate::{CPU, MemoryBus};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator. The sum is computed
/// 16 bits wide so bit 8 becomes the new carry.
///
/// Flags affected: C, Z, V, N
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    add_with_carry(cpu, value);
    true
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A - M - (1 - C) is performed as A + !M + C: the one's complement of the operand
/// plus the inverted borrow.
///
/// Flags affected: C, Z, V, N
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    add_with_carry(cpu, !value);
    true
}

fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let carry_in = cpu.regs.flag(CARRY) as u16;

    let result16 = a as u16 + value as u16 + carry_in;
    let result = result16 as u8;

    cpu.regs.set_flag(CARRY, result16 > 0xFF);

    // Signed overflow: both inputs share a sign the result does not
    cpu.regs
        .set_flag(OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);

    cpu.regs.set_zn(result);
    cpu.regs.a = result;
}

/// Executes the AND (Logical AND) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let result = cpu.regs.a & cpu.fetch_operand();
    cpu.regs.a = result;
    cpu.regs.set_zn(result);
    true
}

/// Executes the ORA (Logical Inclusive OR) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let result = cpu.regs.a | cpu.fetch_operand();
    cpu.regs.a = result;
    cpu.regs.set_zn(result);
    true
}

/// Executes the EOR (Exclusive OR) instruction.
///
/// Flags affected: Z, N
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let result = cpu.regs.a ^ cpu.fetch_operand();
    cpu.regs.a = result;
    cpu.regs.set_zn(result);
    true
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z is set from A & M; N and V are copied straight from bits 7 and 6 of the operand.
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    cpu.regs.set_flag(ZERO, cpu.regs.a & value == 0);
    cpu.regs.set_flag(NEGATIVE, value & 0x80 != 0);
    cpu.regs.set_flag(OVERFLOW, value & 0x40 != 0);
    false
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let register = cpu.regs.a;
    compare(cpu, register);
    true
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let register = cpu.regs.x;
    compare(cpu, register);
    false
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let register = cpu.regs.y;
    compare(cpu, register);
    false
}

/// Shared compare logic.
///
/// C is set when register >= operand (unsigned) and Z on equality. N is taken from
/// bit 7 of the register itself, not from the difference.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8) {
    let value = cpu.fetch_operand();
    cpu.regs.set_flag(CARRY, register >= value);
    cpu.regs.set_flag(ZERO, register == value);
    cpu.regs.set_flag(NEGATIVE, register & 0x80 != 0);
}
