//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator or on memory depending on the opcode's addressing
//! mode. The bit shifted out lands in C; rotates feed the previous C into the vacated
//! bit.

use crate::flags::CARRY;
use crate::{CPU, MemoryBus};

fn store_shifted<M: MemoryBus>(cpu: &mut CPU<M>, carry_out: bool, result: u8) -> bool {
    cpu.regs.set_flag(CARRY, carry_out);
    cpu.regs.set_zn(result);
    cpu.write_operand(result);
    false
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 becomes 0 and bit 7 goes to the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    store_shifted(cpu, value & 0x80 != 0, value << 1)
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 becomes 0 and bit 0 goes to the carry flag, so N always ends up clear.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    store_shifted(cpu, value & 0x01 != 0, value >> 1)
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    let carry_in = cpu.regs.flag(CARRY) as u8;
    store_shifted(cpu, value & 0x80 != 0, (value << 1) | carry_in)
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>) -> bool {
    let value = cpu.fetch_operand();
    let carry_in = cpu.regs.flag(CARRY) as u8;
    store_shifted(cpu, value & 0x01 != 0, (value >> 1) | (carry_in << 7))
}
