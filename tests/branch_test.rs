//! Tests for the conditional branch instructions.
//!
//! Tests cover:
//! - All eight conditions, taken and not taken
//! - Forward and backward displacements
//! - 2 / 3 / 4 cycle timing (not taken / same page / page crossed)

use nes6502::{CPU, FlatMemory, MemoryBus};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// Runs `opcode offset` at 0x8000 with the given status byte; returns (cycles, pc).
fn branch(opcode: u8, offset: u8, status: u8) -> (u8, u16) {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, opcode);
    cpu.memory_mut().write(0x8001, offset);
    cpu.set_status(status);
    let cycles = cpu.step().unwrap();
    (cycles, cpu.pc())
}

const C: u8 = 0x01;
const Z: u8 = 0x02;
const V: u8 = 0x40;
const N: u8 = 0x80;

#[test]
fn test_all_conditions() {
    // (opcode, status that takes the branch, status that does not)
    let cases = [
        (0x90, 0, C), // BCC
        (0xB0, C, 0), // BCS
        (0xD0, 0, Z), // BNE
        (0xF0, Z, 0), // BEQ
        (0x10, 0, N), // BPL
        (0x30, N, 0), // BMI
        (0x50, 0, V), // BVC
        (0x70, V, 0), // BVS
    ];

    for (opcode, taken, not_taken) in cases {
        assert_eq!(
            branch(opcode, 0x10, taken),
            (3, 0x8012),
            "opcode 0x{:02X} taken",
            opcode
        );
        assert_eq!(
            branch(opcode, 0x10, not_taken),
            (2, 0x8002),
            "opcode 0x{:02X} not taken",
            opcode
        );
    }
}

#[test]
fn test_backward_branch() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8050, 0xF0); // BEQ -4
    cpu.memory_mut().write(0x8051, 0xFC);
    cpu.set_pc(0x8050);
    cpu.set_flag_z(true);

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.pc(), 0x804E);
}

#[test]
fn test_forward_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x80F0, 0xD0); // BNE +$20
    cpu.memory_mut().write(0x80F1, 0x20);
    cpu.set_pc(0x80F0);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.pc(), 0x8112);
}

#[test]
fn test_backward_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x10); // BPL -3
    cpu.memory_mut().write(0x8001, 0xFD);

    // Target 0x7FFF is on the previous page
    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.pc(), 0x7FFF);
}

#[test]
fn test_branch_to_self_loop() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x50); // BVC -2
    cpu.memory_mut().write(0x8001, 0xFE);

    for _ in 0..3 {
        assert_eq!(cpu.step(), Ok(3));
        assert_eq!(cpu.pc(), 0x8000);
    }
}

#[test]
fn test_branch_latches_offset() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xB0); // BCS -128
    cpu.memory_mut().write(0x8001, 0x80);

    cpu.step().unwrap();
    assert_eq!(cpu.relative_offset(), 0xFF80);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_branch_preserves_flags() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0x30); // BMI +4
    cpu.memory_mut().write(0x8001, 0x04);
    cpu.set_status(0xE3);

    cpu.step().unwrap();
    assert_eq!(cpu.status(), 0xE3);
}
