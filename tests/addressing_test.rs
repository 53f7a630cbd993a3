//! Tests for operand resolution observed through whole instructions.
//!
//! Tests cover:
//! - Every addressing mode's effective address
//! - Zero page and pointer wrap-around
//! - The indirect JMP page bug
//! - Page-crossing cycle penalties and which operations pay them

use nes6502::{CPU, FlatMemory, MemoryBus};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn load(cpu: &mut CPU<FlatMemory>, addr: u16, program: &[u8]) {
    for (i, &byte) in program.iter().enumerate() {
        cpu.memory_mut().write(addr + i as u16, byte);
    }
}

#[test]
fn test_immediate_reads_operand_byte() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xA9, 0x5A]);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(cpu.effective_address(), 0x8001);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_zero_page() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xA5, 0x42]);
    cpu.memory_mut().write(0x0042, 0x99);

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.a(), 0x99);
    assert_eq!(cpu.effective_address(), 0x0042);
}

#[test]
fn test_zero_page_x_wraps() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xB5, 0xFF]); // LDA $FF,X
    cpu.memory_mut().write(0x0001, 0x21);
    cpu.memory_mut().write(0x0101, 0xEE);
    cpu.set_x(0x02);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.effective_address(), 0x0001);
    assert_eq!(cpu.a(), 0x21);
}

#[test]
fn test_zero_page_y_wraps() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xB6, 0x80]); // LDX $80,Y
    cpu.memory_mut().write(0x0010, 0x33);
    cpu.set_y(0x90);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.x(), 0x33);
}

#[test]
fn test_absolute() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xAD, 0x34, 0x12]);
    cpu.memory_mut().write(0x1234, 0x7E);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.a(), 0x7E);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_absolute_x_same_page() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xBD, 0x00, 0x20]); // LDA $2000,X
    cpu.memory_mut().write(0x2010, 0x01);
    cpu.set_x(0x10);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.a(), 0x01);
}

#[test]
fn test_absolute_x_page_cross_costs_one_cycle() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xBD, 0xFF, 0x20]); // LDA $20FF,X
    cpu.memory_mut().write(0x2100, 0x02);
    cpu.set_x(0x01);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.a(), 0x02);
    assert_eq!(cpu.effective_address(), 0x2100);
}

#[test]
fn test_absolute_y_page_cross_costs_one_cycle() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0x79, 0x80, 0x30]); // ADC $3080,Y
    cpu.memory_mut().write(0x3100, 0x05);
    cpu.set_y(0x80);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.a(), 0x05);
}

#[test]
fn test_absolute_x_wraps_address_space() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xBD, 0xFF, 0xFF]); // LDA $FFFF,X
    cpu.memory_mut().write(0x0000, 0x44);
    cpu.set_x(0x01);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.a(), 0x44);
}

#[test]
fn test_store_never_pays_page_cross() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0x9D, 0xFF, 0x20]); // STA $20FF,X
    cpu.set_a(0x5A);
    cpu.set_x(0x01);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.memory().read(0x2100), 0x5A);
}

#[test]
fn test_read_modify_write_never_pays_page_cross() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0x1E, 0xFF, 0x20]); // ASL $20FF,X
    cpu.memory_mut().write(0x2100, 0x01);
    cpu.set_x(0x01);

    assert_eq!(cpu.step(), Ok(7));
    assert_eq!(cpu.memory().read(0x2100), 0x02);
}

#[test]
fn test_indirect_x() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xA1, 0x20]); // LDA ($20,X)
    cpu.memory_mut().write(0x0024, 0x74);
    cpu.memory_mut().write(0x0025, 0x20);
    cpu.memory_mut().write(0x2074, 0xAB);
    cpu.set_x(0x04);

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.effective_address(), 0x2074);
    assert_eq!(cpu.a(), 0xAB);
}

#[test]
fn test_indirect_x_pointer_wraps() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xA1, 0xFF]); // LDA ($FF,X)
    cpu.memory_mut().write(0x00FF, 0x00);
    cpu.memory_mut().write(0x0000, 0x30);
    cpu.memory_mut().write(0x0100, 0x99);
    cpu.memory_mut().write(0x3000, 0x66);

    cpu.step().unwrap();
    assert_eq!(cpu.effective_address(), 0x3000);
    assert_eq!(cpu.a(), 0x66);
}

#[test]
fn test_indirect_y() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xB1, 0x86]); // LDA ($86),Y
    cpu.memory_mut().write(0x0086, 0x28);
    cpu.memory_mut().write(0x0087, 0x40);
    cpu.memory_mut().write(0x4038, 0x12);
    cpu.set_y(0x10);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.effective_address(), 0x4038);
    assert_eq!(cpu.a(), 0x12);
}

#[test]
fn test_indirect_y_page_cross_costs_one_cycle() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xB1, 0x86]);
    cpu.memory_mut().write(0x0086, 0xF8);
    cpu.memory_mut().write(0x0087, 0x40);
    cpu.set_y(0x10);

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.effective_address(), 0x4108);
}

#[test]
fn test_indirect_y_pointer_wraps() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0xB1, 0xFF]);
    cpu.memory_mut().write(0x00FF, 0x00);
    cpu.memory_mut().write(0x0000, 0x50);
    cpu.memory_mut().write(0x0100, 0x99);

    cpu.step().unwrap();
    assert_eq!(cpu.effective_address(), 0x5000);
}

#[test]
fn test_sta_indirect_y_fixed_cost() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0x91, 0x86]); // STA ($86),Y
    cpu.memory_mut().write(0x0086, 0xF8);
    cpu.memory_mut().write(0x0087, 0x40);
    cpu.set_y(0x10);

    assert_eq!(cpu.step(), Ok(6));
}

#[test]
fn test_jmp_indirect_page_bug() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0x6C, 0xFF, 0x02]); // JMP ($02FF)
    cpu.memory_mut().write(0x02FF, 0x34);
    cpu.memory_mut().write(0x0200, 0x12);
    cpu.memory_mut().write(0x0300, 0x56);

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_indirect_normal_pointer() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0x6C, 0x20, 0x01]); // JMP ($0120)
    cpu.memory_mut().write(0x0120, 0xFC);
    cpu.memory_mut().write(0x0121, 0xBA);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0xBAFC);
}

#[test]
fn test_accumulator_mode_leaves_memory_alone() {
    let mut cpu = setup_cpu();
    load(&mut cpu, 0x8000, &[0x0A]); // ASL A
    cpu.set_a(0x21);

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.memory().read(0x0000), 0x00);
    assert_eq!(cpu.pc(), 0x8001);
}
