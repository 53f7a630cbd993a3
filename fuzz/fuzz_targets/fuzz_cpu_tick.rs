//! Fuzz target for tick-level CPU execution.
//!
//! Builds an arbitrary register file and memory image, then drives the
//! CPU one tick at a time with the interrupt lines toggled from the
//! input. Looks for panics and for register changes that show up in the
//! middle of an instruction.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nes6502::{CPU, FlatMemory, MemoryBus, NesMemory};

#[derive(Debug, Arbitrary)]
struct FuzzRegisters {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Program bytes placed at the reset target
    program: [u8; 64],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// NMI, reset and IRQ vectors
    vectors: [u8; 6],
}

/// Interrupt requests raised before a given tick
#[derive(Debug, Arbitrary)]
enum FuzzEvent {
    Tick,
    Nmi,
    Irq,
    Reset,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    registers: FuzzRegisters,
    memory: FuzzMemory,
    events: Vec<FuzzEvent>,
    use_nes_map: bool,
}

fn populate<M: MemoryBus>(memory: &mut M, input: &FuzzMemory) {
    for (i, &byte) in input.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }
    for (i, &byte) in input.program.iter().enumerate() {
        memory.write(0x8000 + i as u16, byte);
    }
    for (i, &byte) in input.vectors.iter().enumerate() {
        memory.write(0xFFFA + i as u16, byte);
    }
    // Reset always lands on the fuzzed program
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
}

fn drive<M: MemoryBus>(mut cpu: CPU<M>, input: &FuzzInput) {
    cpu.set_a(input.registers.a);
    cpu.set_x(input.registers.x);
    cpu.set_y(input.registers.y);
    cpu.set_sp(input.registers.sp);
    cpu.set_status(input.registers.status);

    for event in input.events.iter().take(4096) {
        match event {
            FuzzEvent::Tick => {
                let mid_instruction = cpu.remaining_cycles() > 1;
                let before = cpu.registers();

                // Unimplemented opcodes surface as errors, not panics
                let _ = cpu.tick();

                if mid_instruction {
                    assert_eq!(cpu.registers(), before);
                }
            }
            FuzzEvent::Nmi => cpu.nmi(),
            FuzzEvent::Irq => cpu.irq(),
            FuzzEvent::Reset => cpu.reset(),
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    if input.use_nes_map {
        let mut memory = NesMemory::new();
        populate(&mut memory, &input.memory);
        drive(CPU::new(memory), &input);
    } else {
        let mut memory = FlatMemory::new();
        populate(&mut memory, &input.memory);
        drive(CPU::new(memory), &input);
    }
});
