//! # NES 6502 CPU Core
//!
//! A cycle-counted emulation of the Ricoh 2A03, the MOS 6502 derivative at the heart of
//! the Nintendo Entertainment System.
//!
//! The crate provides the CPU instruction engine (opcode table, addressing resolvers,
//! instruction semantics, tick-driven stepping and interrupt handling) plus the pieces
//! needed to feed it: a trait-based memory bus, the NES CPU memory map and an iNES / NES 2.0
//! cartridge parser.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes6502::{CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//! memory.write(0xFFFC, 0x00); // Reset vector low byte
//! memory.write(0xFFFD, 0x80); // Reset vector high byte
//! memory.write(0x8000, 0xA9); // LDA #$42
//! memory.write(0x8001, 0x42);
//!
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//!
//! let cycles = cpu.step().unwrap();
//! assert_eq!(cycles, 2);
//! assert_eq!(cpu.a(), 0x42);
//! ```
//!
//! ## Timing Model
//!
//! [`CPU::tick`] advances exactly one clock cycle. When no instruction is in flight the
//! tick fetches, resolves and executes the next one and bills its full cycle cost; the
//! following ticks only drain that budget. Register getters report the state as of the
//! last retired instruction, so a caller never sees an instruction half done.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, stepping state machine, interrupt entry points
//! - `addressing` - Addressing mode enumeration and operand resolution
//! - `opcodes` - The 256-entry opcode table
//! - `flags` - Status register bits and the register snapshot
//! - `memory` - `MemoryBus` trait, flat 64KB memory and the NES memory map
//! - `cartridge` - iNES / NES 2.0 image parsing

pub mod addressing;
pub mod cartridge;
pub mod cpu;
pub mod flags;
pub mod memory;
pub mod opcodes;

// Instruction semantics (not part of public API)
mod instructions;

pub mod wasm;

pub use addressing::AddressingMode;
pub use cartridge::{Cartridge, CartridgeError, ConsoleType, Mirroring};
pub use cpu::CPU;
pub use flags::Registers;
pub use memory::{FlatMemory, MemoryBus, NesMemory};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The opcode has semantics this engine deliberately does not emulate.
    ///
    /// Raised for the JAM family, which locks up real silicon. The opcode is still
    /// billed and skipped as a no-op, so the caller may keep ticking if it chooses.
    UnimplementedOpcode(u8),
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnimplementedOpcode(opcode) => {
                write!(f, "Opcode 0x{:02X} is not implemented", opcode)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
