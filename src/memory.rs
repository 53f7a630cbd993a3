//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations, plus two implementations:
//!
//! - [`FlatMemory`]: 64KB of plain RAM, for tests and bare programs
//! - [`NesMemory`]: the NES CPU address map with its mirrored regions
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 2A03 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - Every 16-bit address decodes to exactly one storage cell
//! - Interrupt lines are sampled by the CPU only between instructions

use log::debug;

use crate::Cartridge;

/// Memory bus trait for CPU to read/write bytes.
///
/// Implementations of this trait provide the memory backend for the CPU.
/// The CPU accesses all memory (RAM, ROM, I/O) through this abstraction and owns its
/// bus exclusively.
///
/// # Design
///
/// - `read(&self)`: Immutable reference allows shared reads
/// - `write(&mut self)`: Mutable reference makes side effects explicit
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use nes6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use nes6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM (0x8000+) are silently ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic. If the address is read-only,
    /// implementations may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Checks if the IRQ (Interrupt Request) line is active.
    ///
    /// The IRQ line is **level-sensitive**: the CPU services it at every instruction
    /// boundary for as long as it stays asserted and the interrupt-disable flag is clear.
    ///
    /// Returns `false` by default, for buses without interrupt sources.
    fn irq_active(&self) -> bool {
        false
    }

    /// Checks for a pending NMI (Non-Maskable Interrupt) and acknowledges it.
    ///
    /// NMI is **edge-triggered**: an implementation latches the edge and clears the
    /// latch when it answers `true`, so each edge is serviced exactly once.
    ///
    /// Returns `false` by default.
    fn nmi_pending(&mut self) -> bool {
        false
    }
}

/// Simple 64KB flat memory implementation.
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use nes6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
/// memory.write(0x8000, 0xEA); // NOP
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

const RAM_SIZE: usize = 0x0800;
const PPU_REGISTERS: usize = 8;
const APU_IO_SIZE: usize = 0x18;
const APU_TEST_SIZE: usize = 8;
const CARTRIDGE_SPACE_SIZE: usize = 0xBFE0;

const PPU_START: u16 = 0x2000;
const APU_IO_START: u16 = 0x4000;
const APU_TEST_START: u16 = 0x4018;
const CARTRIDGE_START: u16 = 0x4020;
const PRG_ROM_START: u16 = 0x8000;

/// Size of one PRG ROM bank.
pub const PRG_BANK_SIZE: usize = 0x4000;

/// The NES CPU address map.
///
/// | Range | Region |
/// |---|---|
/// | 0x0000-0x1FFF | 2KB internal RAM, mirrored every 0x800 |
/// | 0x2000-0x3FFF | 8 PPU register bytes, mirrored every 8 |
/// | 0x4000-0x4017 | APU and I/O registers |
/// | 0x4018-0x401F | APU and I/O test registers |
/// | 0x4020-0xFFFF | Cartridge space |
///
/// Every region is plain storage; no PPU or APU behavior is attached. The bus also
/// carries the two interrupt lines, driven by [`NesMemory::set_irq_line`] and
/// [`NesMemory::signal_nmi`].
///
/// # Examples
///
/// ```
/// use nes6502::{MemoryBus, NesMemory};
///
/// let mut mem = NesMemory::new();
/// mem.write(0x0001, 0x42);
/// assert_eq!(mem.read(0x0801), 0x42);
/// assert_eq!(mem.read(0x1801), 0x42);
/// ```
pub struct NesMemory {
    ram: Box<[u8; RAM_SIZE]>,
    ppu_registers: [u8; PPU_REGISTERS],
    apu_io: [u8; APU_IO_SIZE],
    apu_test: [u8; APU_TEST_SIZE],
    cartridge_space: Box<[u8; CARTRIDGE_SPACE_SIZE]>,
    irq_line: bool,
    nmi_latch: bool,
}

impl NesMemory {
    /// Creates an empty NES bus with every cell zeroed and both interrupt lines idle.
    pub fn new() -> Self {
        Self {
            ram: Box::new([0; RAM_SIZE]),
            ppu_registers: [0; PPU_REGISTERS],
            apu_io: [0; APU_IO_SIZE],
            apu_test: [0; APU_TEST_SIZE],
            cartridge_space: Box::new([0; CARTRIDGE_SPACE_SIZE]),
            irq_line: false,
            nmi_latch: false,
        }
    }

    /// Copies PRG ROM into cartridge space at 0x8000.
    ///
    /// A single 16KB bank is mirrored into 0xC000-0xFFFF so the interrupt vectors
    /// resolve, as NROM-128 boards do. Bytes beyond 32KB are ignored.
    pub fn load_prg_rom(&mut self, prg_rom: &[u8]) {
        let base = (PRG_ROM_START - CARTRIDGE_START) as usize;
        let window = &mut self.cartridge_space[base..];

        if prg_rom.len() == PRG_BANK_SIZE {
            window[..PRG_BANK_SIZE].copy_from_slice(prg_rom);
            window[PRG_BANK_SIZE..].copy_from_slice(prg_rom);
        } else {
            let len = prg_rom.len().min(window.len());
            window[..len].copy_from_slice(&prg_rom[..len]);
        }

        debug!("Loaded {} bytes of PRG ROM at 0x{:04X}", prg_rom.len(), PRG_ROM_START);
    }

    /// Maps a parsed cartridge's PRG ROM into the address space.
    pub fn load_cartridge(&mut self, cartridge: &Cartridge) {
        self.load_prg_rom(cartridge.prg_rom());
    }

    /// Drives the level-sensitive IRQ line.
    pub fn set_irq_line(&mut self, active: bool) {
        self.irq_line = active;
    }

    /// Latches an NMI edge. It is serviced at the next instruction boundary.
    pub fn signal_nmi(&mut self) {
        self.nmi_latch = true;
    }
}

impl Default for NesMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for NesMemory {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x1FFF => self.ram[addr as usize % RAM_SIZE],
            0x2000..=0x3FFF => self.ppu_registers[(addr - PPU_START) as usize % PPU_REGISTERS],
            0x4000..=0x4017 => self.apu_io[(addr - APU_IO_START) as usize],
            0x4018..=0x401F => self.apu_test[(addr - APU_TEST_START) as usize],
            _ => self.cartridge_space[(addr - CARTRIDGE_START) as usize],
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram[addr as usize % RAM_SIZE] = value,
            0x2000..=0x3FFF => {
                self.ppu_registers[(addr - PPU_START) as usize % PPU_REGISTERS] = value
            }
            0x4000..=0x4017 => self.apu_io[(addr - APU_IO_START) as usize] = value,
            0x4018..=0x401F => self.apu_test[(addr - APU_TEST_START) as usize] = value,
            _ => self.cartridge_space[(addr - CARTRIDGE_START) as usize] = value,
        }
    }

    fn irq_active(&self) -> bool {
        self.irq_line
    }

    fn nmi_pending(&mut self) -> bool {
        std::mem::take(&mut self.nmi_latch)
    }
}
