//! Tests for the NES CPU memory map.
//!
//! Tests cover:
//! - RAM and PPU register mirroring
//! - Region boundaries
//! - PRG ROM loading and mirroring
//! - Running a program from a mapped cartridge

use nes6502::{Cartridge, CPU, MemoryBus, NesMemory};

fn ines_image(prg_banks: u8, fill: u8) -> Vec<u8> {
    let mut image = vec![0u8; 16];
    image[..4].copy_from_slice(b"NES\x1A");
    image[4] = prg_banks;
    image.extend(std::iter::repeat(fill).take(prg_banks as usize * 0x4000));
    image
}

#[test]
fn test_every_ram_mirror_aliases() {
    let mut mem = NesMemory::new();

    for base in [0x0000u16, 0x0800, 0x1000, 0x1800] {
        mem.write(base + 0x0123, base as u8 ^ 0x5A);
        for mirror in [0x0000u16, 0x0800, 0x1000, 0x1800] {
            assert_eq!(mem.read(mirror + 0x0123), base as u8 ^ 0x5A);
        }
    }
}

#[test]
fn test_ppu_window_repeats_every_eight() {
    let mut mem = NesMemory::new();
    for reg in 0..8u16 {
        mem.write(0x2000 + reg, reg as u8 + 1);
    }

    for addr in (0x2000u16..0x4000).step_by(0x1F9) {
        assert_eq!(mem.read(addr), (addr & 0x07) as u8 + 1, "addr 0x{:04X}", addr);
    }
}

#[test]
fn test_apu_registers_not_mirrored() {
    let mut mem = NesMemory::new();
    mem.write(0x4000, 0x01);
    mem.write(0x4015, 0x0F);

    assert_eq!(mem.read(0x4000), 0x01);
    assert_eq!(mem.read(0x4015), 0x0F);
    assert_eq!(mem.read(0x4018), 0x00);
    assert_eq!(mem.read(0x4020), 0x00);
}

#[test]
fn test_cartridge_space_is_storage() {
    let mut mem = NesMemory::new();
    mem.write(0x6000, 0xAA);
    mem.write(0x4020, 0xBB);

    assert_eq!(mem.read(0x6000), 0xAA);
    assert_eq!(mem.read(0x4020), 0xBB);
}

#[test]
fn test_two_bank_prg_fills_upper_half() {
    let mut mem = NesMemory::new();
    let mut prg = vec![0x11; 0x8000];
    prg[0x4000..].fill(0x22);

    mem.load_prg_rom(&prg);

    assert_eq!(mem.read(0x8000), 0x11);
    assert_eq!(mem.read(0xBFFF), 0x11);
    assert_eq!(mem.read(0xC000), 0x22);
    assert_eq!(mem.read(0xFFFF), 0x22);
}

#[test]
fn test_cpu_runs_from_cartridge() {
    let mut image = ines_image(1, 0xEA);
    let prg = 16;
    image[prg] = 0xA9; // LDA #$07
    image[prg + 1] = 0x07;
    image[prg + 2] = 0x8D; // STA $0001
    image[prg + 3] = 0x01;
    image[prg + 4] = 0x00;
    image[prg + 0x3FFC] = 0x00; // reset vector -> 0x8000
    image[prg + 0x3FFD] = 0x80;

    let cartridge = Cartridge::from_bytes(&image).unwrap();
    let mut memory = NesMemory::new();
    memory.load_cartridge(&cartridge);

    let mut cpu = CPU::new(memory);
    assert_eq!(cpu.pc(), 0x8000);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x07);
    assert_eq!(cpu.memory().read(0x0801), 0x07);
}

#[test]
fn test_frame_nmi_runs_handler() {
    let mut image = ines_image(1, 0xEA);
    let prg = 16;
    // 0x8000: LDX #$00 / INX / STX $10 / JMP $8002
    image[prg..prg + 8].copy_from_slice(&[0xA2, 0x00, 0xE8, 0x86, 0x10, 0x4C, 0x02, 0x80]);
    // 0x8100: INC $11 / RTI
    image[prg + 0x100..prg + 0x103].copy_from_slice(&[0xE6, 0x11, 0x40]);
    // NMI -> 0x8100, RESET -> 0x8000
    image[prg + 0x3FFA..prg + 0x3FFE].copy_from_slice(&[0x00, 0x81, 0x00, 0x80]);

    let cartridge = Cartridge::from_bytes(&image).unwrap();
    let mut memory = NesMemory::new();
    memory.load_cartridge(&cartridge);
    let mut cpu = CPU::new(memory);

    for _ in 0..3 {
        cpu.run_for_cycles(29_780).unwrap();
        cpu.memory_mut().signal_nmi();
    }
    cpu.run_for_cycles(100).unwrap();

    assert_eq!(cpu.memory().read(0x0011), 3);
    assert_eq!(cpu.sp(), 0xFD);
}
