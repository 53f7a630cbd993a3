//! NES boot example
//!
//! Boots the CPU on the NES memory map from an iNES image and runs it a frame
//! at a time, raising NMI at each frame boundary the way the PPU's vblank would.
//!
//! Pass a `.nes` file to boot it; with no argument a small built-in image is used.
//!
//! ```sh
//! cargo run --example nes_boot [game.nes]
//! ```

use std::error::Error;

use nes6502::{Cartridge, NesMemory, CPU};

/// CPU cycles in one NTSC frame
const FRAME_CYCLES: u64 = 29_780;

/// One 16 KiB PRG bank: a counting loop in the main program, a frame counter in
/// the NMI handler.
fn demo_image() -> Vec<u8> {
    let mut image = vec![0u8; 16 + 0x4000];
    image[..4].copy_from_slice(b"NES\x1A");
    image[4] = 1; // one PRG bank
    image[6] = 0x01; // vertical mirroring

    let prg = &mut image[16..];

    // 0x8000: LDX #$00 / INX / STX $10 / JMP $8002
    prg[..8].copy_from_slice(&[0xA2, 0x00, 0xE8, 0x86, 0x10, 0x4C, 0x02, 0x80]);

    // 0x8100: INC $11 / RTI
    prg[0x100..0x103].copy_from_slice(&[0xE6, 0x11, 0x40]);

    // NMI, RESET, IRQ vectors
    prg[0x3FFA..].copy_from_slice(&[0x00, 0x81, 0x00, 0x80, 0x00, 0x81]);

    image
}

fn main() -> Result<(), Box<dyn Error>> {
    let cartridge = match std::env::args().nth(1) {
        Some(path) => Cartridge::load(path)?,
        None => Cartridge::from_bytes(&demo_image())?,
    };

    println!("NES 2A03 Boot Example");
    println!("=====================\n");
    println!("  PRG ROM:   {} KiB", cartridge.prg_rom().len() / 1024);
    println!("  CHR ROM:   {} KiB", cartridge.chr_rom().len() / 1024);
    println!("  Mapper:    {}", cartridge.mapper_number());
    println!("  Mirroring: {:?}", cartridge.mirroring());
    println!("  NES 2.0:   {}\n", cartridge.is_nes2());

    let mut memory = NesMemory::new();
    memory.load_cartridge(&cartridge);

    let mut cpu = CPU::new(memory);
    println!("Reset vector -> PC = 0x{:04X}\n", cpu.pc());

    for frame in 1..=5 {
        cpu.run_for_cycles(FRAME_CYCLES)?;
        cpu.memory_mut().signal_nmi();

        let regs = cpu.registers();
        println!(
            "Frame {}: PC={:04X} A={:02X} X={:02X} Y={:02X} SP={:02X} P={:08b} cycles={}",
            frame,
            regs.pc,
            regs.a,
            regs.x,
            regs.y,
            regs.sp,
            regs.status,
            cpu.cycles()
        );
    }

    Ok(())
}
