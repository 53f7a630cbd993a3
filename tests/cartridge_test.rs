//! Tests for iNES / NES 2.0 cartridge parsing.

use nes6502::{Cartridge, CartridgeError, ConsoleType, Mirroring};

const PRG: usize = 0x4000;
const CHR: usize = 0x2000;

fn header(prg: u8, chr: u8, flags6: u8, flags7: u8) -> Vec<u8> {
    let mut image = vec![0u8; 16];
    image[..4].copy_from_slice(b"NES\x1A");
    image[4] = prg;
    image[5] = chr;
    image[6] = flags6;
    image[7] = flags7;
    image
}

#[test]
fn test_prg_and_chr_split() {
    let mut image = header(2, 1, 0, 0);
    image.extend(vec![0xAA; 2 * PRG]);
    image.extend(vec![0xBB; CHR]);

    let cartridge = Cartridge::from_bytes(&image).unwrap();

    assert_eq!(cartridge.prg_rom().len(), 2 * PRG);
    assert_eq!(cartridge.chr_rom().len(), CHR);
    assert!(cartridge.prg_rom().iter().all(|&b| b == 0xAA));
    assert!(cartridge.chr_rom().iter().all(|&b| b == 0xBB));
    assert!(cartridge.misc_rom().is_empty());
    assert!(cartridge.trainer().is_none());
}

#[test]
fn test_trainer_precedes_prg() {
    let mut image = header(1, 0, 0x04, 0);
    image.extend(vec![0x77; 512]);
    image.extend(vec![0x11; PRG]);

    let cartridge = Cartridge::from_bytes(&image).unwrap();

    assert!(cartridge.has_trainer());
    assert_eq!(cartridge.trainer().map(<[u8]>::len), Some(512));
    assert_eq!(cartridge.prg_rom()[0], 0x11);
}

#[test]
fn test_trailing_bytes_kept() {
    let mut image = header(1, 0, 0, 0);
    image.extend(vec![0x00; PRG]);
    image.extend([1, 2, 3]);

    let cartridge = Cartridge::from_bytes(&image).unwrap();
    assert_eq!(cartridge.misc_rom(), &[1, 2, 3]);
}

#[test]
fn test_truncated_image() {
    let mut image = header(2, 0, 0, 0);
    image.extend(vec![0x00; PRG]);

    assert_eq!(
        Cartridge::from_bytes(&image),
        Err(CartridgeError::Truncated {
            expected: 16 + 2 * PRG,
            actual: 16 + PRG,
        })
    );
}

#[test]
fn test_header_flags() {
    let cartridge = Cartridge::from_bytes(&header(0, 0, 0x0B, 0x01)).unwrap();

    assert_eq!(cartridge.mirroring(), Mirroring::Vertical);
    assert!(cartridge.has_battery());
    assert!(cartridge.has_four_screen());
    assert!(!cartridge.has_trainer());
    assert_eq!(cartridge.console_type(), ConsoleType::VsSystem);

    let cartridge = Cartridge::from_bytes(&header(0, 0, 0x00, 0x02)).unwrap();
    assert_eq!(cartridge.mirroring(), Mirroring::Horizontal);
    assert_eq!(cartridge.console_type(), ConsoleType::Playchoice10);
}

#[test]
fn test_nes2_mapper_and_submapper() {
    let mut image = header(0, 0, 0x40, 0x58);
    image[8] = 0x31;

    let cartridge = Cartridge::from_bytes(&image).unwrap();

    assert!(cartridge.is_nes2());
    assert_eq!(cartridge.mapper_number(), 0x154);
    assert_eq!(cartridge.submapper_number(), 3);
}

#[test]
fn test_nes2_size_msb() {
    let mut image = header(0x00, 0x00, 0, 0x08);
    image[9] = 0x01; // PRG MSB = 1 -> 256 banks

    let result = Cartridge::from_bytes(&image);
    assert_eq!(
        result,
        Err(CartridgeError::Truncated {
            expected: 16 + 256 * PRG,
            actual: 16,
        })
    );
}

#[test]
fn test_exponent_size_rejected() {
    let mut image = header(0x05, 0x00, 0, 0x08);
    image[9] = 0x0F;

    assert_eq!(
        Cartridge::from_bytes(&image),
        Err(CartridgeError::UnsupportedSize { rom: "PRG", raw: 0x05 })
    );
}

#[test]
fn test_load_missing_file() {
    let result = Cartridge::load("/nonexistent/path/to/game.nes");

    match result {
        Err(CartridgeError::Io { kind, .. }) => {
            assert_eq!(kind, std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_load_from_file() {
    let mut image = header(1, 0, 0x01, 0);
    image.extend(vec![0xEA; PRG]);

    let path = std::env::temp_dir().join(format!("nes6502-test-{}.nes", std::process::id()));
    std::fs::write(&path, &image).unwrap();

    let cartridge = Cartridge::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(cartridge.prg_rom().len(), PRG);
    assert_eq!(cartridge.mirroring(), Mirroring::Vertical);
}

#[test]
fn test_error_messages() {
    assert_eq!(
        CartridgeError::BadMagic.to_string(),
        "Not an iNES image (bad magic)"
    );
    assert_eq!(
        CartridgeError::TooSmall(4).to_string(),
        "Cartridge image too small: 4 bytes"
    );
}
