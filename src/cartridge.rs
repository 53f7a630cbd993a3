//! iNES and NES 2.0 cartridge image parsing.
//!
//! A cartridge image is a 16-byte header followed by an optional 512-byte trainer,
//! PRG ROM in 16KB units and CHR ROM in 8KB units. Anything after CHR ROM is kept as
//! miscellaneous ROM.
//!
//! # Example
//!
//! ```rust
//! use nes6502::{Cartridge, Mirroring};
//!
//! let mut image = vec![0u8; 16 + 16384 + 8192];
//! image[..4].copy_from_slice(b"NES\x1A");
//! image[4] = 1; // one 16KB PRG bank
//! image[5] = 1; // one 8KB CHR bank
//! image[6] = 0x01; // vertical mirroring
//!
//! let cartridge = Cartridge::from_bytes(&image).unwrap();
//! assert_eq!(cartridge.prg_rom().len(), 16384);
//! assert_eq!(cartridge.mirroring(), Mirroring::Vertical);
//! assert_eq!(cartridge.mapper_number(), 0);
//! ```

use std::path::Path;

use log::debug;

const MAGIC: &[u8; 4] = b"NES\x1A";
const HEADER_SIZE: usize = 16;
const TRAINER_SIZE: usize = 512;
const PRG_UNIT: usize = 16 * 1024;
const CHR_UNIT: usize = 8 * 1024;

const FLAG6_VERTICAL: u8 = 0x01;
const FLAG6_BATTERY: u8 = 0x02;
const FLAG6_TRAINER: u8 = 0x04;
const FLAG6_FOUR_SCREEN: u8 = 0x08;

/// Errors that can occur while parsing a cartridge image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartridgeError {
    /// Image is shorter than the 16-byte header.
    TooSmall(usize),

    /// Image does not start with `NES<EOF>`.
    BadMagic,

    /// ROM size uses the NES 2.0 exponent-multiplier notation.
    UnsupportedSize {
        /// Which ROM ("PRG" or "CHR")
        rom: &'static str,
        /// Raw size byte from the header
        raw: u8,
    },

    /// Image is shorter than its header declares.
    Truncated {
        /// Bytes required by the header
        expected: usize,
        /// Bytes present
        actual: usize,
    },

    /// The image file could not be read.
    Io {
        /// Kind of the underlying I/O error
        kind: std::io::ErrorKind,
        /// Error message
        message: String,
    },
}

impl std::fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CartridgeError::TooSmall(len) => {
                write!(f, "Cartridge image too small: {} bytes", len)
            }
            CartridgeError::BadMagic => write!(f, "Not an iNES image (bad magic)"),
            CartridgeError::UnsupportedSize { rom, raw } => {
                write!(
                    f,
                    "{} ROM size uses exponent notation (0x{:02X}), not supported",
                    rom, raw
                )
            }
            CartridgeError::Truncated { expected, actual } => {
                write!(
                    f,
                    "Cartridge image truncated: expected {} bytes, found {}",
                    expected, actual
                )
            }
            CartridgeError::Io { message, .. } => {
                write!(f, "Failed to read cartridge image: {}", message)
            }
        }
    }
}

impl std::error::Error for CartridgeError {}

impl From<std::io::Error> for CartridgeError {
    fn from(err: std::io::Error) -> Self {
        CartridgeError::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Nametable arrangement selected by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    /// Horizontal mirroring, or mapper-controlled
    Horizontal,
    Vertical,
}

/// Console the image targets (flags 7, bits 0-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleType {
    NesFamicom,
    VsSystem,
    Playchoice10,
    /// Extended console type, described by header byte 13
    Extended,
}

/// A parsed cartridge image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cartridge {
    header: [u8; HEADER_SIZE],
    trainer: Option<Vec<u8>>,
    prg_rom: Vec<u8>,
    chr_rom: Vec<u8>,
    misc_rom: Vec<u8>,
}

impl Cartridge {
    /// Parses an iNES or NES 2.0 image.
    ///
    /// # Errors
    ///
    /// - `TooSmall` if the image has no complete header
    /// - `BadMagic` if the magic bytes are wrong
    /// - `UnsupportedSize` for exponent-multiplier ROM sizes
    /// - `Truncated` if the image ends before the declared ROM data
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CartridgeError> {
        if bytes.len() < HEADER_SIZE {
            return Err(CartridgeError::TooSmall(bytes.len()));
        }
        if &bytes[..4] != MAGIC {
            return Err(CartridgeError::BadMagic);
        }

        let mut header = [0u8; HEADER_SIZE];
        header.copy_from_slice(&bytes[..HEADER_SIZE]);

        let nes2 = header[7] & 0x0C == 0x08;
        let (prg_msb, chr_msb) = if nes2 {
            (header[9] & 0x0F, header[9] >> 4)
        } else {
            (0, 0)
        };

        if prg_msb == 0x0F {
            return Err(CartridgeError::UnsupportedSize {
                rom: "PRG",
                raw: header[4],
            });
        }
        if chr_msb == 0x0F {
            return Err(CartridgeError::UnsupportedSize {
                rom: "CHR",
                raw: header[5],
            });
        }

        let prg_size = (header[4] as usize | (prg_msb as usize) << 8) * PRG_UNIT;
        let chr_size = (header[5] as usize | (chr_msb as usize) << 8) * CHR_UNIT;

        let mut offset = HEADER_SIZE;
        let trainer = if header[6] & FLAG6_TRAINER != 0 {
            let trainer = take(bytes, offset, TRAINER_SIZE)?;
            offset += TRAINER_SIZE;
            Some(trainer)
        } else {
            None
        };

        let prg_rom = take(bytes, offset, prg_size)?;
        offset += prg_size;
        let chr_rom = take(bytes, offset, chr_size)?;
        offset += chr_size;
        let misc_rom = bytes[offset..].to_vec();

        let cartridge = Self {
            header,
            trainer,
            prg_rom,
            chr_rom,
            misc_rom,
        };

        debug!(
            "Cartridge: {} PRG={}K CHR={}K mapper={} mirroring={:?}",
            if nes2 { "NES 2.0" } else { "iNES" },
            prg_size / 1024,
            chr_size / 1024,
            cartridge.mapper_number(),
            cartridge.mirroring()
        );

        Ok(cartridge)
    }

    /// Reads and parses an image file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn prg_rom(&self) -> &[u8] {
        &self.prg_rom
    }

    pub fn chr_rom(&self) -> &[u8] {
        &self.chr_rom
    }

    /// Bytes following CHR ROM.
    pub fn misc_rom(&self) -> &[u8] {
        &self.misc_rom
    }

    pub fn trainer(&self) -> Option<&[u8]> {
        self.trainer.as_deref()
    }

    /// True for NES 2.0 headers (flags 7 bits 2-3 equal to 0b10).
    pub fn is_nes2(&self) -> bool {
        self.header[7] & 0x0C == 0x08
    }

    pub fn mirroring(&self) -> Mirroring {
        if self.header[6] & FLAG6_VERTICAL != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        }
    }

    /// Battery-backed PRG RAM is present.
    pub fn has_battery(&self) -> bool {
        self.header[6] & FLAG6_BATTERY != 0
    }

    pub fn has_trainer(&self) -> bool {
        self.header[6] & FLAG6_TRAINER != 0
    }

    /// Hard-wired four-screen VRAM.
    pub fn has_four_screen(&self) -> bool {
        self.header[6] & FLAG6_FOUR_SCREEN != 0
    }

    /// Mapper number: flags 6 high nibble as bits 0-3, flags 7 high nibble as bits 4-7
    /// and, for NES 2.0, byte 8 low nibble as bits 8-11.
    pub fn mapper_number(&self) -> u16 {
        let low = (self.header[6] >> 4) as u16;
        let mid = (self.header[7] & 0xF0) as u16;
        let high = if self.is_nes2() {
            ((self.header[8] & 0x0F) as u16) << 8
        } else {
            0
        };
        high | mid | low
    }

    /// NES 2.0 submapper (byte 8 high nibble); zero for iNES images.
    pub fn submapper_number(&self) -> u8 {
        if self.is_nes2() {
            self.header[8] >> 4
        } else {
            0
        }
    }

    pub fn console_type(&self) -> ConsoleType {
        match self.header[7] & 0x03 {
            0 => ConsoleType::NesFamicom,
            1 => ConsoleType::VsSystem,
            2 => ConsoleType::Playchoice10,
            _ => ConsoleType::Extended,
        }
    }
}

fn take(bytes: &[u8], offset: usize, len: usize) -> Result<Vec<u8>, CartridgeError> {
    bytes
        .get(offset..offset + len)
        .map(<[u8]>::to_vec)
        .ok_or(CartridgeError::Truncated {
            expected: offset + len,
            actual: bytes.len(),
        })
}
