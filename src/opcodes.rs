//! # Opcode Table
//!
//! This module contains the complete 256-entry opcode table that serves as the
//! single source of truth for instruction decoding.
//!
//! The table covers:
//! - **151 documented instructions** - the 56 official operations across their addressing modes
//! - **105 illegal/undocumented opcodes** - decoded as [`Operation::Illegal`], a costed no-op
//!
//! Each entry binds an opcode byte to its operation, addressing mode, base cycle cost
//! and instruction size. The table is a `const`; nothing mutates it at runtime.

use crate::addressing::AddressingMode;

/// The instruction an opcode performs, independent of addressing mode.
///
/// The 56 documented 6502 operations plus `Illegal` for every byte without a
/// documented meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undocumented opcode, executed as a no-op.
    Illegal,
}

impl Operation {
    /// Three-letter assembler mnemonic, `"???"` for illegal opcodes.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
            Operation::Illegal => "???",
        }
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Fields
///
/// - `mnemonic`: Three-letter instruction name (e.g., "LDA", "STA", "???")
/// - `operation`: Which instruction semantics to run
/// - `addressing_mode`: How the instruction interprets operand bytes
/// - `base_cycles`: Cycle cost before page-crossing and branch penalties (1-7)
/// - `size_bytes`: Total instruction size including opcode and operands (1-3 bytes)
/// - `implemented`: False for opcodes whose real behavior the engine refuses to emulate
///
/// # Examples
///
/// ```
/// use nes6502::{OPCODE_TABLE, AddressingMode, Operation};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert!(lda_imm.implemented);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Instruction semantics.
    pub operation: Operation,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing penalties).
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Whether the engine emulates this opcode's real behavior.
    ///
    /// Only the JAM opcodes are `false`; they still run as no-ops but are reported
    /// to the caller as [`crate::ExecutionError::UnimplementedOpcode`].
    pub implemented: bool,
}

impl OpcodeMetadata {
    /// True when the operand is the accumulator rather than a bus location.
    pub const fn targets_accumulator(&self) -> bool {
        matches!(self.addressing_mode, AddressingMode::Accumulator)
    }

    /// True for opcodes with no documented meaning.
    pub const fn is_illegal(&self) -> bool {
        matches!(self.operation, Operation::Illegal)
    }
}

const fn op(operation: Operation, addressing_mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic: operation.mnemonic(),
        operation,
        addressing_mode,
        base_cycles,
        size_bytes: 1 + addressing_mode.operand_bytes(),
        implemented: true,
    }
}

/// Undocumented opcode that skips its operand bytes.
const fn skip(addressing_mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    op(Operation::Illegal, addressing_mode, base_cycles)
}

/// Undocumented single-byte opcode.
const XXX: OpcodeMetadata = skip(AddressingMode::Implicit, 2);

/// Processor lock-up opcode.
const JAM: OpcodeMetadata = OpcodeMetadata {
    implemented: false,
    ..XXX
};

const IMP: AddressingMode = AddressingMode::Implicit;
const ACC: AddressingMode = AddressingMode::Accumulator;
const IMM: AddressingMode = AddressingMode::Immediate;
const ZP0: AddressingMode = AddressingMode::ZeroPage;
const ZPX: AddressingMode = AddressingMode::ZeroPageX;
const ZPY: AddressingMode = AddressingMode::ZeroPageY;
const REL: AddressingMode = AddressingMode::Relative;
const ABS: AddressingMode = AddressingMode::Absolute;
const ABX: AddressingMode = AddressingMode::AbsoluteX;
const ABY: AddressingMode = AddressingMode::AbsoluteY;
const IND: AddressingMode = AddressingMode::Indirect;
const IZX: AddressingMode = AddressingMode::IndirectX;
const IZY: AddressingMode = AddressingMode::IndirectY;

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use nes6502::{OPCODE_TABLE, Operation};
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.operation, Operation::Brk);
/// assert_eq!(brk.base_cycles, 7);
///
/// let illegal = &OPCODE_TABLE[0x03];
/// assert_eq!(illegal.mnemonic, "???");
/// assert_eq!(illegal.base_cycles, 2);
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = {
    use Operation::*;
    [
        // 0x00
        op(Brk, IMP, 7), op(Ora, IZX, 6), JAM,             XXX,
        skip(ZP0, 3),    op(Ora, ZP0, 3), op(Asl, ZP0, 5), XXX,
        op(Php, IMP, 3), op(Ora, IMM, 2), op(Asl, ACC, 2), XXX,
        skip(ABS, 4),    op(Ora, ABS, 4), op(Asl, ABS, 6), XXX,
        // 0x10
        op(Bpl, REL, 2), op(Ora, IZY, 5), JAM,             XXX,
        skip(ZPX, 4),    op(Ora, ZPX, 4), op(Asl, ZPX, 6), XXX,
        op(Clc, IMP, 2), op(Ora, ABY, 4), skip(IMP, 2),    XXX,
        skip(ABX, 4),    op(Ora, ABX, 4), op(Asl, ABX, 7), XXX,
        // 0x20
        op(Jsr, ABS, 6), op(And, IZX, 6), JAM,             XXX,
        op(Bit, ZP0, 3), op(And, ZP0, 3), op(Rol, ZP0, 5), XXX,
        op(Plp, IMP, 4), op(And, IMM, 2), op(Rol, ACC, 2), XXX,
        op(Bit, ABS, 4), op(And, ABS, 4), op(Rol, ABS, 6), XXX,
        // 0x30
        op(Bmi, REL, 2), op(And, IZY, 5), JAM,             XXX,
        skip(ZPX, 4),    op(And, ZPX, 4), op(Rol, ZPX, 6), XXX,
        op(Sec, IMP, 2), op(And, ABY, 4), skip(IMP, 2),    XXX,
        skip(ABX, 4),    op(And, ABX, 4), op(Rol, ABX, 7), XXX,
        // 0x40
        op(Rti, IMP, 6), op(Eor, IZX, 6), JAM,             XXX,
        skip(ZP0, 3),    op(Eor, ZP0, 3), op(Lsr, ZP0, 5), XXX,
        op(Pha, IMP, 3), op(Eor, IMM, 2), op(Lsr, ACC, 2), XXX,
        op(Jmp, ABS, 3), op(Eor, ABS, 4), op(Lsr, ABS, 6), XXX,
        // 0x50
        op(Bvc, REL, 2), op(Eor, IZY, 5), JAM,             XXX,
        skip(ZPX, 4),    op(Eor, ZPX, 4), op(Lsr, ZPX, 6), XXX,
        op(Cli, IMP, 2), op(Eor, ABY, 4), skip(IMP, 2),    XXX,
        skip(ABX, 4),    op(Eor, ABX, 4), op(Lsr, ABX, 7), XXX,
        // 0x60
        op(Rts, IMP, 6), op(Adc, IZX, 6), JAM,             XXX,
        skip(ZP0, 3),    op(Adc, ZP0, 3), op(Ror, ZP0, 5), XXX,
        op(Pla, IMP, 4), op(Adc, IMM, 2), op(Ror, ACC, 2), XXX,
        op(Jmp, IND, 5), op(Adc, ABS, 4), op(Ror, ABS, 6), XXX,
        // 0x70
        op(Bvs, REL, 2), op(Adc, IZY, 5), JAM,             XXX,
        skip(ZPX, 4),    op(Adc, ZPX, 4), op(Ror, ZPX, 6), XXX,
        op(Sei, IMP, 2), op(Adc, ABY, 4), skip(IMP, 2),    XXX,
        skip(ABX, 4),    op(Adc, ABX, 4), op(Ror, ABX, 7), XXX,
        // 0x80
        skip(IMM, 2),    op(Sta, IZX, 6), skip(IMM, 2),    XXX,
        op(Sty, ZP0, 3), op(Sta, ZP0, 3), op(Stx, ZP0, 3), XXX,
        op(Dey, IMP, 2), skip(IMM, 2),    op(Txa, IMP, 2), XXX,
        op(Sty, ABS, 4), op(Sta, ABS, 4), op(Stx, ABS, 4), XXX,
        // 0x90
        op(Bcc, REL, 2), op(Sta, IZY, 6), JAM,             XXX,
        op(Sty, ZPX, 4), op(Sta, ZPX, 4), op(Stx, ZPY, 4), XXX,
        op(Tya, IMP, 2), op(Sta, ABY, 5), op(Txs, IMP, 2), XXX,
        XXX,             op(Sta, ABX, 5), XXX,             XXX,
        // 0xA0
        op(Ldy, IMM, 2), op(Lda, IZX, 6), op(Ldx, IMM, 2), XXX,
        op(Ldy, ZP0, 3), op(Lda, ZP0, 3), op(Ldx, ZP0, 3), XXX,
        op(Tay, IMP, 2), op(Lda, IMM, 2), op(Tax, IMP, 2), XXX,
        op(Ldy, ABS, 4), op(Lda, ABS, 4), op(Ldx, ABS, 4), XXX,
        // 0xB0
        op(Bcs, REL, 2), op(Lda, IZY, 5), JAM,             XXX,
        op(Ldy, ZPX, 4), op(Lda, ZPX, 4), op(Ldx, ZPY, 4), XXX,
        op(Clv, IMP, 2), op(Lda, ABY, 4), op(Tsx, IMP, 2), XXX,
        op(Ldy, ABX, 4), op(Lda, ABX, 4), op(Ldx, ABY, 4), XXX,
        // 0xC0
        op(Cpy, IMM, 2), op(Cmp, IZX, 6), skip(IMM, 2),    XXX,
        op(Cpy, ZP0, 3), op(Cmp, ZP0, 3), op(Dec, ZP0, 5), XXX,
        op(Iny, IMP, 2), op(Cmp, IMM, 2), op(Dex, IMP, 2), XXX,
        op(Cpy, ABS, 4), op(Cmp, ABS, 4), op(Dec, ABS, 6), XXX,
        // 0xD0
        op(Bne, REL, 2), op(Cmp, IZY, 5), JAM,             XXX,
        skip(ZPX, 4),    op(Cmp, ZPX, 4), op(Dec, ZPX, 6), XXX,
        op(Cld, IMP, 2), op(Cmp, ABY, 4), skip(IMP, 2),    XXX,
        skip(ABX, 4),    op(Cmp, ABX, 4), op(Dec, ABX, 7), XXX,
        // 0xE0
        op(Cpx, IMM, 2), op(Sbc, IZX, 6), skip(IMM, 2),    XXX,
        op(Cpx, ZP0, 3), op(Sbc, ZP0, 3), op(Inc, ZP0, 5), XXX,
        op(Inx, IMP, 2), op(Sbc, IMM, 2), op(Nop, IMP, 2), skip(IMM, 2),
        op(Cpx, ABS, 4), op(Sbc, ABS, 4), op(Inc, ABS, 6), XXX,
        // 0xF0
        op(Beq, REL, 2), op(Sbc, IZY, 5), JAM,             XXX,
        skip(ZPX, 4),    op(Sbc, ZPX, 4), op(Inc, ZPX, 6), XXX,
        op(Sed, IMP, 2), op(Sbc, ABY, 4), skip(IMP, 2),    XXX,
        skip(ABX, 4),    op(Sbc, ABX, 4), op(Inc, ABX, 7), XXX,
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        let documented = OPCODE_TABLE.iter().filter(|m| !m.is_illegal()).count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn test_size_matches_addressing_mode() {
        for (opcode, m) in OPCODE_TABLE.iter().enumerate() {
            assert_eq!(
                m.size_bytes,
                1 + m.addressing_mode.operand_bytes(),
                "opcode 0x{:02X}",
                opcode
            );
        }
    }

    #[test]
    fn test_accumulator_tag() {
        for opcode in [0x0A, 0x2A, 0x4A, 0x6A] {
            assert!(OPCODE_TABLE[opcode].targets_accumulator());
        }
        assert!(!OPCODE_TABLE[0x06].targets_accumulator());
    }

    #[test]
    fn test_jam_opcodes_not_implemented() {
        let jams: Vec<usize> = OPCODE_TABLE
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.implemented)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(
            jams,
            vec![0x02, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2]
        );
    }
}
