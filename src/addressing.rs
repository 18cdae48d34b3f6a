//! # Addressing Modes
//!
//! This module defines the 16 addressing-mode shapes of the 65C02 instruction
//! set. Each shape fixes how many bytes an instruction occupies and how its
//! operand bytes are laid out when disassembled.
//!
//! The symbolic engine never computes effective addresses, so the catalog only
//! carries what a trace decoder and a disassembly renderer need: the length
//! and a template.

/// 65C02 addressing mode enumeration.
///
/// # Instruction Sizes
///
/// - **1 byte**: Implied, Accumulator
/// - **2 bytes**: Relative, Immediate, ZeroPage, ZeroPageX, ZeroPageY,
///   IndirectX, IndirectY, ZeroPageIndirect
/// - **3 bytes**: Absolute, AbsoluteX, AbsoluteY, AbsoluteIndirect,
///   AbsoluteIndexedIndirect, ZeroPageRelative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, PHA
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: ASL A, INC A
    Accumulator,

    /// Signed 8-bit branch offset, rendered as a target label.
    ///
    /// Example: BNE loop
    Relative,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #10
    Immediate,

    /// 8-bit address in zero page.
    ZeroPage,

    /// Zero page address indexed by X.
    ZeroPageX,

    /// Zero page address indexed by Y.
    ZeroPageY,

    /// Indexed indirect: (ZP + X) then dereference.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    IndirectY,

    /// Zero page indirect, 65C02 only: (ZP).
    ZeroPageIndirect,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address indexed by X.
    AbsoluteX,

    /// 16-bit address indexed by Y.
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer: JMP (abs).
    AbsoluteIndirect,

    /// Indexed indirect jump, 65C02 only: JMP (abs,X).
    AbsoluteIndexedIndirect,

    /// Zero page test plus relative branch, used by BBRn/BBSn.
    ///
    /// Example: BBR0 12,skip
    ZeroPageRelative,
}

/// One piece of a disassembly template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// The instruction mnemonic.
    Mnemonic,

    /// Literal text, such as `" #"` or `",X"`.
    Text(&'static str),

    /// Operand byte at the given index, as two uppercase hex digits.
    Byte(usize),

    /// A symbolic branch target supplied by the renderer.
    Label,
}

/// Ordered tokens describing how an instruction is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template(pub &'static [Token]);

impl Template {
    /// Returns the template tokens in render order.
    pub fn tokens(&self) -> &'static [Token] {
        self.0
    }

    /// Returns true if the template renders a branch target label.
    pub fn has_label(&self) -> bool {
        self.0.iter().any(|t| matches!(t, Token::Label))
    }
}

/// Catalog entry for one addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressingModeInfo {
    /// Mode this entry describes.
    pub mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Disassembly template.
    pub template: Template,
}

use Token::{Byte, Label, Mnemonic, Text};

/// Addressing-mode catalog, indexed by `AddressingMode as usize`.
///
/// Absolute forms list the high byte first because operands are stored
/// little-endian.
pub const ADDRESSING_MODES: [AddressingModeInfo; 16] = [
    AddressingModeInfo {
        mode: AddressingMode::Implied,
        size_bytes: 1,
        template: Template(&[Mnemonic]),
    },
    AddressingModeInfo {
        mode: AddressingMode::Accumulator,
        size_bytes: 1,
        template: Template(&[Mnemonic, Text(" A")]),
    },
    AddressingModeInfo {
        mode: AddressingMode::Relative,
        size_bytes: 2,
        template: Template(&[Mnemonic, Text(" "), Label]),
    },
    AddressingModeInfo {
        mode: AddressingMode::Immediate,
        size_bytes: 2,
        template: Template(&[Mnemonic, Text(" #"), Byte(0)]),
    },
    AddressingModeInfo {
        mode: AddressingMode::ZeroPage,
        size_bytes: 2,
        template: Template(&[Mnemonic, Text(" "), Byte(0)]),
    },
    AddressingModeInfo {
        mode: AddressingMode::ZeroPageX,
        size_bytes: 2,
        template: Template(&[Mnemonic, Text(" "), Byte(0), Text(",X")]),
    },
    AddressingModeInfo {
        mode: AddressingMode::ZeroPageY,
        size_bytes: 2,
        template: Template(&[Mnemonic, Text(" "), Byte(0), Text(",Y")]),
    },
    AddressingModeInfo {
        mode: AddressingMode::IndirectX,
        size_bytes: 2,
        template: Template(&[Mnemonic, Text(" ("), Byte(0), Text(",X)")]),
    },
    AddressingModeInfo {
        mode: AddressingMode::IndirectY,
        size_bytes: 2,
        template: Template(&[Mnemonic, Text(" ("), Byte(0), Text("),Y")]),
    },
    AddressingModeInfo {
        mode: AddressingMode::ZeroPageIndirect,
        size_bytes: 2,
        template: Template(&[Mnemonic, Text(" ("), Byte(0), Text(")")]),
    },
    AddressingModeInfo {
        mode: AddressingMode::Absolute,
        size_bytes: 3,
        template: Template(&[Mnemonic, Text(" "), Byte(1), Byte(0)]),
    },
    AddressingModeInfo {
        mode: AddressingMode::AbsoluteX,
        size_bytes: 3,
        template: Template(&[Mnemonic, Text(" "), Byte(1), Byte(0), Text(",X")]),
    },
    AddressingModeInfo {
        mode: AddressingMode::AbsoluteY,
        size_bytes: 3,
        template: Template(&[Mnemonic, Text(" "), Byte(1), Byte(0), Text(",Y")]),
    },
    AddressingModeInfo {
        mode: AddressingMode::AbsoluteIndirect,
        size_bytes: 3,
        template: Template(&[Mnemonic, Text(" ("), Byte(1), Byte(0), Text(")")]),
    },
    AddressingModeInfo {
        mode: AddressingMode::AbsoluteIndexedIndirect,
        size_bytes: 3,
        template: Template(&[Mnemonic, Text(" ("), Byte(1), Byte(0), Text(",X)")]),
    },
    AddressingModeInfo {
        mode: AddressingMode::ZeroPageRelative,
        size_bytes: 3,
        template: Template(&[Mnemonic, Text(" "), Byte(0), Text(","), Label]),
    },
];

impl AddressingMode {
    /// Returns the catalog entry for this mode.
    pub const fn info(self) -> AddressingModeInfo {
        ADDRESSING_MODES[self as usize]
    }

    /// Total instruction size in bytes for this mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use sym6502::AddressingMode;
    ///
    /// assert_eq!(AddressingMode::Accumulator.size_bytes(), 1);
    /// assert_eq!(AddressingMode::ZeroPageRelative.size_bytes(), 3);
    /// ```
    pub const fn size_bytes(self) -> u8 {
        self.info().size_bytes
    }

    /// Disassembly template for this mode.
    pub const fn template(self) -> Template {
        self.info().template
    }

    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> usize {
        self.size_bytes() as usize - 1
    }
}
