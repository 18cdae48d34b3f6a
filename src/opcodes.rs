//! # Opcode Semantics Table
//!
//! This module contains the 256-entry table that maps every 65C02 opcode byte
//! to its mnemonic, addressing mode, operand classification and semantic
//! operation.
//!
//! Each entry's `size_bytes` and `template` are resolved from the
//! addressing-mode catalog by a `const fn`, so the table is built exactly once
//! and is immutable thereafter.
//!
//! Opcodes without a modeled side effect (NOPs, JMP, BRA, STZ, WAI, STP and the
//! RMB/SMB/BBR/BBS bit instructions) are marked `Operation::Unmodeled`. They
//! still carry correct lengths so trace decoding stays in sync.

use std::fmt;

use crate::addressing::{AddressingMode, Template};
use crate::state::{Flag, Register};

/// Which observed value a trace supplies for an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// The byte read by the instruction.
    Read,

    /// The byte written by the instruction.
    Write,

    /// Whether a conditional branch was taken.
    Branch,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OperandKind::Read => write!(f, "read"),
            OperandKind::Write => write!(f, "write"),
            OperandKind::Branch => write!(f, "branch"),
        }
    }
}

/// Where a shift, rotate, increment or decrement applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A register held in the model.
    Register(Register),

    /// Memory, which is not modeled. Flags are derived from the observed
    /// input byte and the result is discarded.
    Memory,
}

/// Semantic behavior of an opcode.
///
/// One variant per distinct behavior; the engine matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// LDA/LDX/LDY: register takes the observed byte.
    Load(Register),
    /// STA/STX/STY: observed byte is checked against the register.
    Store(Register),
    /// PHA/PHX/PHY
    Push(Register),
    /// PLA/PLX/PLY
    Pull(Register),
    /// PHP
    PushStatus,
    /// PLP
    PullStatus,

    /// ADC: binary add with carry.
    Adc,
    /// SBC: binary subtract with borrow.
    Sbc,
    /// AND with the accumulator.
    And,
    /// ORA with the accumulator.
    Ora,
    /// EOR with the accumulator.
    Eor,
    /// CMP/CPX/CPY
    Compare(Register),
    /// BIT on memory: N, V from the operand, Z from A AND operand.
    Bit,
    /// BIT immediate: Z only.
    BitImmediate,
    /// TSB/TRB: Z from A AND operand.
    TestBits,

    /// ASL
    ShiftLeft(Target),
    /// LSR
    ShiftRight(Target),
    /// ROL
    RotateLeft(Target),
    /// ROR
    RotateRight(Target),
    /// INC, INX, INY
    Increment(Target),
    /// DEC, DEX, DEY
    Decrement(Target),

    /// CLC/SEC/CLD/SED/CLI/SEI/CLV
    SetFlag(Flag, bool),
    /// TAX/TAY/TXA/TYA/TSX/TXS as (source, destination).
    Transfer(Register, Register),
    /// Conditional branch on a flag; the bool is the flag value that makes
    /// the branch taken.
    Branch(Flag, bool),

    /// JSR: S drops by 2.
    Jsr,
    /// RTS: S rises by 2.
    Rts,
    /// RTI: flags pulled, S rises by 3.
    Rti,
    /// BRK: interrupt sequence with the pushed status byte.
    Brk,

    /// No modeled side effect.
    Unmodeled,
}

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use sym6502::{AddressingMode, OperandKind, Operation, Register, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert_eq!(lda_imm.operand_kind, OperandKind::Read);
/// assert_eq!(lda_imm.operation, Operation::Load(Register::A));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "BBR3").
    pub mnemonic: &'static str,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes, resolved from the addressing mode.
    pub size_bytes: u8,

    /// Disassembly template, resolved from the addressing mode.
    pub template: Template,

    /// Which observed value the trace supplies.
    pub operand_kind: OperandKind,

    /// Semantic behavior.
    pub operation: Operation,
}

impl OpcodeMetadata {
    /// Returns true if the opcode has a modeled side effect.
    pub fn is_modeled(&self) -> bool {
        self.operation != Operation::Unmodeled
    }
}

const fn op(
    mnemonic: &'static str,
    addressing_mode: AddressingMode,
    operand_kind: OperandKind,
    operation: Operation,
) -> OpcodeMetadata {
    let info = addressing_mode.info();
    OpcodeMetadata {
        mnemonic,
        addressing_mode,
        size_bytes: info.size_bytes,
        template: info.template,
        operand_kind,
        operation,
    }
}

const READ: OperandKind = OperandKind::Read;
const WRITE: OperandKind = OperandKind::Write;
const BRANCH: OperandKind = OperandKind::Branch;

const ACC: Target = Target::Register(Register::A);
const XREG: Target = Target::Register(Register::X);
const YREG: Target = Target::Register(Register::Y);
const MEM: Target = Target::Memory;

use AddressingMode::*;
use Flag::*;
use Operation::*;
use Register::{A, S, X, Y};

/// Complete 256-entry opcode table indexed by opcode byte value.
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    op("BRK", Immediate, WRITE, Brk),
    op("ORA", IndirectX, READ, Ora),
    op("NOP", Immediate, READ, Unmodeled),
    op("NOP", Implied, READ, Unmodeled),
    op("TSB", ZeroPage, READ, TestBits),
    op("ORA", ZeroPage, READ, Ora),
    op("ASL", ZeroPage, READ, ShiftLeft(MEM)),
    op("RMB0", ZeroPage, READ, Unmodeled),
    op("PHP", Implied, WRITE, PushStatus),
    op("ORA", Immediate, READ, Ora),
    op("ASL", Accumulator, READ, ShiftLeft(ACC)),
    op("NOP", Implied, READ, Unmodeled),
    op("TSB", Absolute, READ, TestBits),
    op("ORA", Absolute, READ, Ora),
    op("ASL", Absolute, READ, ShiftLeft(MEM)),
    op("BBR0", ZeroPageRelative, READ, Unmodeled),
    // 0x10
    op("BPL", Relative, BRANCH, Branch(N, false)),
    op("ORA", IndirectY, READ, Ora),
    op("ORA", ZeroPageIndirect, READ, Ora),
    op("NOP", Implied, READ, Unmodeled),
    op("TRB", ZeroPage, READ, TestBits),
    op("ORA", ZeroPageX, READ, Ora),
    op("ASL", ZeroPageX, READ, ShiftLeft(MEM)),
    op("RMB1", ZeroPage, READ, Unmodeled),
    op("CLC", Implied, READ, SetFlag(C, false)),
    op("ORA", AbsoluteY, READ, Ora),
    op("INC", Accumulator, READ, Increment(ACC)),
    op("NOP", Implied, READ, Unmodeled),
    op("TRB", Absolute, READ, TestBits),
    op("ORA", AbsoluteX, READ, Ora),
    op("ASL", AbsoluteX, READ, ShiftLeft(MEM)),
    op("BBR1", ZeroPageRelative, READ, Unmodeled),
    // 0x20
    op("JSR", Absolute, READ, Jsr),
    op("AND", IndirectX, READ, And),
    op("NOP", Immediate, READ, Unmodeled),
    op("NOP", Implied, READ, Unmodeled),
    op("BIT", ZeroPage, READ, Bit),
    op("AND", ZeroPage, READ, And),
    op("ROL", ZeroPage, READ, RotateLeft(MEM)),
    op("RMB2", ZeroPage, READ, Unmodeled),
    op("PLP", Implied, READ, PullStatus),
    op("AND", Immediate, READ, And),
    op("ROL", Accumulator, READ, RotateLeft(ACC)),
    op("NOP", Implied, READ, Unmodeled),
    op("BIT", Absolute, READ, Bit),
    op("AND", Absolute, READ, And),
    op("ROL", Absolute, READ, RotateLeft(MEM)),
    op("BBR2", ZeroPageRelative, READ, Unmodeled),
    // 0x30
    op("BMI", Relative, BRANCH, Branch(N, true)),
    op("AND", IndirectY, READ, And),
    op("AND", ZeroPageIndirect, READ, And),
    op("NOP", Implied, READ, Unmodeled),
    op("BIT", ZeroPageX, READ, Bit),
    op("AND", ZeroPageX, READ, And),
    op("ROL", ZeroPageX, READ, RotateLeft(MEM)),
    op("RMB3", ZeroPage, READ, Unmodeled),
    op("SEC", Implied, READ, SetFlag(C, true)),
    op("AND", AbsoluteY, READ, And),
    op("DEC", Accumulator, READ, Decrement(ACC)),
    op("NOP", Implied, READ, Unmodeled),
    op("BIT", AbsoluteX, READ, Bit),
    op("AND", AbsoluteX, READ, And),
    op("ROL", AbsoluteX, READ, RotateLeft(MEM)),
    op("BBR3", ZeroPageRelative, READ, Unmodeled),
    // 0x40
    op("RTI", Implied, READ, Rti),
    op("EOR", IndirectX, READ, Eor),
    op("NOP", Immediate, READ, Unmodeled),
    op("NOP", Implied, READ, Unmodeled),
    op("NOP", ZeroPage, READ, Unmodeled),
    op("EOR", ZeroPage, READ, Eor),
    op("LSR", ZeroPage, READ, ShiftRight(MEM)),
    op("RMB4", ZeroPage, READ, Unmodeled),
    op("PHA", Implied, WRITE, Push(A)),
    op("EOR", Immediate, READ, Eor),
    op("LSR", Accumulator, READ, ShiftRight(ACC)),
    op("NOP", Implied, READ, Unmodeled),
    op("JMP", Absolute, READ, Unmodeled),
    op("EOR", Absolute, READ, Eor),
    op("LSR", Absolute, READ, ShiftRight(MEM)),
    op("BBR4", ZeroPageRelative, READ, Unmodeled),
    // 0x50
    op("BVC", Relative, BRANCH, Branch(V, false)),
    op("EOR", IndirectY, READ, Eor),
    op("EOR", ZeroPageIndirect, READ, Eor),
    op("NOP", Implied, READ, Unmodeled),
    op("NOP", ZeroPageX, READ, Unmodeled),
    op("EOR", ZeroPageX, READ, Eor),
    op("LSR", ZeroPageX, READ, ShiftRight(MEM)),
    op("RMB5", ZeroPage, READ, Unmodeled),
    op("CLI", Implied, READ, SetFlag(I, false)),
    op("EOR", AbsoluteY, READ, Eor),
    op("PHY", Implied, WRITE, Push(Y)),
    op("NOP", Implied, READ, Unmodeled),
    op("NOP", Absolute, READ, Unmodeled),
    op("EOR", AbsoluteX, READ, Eor),
    op("LSR", AbsoluteX, READ, ShiftRight(MEM)),
    op("BBR5", ZeroPageRelative, READ, Unmodeled),
    // 0x60
    op("RTS", Implied, READ, Rts),
    op("ADC", IndirectX, READ, Adc),
    op("NOP", Immediate, READ, Unmodeled),
    op("NOP", Implied, READ, Unmodeled),
    op("STZ", ZeroPage, WRITE, Unmodeled),
    op("ADC", ZeroPage, READ, Adc),
    op("ROR", ZeroPage, READ, RotateRight(MEM)),
    op("RMB6", ZeroPage, READ, Unmodeled),
    op("PLA", Implied, READ, Pull(A)),
    op("ADC", Immediate, READ, Adc),
    op("ROR", Accumulator, READ, RotateRight(ACC)),
    op("NOP", Implied, READ, Unmodeled),
    op("JMP", AbsoluteIndirect, READ, Unmodeled),
    op("ADC", Absolute, READ, Adc),
    op("ROR", Absolute, READ, RotateRight(MEM)),
    op("BBR6", ZeroPageRelative, READ, Unmodeled),
    // 0x70
    op("BVS", Relative, BRANCH, Branch(V, true)),
    op("ADC", IndirectY, READ, Adc),
    op("ADC", ZeroPageIndirect, READ, Adc),
    op("NOP", Implied, READ, Unmodeled),
    op("STZ", ZeroPageX, WRITE, Unmodeled),
    op("ADC", ZeroPageX, READ, Adc),
    op("ROR", ZeroPageX, READ, RotateRight(MEM)),
    op("RMB7", ZeroPage, READ, Unmodeled),
    op("SEI", Implied, READ, SetFlag(I, true)),
    op("ADC", AbsoluteY, READ, Adc),
    op("PLY", Implied, READ, Pull(Y)),
    op("NOP", Implied, READ, Unmodeled),
    op("JMP", AbsoluteIndexedIndirect, READ, Unmodeled),
    op("ADC", AbsoluteX, READ, Adc),
    op("ROR", AbsoluteX, READ, RotateRight(MEM)),
    op("BBR7", ZeroPageRelative, READ, Unmodeled),
    // 0x80
    op("BRA", Relative, READ, Unmodeled),
    op("STA", IndirectX, WRITE, Store(A)),
    op("NOP", Immediate, READ, Unmodeled),
    op("NOP", Implied, READ, Unmodeled),
    op("STY", ZeroPage, WRITE, Store(Y)),
    op("STA", ZeroPage, WRITE, Store(A)),
    op("STX", ZeroPage, WRITE, Store(X)),
    op("SMB0", ZeroPage, READ, Unmodeled),
    op("DEY", Implied, READ, Decrement(YREG)),
    op("BIT", Immediate, READ, BitImmediate),
    op("TXA", Implied, READ, Transfer(X, A)),
    op("NOP", Implied, READ, Unmodeled),
    op("STY", Absolute, WRITE, Store(Y)),
    op("STA", Absolute, WRITE, Store(A)),
    op("STX", Absolute, WRITE, Store(X)),
    op("BBS0", ZeroPageRelative, READ, Unmodeled),
    // 0x90
    op("BCC", Relative, BRANCH, Branch(C, false)),
    op("STA", IndirectY, WRITE, Store(A)),
    op("STA", ZeroPageIndirect, WRITE, Store(A)),
    op("NOP", Implied, READ, Unmodeled),
    op("STY", ZeroPageX, WRITE, Store(Y)),
    op("STA", ZeroPageX, WRITE, Store(A)),
    op("STX", ZeroPageY, WRITE, Store(X)),
    op("SMB1", ZeroPage, READ, Unmodeled),
    op("TYA", Implied, READ, Transfer(Y, A)),
    op("STA", AbsoluteY, WRITE, Store(A)),
    op("TXS", Implied, READ, Transfer(X, S)),
    op("NOP", Implied, READ, Unmodeled),
    op("STZ", Absolute, WRITE, Unmodeled),
    op("STA", AbsoluteX, WRITE, Store(A)),
    op("STZ", AbsoluteX, WRITE, Unmodeled),
    op("BBS1", ZeroPageRelative, READ, Unmodeled),
    // 0xA0
    op("LDY", Immediate, READ, Load(Y)),
    op("LDA", IndirectX, READ, Load(A)),
    op("LDX", Immediate, READ, Load(X)),
    op("NOP", Implied, READ, Unmodeled),
    op("LDY", ZeroPage, READ, Load(Y)),
    op("LDA", ZeroPage, READ, Load(A)),
    op("LDX", ZeroPage, READ, Load(X)),
    op("SMB2", ZeroPage, READ, Unmodeled),
    op("TAY", Implied, READ, Transfer(A, Y)),
    op("LDA", Immediate, READ, Load(A)),
    op("TAX", Implied, READ, Transfer(A, X)),
    op("NOP", Implied, READ, Unmodeled),
    op("LDY", Absolute, READ, Load(Y)),
    op("LDA", Absolute, READ, Load(A)),
    op("LDX", Absolute, READ, Load(X)),
    op("BBS2", ZeroPageRelative, READ, Unmodeled),
    // 0xB0
    op("BCS", Relative, BRANCH, Branch(C, true)),
    op("LDA", IndirectY, READ, Load(A)),
    op("LDA", ZeroPageIndirect, READ, Load(A)),
    op("NOP", Implied, READ, Unmodeled),
    op("LDY", ZeroPageX, READ, Load(Y)),
    op("LDA", ZeroPageX, READ, Load(A)),
    op("LDX", ZeroPageY, READ, Load(X)),
    op("SMB3", ZeroPage, READ, Unmodeled),
    op("CLV", Implied, READ, SetFlag(V, false)),
    op("LDA", AbsoluteY, READ, Load(A)),
    op("TSX", Implied, READ, Transfer(S, X)),
    op("NOP", Implied, READ, Unmodeled),
    op("LDY", AbsoluteX, READ, Load(Y)),
    op("LDA", AbsoluteX, READ, Load(A)),
    op("LDX", AbsoluteY, READ, Load(X)),
    op("BBS3", ZeroPageRelative, READ, Unmodeled),
    // 0xC0
    op("CPY", Immediate, READ, Compare(Y)),
    op("CMP", IndirectX, READ, Compare(A)),
    op("NOP", Immediate, READ, Unmodeled),
    op("NOP", Implied, READ, Unmodeled),
    op("CPY", ZeroPage, READ, Compare(Y)),
    op("CMP", ZeroPage, READ, Compare(A)),
    op("DEC", ZeroPage, READ, Decrement(MEM)),
    op("SMB4", ZeroPage, READ, Unmodeled),
    op("INY", Implied, READ, Increment(YREG)),
    op("CMP", Immediate, READ, Compare(A)),
    op("DEX", Implied, READ, Decrement(XREG)),
    op("WAI", Implied, READ, Unmodeled),
    op("CPY", Absolute, READ, Compare(Y)),
    op("CMP", Absolute, READ, Compare(A)),
    op("DEC", Absolute, READ, Decrement(MEM)),
    op("BBS4", ZeroPageRelative, READ, Unmodeled),
    // 0xD0
    op("BNE", Relative, BRANCH, Branch(Z, false)),
    op("CMP", IndirectY, READ, Compare(A)),
    op("CMP", ZeroPageIndirect, READ, Compare(A)),
    op("NOP", Implied, READ, Unmodeled),
    op("NOP", ZeroPageX, READ, Unmodeled),
    op("CMP", ZeroPageX, READ, Compare(A)),
    op("DEC", ZeroPageX, READ, Decrement(MEM)),
    op("SMB5", ZeroPage, READ, Unmodeled),
    op("CLD", Implied, READ, SetFlag(D, false)),
    op("CMP", AbsoluteY, READ, Compare(A)),
    op("PHX", Implied, WRITE, Push(X)),
    op("STP", Implied, READ, Unmodeled),
    op("NOP", Absolute, READ, Unmodeled),
    op("CMP", AbsoluteX, READ, Compare(A)),
    op("DEC", AbsoluteX, READ, Decrement(MEM)),
    op("BBS5", ZeroPageRelative, READ, Unmodeled),
    // 0xE0
    op("CPX", Immediate, READ, Compare(X)),
    op("SBC", IndirectX, READ, Sbc),
    op("NOP", Immediate, READ, Unmodeled),
    op("NOP", Implied, READ, Unmodeled),
    op("CPX", ZeroPage, READ, Compare(X)),
    op("SBC", ZeroPage, READ, Sbc),
    op("INC", ZeroPage, READ, Increment(MEM)),
    op("SMB6", ZeroPage, READ, Unmodeled),
    op("INX", Implied, READ, Increment(XREG)),
    op("SBC", Immediate, READ, Sbc),
    op("NOP", Implied, READ, Unmodeled),
    op("NOP", Implied, READ, Unmodeled),
    op("CPX", Absolute, READ, Compare(X)),
    op("SBC", Absolute, READ, Sbc),
    op("INC", Absolute, READ, Increment(MEM)),
    op("BBS6", ZeroPageRelative, READ, Unmodeled),
    // 0xF0
    op("BEQ", Relative, BRANCH, Branch(Z, true)),
    op("SBC", IndirectY, READ, Sbc),
    op("SBC", ZeroPageIndirect, READ, Sbc),
    op("NOP", Implied, READ, Unmodeled),
    op("NOP", ZeroPageX, READ, Unmodeled),
    op("SBC", ZeroPageX, READ, Sbc),
    op("INC", ZeroPageX, READ, Increment(MEM)),
    op("SMB7", ZeroPage, READ, Unmodeled),
    op("SED", Implied, READ, SetFlag(D, true)),
    op("SBC", AbsoluteY, READ, Sbc),
    op("PLX", Implied, READ, Pull(X)),
    op("NOP", Implied, READ, Unmodeled),
    op("NOP", Absolute, READ, Unmodeled),
    op("SBC", AbsoluteX, READ, Sbc),
    op("INC", AbsoluteX, READ, Increment(MEM)),
    op("BBS7", ZeroPageRelative, READ, Unmodeled),
];

/// Looks up the metadata for an opcode byte.
pub fn lookup(opcode: u8) -> &'static OpcodeMetadata {
    &OPCODE_TABLE[opcode as usize]
}
