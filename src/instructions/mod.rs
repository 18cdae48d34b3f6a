//! # 65C02 Instruction Semantics
//!
//! This module contains the symbolic semantics of every modeled instruction,
//! organized by category. Each instruction is a standalone function that takes
//! the symbolic state and the one value the trace observed for it.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT, TSB, TRB)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Subroutine and interrupt flow (JSR, RTS, RTI, BRK, hardware interrupts)
//! - **stack**: Stack operations (PHA, PHX, PHY, PHP, PLA, PLX, PLY, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)
//!
//! ## Unknown Handling
//!
//! A handler only assigns a known value when it can derive it from known
//! inputs or from the observed operand. When an input it needs is unknown,
//! every output depending on it becomes unknown.

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;
