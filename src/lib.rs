//! # Symbolic 6502/65C02 Execution Engine
//!
//! A three-valued abstract interpreter for the 65C02 instruction set, used to
//! cross-check a captured instruction trace against the processor's
//! documented semantics.
//!
//! The engine models A, X, Y, S and the N, V, D, I, Z, C flags. Anything it
//! cannot infer is tracked as unknown instead of guessed. Whenever the trace
//! shows a value that contradicts something the model knows, the engine
//! raises a soft fault that the next state render reports once.
//!
//! ## Quick Start
//!
//! ```rust
//! use sym6502::{TraceEngine, OPCODE_TABLE};
//!
//! let mut engine = TraceEngine::new();
//!
//! // LDX #FF ; TXS ; LDA #50 ; CLC ; ADC #50
//! engine.dispatch(0xA2, 0xFF);
//! engine.dispatch(0x9A, 0);
//! engine.dispatch(0xA9, 0x50);
//! engine.dispatch(0x18, 0);
//! engine.dispatch(0x69, 0x50);
//!
//! assert_eq!(
//!     engine.render_state(),
//!     "A=A0 X=FF Y=?? SP=FF N=1 V=1 D=? I=? Z=0 C=0"
//! );
//!
//! // The decoder uses the table to slice instruction bytes
//! assert_eq!(OPCODE_TABLE[0x69].size_bytes, 2);
//! ```
//!
//! ## Modules
//!
//! - `addressing` - Addressing-mode catalog (lengths and disassembly templates)
//! - `opcodes` - Opcode semantics table
//! - `state` - Symbolic register/flag store
//! - `engine` - Trace engine driving the semantic handlers
//! - `render` - Fixed-layout state line
//! - `options` - Engine configuration
//! - `disassembler` - Template-driven instruction formatting
//!
//! Decimal-mode arithmetic, cycle timing and undocumented opcode semantics
//! are not modeled.

pub mod addressing;
pub mod disassembler;
pub mod engine;
pub mod opcodes;
pub mod options;
pub mod render;
pub mod state;
pub mod tristate;

// Internal instruction semantics (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

use thiserror::Error;

// Re-export public API
pub use addressing::{AddressingMode, AddressingModeInfo, Template, Token, ADDRESSING_MODES};
pub use disassembler::format_instruction;
pub use engine::{Observation, TraceEngine};
pub use opcodes::{lookup, OpcodeMetadata, OperandKind, Operation, Target, OPCODE_TABLE};
pub use options::{CpuVariant, DecimalPolicy, EngineOptions};
pub use render::{StateSnapshot, FAULT_ANNOTATION};
pub use state::{Flag, PackedFlags, Register, SymbolicState};
pub use tristate::Tri;

/// Errors reported by checked engine and formatting entry points.
///
/// Prediction mismatches are not errors; they surface through the fault
/// indicator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The observation does not match the opcode's operand classification.
    #[error("opcode 0x{opcode:02X} ({mnemonic}) expects a {expected} observation")]
    ObservationKind {
        opcode: u8,
        mnemonic: &'static str,
        expected: OperandKind,
    },

    /// Too few operand bytes were supplied for the addressing mode.
    #[error("{mnemonic} needs {expected} operand byte(s), got {actual}")]
    OperandLength {
        mnemonic: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The template renders a branch target but no label was given.
    #[error("{mnemonic} renders a branch target but no label was supplied")]
    MissingBranchLabel { mnemonic: &'static str },
}
