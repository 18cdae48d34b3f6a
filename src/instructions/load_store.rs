//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA, LDX, LDY: the observed byte is authoritative
//! - STA, STX, STY: the observed byte is what the register must have held
//!
//! A store that contradicts a known register raises the fault indicator. The
//! register then takes the observed value so the model follows the trace.

use crate::state::{Register, SymbolicState};
use crate::tristate::Tri;

/// Executes LDA, LDX or LDY.
///
/// Flags affected:
/// - N: bit 7 of the loaded value
/// - Z: set if the loaded value is zero
pub(crate) fn execute_load(state: &mut SymbolicState, register: Register, operand: u8) {
    state.set_register(register, Tri::Known(operand));
    state.set_nz(operand);
}

/// Executes STA, STX or STY.
///
/// No flags are affected.
pub(crate) fn execute_store(state: &mut SymbolicState, register: Register, operand: u8) {
    state.check_register(register, operand);
    state.set_register(register, Tri::Known(operand));
}
