//! # Increment and Decrement Instructions
//!
//! This module implements INC, DEC (accumulator and memory forms), INX, INY,
//! DEX and DEY. Arithmetic wraps modulo 256. Only N and Z are affected.

use crate::opcodes::Target;
use crate::state::SymbolicState;
use crate::tristate::Tri;

fn step(state: &mut SymbolicState, target: Target, operand: u8, delta: i8) {
    match target {
        Target::Register(register) => match state.register(register) {
            Tri::Known(value) => {
                let result = value.wrapping_add_signed(delta);
                state.set_register(register, Tri::Known(result));
                state.set_nz(result);
            }
            Tri::Unknown => {
                state.set_register_unknown(register);
                state.set_nz_unknown();
            }
        },
        Target::Memory => state.set_nz(operand.wrapping_add_signed(delta)),
    }
}

/// Executes INC, INX or INY.
///
/// For a register target the register must be known; otherwise the register
/// and N, Z stay unknown. For memory, N and Z follow `operand + 1`.
pub(crate) fn execute_increment(state: &mut SymbolicState, target: Target, operand: u8) {
    step(state, target, operand, 1);
}

/// Executes DEC, DEX or DEY.
pub(crate) fn execute_decrement(state: &mut SymbolicState, target: Target, operand: u8) {
    step(state, target, operand, -1);
}
