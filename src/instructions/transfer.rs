//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! Every transfer except TXS updates N and Z from the copied value.

use crate::state::{Register, SymbolicState};
use crate::tristate::Tri;

/// Executes a register transfer from `source` to `destination`.
///
/// When the source is unknown the destination becomes unknown, and so do N
/// and Z unless the destination is S.
pub(crate) fn execute_transfer(state: &mut SymbolicState, source: Register, destination: Register) {
    let value = state.register(source);
    state.set_register(destination, value);

    if destination == Register::S {
        return;
    }

    match value {
        Tri::Known(v) => state.set_nz(v),
        Tri::Unknown => state.set_nz_unknown(),
    }
}
