//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! These always resolve the flag to a known value.

use crate::state::{Flag, SymbolicState};
use crate::tristate::Tri;

/// Executes one of the explicit flag set/clear instructions.
///
/// # Arguments
///
/// * `state` - Mutable reference to the symbolic state
/// * `flag` - The flag the instruction targets
/// * `value` - `true` for SEx, `false` for CLx
pub(crate) fn execute_set_flag(state: &mut SymbolicState, flag: Flag, value: bool) {
    state.set_flag(flag, Tri::Known(value));
}
