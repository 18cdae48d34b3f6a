//! # Branch Instructions
//!
//! This module implements the conditional branches:
//! - BPL/BMI test N
//! - BVC/BVS test V
//! - BCC/BCS test C
//! - BNE/BEQ test Z
//!
//! The trace reports whether each branch was taken. That outcome reveals the
//! tested flag, so a branch either confirms a known flag (faulting on
//! disagreement) or resolves an unknown one.

use crate::state::{Flag, SymbolicState};
use crate::tristate::Tri;

/// Executes a conditional branch.
///
/// # Arguments
///
/// * `state` - Mutable reference to the symbolic state
/// * `flag` - The flag this branch tests
/// * `taken_when` - Flag value that makes the branch taken (true for BMI, BVS, BCS, BEQ)
/// * `taken` - Whether the trace shows the branch as taken
pub(crate) fn execute_branch(state: &mut SymbolicState, flag: Flag, taken_when: bool, taken: bool) {
    let implied = if taken { taken_when } else { !taken_when };

    match state.flag(flag) {
        Tri::Known(value) if value != implied => {
            state.raise_fault(flag.name(), value as u8, implied as u8);
        }
        Tri::Known(_) => {}
        Tri::Unknown => state.set_flag(flag, Tri::Known(implied)),
    }
}
