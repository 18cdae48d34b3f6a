//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA, PHX, PHY: push a register
//! - PHP: push the status register
//! - PLA, PLX, PLY: pull a register
//! - PLP: pull the status register
//!
//! The 6502 stack grows downward, so pushes decrement S and pulls increment
//! it. An unknown S stays unknown.

use crate::instructions::load_store::{execute_load, execute_store};
use crate::state::{Register, SymbolicState};

/// Executes PHA, PHX or PHY.
///
/// S is decremented, then the pushed byte is checked against the register
/// exactly as a store would.
pub(crate) fn execute_push(state: &mut SymbolicState, register: Register, operand: u8) {
    state.adjust_stack(-1);
    execute_store(state, register, operand);
}

/// Executes PLA, PLX or PLY.
///
/// The pulled byte is loaded (updating N and Z), then S is incremented.
pub(crate) fn execute_pull(state: &mut SymbolicState, register: Register, operand: u8) {
    execute_load(state, register, operand);
    state.adjust_stack(1);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte is checked against every known flag and then becomes the
/// new ground truth for all six flags.
pub(crate) fn execute_php(state: &mut SymbolicState, operand: u8) {
    state.adjust_stack(-1);
    state.check_flags_consistent(operand);
    state.bulk_set_flags(operand);
}

/// Executes the PLP (Pull Processor Status) instruction.
pub(crate) fn execute_plp(state: &mut SymbolicState, operand: u8) {
    state.bulk_set_flags(operand);
    state.adjust_stack(1);
}
