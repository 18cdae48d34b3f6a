//! # Control Flow Instructions
//!
//! This module implements the instructions that move the stack pointer for
//! subroutine and interrupt flow, plus the interrupt sequencer:
//! - JSR: pushes a 2-byte return address
//! - RTS: pulls a 2-byte return address
//! - RTI: pulls status and a 2-byte return address
//! - BRK and hardware interrupts: push PC and status, then disable interrupts
//!
//! JMP and BRA have no modeled side effect and live nowhere here.

use crate::options::CpuVariant;
use crate::state::SymbolicState;
use crate::tristate::Tri;

/// Executes the JSR (Jump to Subroutine) instruction.
pub(crate) fn execute_jsr(state: &mut SymbolicState) {
    state.adjust_stack(-2);
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts(state: &mut SymbolicState) {
    state.adjust_stack(2);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// The operand is the status byte pulled from the stack.
pub(crate) fn execute_rti(state: &mut SymbolicState, operand: u8) {
    state.bulk_set_flags(operand);
    state.adjust_stack(3);
}

/// Runs the interrupt sequence for BRK, IRQ or NMI.
///
/// Sequence:
/// 1. S drops by 3 (PC high, PC low, status)
/// 2. The pushed status is checked against known flags, then assigned
/// 3. I is forced to 1
/// 4. On the 65C02, D is forced to 0
///
/// # Arguments
///
/// * `state` - Mutable reference to the symbolic state
/// * `status` - The status byte observed on the stack
/// * `variant` - Processor variant, which decides the D side effect
pub(crate) fn execute_interrupt(state: &mut SymbolicState, status: u8, variant: CpuVariant) {
    state.adjust_stack(-3);
    state.check_flags_consistent(status);
    state.bulk_set_flags(status);
    state.i = Tri::Known(true);
    if variant.clears_decimal_on_interrupt() {
        state.d = Tri::Known(false);
    }
}

/// Executes the BRK (Force Interrupt) instruction.
pub(crate) fn execute_brk(state: &mut SymbolicState, operand: u8, variant: CpuVariant) {
    execute_interrupt(state, operand, variant);
}
