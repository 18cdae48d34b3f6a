//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logical and compare operations:
//! - ADC, SBC: binary add/subtract with carry
//! - AND, ORA, EOR: bitwise logic on the accumulator
//! - CMP, CPX, CPY: compare a register with the operand
//! - BIT, BIT #, TSB, TRB: flag-only bit tests
//!
//! Decimal mode is not modeled. Under `DecimalPolicy::AssumeBinary` ADC and
//! SBC compute binary results even when D is set.

use crate::options::DecimalPolicy;
use crate::state::{Flag, Register, SymbolicState};
use crate::tristate::Tri;

/// Returns the known accumulator and carry, or `None` if ADC/SBC cannot
/// produce a known result.
fn arithmetic_inputs(state: &SymbolicState, policy: DecimalPolicy) -> Option<(u8, u8)> {
    if policy == DecimalPolicy::UnknownWhenDecimal && state.d != Tri::Known(false) {
        return None;
    }
    let a = state.a.known()?;
    let c = state.c.known()?;
    Some((a, c as u8))
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Computes `A + operand + C` as a 9-bit sum.
///
/// Flags affected:
/// - C: bit 8 of the sum
/// - V: set when A and the operand share a sign and the result does not
/// - N, Z: from the new accumulator
///
/// If A or C is unknown, A and N, V, Z, C all become unknown.
pub(crate) fn execute_adc(state: &mut SymbolicState, operand: u8, policy: DecimalPolicy) {
    let Some((a, carry)) = arithmetic_inputs(state, policy) else {
        state.a = Tri::Unknown;
        state.set_nvzc_unknown();
        return;
    };

    let sum = a as u16 + operand as u16 + carry as u16;
    let result = sum as u8;

    state.c = Tri::Known(sum & 0x100 != 0);
    state.v = Tri::Known((a ^ operand) & 0x80 == 0 && (a ^ result) & 0x80 != 0);
    state.a = Tri::Known(result);
    state.set_nz(result);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes `A - operand - (1 - C)`. C ends up set when no borrow occurred.
/// V is set when A and the operand differ in sign and the result's sign
/// differs from A's.
pub(crate) fn execute_sbc(state: &mut SymbolicState, operand: u8, policy: DecimalPolicy) {
    let Some((a, carry)) = arithmetic_inputs(state, policy) else {
        state.a = Tri::Unknown;
        state.set_nvzc_unknown();
        return;
    };

    let difference = a as i16 - operand as i16 - (1 - carry as i16);
    let result = difference as u8;

    state.c = Tri::Known(difference >= 0);
    state.v = Tri::Known((a ^ operand) & 0x80 != 0 && (a ^ result) & 0x80 != 0);
    state.a = Tri::Known(result);
    state.set_nz(result);
}

/// Shared body of AND, ORA and EOR.
fn logical(state: &mut SymbolicState, operand: u8, f: impl FnOnce(u8, u8) -> u8) {
    match state.a {
        Tri::Known(a) => {
            let result = f(a, operand);
            state.a = Tri::Known(result);
            state.set_nz(result);
        }
        Tri::Unknown => state.set_nz_unknown(),
    }
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and(state: &mut SymbolicState, operand: u8) {
    logical(state, operand, |a, m| a & m);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora(state: &mut SymbolicState, operand: u8) {
    logical(state, operand, |a, m| a | m);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor(state: &mut SymbolicState, operand: u8) {
    logical(state, operand, |a, m| a ^ m);
}

/// Executes CMP, CPX or CPY.
///
/// Computes `register - operand` without storing it. C is set when the
/// register is greater than or equal to the operand; N and Z come from the
/// truncated difference. The compared register never changes.
pub(crate) fn execute_compare(state: &mut SymbolicState, register: Register, operand: u8) {
    match state.register(register) {
        Tri::Known(value) => {
            state.c = Tri::Known(value >= operand);
            state.set_nz(value.wrapping_sub(operand));
        }
        Tri::Unknown => state.set_nzc_unknown(),
    }
}

/// Sets Z from `A AND operand`, or unknown if A is unknown.
fn update_zero_from_mask(state: &mut SymbolicState, operand: u8) {
    state.z = state.a.map(|a| a & operand == 0);
}

/// Executes the BIT (Bit Test) instruction on a memory operand.
///
/// N and V are copied from bits 7 and 6 of the operand regardless of what is
/// known about A.
pub(crate) fn execute_bit(state: &mut SymbolicState, operand: u8) {
    state.n = Tri::Known(Flag::N.from_status(operand));
    state.v = Tri::Known(Flag::V.from_status(operand));
    update_zero_from_mask(state, operand);
}

/// Executes BIT with an immediate operand, which only affects Z.
pub(crate) fn execute_bit_immediate(state: &mut SymbolicState, operand: u8) {
    update_zero_from_mask(state, operand);
}

/// Executes TSB or TRB. Memory is not modeled, so only the Z probe remains.
pub(crate) fn execute_test_bits(state: &mut SymbolicState, operand: u8) {
    update_zero_from_mask(state, operand);
}
