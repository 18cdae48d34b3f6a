//! # Shift and Rotate Instructions
//!
//! This module implements ASL, LSR, ROL and ROR in both forms:
//! - **Register form** (ASL A, ...): operates on the modeled accumulator
//! - **Memory form**: memory is not modeled, so flags are computed from the
//!   observed input byte and the shifted value is discarded

use crate::opcodes::Target;
use crate::state::SymbolicState;
use crate::tristate::Tri;

/// Result of one shift step: the new 8-bit value and the bit shifted out.
struct Shifted {
    value: u8,
    carry: bool,
}

fn shift_left(input: u8, carry_in: bool) -> Shifted {
    Shifted {
        value: (input << 1) | carry_in as u8,
        carry: input & 0x80 != 0,
    }
}

fn shift_right(input: u8, carry_in: bool) -> Shifted {
    Shifted {
        value: (input >> 1) | ((carry_in as u8) << 7),
        carry: input & 0x01 != 0,
    }
}

/// Applies a shift whose carry-in is a constant (ASL, LSR).
fn shift(state: &mut SymbolicState, target: Target, operand: u8, f: fn(u8, bool) -> Shifted) {
    let input = match target {
        Target::Register(register) => state.register(register),
        Target::Memory => Tri::Known(operand),
    };

    match input {
        Tri::Known(value) => {
            let shifted = f(value, false);
            state.c = Tri::Known(shifted.carry);
            state.set_nz(shifted.value);
            if let Target::Register(register) = target {
                state.set_register(register, Tri::Known(shifted.value));
            }
        }
        Tri::Unknown => state.set_nzc_unknown(),
    }
}

/// Applies a rotate, which also needs a known carry-in (ROL, ROR).
fn rotate(state: &mut SymbolicState, target: Target, operand: u8, f: fn(u8, bool) -> Shifted) {
    let input = match target {
        Target::Register(register) => state.register(register),
        Target::Memory => Tri::Known(operand),
    };

    match (input, state.c) {
        (Tri::Known(value), Tri::Known(carry)) => {
            let shifted = f(value, carry);
            state.c = Tri::Known(shifted.carry);
            state.set_nz(shifted.value);
            if let Target::Register(register) = target {
                state.set_register(register, Tri::Known(shifted.value));
            }
        }
        _ => {
            if let Target::Register(register) = target {
                state.set_register_unknown(register);
            }
            state.set_nzc_unknown();
        }
    }
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 moves into C, bit 0 becomes 0. N and Z follow the result.
pub(crate) fn execute_asl(state: &mut SymbolicState, target: Target, operand: u8) {
    shift(state, target, operand, shift_left);
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 moves into C, bit 7 becomes 0.
pub(crate) fn execute_lsr(state: &mut SymbolicState, target: Target, operand: u8) {
    shift(state, target, operand, shift_right);
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0 and bit 7 becomes the new carry. With an
/// unknown carry the result cannot be known.
pub(crate) fn execute_rol(state: &mut SymbolicState, target: Target, operand: u8) {
    rotate(state, target, operand, shift_left);
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror(state: &mut SymbolicState, target: Target, operand: u8) {
    rotate(state, target, operand, shift_right);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Register;

    const ACC: Target = Target::Register(Register::A);

    #[test]
    fn test_asl_accumulator_known() {
        let mut state = SymbolicState::new();
        state.a = Tri::Known(0x81);
        execute_asl(&mut state, ACC, 0);

        assert_eq!(state.a, Tri::Known(0x02));
        assert_eq!(state.c, Tri::Known(true));
        assert_eq!(state.n, Tri::Known(false));
        assert_eq!(state.z, Tri::Known(false));
    }

    #[test]
    fn test_lsr_memory_leaves_accumulator() {
        let mut state = SymbolicState::new();
        execute_lsr(&mut state, Target::Memory, 0x01);

        assert_eq!(state.a, Tri::Unknown);
        assert_eq!(state.c, Tri::Known(true));
        assert_eq!(state.z, Tri::Known(true));
        assert_eq!(state.n, Tri::Known(false));
    }

    #[test]
    fn test_ror_accumulator_carry_in() {
        let mut state = SymbolicState::new();
        state.a = Tri::Known(0x02);
        state.c = Tri::Known(true);
        execute_ror(&mut state, ACC, 0);

        assert_eq!(state.a, Tri::Known(0x81));
        assert_eq!(state.c, Tri::Known(false));
        assert_eq!(state.n, Tri::Known(true));
    }

    #[test]
    fn test_rol_unknown_carry_forgets_accumulator() {
        let mut state = SymbolicState::new();
        state.a = Tri::Known(0x40);
        execute_rol(&mut state, ACC, 0);

        assert_eq!(state.a, Tri::Unknown);
        assert_eq!(state.c, Tri::Unknown);
        assert_eq!(state.n, Tri::Unknown);
        assert_eq!(state.z, Tri::Unknown);
    }
}
