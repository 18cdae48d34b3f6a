//! Tests for CMP, CPX and CPY.
//!
//! Compares update N, Z, C and never change the compared register.

use sym6502::{Flag, Register, TraceEngine, Tri};

const LDA_IMM: u8 = 0xA9;
const LDX_IMM: u8 = 0xA2;
const LDY_IMM: u8 = 0xA0;
const CMP_IMM: u8 = 0xC9;
const CMP_ZP_IND: u8 = 0xD2;
const CPX_IMM: u8 = 0xE0;
const CPY_ABS: u8 = 0xCC;

fn setup_engine() -> TraceEngine {
    TraceEngine::new()
}

fn flags(engine: &TraceEngine) -> (Tri<bool>, Tri<bool>, Tri<bool>) {
    let state = engine.state();
    (state.flag(Flag::N), state.flag(Flag::Z), state.flag(Flag::C))
}

// ========== CMP Tests ==========

#[test]
fn test_cmp_equal() {
    let mut engine = setup_engine();
    engine.dispatch(LDA_IMM, 0x42);
    engine.dispatch(CMP_IMM, 0x42);

    assert_eq!(
        flags(&engine),
        (Tri::Known(false), Tri::Known(true), Tri::Known(true))
    );
    assert_eq!(engine.state().register(Register::A), Tri::Known(0x42));
}

#[test]
fn test_cmp_greater() {
    let mut engine = setup_engine();
    engine.dispatch(LDA_IMM, 0x50);
    engine.dispatch(CMP_ZP_IND, 0x30);

    assert_eq!(
        flags(&engine),
        (Tri::Known(false), Tri::Known(false), Tri::Known(true))
    );
}

#[test]
fn test_cmp_less() {
    let mut engine = setup_engine();
    engine.dispatch(LDA_IMM, 0x30);
    engine.dispatch(CMP_IMM, 0x50);

    // 0x30 - 0x50 = 0xE0
    assert_eq!(
        flags(&engine),
        (Tri::Known(true), Tri::Known(false), Tri::Known(false))
    );
}

#[test]
fn test_cmp_unknown_accumulator() {
    let mut engine = setup_engine();
    engine.dispatch(0x38, 0); // SEC
    engine.dispatch(CMP_IMM, 0x10);

    assert_eq!(flags(&engine), (Tri::Unknown, Tri::Unknown, Tri::Unknown));
    assert_eq!(engine.state().register(Register::A), Tri::Unknown);
}

// ========== CPX / CPY Tests ==========

#[test]
fn test_cpx_and_cpy() {
    let mut engine = setup_engine();
    engine.dispatch(LDX_IMM, 0x05);
    engine.dispatch(CPX_IMM, 0x05);
    assert_eq!(engine.state().flag(Flag::Z), Tri::Known(true));

    engine.dispatch(LDY_IMM, 0x00);
    engine.dispatch(CPY_ABS, 0x01);
    assert_eq!(
        flags(&engine),
        (Tri::Known(true), Tri::Known(false), Tri::Known(false))
    );
    assert_eq!(engine.state().register(Register::X), Tri::Known(0x05));
    assert_eq!(engine.state().register(Register::Y), Tri::Known(0x00));
}

#[test]
fn test_compare_never_changes_register_knowledge() {
    for operand in [0x00, 0x7F, 0x80, 0xFF] {
        let mut engine = setup_engine();
        engine.dispatch(CPX_IMM, operand);
        assert_eq!(engine.state().register(Register::X), Tri::Unknown);

        engine.dispatch(LDX_IMM, 0x80);
        engine.dispatch(CPX_IMM, operand);
        assert_eq!(engine.state().register(Register::X), Tri::Known(0x80));
    }
}
