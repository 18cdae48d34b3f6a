//! Tests for AND, ORA and EOR.

use sym6502::{Flag, Register, TraceEngine, Tri};

const LDA_IMM: u8 = 0xA9;
const AND_IMM: u8 = 0x29;
const ORA_ZP_X: u8 = 0x15;
const EOR_IND_X: u8 = 0x41;

fn setup_engine() -> TraceEngine {
    TraceEngine::new()
}

fn a(engine: &TraceEngine) -> Tri<u8> {
    engine.state().register(Register::A)
}

#[test]
fn test_and_masks_accumulator() {
    let mut engine = setup_engine();
    engine.dispatch(LDA_IMM, 0xF0);
    engine.dispatch(AND_IMM, 0x0F);

    assert_eq!(a(&engine), Tri::Known(0x00));
    assert_eq!(engine.state().flag(Flag::Z), Tri::Known(true));
}

#[test]
fn test_ora_sets_negative() {
    let mut engine = setup_engine();
    engine.dispatch(LDA_IMM, 0x01);
    engine.dispatch(ORA_ZP_X, 0x80);

    assert_eq!(a(&engine), Tri::Known(0x81));
    assert_eq!(engine.state().flag(Flag::N), Tri::Known(true));
    assert_eq!(engine.state().flag(Flag::Z), Tri::Known(false));
}

#[test]
fn test_eor_self_clears() {
    let mut engine = setup_engine();
    engine.dispatch(LDA_IMM, 0x5A);
    engine.dispatch(EOR_IND_X, 0x5A);

    assert_eq!(a(&engine), Tri::Known(0x00));
    assert_eq!(engine.state().flag(Flag::Z), Tri::Known(true));
}

#[test]
fn test_logic_on_unknown_accumulator() {
    for opcode in [AND_IMM, ORA_ZP_X, EOR_IND_X] {
        let mut engine = setup_engine();
        engine.dispatch(0xB0, 1); // BCS taken -> C=1
        engine.dispatch(opcode, 0x00);

        assert_eq!(a(&engine), Tri::Unknown);
        assert_eq!(engine.state().flag(Flag::N), Tri::Unknown);
        assert_eq!(engine.state().flag(Flag::Z), Tri::Unknown);
        assert_eq!(engine.state().flag(Flag::C), Tri::Known(true));
    }
}
