//! Tests for the conditional branch instructions.
//!
//! Branch outcomes either confirm a known flag or resolve an unknown one.

use sym6502::{Flag, Observation, TraceEngine, Tri};

const BPL: u8 = 0x10;
const BMI: u8 = 0x30;
const BVC: u8 = 0x50;
const BVS: u8 = 0x70;
const BCC: u8 = 0x90;
const BCS: u8 = 0xB0;
const BNE: u8 = 0xD0;
const BEQ: u8 = 0xF0;

fn setup_engine() -> TraceEngine {
    TraceEngine::new()
}

// ========== Resolution Tests ==========

#[test]
fn test_beq_taken_resolves_z_then_not_taken_faults() {
    let mut engine = setup_engine();
    engine.dispatch(BEQ, 1);

    assert_eq!(engine.state().flag(Flag::Z), Tri::Known(true));
    assert!(!engine.state().is_faulted());

    engine.dispatch(BEQ, 0);
    assert!(engine.state().is_faulted());
}

#[test]
fn test_every_branch_resolves_its_flag() {
    // (opcode, flag, flag value implied by "taken")
    let cases = [
        (BPL, Flag::N, false),
        (BMI, Flag::N, true),
        (BVC, Flag::V, false),
        (BVS, Flag::V, true),
        (BCC, Flag::C, false),
        (BCS, Flag::C, true),
        (BNE, Flag::Z, false),
        (BEQ, Flag::Z, true),
    ];

    for (opcode, flag, taken_value) in cases {
        let mut engine = setup_engine();
        engine.dispatch(opcode, 1);
        assert_eq!(engine.state().flag(flag), Tri::Known(taken_value), "0x{:02X} taken", opcode);

        let mut engine = setup_engine();
        engine.dispatch(opcode, 0);
        assert_eq!(engine.state().flag(flag), Tri::Known(!taken_value), "0x{:02X} not taken", opcode);
        assert!(!engine.state().is_faulted());
    }
}

// ========== Consistency Tests ==========

#[test]
fn test_bne_consistent_with_known_z() {
    let mut engine = setup_engine();
    engine.dispatch(0xA9, 0x01); // LDA #01 -> Z=0
    engine.dispatch(BNE, 1);
    assert!(!engine.state().is_faulted());

    engine.dispatch(BNE, 0);
    assert!(engine.state().is_faulted());
    assert_eq!(engine.state().flag(Flag::Z), Tri::Known(false));
}

#[test]
fn test_bcc_against_known_carry() {
    let mut engine = setup_engine();
    engine.dispatch(0x38, 0); // SEC
    engine.dispatch(BCC, 1);

    assert!(engine.state().is_faulted());
}

#[test]
fn test_branch_touches_only_its_flag() {
    let mut engine = setup_engine();
    engine.dispatch(BVS, 1);

    for flag in [Flag::N, Flag::D, Flag::I, Flag::Z, Flag::C] {
        assert_eq!(engine.state().flag(flag), Tri::Unknown);
    }
}

#[test]
fn test_observe_branch_outcome() {
    let mut engine = setup_engine();
    engine.observe(BMI, Observation::Branch(false)).unwrap();

    assert_eq!(engine.state().flag(Flag::N), Tri::Known(false));
}

#[test]
fn test_bra_is_unmodeled() {
    let mut engine = setup_engine();
    engine.dispatch(0x80, 1);

    assert_eq!(engine.state(), TraceEngine::new().state());
}
