//! Tests for the ADC (Add with Carry) instruction.
//!
//! Tests cover:
//! - Binary sums with and without carry-in
//! - Carry out, signed overflow, zero and negative results
//! - Unknown accumulator or carry forcing unknown outputs
//! - Decimal policy handling

use sym6502::{DecimalPolicy, EngineOptions, Flag, Register, TraceEngine, Tri};

const LDA_IMM: u8 = 0xA9;
const ADC_IMM: u8 = 0x69;
const ADC_ZP: u8 = 0x65;
const CLC: u8 = 0x18;
const SEC: u8 = 0x38;
const SED: u8 = 0xF8;
const CLD: u8 = 0xD8;

fn setup_engine() -> TraceEngine {
    TraceEngine::new()
}

fn a(engine: &TraceEngine) -> Tri<u8> {
    engine.state().register(Register::A)
}

fn flag(engine: &TraceEngine, f: Flag) -> Tri<bool> {
    engine.state().flag(f)
}

// ========== Basic ADC Operation Tests ==========

#[test]
fn test_adc_immediate_basic() {
    let mut engine = setup_engine();
    engine.dispatch(LDA_IMM, 0x10);
    engine.dispatch(CLC, 0);
    engine.dispatch(ADC_IMM, 0x05);

    assert_eq!(a(&engine), Tri::Known(0x15));
    assert_eq!(flag(&engine, Flag::C), Tri::Known(false));
    assert_eq!(flag(&engine, Flag::Z), Tri::Known(false));
    assert_eq!(flag(&engine, Flag::V), Tri::Known(false));
    assert_eq!(flag(&engine, Flag::N), Tri::Known(false));
}

#[test]
fn test_adc_with_carry_in() {
    let mut engine = setup_engine();
    engine.dispatch(LDA_IMM, 0x10);
    engine.dispatch(SEC, 0);
    engine.dispatch(ADC_ZP, 0x05);

    assert_eq!(a(&engine), Tri::Known(0x16));
}

// ========== Flag Tests ==========

#[test]
fn test_adc_signed_overflow() {
    let mut engine = setup_engine();
    engine.dispatch(LDA_IMM, 0x50);
    engine.dispatch(CLC, 0);
    engine.dispatch(ADC_IMM, 0x50);

    assert_eq!(a(&engine), Tri::Known(0xA0));
    assert_eq!(flag(&engine, Flag::C), Tri::Known(false));
    assert_eq!(flag(&engine, Flag::V), Tri::Known(true));
    assert_eq!(flag(&engine, Flag::N), Tri::Known(true));
    assert_eq!(flag(&engine, Flag::Z), Tri::Known(false));
}

#[test]
fn test_adc_carry_out_to_zero() {
    let mut engine = setup_engine();
    engine.dispatch(LDA_IMM, 0x01);
    engine.dispatch(CLC, 0);
    engine.dispatch(ADC_IMM, 0xFF);

    assert_eq!(a(&engine), Tri::Known(0x00));
    assert_eq!(flag(&engine, Flag::C), Tri::Known(true));
    assert_eq!(flag(&engine, Flag::Z), Tri::Known(true));
    assert_eq!(flag(&engine, Flag::V), Tri::Known(false));
}

#[test]
fn test_adc_negative_overflow() {
    let mut engine = setup_engine();
    engine.dispatch(LDA_IMM, 0x80);
    engine.dispatch(CLC, 0);
    engine.dispatch(ADC_IMM, 0xFF);

    assert_eq!(a(&engine), Tri::Known(0x7F));
    assert_eq!(flag(&engine, Flag::C), Tri::Known(true));
    assert_eq!(flag(&engine, Flag::V), Tri::Known(true));
    assert_eq!(flag(&engine, Flag::N), Tri::Known(false));
}

// ========== Unknown Input Tests ==========

#[test]
fn test_adc_unknown_carry() {
    let mut engine = setup_engine();
    engine.dispatch(LDA_IMM, 0x10);
    engine.dispatch(ADC_IMM, 0x01);

    assert_eq!(a(&engine), Tri::Unknown);
    for f in [Flag::N, Flag::V, Flag::Z, Flag::C] {
        assert_eq!(flag(&engine, f), Tri::Unknown, "{:?}", f);
    }
}

#[test]
fn test_adc_unknown_accumulator() {
    let mut engine = setup_engine();
    engine.dispatch(CLC, 0);
    engine.dispatch(ADC_IMM, 0x01);

    assert_eq!(a(&engine), Tri::Unknown);
    assert_eq!(flag(&engine, Flag::C), Tri::Unknown);
}

#[test]
fn test_adc_leaves_d_and_i_alone() {
    let mut engine = setup_engine();
    engine.dispatch(CLD, 0);
    engine.dispatch(ADC_IMM, 0x01);

    assert_eq!(flag(&engine, Flag::D), Tri::Known(false));
    assert_eq!(flag(&engine, Flag::I), Tri::Unknown);
}

// ========== Decimal Policy Tests ==========

#[test]
fn test_adc_binary_even_in_decimal_mode_by_default() {
    let mut engine = setup_engine();
    engine.dispatch(SED, 0);
    engine.dispatch(LDA_IMM, 0x09);
    engine.dispatch(CLC, 0);
    engine.dispatch(ADC_IMM, 0x01);

    assert_eq!(a(&engine), Tri::Known(0x0A));
}

#[test]
fn test_adc_unknown_when_decimal_policy() {
    let mut engine = TraceEngine::with_options(EngineOptions {
        decimal: DecimalPolicy::UnknownWhenDecimal,
        ..EngineOptions::default()
    });
    engine.dispatch(SED, 0);
    engine.dispatch(LDA_IMM, 0x09);
    engine.dispatch(CLC, 0);
    engine.dispatch(ADC_IMM, 0x01);
    assert_eq!(a(&engine), Tri::Unknown);

    engine.dispatch(CLD, 0);
    engine.dispatch(LDA_IMM, 0x09);
    engine.dispatch(CLC, 0);
    engine.dispatch(ADC_IMM, 0x01);
    assert_eq!(a(&engine), Tri::Known(0x0A));
}
