//! Fuzz target for trace replay.
//!
//! This target drives the engine with arbitrary instruction, interrupt and
//! render sequences to find panics and broken state-line invariants.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sym6502::{CpuVariant, DecimalPolicy, EngineOptions, TraceEngine, FAULT_ANNOTATION};

/// One trace event
#[derive(Debug, Arbitrary)]
enum FuzzEvent {
    /// An executed instruction and its observed operand
    Instruction { opcode: u8, operand: u8 },
    /// A hardware interrupt with the pushed status byte
    Interrupt { status: u8 },
    /// A state-line render
    Render,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    nmos: bool,
    decimal_unknown: bool,
    events: Vec<FuzzEvent>,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to keep iterations fast
    if input.events.len() > 4096 {
        return;
    }

    let mut engine = TraceEngine::with_options(EngineOptions {
        variant: if input.nmos {
            CpuVariant::Nmos6502
        } else {
            CpuVariant::Cmos65C02
        },
        decimal: if input.decimal_unknown {
            DecimalPolicy::UnknownWhenDecimal
        } else {
            DecimalPolicy::AssumeBinary
        },
    });

    for event in input.events {
        match event {
            FuzzEvent::Instruction { opcode, operand } => engine.dispatch(opcode, operand),
            FuzzEvent::Interrupt { status } => engine.interrupt(status),
            FuzzEvent::Render => {
                let faulted = engine.state().is_faulted();
                let line = engine.render_state();

                // Fixed layout, annotation only when a fault was pending
                assert_eq!(line.split(' ').take(10).count(), 10);
                assert_eq!(line.ends_with(FAULT_ANNOTATION), faulted);
                assert!(!engine.state().is_faulted());
            }
        }
    }
});
