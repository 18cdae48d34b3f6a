//! Kani bounded model checking proofs for the symbolic engine.
//!
//! These proofs check engine invariants for every possible operand rather
//! than a sampled subset.
//!
//! To run these proofs, install Kani and run:
//! ```
//! cargo kani --tests
//! ```
//!
//! They will be ignored when running regular tests.

// Allow the `kani` cfg which is set by the Kani verifier
#![allow(unexpected_cfgs)]

#[cfg(kani)]
mod kani_proofs {
    use sym6502::{Flag, Register, TraceEngine, Tri, OPCODE_TABLE};

    // ========== Status Byte Proofs ==========

    /// Proof: PLP followed by PHP of the same byte never faults
    #[kani::proof]
    fn proof_bulk_set_then_check_is_consistent() {
        let status: u8 = kani::any();
        let mut engine = TraceEngine::new();

        engine.dispatch(0x28, status);
        engine.dispatch(0x08, status);

        kani::assert(!engine.state().is_faulted(), "PHP of pulled status must not fault");
    }

    /// Proof: every flag read after PLP equals its status bit
    #[kani::proof]
    fn proof_plp_flag_bits() {
        let status: u8 = kani::any();
        let mut engine = TraceEngine::new();
        engine.dispatch(0x28, status);

        for flag in Flag::ALL {
            kani::assert(
                engine.state().flag(flag) == Tri::Known(status & flag.mask() != 0),
                "flag must match its status bit",
            );
        }
    }

    // ========== Compare Proofs ==========

    /// Proof: CMP leaves A untouched and sets C iff A >= operand
    #[kani::proof]
    fn proof_compare_carry() {
        let a: u8 = kani::any();
        let m: u8 = kani::any();
        let mut engine = TraceEngine::new();
        engine.dispatch(0xA9, a);
        engine.dispatch(0xC9, m);

        kani::assert(
            engine.state().register(Register::A) == Tri::Known(a),
            "CMP must not change A",
        );
        kani::assert(
            engine.state().flag(Flag::C) == Tri::Known(a >= m),
            "C must be set iff A >= M",
        );
    }

    // ========== Branch Proofs ==========

    /// Proof: a branch outcome consistent with a known flag never faults
    #[kani::proof]
    fn proof_consistent_branch_never_faults() {
        let value: u8 = kani::any();
        let mut engine = TraceEngine::new();
        engine.dispatch(0xA9, value); // LDA, Z known
        engine.dispatch(0xF0, (value == 0) as u8); // BEQ

        kani::assert(!engine.state().is_faulted(), "consistent BEQ must not fault");
    }

    // ========== Table Proofs ==========

    /// Proof: every opcode's size is between one and three bytes
    #[kani::proof]
    fn proof_opcode_sizes() {
        let opcode: u8 = kani::any();
        let size = OPCODE_TABLE[opcode as usize].size_bytes;

        kani::assert(size >= 1 && size <= 3, "instruction size must be 1..=3");
    }

    /// Proof: no single instruction makes S known on a fresh engine
    #[kani::proof]
    fn proof_stack_pointer_needs_a_source() {
        let opcode: u8 = kani::any();
        let operand: u8 = kani::any();
        let mut engine = TraceEngine::new();
        engine.dispatch(opcode, operand);

        kani::assert(
            engine.state().register(Register::S) == Tri::Unknown,
            "S cannot become known from a single instruction on a fresh engine",
        );
    }
}
