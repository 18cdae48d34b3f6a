//! # Trace Engine
//!
//! This module contains `TraceEngine`, which owns the symbolic state and
//! advances it one observed instruction at a time.
//!
//! ## Driving the Engine
//!
//! A trace decoder feeds instructions in execution order:
//! - `dispatch()`: run one opcode's semantics against its observed operand
//! - `interrupt()`: run the interrupt sequence for a hardware IRQ/NMI
//! - `render_state()`: read the state line and clear any pending fault
//!
//! Mismatches between the trace and the model never stop the engine. They
//! set a one-shot fault indicator that the next render reports.

use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::opcodes::{lookup, OperandKind, Operation};
use crate::options::EngineOptions;
use crate::render::StateSnapshot;
use crate::state::SymbolicState;
use crate::EngineError;

/// A value observed in the trace for one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// The byte read or written by the instruction.
    Data(u8),

    /// Whether a conditional branch was taken.
    Branch(bool),
}

/// Symbolic execution engine for one trace session.
///
/// # Examples
///
/// ```
/// use sym6502::TraceEngine;
///
/// let mut engine = TraceEngine::new();
///
/// engine.dispatch(0xA9, 0x42); // LDA #42
/// engine.dispatch(0x85, 0x42); // STA zp, wrote 42 as predicted
/// assert_eq!(
///     engine.render_state(),
///     "A=42 X=?? Y=?? SP=?? N=0 V=? D=? I=? Z=0 C=?"
/// );
///
/// engine.dispatch(0x85, 0x43); // STA zp, but the trace shows 43
/// assert!(engine.render_state().ends_with("prediction failed"));
/// assert!(!engine.render_state().ends_with("prediction failed"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraceEngine {
    state: SymbolicState,
    options: EngineOptions,
}

impl TraceEngine {
    /// Creates an engine with default options and nothing known.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given options and nothing known.
    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            state: SymbolicState::new(),
            options,
        }
    }

    /// Returns the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Returns a read-only view of the symbolic state.
    pub fn state(&self) -> &SymbolicState {
        &self.state
    }

    /// Forgets everything: every cell becomes unknown and any pending fault
    /// is dropped.
    pub fn reset(&mut self) {
        tracing::debug!("symbolic state reset");
        self.state = SymbolicState::new();
    }

    /// Applies one instruction's semantics.
    ///
    /// `operand` is the observed value for the instruction: the byte read,
    /// the byte written, or for conditional branches non-zero when the
    /// branch was taken. Opcodes without modeled semantics are ignored.
    pub fn dispatch(&mut self, opcode: u8, operand: u8) {
        let metadata = lookup(opcode);
        tracing::trace!(opcode, mnemonic = metadata.mnemonic, operand, "dispatch");

        let state = &mut self.state;
        let variant = self.options.variant;
        let policy = self.options.decimal;

        match metadata.operation {
            Operation::Load(register) => load_store::execute_load(state, register, operand),
            Operation::Store(register) => load_store::execute_store(state, register, operand),
            Operation::Push(register) => stack::execute_push(state, register, operand),
            Operation::Pull(register) => stack::execute_pull(state, register, operand),
            Operation::PushStatus => stack::execute_php(state, operand),
            Operation::PullStatus => stack::execute_plp(state, operand),

            Operation::Adc => alu::execute_adc(state, operand, policy),
            Operation::Sbc => alu::execute_sbc(state, operand, policy),
            Operation::And => alu::execute_and(state, operand),
            Operation::Ora => alu::execute_ora(state, operand),
            Operation::Eor => alu::execute_eor(state, operand),
            Operation::Compare(register) => alu::execute_compare(state, register, operand),
            Operation::Bit => alu::execute_bit(state, operand),
            Operation::BitImmediate => alu::execute_bit_immediate(state, operand),
            Operation::TestBits => alu::execute_test_bits(state, operand),

            Operation::ShiftLeft(target) => shifts::execute_asl(state, target, operand),
            Operation::ShiftRight(target) => shifts::execute_lsr(state, target, operand),
            Operation::RotateLeft(target) => shifts::execute_rol(state, target, operand),
            Operation::RotateRight(target) => shifts::execute_ror(state, target, operand),
            Operation::Increment(target) => inc_dec::execute_increment(state, target, operand),
            Operation::Decrement(target) => inc_dec::execute_decrement(state, target, operand),

            Operation::SetFlag(flag, value) => flags::execute_set_flag(state, flag, value),
            Operation::Transfer(source, destination) => {
                transfer::execute_transfer(state, source, destination)
            }
            Operation::Branch(flag, taken_when) => {
                branches::execute_branch(state, flag, taken_when, operand != 0)
            }

            Operation::Jsr => control::execute_jsr(state),
            Operation::Rts => control::execute_rts(state),
            Operation::Rti => control::execute_rti(state, operand),
            Operation::Brk => control::execute_brk(state, operand, variant),

            Operation::Unmodeled => {}
        }
    }

    /// Applies one instruction after checking that the observation matches
    /// the opcode's operand classification.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ObservationKind` if a branch outcome is given
    /// for a data opcode or a data byte for a conditional branch. The state
    /// is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use sym6502::{EngineError, Observation, TraceEngine};
    ///
    /// let mut engine = TraceEngine::new();
    /// engine.observe(0xF0, Observation::Branch(true)).unwrap(); // BEQ taken
    ///
    /// let err = engine.observe(0xF0, Observation::Data(0x01)).unwrap_err();
    /// assert!(matches!(err, EngineError::ObservationKind { opcode: 0xF0, .. }));
    /// ```
    pub fn observe(&mut self, opcode: u8, observation: Observation) -> Result<(), EngineError> {
        let metadata = lookup(opcode);
        let operand = match (metadata.operand_kind, observation) {
            (OperandKind::Branch, Observation::Branch(taken)) => taken as u8,
            (OperandKind::Read | OperandKind::Write, Observation::Data(byte)) => byte,
            (expected, _) => {
                return Err(EngineError::ObservationKind {
                    opcode,
                    mnemonic: metadata.mnemonic,
                    expected,
                })
            }
        };
        self.dispatch(opcode, operand);
        Ok(())
    }

    /// Runs the interrupt sequence for a hardware interrupt.
    ///
    /// `status` is the status byte observed being pushed.
    pub fn interrupt(&mut self, status: u8) {
        tracing::trace!(status, "interrupt");
        control::execute_interrupt(&mut self.state, status, self.options.variant);
    }

    /// Captures the state without clearing the fault indicator.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot::capture(&self.state)
    }

    /// Captures the state and clears the fault indicator.
    pub fn take_snapshot(&mut self) -> StateSnapshot {
        let snapshot = StateSnapshot::capture(&self.state);
        self.state.take_fault();
        snapshot
    }

    /// Renders the state line and clears the fault indicator.
    pub fn render_state(&mut self) -> String {
        self.take_snapshot().to_string()
    }
}
