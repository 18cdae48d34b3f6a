//! # Symbolic Register/Flag Store
//!
//! This module holds the engine's model of the processor:
//! - **Registers**: A, X, Y and the stack pointer S, each a `Tri<u8>`
//! - **Status flags**: N, V, D, I, Z, C, each a `Tri<bool>`
//! - **Fault indicator**: a one-shot flag raised when an observed value
//!   contradicts a known prediction
//!
//! Reads are public. Mutation is crate-private so that every change flows
//! through a semantic handler, the interrupt sequencer or the renderer.

use crate::tristate::Tri;

/// The four 8-bit registers tracked by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Accumulator
    A,
    /// X index register
    X,
    /// Y index register
    Y,
    /// Stack pointer
    S,
}

impl Register {
    /// All registers in render order.
    pub const ALL: [Register; 4] = [Register::A, Register::X, Register::Y, Register::S];

    /// Register name as it appears in the state line.
    pub fn name(self) -> &'static str {
        match self {
            Register::A => "A",
            Register::X => "X",
            Register::Y => "Y",
            Register::S => "SP",
        }
    }
}

/// The six status flags tracked by the model.
///
/// B and the unused bit 5 are not modeled; they exist only in pushed copies
/// of the status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Negative
    N,
    /// Overflow
    V,
    /// Decimal mode
    D,
    /// Interrupt disable
    I,
    /// Zero
    Z,
    /// Carry
    C,
}

impl Flag {
    /// All flags in render order.
    pub const ALL: [Flag; 6] = [Flag::N, Flag::V, Flag::D, Flag::I, Flag::Z, Flag::C];

    /// Bit position of this flag in the status byte (NV-BDIZC).
    pub fn bit(self) -> u8 {
        match self {
            Flag::N => 7,
            Flag::V => 6,
            Flag::D => 3,
            Flag::I => 2,
            Flag::Z => 1,
            Flag::C => 0,
        }
    }

    /// Single-bit mask for this flag.
    pub fn mask(self) -> u8 {
        1 << self.bit()
    }

    /// Flag name as it appears in the state line.
    pub fn name(self) -> &'static str {
        match self {
            Flag::N => "N",
            Flag::V => "V",
            Flag::D => "D",
            Flag::I => "I",
            Flag::Z => "Z",
            Flag::C => "C",
        }
    }

    /// Extracts this flag from a status byte.
    pub fn from_status(self, status: u8) -> bool {
        status & self.mask() != 0
    }
}

/// A status byte together with a mask of which bits are known.
///
/// Unknown flags are kept distinct from zero: their bit in `bits` is always
/// clear and their bit in `known` is clear too.
///
/// # Examples
///
/// ```
/// use sym6502::{Flag, PackedFlags, Tri};
///
/// let packed = PackedFlags { bits: 0b1000_0001, known: 0b1000_0011 };
/// assert_eq!(packed.flag(Flag::N), Tri::Known(true));
/// assert_eq!(packed.flag(Flag::Z), Tri::Known(false));
/// assert_eq!(packed.flag(Flag::V), Tri::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackedFlags {
    /// Flag values; only meaningful where `known` has a 1.
    pub bits: u8,

    /// Which flag bits are known.
    pub known: u8,
}

impl PackedFlags {
    /// Returns the tri-state value of one flag.
    pub fn flag(&self, flag: Flag) -> Tri<bool> {
        if self.known & flag.mask() == 0 {
            Tri::Unknown
        } else {
            Tri::Known(self.bits & flag.mask() != 0)
        }
    }

    /// Returns the status byte if every modeled flag is known.
    pub fn status(&self) -> Option<u8> {
        let all = Flag::ALL.iter().fold(0u8, |m, f| m | f.mask());
        (self.known & all == all).then_some(self.bits)
    }
}

/// Symbolic processor state.
///
/// A freshly created state knows nothing: every register and flag is
/// `Unknown` and no fault is pending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolicState {
    pub(crate) a: Tri<u8>,
    pub(crate) x: Tri<u8>,
    pub(crate) y: Tri<u8>,
    pub(crate) s: Tri<u8>,

    pub(crate) n: Tri<bool>,
    pub(crate) v: Tri<bool>,
    pub(crate) d: Tri<bool>,
    pub(crate) i: Tri<bool>,
    pub(crate) z: Tri<bool>,
    pub(crate) c: Tri<bool>,

    /// Set when an observation contradicted a known prediction.
    pub(crate) fault: bool,
}

impl SymbolicState {
    /// Creates a state with every cell unknown.
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Reads ==========

    /// Returns the value of a register.
    pub fn register(&self, register: Register) -> Tri<u8> {
        match register {
            Register::A => self.a,
            Register::X => self.x,
            Register::Y => self.y,
            Register::S => self.s,
        }
    }

    /// Returns the value of a status flag.
    pub fn flag(&self, flag: Flag) -> Tri<bool> {
        match flag {
            Flag::N => self.n,
            Flag::V => self.v,
            Flag::D => self.d,
            Flag::I => self.i,
            Flag::Z => self.z,
            Flag::C => self.c,
        }
    }

    /// Returns true if a fault is pending.
    pub fn is_faulted(&self) -> bool {
        self.fault
    }

    /// Packs the six flags into a status byte plus a known-mask.
    pub fn pack_flags(&self) -> PackedFlags {
        Flag::ALL
            .iter()
            .fold(PackedFlags::default(), |mut packed, &flag| {
                let value = self.flag(flag);
                if value.is_known() {
                    packed.known |= flag.mask();
                }
                if value == Tri::Known(true) {
                    packed.bits |= flag.mask();
                }
                packed
            })
    }

    // ========== Writes ==========

    pub(crate) fn set_register(&mut self, register: Register, value: Tri<u8>) {
        match register {
            Register::A => self.a = value,
            Register::X => self.x = value,
            Register::Y => self.y = value,
            Register::S => self.s = value,
        }
    }

    pub(crate) fn set_flag(&mut self, flag: Flag, value: Tri<bool>) {
        match flag {
            Flag::N => self.n = value,
            Flag::V => self.v = value,
            Flag::D => self.d = value,
            Flag::I => self.i = value,
            Flag::Z => self.z = value,
            Flag::C => self.c = value,
        }
    }

    pub(crate) fn set_register_unknown(&mut self, register: Register) {
        self.set_register(register, Tri::Unknown);
    }

    pub(crate) fn set_flag_unknown(&mut self, flag: Flag) {
        self.set_flag(flag, Tri::Unknown);
    }

    /// Sets N and Z from an 8-bit result.
    pub(crate) fn set_nz(&mut self, value: u8) {
        self.n = Tri::Known(value & 0x80 != 0);
        self.z = Tri::Known(value == 0);
    }

    pub(crate) fn set_nz_unknown(&mut self) {
        self.set_flag_unknown(Flag::N);
        self.set_flag_unknown(Flag::Z);
    }

    pub(crate) fn set_nzc_unknown(&mut self) {
        self.set_nz_unknown();
        self.set_flag_unknown(Flag::C);
    }

    pub(crate) fn set_nvzc_unknown(&mut self) {
        self.set_nzc_unknown();
        self.set_flag_unknown(Flag::V);
    }

    /// Moves the stack pointer by `delta` if it is known.
    pub(crate) fn adjust_stack(&mut self, delta: i8) {
        self.s = self.s.map(|sp| sp.wrapping_add_signed(delta));
    }

    /// Assigns all six flags from a status byte.
    pub(crate) fn bulk_set_flags(&mut self, status: u8) {
        for flag in Flag::ALL {
            self.set_flag(flag, Tri::Known(flag.from_status(status)));
        }
    }

    /// Raises the fault indicator if any known flag disagrees with `status`.
    ///
    /// Unknown flags never fault.
    pub(crate) fn check_flags_consistent(&mut self, status: u8) {
        for flag in Flag::ALL {
            if let Tri::Known(predicted) = self.flag(flag) {
                let observed = flag.from_status(status);
                if predicted != observed {
                    self.raise_fault(flag.name(), predicted as u8, observed as u8);
                }
            }
        }
    }

    /// Raises the fault indicator if `register` is known and differs from
    /// `observed`.
    pub(crate) fn check_register(&mut self, register: Register, observed: u8) {
        if let Tri::Known(predicted) = self.register(register) {
            if predicted != observed {
                self.raise_fault(register.name(), predicted, observed);
            }
        }
    }

    pub(crate) fn raise_fault(&mut self, cell: &'static str, predicted: u8, observed: u8) {
        tracing::debug!(cell, predicted, observed, "prediction mismatch");
        self.fault = true;
    }

    /// Returns the pending fault and clears it.
    pub(crate) fn take_fault(&mut self) -> bool {
        std::mem::take(&mut self.fault)
    }
}
