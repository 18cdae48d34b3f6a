//! # State Rendering
//!
//! Formats the symbolic state as a single fixed-layout line:
//!
//! ```text
//! A=42 X=?? Y=00 SP=FD N=0 V=? D=0 I=1 Z=1 C=? prediction failed
//! ```
//!
//! Known registers are two uppercase hex digits and known flags a single
//! digit. Unknown cells use `??` and `?`. The trailing annotation appears
//! only when a fault was pending at the time of the snapshot.

use std::fmt;

use crate::state::{Flag, Register, SymbolicState};
use crate::tristate::Tri;

/// Annotation appended to the state line when a fault is reported.
pub const FAULT_ANNOTATION: &str = "prediction failed";

/// A captured copy of the symbolic state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSnapshot {
    /// Accumulator.
    pub a: Tri<u8>,
    /// X index register.
    pub x: Tri<u8>,
    /// Y index register.
    pub y: Tri<u8>,
    /// Stack pointer.
    pub s: Tri<u8>,
    /// Negative flag.
    pub n: Tri<bool>,
    /// Overflow flag.
    pub v: Tri<bool>,
    /// Decimal flag.
    pub d: Tri<bool>,
    /// Interrupt disable flag.
    pub i: Tri<bool>,
    /// Zero flag.
    pub z: Tri<bool>,
    /// Carry flag.
    pub c: Tri<bool>,

    /// Whether a prediction mismatch was pending.
    pub fault: bool,
}

impl StateSnapshot {
    /// Captures `state` without touching its fault indicator.
    pub fn capture(state: &SymbolicState) -> Self {
        Self {
            a: state.register(Register::A),
            x: state.register(Register::X),
            y: state.register(Register::Y),
            s: state.register(Register::S),
            n: state.flag(Flag::N),
            v: state.flag(Flag::V),
            d: state.flag(Flag::D),
            i: state.flag(Flag::I),
            z: state.flag(Flag::Z),
            c: state.flag(Flag::C),
            fault: state.is_faulted(),
        }
    }
}

struct Hex(Tri<u8>);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Tri::Known(value) => write!(f, "{:02X}", value),
            Tri::Unknown => f.write_str("??"),
        }
    }
}

struct Bit(Tri<bool>);

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Tri::Known(value) => write!(f, "{}", value as u8),
            Tri::Unknown => f.write_str("?"),
        }
    }
}

impl fmt::Display for StateSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "A={} X={} Y={} SP={} N={} V={} D={} I={} Z={} C={}",
            Hex(self.a),
            Hex(self.x),
            Hex(self.y),
            Hex(self.s),
            Bit(self.n),
            Bit(self.v),
            Bit(self.d),
            Bit(self.i),
            Bit(self.z),
            Bit(self.c),
        )?;
        if self.fault {
            write!(f, " {}", FAULT_ANNOTATION)?;
        }
        Ok(())
    }
}
