//! Engine configuration.

/// Processor variant being traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CpuVariant {
    /// WDC/Rockwell 65C02: interrupts clear the decimal flag.
    #[default]
    Cmos65C02,

    /// NMOS 6502: interrupts leave the decimal flag as pushed.
    Nmos6502,
}

impl CpuVariant {
    /// Returns true if entering an interrupt handler clears D.
    pub fn clears_decimal_on_interrupt(self) -> bool {
        matches!(self, CpuVariant::Cmos65C02)
    }
}

/// How ADC and SBC treat the decimal flag.
///
/// Decimal arithmetic is not modeled under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecimalPolicy {
    /// Always compute binary results, whatever D says.
    #[default]
    AssumeBinary,

    /// Compute binary results only while D is known to be clear; otherwise
    /// the accumulator and N, V, Z, C become unknown.
    UnknownWhenDecimal,
}

/// Options controlling the engine.
///
/// # Examples
///
/// ```
/// use sym6502::{CpuVariant, EngineOptions, TraceEngine};
///
/// let engine = TraceEngine::with_options(EngineOptions {
///     variant: CpuVariant::Nmos6502,
///     ..EngineOptions::default()
/// });
/// assert_eq!(engine.options().variant, CpuVariant::Nmos6502);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineOptions {
    /// Processor variant being traced.
    pub variant: CpuVariant,

    /// ADC/SBC handling of the decimal flag.
    pub decimal: DecimalPolicy,
}
