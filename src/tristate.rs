//! # Tri-State Values
//!
//! Every register and flag in the symbolic model is either known to hold a
//! specific value or unknown. `Tri<T>` makes that explicit so arithmetic can
//! never accidentally run on a placeholder.

/// A value that is either known or unknown.
///
/// `Unknown` carries no information and therefore can never contradict an
/// observation. Operations that combine an `Unknown` input produce `Unknown`
/// unless a rule explicitly resolves them.
///
/// # Examples
///
/// ```
/// use sym6502::Tri;
///
/// let a: Tri<u8> = Tri::Known(0x42);
/// assert_eq!(a.known(), Some(0x42));
/// assert!(Tri::<u8>::Unknown.is_unknown());
/// assert_eq!(a.map(|v| v & 0x0F), Tri::Known(0x02));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tri<T> {
    /// The value is known exactly.
    Known(T),

    /// Nothing is known about the value.
    #[default]
    Unknown,
}

impl<T: Copy> Tri<T> {
    /// Returns the value if known.
    pub fn known(self) -> Option<T> {
        match self {
            Tri::Known(value) => Some(value),
            Tri::Unknown => None,
        }
    }

    /// Returns true if the value is known.
    pub fn is_known(self) -> bool {
        matches!(self, Tri::Known(_))
    }

    /// Returns true if the value is unknown.
    pub fn is_unknown(self) -> bool {
        matches!(self, Tri::Unknown)
    }

    /// Applies `f` to a known value; unknown stays unknown.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Tri<U> {
        match self {
            Tri::Known(value) => Tri::Known(f(value)),
            Tri::Unknown => Tri::Unknown,
        }
    }
}

impl<T> From<Option<T>> for Tri<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Tri::Known(v),
            None => Tri::Unknown,
        }
    }
}

impl<T> From<Tri<T>> for Option<T> {
    fn from(value: Tri<T>) -> Self {
        match value {
            Tri::Known(v) => Some(v),
            Tri::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Tri::<u8>::default(), Tri::Unknown);
        assert_eq!(Tri::<bool>::default(), Tri::Unknown);
    }

    #[test]
    fn test_map_preserves_unknown() {
        let unknown: Tri<u8> = Tri::Unknown;
        assert_eq!(unknown.map(|v| v.wrapping_add(1)), Tri::Unknown);
        assert_eq!(Tri::Known(0xFFu8).map(|v| v.wrapping_add(1)), Tri::Known(0x00));
    }

    #[test]
    fn test_known_predicates() {
        assert!(Tri::Known(false).is_known());
        assert!(!Tri::Known(0u8).is_unknown());
        assert!(!Tri::<u8>::Unknown.is_known());
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Tri::from(Some(true)), Tri::Known(true));
        assert_eq!(Tri::<bool>::from(None), Tri::Unknown);
        assert_eq!(Option::from(Tri::Known(7u8)), Some(7u8));
    }
}
