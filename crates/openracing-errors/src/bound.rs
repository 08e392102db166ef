//! Numeric bounds referenced by range violations.

use core::fmt;

/// The bound a finite value violated.
///
/// Bounds are inclusive unless the variant name says otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Value must be `>= min`
    AtLeast(f32),
    /// Value must be `> min`
    GreaterThan(f32),
    /// Value must be `<= max`
    AtMost(f32),
    /// Value must lie within `[-max, max]`
    Symmetric(f32),
}

impl Bound {
    /// Returns `true` if `value` satisfies this bound.
    ///
    /// NaN never satisfies a bound.
    pub fn contains(self, value: f32) -> bool {
        match self {
            Bound::AtLeast(min) => value >= min,
            Bound::GreaterThan(min) => value > min,
            Bound::AtMost(max) => value <= max,
            Bound::Symmetric(max) => value.abs() <= max,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::AtLeast(min) => write!(f, ">= {min}"),
            Bound::GreaterThan(min) => write!(f, "> {min}"),
            Bound::AtMost(max) => write!(f, "<= {max}"),
            Bound::Symmetric(max) => write!(f, "within [-{max}, {max}]"),
        }
    }
}
