//! Finite `f32` storage shared by every quantity.
//!
//! All float fields in this crate are stored as [`Finite`]. Because NaN can
//! never be stored, `Eq` and `Hash` are sound and each quantity derives its
//! structural equality from here.

use std::hash::{Hash, Hasher};

use openracing_errors::{Bound, Result, ValidationError};
use serde::Serialize;

/// An `f32` that is neither NaN nor infinite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Finite(f32);

impl Finite {
    /// Zero constant
    pub const ZERO: Finite = Finite(0.0);

    /// Validate that `value` is finite, naming `field` on failure.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] for NaN or ±infinity.
    pub fn new(field: &'static str, value: f32) -> Result<Self> {
        if !value.is_finite() {
            tracing::trace!(field, value, "rejected non-finite value");
            return Err(ValidationError::non_finite(field, value));
        }
        Ok(Finite(value))
    }

    /// Wrap a literal known to be finite (for constants)
    pub(crate) const fn from_raw(value: f32) -> Self {
        Finite(value)
    }

    /// Get the raw value
    pub const fn get(self) -> f32 {
        self.0
    }
}

impl Eq for Finite {}

impl Hash for Finite {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // +0.0 and -0.0 compare equal, so they must hash equal
        let canonical = if self.0 == 0.0 { 0.0_f32 } else { self.0 };
        canonical.to_bits().hash(state);
    }
}

impl From<Finite> for f32 {
    fn from(value: Finite) -> f32 {
        value.0
    }
}

/// Finite and satisfying `bound`.
pub(crate) fn bounded(field: &'static str, value: f32, bound: Bound) -> Result<Finite> {
    let finite = Finite::new(field, value)?;
    if !bound.contains(value) {
        tracing::trace!(field, value, %bound, "rejected out-of-range value");
        return Err(ValidationError::out_of_range(field, value, bound));
    }
    Ok(finite)
}

/// Finite and `>= 0`.
pub(crate) fn non_negative(field: &'static str, value: f32) -> Result<Finite> {
    bounded(field, value, Bound::AtLeast(0.0))
}

/// Finite and `> 0`.
pub(crate) fn positive(field: &'static str, value: f32) -> Result<Finite> {
    bounded(field, value, Bound::GreaterThan(0.0))
}
