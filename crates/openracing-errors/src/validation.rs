//! Validation errors raised by quantity constructors.
//!
//! Every constructor in the quantity layer fails with exactly one of these
//! variants, naming the offending field. No variant owns heap data.

use core::fmt;

use crate::bound::Bound;
use crate::precondition::Precondition;

/// Validation error types.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Value is NaN or infinite
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Field name
        field: &'static str,
        /// The rejected value
        value: f32,
    },

    /// Finite value outside its domain
    #[error("{field} value {value} is out of range: expected {bound}")]
    OutOfRange {
        /// Field name
        field: &'static str,
        /// The rejected value
        value: f32,
        /// The violated bound
        bound: Bound,
    },

    /// Sequence with the wrong number of samples
    #[error("{field} must contain exactly {expected} samples, got {actual}")]
    WrongLength {
        /// Field name
        field: &'static str,
        /// Required length
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// Value is required but missing
    #[error("Required field '{0}' is missing")]
    Required(&'static str),

    /// Derived calculation precondition not met
    #[error("Precondition not met: {0}")]
    Precondition(#[from] Precondition),
}

/// Classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorKind {
    /// A float field was NaN or infinite
    NonFinite = 0,
    /// A finite value fell outside its declared domain
    Range = 1,
    /// A required sequence was absent or had the wrong length
    Structural = 2,
    /// A derived calculation could not be performed
    MissingPrecondition = 3,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NonFinite => write!(f, "non-finite"),
            ErrorKind::Range => write!(f, "range"),
            ErrorKind::Structural => write!(f, "structural"),
            ErrorKind::MissingPrecondition => write!(f, "precondition"),
        }
    }
}

impl ValidationError {
    /// Create a non-finite value error.
    pub fn non_finite(field: &'static str, value: f32) -> Self {
        ValidationError::NonFinite { field, value }
    }

    /// Create an out of range error.
    pub fn out_of_range(field: &'static str, value: f32, bound: Bound) -> Self {
        ValidationError::OutOfRange {
            field,
            value,
            bound,
        }
    }

    /// Create a wrong length error.
    pub fn wrong_length(field: &'static str, expected: usize, actual: usize) -> Self {
        ValidationError::WrongLength {
            field,
            expected,
            actual,
        }
    }

    /// Create a required field error.
    pub fn required(field: &'static str) -> Self {
        ValidationError::Required(field)
    }

    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::NonFinite { .. } => ErrorKind::NonFinite,
            ValidationError::OutOfRange { .. } => ErrorKind::Range,
            ValidationError::WrongLength { .. } | ValidationError::Required(_) => {
                ErrorKind::Structural
            }
            ValidationError::Precondition(_) => ErrorKind::MissingPrecondition,
        }
    }

    /// Name of the offending field, if the error refers to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::NonFinite { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::WrongLength { field, .. }
            | ValidationError::Required(field) => Some(field),
            ValidationError::Precondition(_) => None,
        }
    }
}
