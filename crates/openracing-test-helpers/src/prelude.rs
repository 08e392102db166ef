//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use openracing_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_err, must_some, must_with};
pub use crate::samples::{EXTREME_FINITE_F32, NON_FINITE_F32};
pub use crate::{assert_approx_eq, assert_contains, assert_relative_eq};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
