//! Prelude module for convenient error handling imports.
//!
//! ```
//! use openracing_errors::prelude::*;
//!
//! fn check_load(load: f32) -> Result<f32> {
//!     validate!(
//!         load >= 0.0,
//!         ValidationError::out_of_range("load", load, Bound::AtLeast(0.0))
//!     );
//!     Ok(load)
//! }
//!
//! assert!(check_load(-5.0).is_err());
//! ```

pub use crate::{
    Result,
    bound::Bound,
    common::{ErrorCategory, OpenRacingError},
    precondition::Precondition,
    validation::{ErrorKind, ValidationError},
};
pub use crate::validate;

/// Return early with an error if a condition does not hold.
#[macro_export]
macro_rules! validate {
    ($condition:expr, $error:expr) => {
        if !$condition {
            return Err($error.into());
        }
    };
}
