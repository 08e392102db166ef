//! Validation error types for OpenRacing physical quantities
//!
//! Every value type in the FFB pipeline rejects malformed input at
//! construction. This crate holds the shared vocabulary for those rejections
//! so that the telemetry adapter, the force engine and the device stage all
//! agree on what went wrong.
//!
//! # Architecture
//!
//! - [`validation`]: the [`ValidationError`] raised by quantity constructors
//! - [`bound`]: the numeric bound a range violation refers to
//! - [`precondition`]: unmet preconditions of derived calculations
//! - [`common`]: the top-level [`OpenRacingError`] and error classification
//! - [`prelude`]: convenience re-exports and the `validate!` macro
//!
//! # RT Safety
//!
//! [`ValidationError`] is `Copy`, field names are `&'static str` and values are
//! stored as raw `f32`, so rejecting a sample on the RT path never allocates.
//!
//! # Example
//!
//! ```
//! use openracing_errors::prelude::*;
//!
//! fn check_speed(value: f32) -> Result<f32> {
//!     if !value.is_finite() {
//!         return Err(ValidationError::non_finite("meters_per_second", value));
//!     }
//!     validate!(
//!         value >= 0.0,
//!         ValidationError::out_of_range("meters_per_second", value, Bound::AtLeast(0.0))
//!     );
//!     Ok(value)
//! }
//!
//! assert!(check_speed(-1.0).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bound;
pub mod common;
pub mod precondition;
pub mod prelude;
pub mod validation;

pub use bound::Bound;
pub use common::{ErrorCategory, OpenRacingError};
pub use precondition::Precondition;
pub use validation::{ErrorKind, ValidationError};

/// A specialized `Result` type for quantity construction.
pub type Result<T> = std::result::Result<T, ValidationError>;
