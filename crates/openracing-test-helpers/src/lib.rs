//! Shared test utilities for OpenRacing.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Float-aware assertion macros
//! - [`samples`] - Canonical edge-case inputs for validating constructors
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! openracing-test-helpers = { path = "crates/openracing-test-helpers" }
//! ```
//!
//! ```rust,ignore
//! use openracing_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]

pub mod assertions;
pub mod must;
pub mod prelude;
pub mod samples;

pub use must::*;
