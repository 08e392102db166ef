//! Unwrap helpers with good error messages.
//!
//! These replace `unwrap()`, `expect()` and `unwrap_err()` in test code. The
//! `#[track_caller]` attribute makes the panic point at the test line.

use std::fmt::Debug;

/// Unwrap a `Result`, panicking with the error value on `Err`.
///
/// ```rust
/// use openracing_test_helpers::must;
///
/// let result: Result<f32, &str> = Ok(4.0);
/// assert_eq!(must(result), 4.0);
/// ```
///
/// # Panics
///
/// Panics if the result is `Err`.
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

/// Unwrap the error of a `Result` that is expected to fail.
///
/// Rejection tests are the bulk of a validating type's suite; this keeps
/// them to one line while still printing the unexpected value on success.
///
/// ```rust
/// use openracing_test_helpers::must_err;
///
/// let result: Result<f32, &str> = Err("negative");
/// assert_eq!(must_err(result), "negative");
/// ```
///
/// # Panics
///
/// Panics if the result is `Ok`.
#[track_caller]
pub fn must_err<T: Debug, E>(result: Result<T, E>) -> E {
    match result {
        Ok(v) => panic!("must_err: expected Err, got Ok({v:?})"),
        Err(e) => e,
    }
}

/// Unwrap an `Option`, panicking with a custom message if `None`.
///
/// # Panics
///
/// Panics if the option is `None`.
#[track_caller]
pub fn must_some<T>(option: Option<T>, msg: &str) -> T {
    match option {
        Some(v) => v,
        None => panic!("must_some: {msg}"),
    }
}

/// Unwrap a `Result` with a context message.
///
/// # Panics
///
/// Panics if the result is `Err`, with the context and error value.
#[track_caller]
pub fn must_with<T, E: Debug>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must_with: {context}: {e:?}"),
    }
}
