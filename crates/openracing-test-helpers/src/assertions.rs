//! Float-aware assertion macros.
//!
//! Quantity conversions go through `f32` arithmetic, so exact equality is
//! rarely the right check.

/// Assert that two floating-point values are approximately equal.
///
/// ```rust
/// use openracing_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(1.0_f32, 1.0001, 0.001);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that two values agree to within a relative tolerance.
///
/// Useful for unit round trips where the absolute error grows with the
/// magnitude of the input.
///
/// ```rust
/// use openracing_test_helpers::assert_relative_eq;
///
/// assert_relative_eq!(1000.0_f32, 1000.01, 1e-4);
/// ```
#[macro_export]
macro_rules! assert_relative_eq {
    ($left:expr, $right:expr, $rel:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let rel = $rel;
        let diff = (left - right).abs();
        let scale = left.abs().max(right.abs()).max(1.0);
        if !(diff <= rel * scale) {
            panic!(
                "assertion failed: `(left ≈ right)` relative\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  allowed: `{:?}`",
                left,
                right,
                diff,
                rel * scale
            );
        }
    };
}

/// Assert that a string contains a substring.
///
/// ```rust
/// use openracing_test_helpers::assert_contains;
///
/// assert_contains!("radians value 9 is out of range", "radians");
/// ```
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr $(,)?) => {
        let haystack = $haystack;
        let needle = $needle;
        if !haystack.contains(needle) {
            panic!(
                "assertion failed: `haystack.contains(needle)`\n  haystack: `{:?}`,\n    needle: `{:?}`",
                haystack, needle
            );
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(5.0_f32, 5.000_001, 1e-5);
    }

    #[test]
    #[should_panic(expected = "left ≈ right")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(5.0_f32, 5.1, 1e-5);
    }

    #[test]
    #[should_panic(expected = "left ≈ right")]
    fn test_assert_approx_eq_rejects_nan() {
        assert_approx_eq!(f32::NAN, 0.0, 1.0);
    }

    #[test]
    fn test_assert_relative_eq_scales() {
        assert_relative_eq!(100_000.0_f32, 100_001.0, 1e-4);
    }

    #[test]
    fn test_assert_contains() {
        assert_contains!("meters_per_second must be finite", "finite");
    }
}
