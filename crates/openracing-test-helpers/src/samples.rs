//! Canonical edge-case inputs.
//!
//! Every float field in the quantity layer must reject these, so suites
//! iterate over them instead of repeating NaN/±inf cases per field.

/// Values every validating constructor must reject.
pub const NON_FINITE_F32: [f32; 3] = [f32::NAN, f32::INFINITY, f32::NEG_INFINITY];

/// Finite values at the edges of `f32` that must survive finiteness checks.
pub const EXTREME_FINITE_F32: [f32; 6] = [
    0.0,
    -0.0,
    f32::MIN_POSITIVE,
    f32::EPSILON,
    f32::MAX,
    f32::MIN,
];
