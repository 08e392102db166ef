//! Preconditions of derived calculations.
//!
//! These are distinct from construction-time range checks: every input is
//! already a valid quantity, but the combination does not allow the
//! calculation to be performed.

/// An unmet precondition of a derived calculation.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Precondition {
    /// Percentage of max RPM requested without a maximum
    #[error("max_rpm must be set to calculate percentage of max")]
    MaxRpmNotSet,

    /// Yaw rate factor requested with a zero yaw rate
    #[error("yaw rate cannot be zero to calculate yaw rate factor")]
    YawRateZero,

    /// Yaw rate factor requested with a yaw rate under the minimum
    #[error(
        "yaw rate {yaw_rate} rad/s is below minimum of {minimum} rad/s to calculate yaw rate factor"
    )]
    YawRateBelowMinimum {
        /// Offending yaw rate in rad/s
        yaw_rate: f32,
        /// Minimum yaw rate magnitude in rad/s
        minimum: f32,
    },

    /// Yaw rate factor requested while stationary
    #[error("speed must be positive to calculate yaw rate factor, got {speed} m/s")]
    SpeedNotPositive {
        /// Offending speed in m/s
        speed: f32,
    },
}
