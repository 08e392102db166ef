//! Yaw-rate factor for understeer detection.
//!
//! The factor relates commanded steering (angle × speed) to the yaw the car
//! actually produces. A factor that grows while the wheel is held steady
//! means the front axle is washing out.

use std::f32::consts::PI;
use std::fmt;

use openracing_errors::{Precondition, Result};
use serde::Serialize;

use crate::angle::SteeringWheelAngle;
use crate::finite::Finite;
use crate::scalar::{Speed, YawRate};

/// `angle.radians * speed / yaw_rate`, only derivable from a meaningful yaw rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct YawRateFactor(Finite);

impl YawRateFactor {
    /// 5°/s expressed in rad/s. Yaw below this is indistinguishable from noise.
    pub const MIN_YAW_RATE_RADIANS_PER_SECOND: f32 = 5.0 * PI / 180.0;

    /// Derive the factor from a telemetry sample.
    ///
    /// Preconditions are checked in order: yaw rate non-zero, yaw rate
    /// magnitude at least [`Self::MIN_YAW_RATE_RADIANS_PER_SECOND`], speed
    /// positive.
    ///
    /// # Errors
    ///
    /// Returns the first unmet [`Precondition`], or a non-finite error naming
    /// `value` if the division overflows.
    pub fn from_components(
        angle: SteeringWheelAngle,
        speed: Speed,
        yaw_rate: YawRate,
    ) -> Result<Self> {
        let rate = yaw_rate.radians_per_second();
        if rate == 0.0 {
            return Err(Precondition::YawRateZero.into());
        }
        if rate.abs() < Self::MIN_YAW_RATE_RADIANS_PER_SECOND {
            return Err(Precondition::YawRateBelowMinimum {
                yaw_rate: rate,
                minimum: Self::MIN_YAW_RATE_RADIANS_PER_SECOND,
            }
            .into());
        }
        let mps = speed.meters_per_second();
        if mps <= 0.0 {
            return Err(Precondition::SpeedNotPositive { speed: mps }.into());
        }

        let factor = angle.radians() * mps / rate;
        Ok(YawRateFactor(Finite::new("value", factor)?))
    }

    /// Get the factor
    pub fn value(self) -> f32 {
        self.0.get()
    }
}

impl fmt::Display for YawRateFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0.get())
    }
}
