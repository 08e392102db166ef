//! Raw wheel-base readings in hardware units.
//!
//! These come straight from HID polling. The integer domain is whatever the
//! device reports, so there is nothing to validate at construction.

use std::fmt;

use openracing_errors::Result;
use serde::{Deserialize, Serialize};

use crate::finite::positive;

/// Wheel position in raw device units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WheelPosition(i32);

impl WheelPosition {
    /// Full-scale raw value of a signed 16-bit axis
    pub const DEFAULT_MAX_RAW: f32 = 32767.0;

    /// Create a position from the raw device value
    pub const fn new(raw_value: i32) -> Self {
        WheelPosition(raw_value)
    }

    /// Get the raw device value
    pub const fn raw_value(self) -> i32 {
        self.0
    }

    /// Position relative to a signed 16-bit full scale (±1.0 at the ends).
    pub fn normalized(self) -> f32 {
        self.0 as f32 / Self::DEFAULT_MAX_RAW
    }

    /// Position relative to a device-specific full scale.
    ///
    /// # Errors
    ///
    /// Returns a non-finite or range error naming `max_raw_value` unless it
    /// is finite and `> 0`.
    pub fn normalized_to(self, max_raw_value: f32) -> Result<f32> {
        let max = positive("max_raw_value", max_raw_value)?;
        Ok(self.0 as f32 / max.get())
    }
}

impl From<i32> for WheelPosition {
    fn from(raw_value: i32) -> Self {
        WheelPosition(raw_value)
    }
}

impl fmt::Display for WheelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} raw", self.0)
    }
}

/// Wheel angular velocity in raw device units per second.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WheelVelocity(i32);

impl WheelVelocity {
    /// Create a velocity from the raw device value
    pub const fn new(raw_units_per_second: i32) -> Self {
        WheelVelocity(raw_units_per_second)
    }

    /// Get the raw units per second
    pub const fn raw_units_per_second(self) -> i32 {
        self.0
    }
}

impl From<i32> for WheelVelocity {
    fn from(raw_units_per_second: i32) -> Self {
        WheelVelocity(raw_units_per_second)
    }
}

impl fmt::Display for WheelVelocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} raw/s", self.0)
    }
}
