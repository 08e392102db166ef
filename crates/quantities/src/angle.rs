//! Steering wheel angle bounded by the wheel's lock.

use std::fmt;

use openracing_errors::{Bound, Result, ValidationError};
use serde::{Deserialize, Serialize};

use crate::finite::{Finite, bounded, positive};

/// Radians to degrees, rounded toward zero so that converting the result
/// back never lands beyond the input.
fn radians_to_degrees(radians: f32) -> f32 {
    let exact = f64::from(radians).to_degrees();
    let nearest = exact as f32;
    if f64::from(nearest).abs() <= exact.abs() {
        nearest
    } else if nearest > 0.0 {
        nearest.next_down()
    } else {
        nearest.next_up()
    }
}

fn degrees_to_radians(degrees: f32) -> f32 {
    f64::from(degrees).to_radians() as f32
}

/// Steering wheel angle in radians, limited to `±max_radians`.
///
/// The valid range is a property of the wheel (its lock), not a constant, so
/// the lock travels with every angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "SteeringWheelAngleRepr")]
pub struct SteeringWheelAngle {
    radians: Finite,
    max_radians: Finite,
}

#[derive(Deserialize)]
struct SteeringWheelAngleRepr {
    radians: f32,
    max_radians: f32,
}

impl TryFrom<SteeringWheelAngleRepr> for SteeringWheelAngle {
    type Error = ValidationError;

    fn try_from(repr: SteeringWheelAngleRepr) -> Result<Self> {
        SteeringWheelAngle::new(repr.radians, repr.max_radians)
    }
}

impl SteeringWheelAngle {
    /// Create an angle within the given lock.
    ///
    /// `max_radians` is validated first (finite, `> 0`), then `radians`
    /// against it. The bound is inclusive.
    ///
    /// # Errors
    ///
    /// Returns a non-finite or range error naming `max_radians` or `radians`.
    pub fn new(radians: f32, max_radians: f32) -> Result<Self> {
        let max_radians = positive("max_radians", max_radians)?;
        let radians = bounded("radians", radians, Bound::Symmetric(max_radians.get()))?;
        Ok(SteeringWheelAngle {
            radians,
            max_radians,
        })
    }

    /// Create an angle from degrees within a lock given in radians.
    ///
    /// The degrees are compared against the lock converted the same way as
    /// [`to_degrees`](Self::to_degrees), so any angle's own `to_degrees()`
    /// is accepted back. Conversions run in `f64`; a value within the lock in
    /// degrees is always within it in radians.
    ///
    /// # Errors
    ///
    /// Returns a non-finite or range error naming `max_radians` or `degrees`.
    pub fn from_degrees(degrees: f32, max_radians: f32) -> Result<Self> {
        let max_degrees = radians_to_degrees(positive("max_radians", max_radians)?.get());
        let degrees = bounded("degrees", degrees, Bound::Symmetric(max_degrees))?;
        Self::new(degrees_to_radians(degrees.get()), max_radians)
    }

    /// Get the angle in radians
    pub fn radians(self) -> f32 {
        self.radians.get()
    }

    /// Get the lock in radians
    pub fn max_radians(self) -> f32 {
        self.max_radians.get()
    }

    /// Convert the angle to degrees
    pub fn to_degrees(self) -> f32 {
        radians_to_degrees(self.radians.get())
    }

    /// Angle as a fraction of the lock, in `[-1.0, 1.0]`
    pub fn fraction_of_lock(self) -> f32 {
        self.radians.get() / self.max_radians.get()
    }
}

impl fmt::Display for SteeringWheelAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}° (lock ±{:.1}°)",
            self.to_degrees(),
            radians_to_degrees(self.max_radians.get())
        )
    }
}
