//! Single-value physical quantities.
//!
//! Each type stores validated [`Finite`] fields and can only be built
//! through a constructor that checks finiteness and physical bounds. A value
//! that exists is valid for its whole lifetime.

use std::f32::consts::PI;
use std::fmt;

use openracing_errors::{Bound, Precondition, Result, ValidationError};
use serde::{Deserialize, Serialize};

use crate::finite::{Finite, bounded, non_negative, positive};

/// `TryFrom<f32>` / `From<T> for f32` pair backing serde for single-field quantities.
macro_rules! f32_conversions {
    ($ty:ident, $ctor:path) => {
        impl TryFrom<f32> for $ty {
            type Error = ValidationError;

            fn try_from(value: f32) -> Result<Self> {
                $ctor(value)
            }
        }

        impl From<$ty> for f32 {
            fn from(value: $ty) -> f32 {
                value.0.get()
            }
        }
    };
}

/// Engine rotational speed in revolutions per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EngineRpmRepr")]
pub struct EngineRpm {
    value: Finite,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_rpm: Option<Finite>,
}

#[derive(Deserialize)]
struct EngineRpmRepr {
    value: f32,
    #[serde(default)]
    max_rpm: Option<f32>,
}

impl TryFrom<EngineRpmRepr> for EngineRpm {
    type Error = ValidationError;

    fn try_from(repr: EngineRpmRepr) -> Result<Self> {
        EngineRpm::new(repr.value, repr.max_rpm)
    }
}

impl EngineRpm {
    /// Create an RPM reading, optionally bounded by the engine's rev limit.
    ///
    /// `value` is checked first (finite, `>= 0`), then `max_rpm` (finite,
    /// `> 0`), then `value <= max_rpm`.
    ///
    /// # Errors
    ///
    /// Returns a non-finite or range error naming `value` or `max_rpm`.
    pub fn new(value: f32, max_rpm: Option<f32>) -> Result<Self> {
        let checked = non_negative("value", value)?;
        let max_rpm = match max_rpm {
            Some(max) => {
                let max = positive("max_rpm", max)?;
                bounded("value", value, Bound::AtMost(max.get()))?;
                Some(max)
            }
            None => None,
        };
        Ok(EngineRpm {
            value: checked,
            max_rpm,
        })
    }

    /// Get the RPM value
    pub fn value(self) -> f32 {
        self.value.get()
    }

    /// Get the rev limit, if one was supplied
    pub fn max_rpm(self) -> Option<f32> {
        self.max_rpm.map(Finite::get)
    }

    /// Current RPM as a percentage (0-100) of the rev limit.
    ///
    /// # Errors
    ///
    /// Returns [`Precondition::MaxRpmNotSet`] when no positive maximum was supplied.
    pub fn percentage_of_max(self) -> Result<f32> {
        match self.max_rpm.map(Finite::get) {
            Some(max) if max > 0.0 => Ok(self.value.get() / max * 100.0),
            _ => Err(Precondition::MaxRpmNotSet.into()),
        }
    }
}

impl fmt::Display for EngineRpm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_rpm {
            Some(max) => write!(f, "{:.0}/{:.0} rpm", self.value.get(), max.get()),
            None => write!(f, "{:.0} rpm", self.value.get()),
        }
    }
}

/// Torque in Newton-meters. Sign encodes direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Torque(Finite);

impl Torque {
    /// Zero torque constant
    pub const ZERO: Torque = Torque(Finite::ZERO);

    /// Create a torque value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] naming `newton_meters`.
    pub fn new(newton_meters: f32) -> Result<Self> {
        Ok(Torque(Finite::new("newton_meters", newton_meters)?))
    }

    /// Get the value in Newton-meters
    pub fn newton_meters(self) -> f32 {
        self.0.get()
    }
}

f32_conversions!(Torque, Torque::new);

impl fmt::Display for Torque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} Nm", self.0.get())
    }
}

/// Angular velocity of the vehicle about its vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct YawRate(Finite);

impl YawRate {
    /// Create a yaw rate in rad/s.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] naming `radians_per_second`.
    pub fn new(radians_per_second: f32) -> Result<Self> {
        Ok(YawRate(Finite::new("radians_per_second", radians_per_second)?))
    }

    /// Create a yaw rate from deg/s.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] naming `degrees_per_second`.
    pub fn from_degrees_per_second(degrees_per_second: f32) -> Result<Self> {
        let degrees = Finite::new("degrees_per_second", degrees_per_second)?;
        Self::new(degrees.get() * PI / 180.0)
    }

    /// Get the value in rad/s
    pub fn radians_per_second(self) -> f32 {
        self.0.get()
    }

    /// Convert to deg/s
    pub fn to_degrees_per_second(self) -> f32 {
        self.0.get() * 180.0 / PI
    }
}

f32_conversions!(YawRate, YawRate::new);

impl fmt::Display for YawRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} rad/s", self.0.get())
    }
}

/// Vehicle speed. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Speed(Finite);

impl Speed {
    /// km/h per m/s
    pub const KMH_PER_MPS: f32 = 3.6;

    /// mph per m/s
    pub const MPH_PER_MPS: f32 = 2.237;

    /// Stationary
    pub const ZERO: Speed = Speed(Finite::ZERO);

    /// Create a speed in m/s.
    ///
    /// # Errors
    ///
    /// Returns a non-finite or range error naming `meters_per_second`.
    pub fn new(meters_per_second: f32) -> Result<Self> {
        Ok(Speed(non_negative("meters_per_second", meters_per_second)?))
    }

    /// Create a speed from km/h.
    ///
    /// # Errors
    ///
    /// Returns a non-finite or range error naming `kmh`.
    pub fn from_kilometers_per_hour(kmh: f32) -> Result<Self> {
        let kmh = non_negative("kmh", kmh)?;
        Self::new(kmh.get() / Self::KMH_PER_MPS)
    }

    /// Create a speed from mph.
    ///
    /// # Errors
    ///
    /// Returns a non-finite or range error naming `mph`.
    pub fn from_miles_per_hour(mph: f32) -> Result<Self> {
        let mph = non_negative("mph", mph)?;
        Self::new(mph.get() / Self::MPH_PER_MPS)
    }

    /// Get the value in m/s
    pub fn meters_per_second(self) -> f32 {
        self.0.get()
    }

    /// Convert to km/h
    pub fn to_kilometers_per_hour(self) -> f32 {
        self.0.get() * Self::KMH_PER_MPS
    }

    /// Convert to mph
    pub fn to_miles_per_hour(self) -> f32 {
        self.0.get() * Self::MPH_PER_MPS
    }
}

f32_conversions!(Speed, Speed::new);

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m/s", self.0.get())
    }
}

/// Acceleration in multiples of standard gravity.
///
/// Bounded to ±[`GForce::MAX_MAGNITUDE`]; anything beyond is a sensor or
/// adapter fault rather than a survivable load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct GForce(Finite);

impl GForce {
    /// Maximum accepted magnitude in G
    pub const MAX_MAGNITUDE: f32 = 32.0;

    /// Standard gravity in m/s²
    pub const STANDARD_GRAVITY: f32 = 9.80665;

    /// Create a G-force value.
    ///
    /// # Errors
    ///
    /// Returns a non-finite or range error naming `value`.
    pub fn new(value: f32) -> Result<Self> {
        Ok(GForce(bounded(
            "value",
            value,
            Bound::Symmetric(Self::MAX_MAGNITUDE),
        )?))
    }

    /// Create a G-force value from an acceleration in m/s².
    ///
    /// # Errors
    ///
    /// Returns a non-finite error naming `meters_per_second_squared`, or a
    /// range error naming `value` if the result exceeds the bound.
    pub fn from_acceleration(meters_per_second_squared: f32) -> Result<Self> {
        let accel = Finite::new("meters_per_second_squared", meters_per_second_squared)?;
        Self::new(accel.get() / Self::STANDARD_GRAVITY)
    }

    /// Get the value in G
    pub fn value(self) -> f32 {
        self.0.get()
    }
}

f32_conversions!(GForce, GForce::new);

impl fmt::Display for GForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} G", self.0.get())
    }
}

/// A scale factor expressed as a percentage.
///
/// Values above 100 are over-scale and permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Scale(Finite);

impl Scale {
    /// 100 % (unity scale)
    pub const FULL: Scale = Scale(Finite::from_raw(100.0));

    /// Create a scale from a percentage.
    ///
    /// # Errors
    ///
    /// Returns a non-finite or range error naming `percentage`.
    pub fn new(percentage: f32) -> Result<Self> {
        Ok(Scale(non_negative("percentage", percentage)?))
    }

    /// Create a scale from a decimal factor (1.0 = 100 %).
    ///
    /// # Errors
    ///
    /// Returns a non-finite or range error naming `decimal_value`, or naming
    /// `percentage` if the scaled value overflows.
    pub fn from_decimal(decimal_value: f32) -> Result<Self> {
        let decimal = non_negative("decimal_value", decimal_value)?;
        Self::new(decimal.get() * 100.0)
    }

    /// Get the percentage
    pub fn percentage(self) -> f32 {
        self.0.get()
    }

    /// Convert to a decimal factor (100 % = 1.0)
    pub fn as_decimal(self) -> f32 {
        self.0.get() / 100.0
    }
}

f32_conversions!(Scale, Scale::new);

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0.get())
    }
}

/// Suspension damper velocity.
///
/// Positive is compression, negative is extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct ShockVelocity(Finite);

impl ShockVelocity {
    /// Create a shock velocity in m/s.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] naming `meters_per_second`.
    pub fn new(meters_per_second: f32) -> Result<Self> {
        Ok(ShockVelocity(Finite::new(
            "meters_per_second",
            meters_per_second,
        )?))
    }

    /// Get the value in m/s
    pub fn meters_per_second(self) -> f32 {
        self.0.get()
    }

    /// Damper is compressing
    pub fn is_compression(self) -> bool {
        self.0.get() > 0.0
    }

    /// Damper is extending
    pub fn is_extension(self) -> bool {
        self.0.get() < 0.0
    }
}

f32_conversions!(ShockVelocity, ShockVelocity::new);

impl fmt::Display for ShockVelocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} m/s", self.0.get())
    }
}

/// Vertical tire load and longitudinal slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TireLoadRepr")]
pub struct TireLoad {
    load: Finite,
    slip_ratio: Finite,
}

#[derive(Deserialize)]
struct TireLoadRepr {
    load: f32,
    slip_ratio: f32,
}

impl TryFrom<TireLoadRepr> for TireLoad {
    type Error = ValidationError;

    fn try_from(repr: TireLoadRepr) -> Result<Self> {
        TireLoad::new(repr.load, repr.slip_ratio)
    }
}

impl TireLoad {
    /// Create a tire load reading.
    ///
    /// `load` is in Newtons and must be `>= 0`; `slip_ratio` is unitless and
    /// unconstrained beyond finiteness.
    ///
    /// # Errors
    ///
    /// Returns a non-finite or range error naming `load` or `slip_ratio`.
    pub fn new(load: f32, slip_ratio: f32) -> Result<Self> {
        let load = non_negative("load", load)?;
        let slip_ratio = Finite::new("slip_ratio", slip_ratio)?;
        Ok(TireLoad { load, slip_ratio })
    }

    /// Get the load in Newtons
    pub fn load(self) -> f32 {
        self.load.get()
    }

    /// Get the slip ratio
    pub fn slip_ratio(self) -> f32 {
        self.slip_ratio.get()
    }
}

impl fmt::Display for TireLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} N (slip {:.3})",
            self.load.get(),
            self.slip_ratio.get()
        )
    }
}
