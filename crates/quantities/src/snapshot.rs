//! Per-tick telemetry snapshot handed to the force engine.
//!
//! A [`TelemetryDataPoint`] bundles already-validated quantities with two
//! fixed-length sample arrays. It is assembled through
//! [`TelemetryDataPointBuilder`], which accepts slices from the adapter and
//! performs the structural checks the type system cannot.

use std::fmt;

use chrono::{DateTime, Utc};
use openracing_errors::{Result, ValidationError, validate};
use serde::{Deserialize, Serialize};

use crate::angle::SteeringWheelAngle;
use crate::finite::Finite;
use crate::scalar::{EngineRpm, GForce, ShockVelocity, Speed, Torque, YawRate};
use crate::vector::Velocity;

/// Number of torque samples and shock velocities per snapshot.
pub const SAMPLE_COUNT: usize = 6;

/// One telemetry sample.
///
/// `throttle` and `brake` are nominally `0.0..=1.0`; only finiteness is
/// enforced so that adapters reporting slightly out-of-range pedal travel are
/// not dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TelemetryDataPointRepr")]
pub struct TelemetryDataPoint {
    steering_wheel_angle: SteeringWheelAngle,
    yaw_rate: YawRate,
    velocity: Velocity,
    speed: Speed,
    g_force: GForce,
    engine_rpm: EngineRpm,
    steering_wheel_torque_samples: [Torque; SAMPLE_COUNT],
    shock_velocities: [ShockVelocity; SAMPLE_COUNT],
    timestamp: DateTime<Utc>,
    is_on_track: bool,
    gear: i32,
    throttle: Finite,
    brake: Finite,
}

#[derive(Deserialize)]
struct TelemetryDataPointRepr {
    steering_wheel_angle: SteeringWheelAngle,
    yaw_rate: YawRate,
    velocity: Velocity,
    speed: Speed,
    g_force: GForce,
    engine_rpm: EngineRpm,
    steering_wheel_torque_samples: Vec<Torque>,
    shock_velocities: Vec<ShockVelocity>,
    timestamp: DateTime<Utc>,
    #[serde(default = "default_on_track")]
    is_on_track: bool,
    #[serde(default)]
    gear: i32,
    #[serde(default)]
    throttle: f32,
    #[serde(default)]
    brake: f32,
}

fn default_on_track() -> bool {
    true
}

impl TryFrom<TelemetryDataPointRepr> for TelemetryDataPoint {
    type Error = ValidationError;

    fn try_from(repr: TelemetryDataPointRepr) -> Result<Self> {
        TelemetryDataPoint::builder()
            .steering_wheel_angle(repr.steering_wheel_angle)
            .yaw_rate(repr.yaw_rate)
            .velocity(repr.velocity)
            .speed(repr.speed)
            .g_force(repr.g_force)
            .engine_rpm(repr.engine_rpm)
            .steering_wheel_torque_samples(&repr.steering_wheel_torque_samples)
            .shock_velocities(&repr.shock_velocities)
            .timestamp(repr.timestamp)
            .is_on_track(repr.is_on_track)
            .gear(repr.gear)
            .throttle(repr.throttle)
            .brake(repr.brake)
            .build()
    }
}

impl TelemetryDataPoint {
    /// Number of samples in each fixed-length array
    pub const SAMPLE_COUNT: usize = SAMPLE_COUNT;

    /// Start assembling a snapshot
    pub fn builder() -> TelemetryDataPointBuilder {
        TelemetryDataPointBuilder::default()
    }

    /// Steering wheel angle
    pub fn steering_wheel_angle(&self) -> SteeringWheelAngle {
        self.steering_wheel_angle
    }

    /// Vehicle yaw rate
    pub fn yaw_rate(&self) -> YawRate {
        self.yaw_rate
    }

    /// Vehicle velocity
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Vehicle speed
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// G-force
    pub fn g_force(&self) -> GForce {
        self.g_force
    }

    /// Engine RPM
    pub fn engine_rpm(&self) -> EngineRpm {
        self.engine_rpm
    }

    /// Steering wheel torque samples for this tick
    pub fn steering_wheel_torque_samples(&self) -> &[Torque; SAMPLE_COUNT] {
        &self.steering_wheel_torque_samples
    }

    /// Shock velocities for this tick
    pub fn shock_velocities(&self) -> &[ShockVelocity; SAMPLE_COUNT] {
        &self.shock_velocities
    }

    /// Sample time
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Car is on the racing surface
    pub fn is_on_track(&self) -> bool {
        self.is_on_track
    }

    /// Selected gear (0 = neutral, negative = reverse)
    pub fn gear(&self) -> i32 {
        self.gear
    }

    /// Throttle pedal position
    pub fn throttle(&self) -> f32 {
        self.throttle.get()
    }

    /// Brake pedal position
    pub fn brake(&self) -> f32 {
        self.brake.get()
    }

    /// Builder pre-filled with this snapshot, for deriving a modified copy
    pub fn to_builder(&self) -> TelemetryDataPointBuilder {
        TelemetryDataPointBuilder {
            steering_wheel_angle: Some(self.steering_wheel_angle),
            yaw_rate: Some(self.yaw_rate),
            velocity: Some(self.velocity),
            speed: Some(self.speed),
            g_force: Some(self.g_force),
            engine_rpm: Some(self.engine_rpm),
            steering_wheel_torque_samples: Some(Ok(self.steering_wheel_torque_samples)),
            shock_velocities: Some(Ok(self.shock_velocities)),
            timestamp: Some(self.timestamp),
            is_on_track: self.is_on_track,
            gear: self.gear,
            throttle: self.throttle.get(),
            brake: self.brake.get(),
        }
    }
}

impl fmt::Display for TelemetryDataPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} at {}, gear {}, {}",
            self.timestamp.to_rfc3339(),
            self.steering_wheel_angle,
            self.speed,
            self.gear,
            if self.is_on_track { "on track" } else { "off track" }
        )
    }
}

/// Fixed-length array, or the length of the slice that could not be converted.
type Samples<T> = std::result::Result<[T; SAMPLE_COUNT], usize>;

fn to_samples<T: Copy>(samples: &[T]) -> Samples<T> {
    <[T; SAMPLE_COUNT]>::try_from(samples)
        .ok()
        .ok_or(samples.len())
}

/// Builder for [`TelemetryDataPoint`].
///
/// Optional fields default to `is_on_track = true`, `gear = 0`,
/// `throttle = 0.0`, `brake = 0.0`.
#[derive(Debug, Clone)]
pub struct TelemetryDataPointBuilder {
    steering_wheel_angle: Option<SteeringWheelAngle>,
    yaw_rate: Option<YawRate>,
    velocity: Option<Velocity>,
    speed: Option<Speed>,
    g_force: Option<GForce>,
    engine_rpm: Option<EngineRpm>,
    steering_wheel_torque_samples: Option<Samples<Torque>>,
    shock_velocities: Option<Samples<ShockVelocity>>,
    timestamp: Option<DateTime<Utc>>,
    is_on_track: bool,
    gear: i32,
    throttle: f32,
    brake: f32,
}

impl Default for TelemetryDataPointBuilder {
    fn default() -> Self {
        Self {
            steering_wheel_angle: None,
            yaw_rate: None,
            velocity: None,
            speed: None,
            g_force: None,
            engine_rpm: None,
            steering_wheel_torque_samples: None,
            shock_velocities: None,
            timestamp: None,
            is_on_track: true,
            gear: 0,
            throttle: 0.0,
            brake: 0.0,
        }
    }
}

impl TelemetryDataPointBuilder {
    /// Steering wheel angle
    pub fn steering_wheel_angle(mut self, angle: SteeringWheelAngle) -> Self {
        self.steering_wheel_angle = Some(angle);
        self
    }

    /// Vehicle yaw rate
    pub fn yaw_rate(mut self, yaw_rate: YawRate) -> Self {
        self.yaw_rate = Some(yaw_rate);
        self
    }

    /// Vehicle velocity
    pub fn velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = Some(velocity);
        self
    }

    /// Vehicle speed
    pub fn speed(mut self, speed: Speed) -> Self {
        self.speed = Some(speed);
        self
    }

    /// G-force
    pub fn g_force(mut self, g_force: GForce) -> Self {
        self.g_force = Some(g_force);
        self
    }

    /// Engine RPM
    pub fn engine_rpm(mut self, engine_rpm: EngineRpm) -> Self {
        self.engine_rpm = Some(engine_rpm);
        self
    }

    /// Torque samples; the length is checked in [`build`](Self::build).
    pub fn steering_wheel_torque_samples(mut self, samples: &[Torque]) -> Self {
        self.steering_wheel_torque_samples = Some(to_samples(samples));
        self
    }

    /// Shock velocities; the length is checked in [`build`](Self::build).
    pub fn shock_velocities(mut self, samples: &[ShockVelocity]) -> Self {
        self.shock_velocities = Some(to_samples(samples));
        self
    }

    /// Sample time; must not be the Unix epoch
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Defaults to `true`
    pub fn is_on_track(mut self, is_on_track: bool) -> Self {
        self.is_on_track = is_on_track;
        self
    }

    /// Defaults to neutral (0)
    pub fn gear(mut self, gear: i32) -> Self {
        self.gear = gear;
        self
    }

    /// Pedal position, defaults to 0.0
    pub fn throttle(mut self, throttle: f32) -> Self {
        self.throttle = throttle;
        self
    }

    /// Pedal position, defaults to 0.0
    pub fn brake(mut self, brake: f32) -> Self {
        self.brake = brake;
        self
    }

    /// Validate and assemble the snapshot.
    ///
    /// Checks run in this order: torque samples present and exactly
    /// [`SAMPLE_COUNT`] long, shock velocities likewise, timestamp set and not
    /// the default (Unix epoch) instant, throttle and brake finite, then the
    /// remaining quantities present. Quantities are not re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`], [`ValidationError::WrongLength`]
    /// or [`ValidationError::NonFinite`] naming the first offending field.
    pub fn build(self) -> Result<TelemetryDataPoint> {
        let result = self.assemble();
        if let Err(err) = &result {
            tracing::debug!(error = %err, "rejected telemetry snapshot");
        }
        result
    }

    fn assemble(self) -> Result<TelemetryDataPoint> {
        let steering_wheel_torque_samples = required_samples(
            "steering_wheel_torque_samples",
            self.steering_wheel_torque_samples,
        )?;
        let shock_velocities = required_samples("shock_velocities", self.shock_velocities)?;

        let timestamp = self
            .timestamp
            .ok_or(ValidationError::required("timestamp"))?;
        validate!(
            timestamp != DateTime::<Utc>::default(),
            ValidationError::required("timestamp")
        );

        let throttle = Finite::new("throttle", self.throttle)?;
        let brake = Finite::new("brake", self.brake)?;

        Ok(TelemetryDataPoint {
            steering_wheel_angle: required("steering_wheel_angle", self.steering_wheel_angle)?,
            yaw_rate: required("yaw_rate", self.yaw_rate)?,
            velocity: required("velocity", self.velocity)?,
            speed: required("speed", self.speed)?,
            g_force: required("g_force", self.g_force)?,
            engine_rpm: required("engine_rpm", self.engine_rpm)?,
            steering_wheel_torque_samples,
            shock_velocities,
            timestamp,
            is_on_track: self.is_on_track,
            gear: self.gear,
            throttle,
            brake,
        })
    }
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or(ValidationError::required(field))
}

fn required_samples<T>(
    field: &'static str,
    samples: Option<Samples<T>>,
) -> Result<[T; SAMPLE_COUNT]> {
    required(field, samples)?
        .map_err(|actual| ValidationError::wrong_length(field, SAMPLE_COUNT, actual))
}
