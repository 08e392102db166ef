//! Validated physical quantities for the OpenRacing FFB pipeline
//!
//! Telemetry adapters turn raw simulator readings into these types before the
//! force engine sees them. Every constructor rejects NaN, infinities and
//! out-of-domain values, so a value that exists is a value that can be fed to
//! the PID loop.
//!
//! # Overview
//!
//! - **Scalars**: [`EngineRpm`], [`Torque`], [`YawRate`], [`Speed`],
//!   [`GForce`], [`Scale`], [`ShockVelocity`], [`TireLoad`]
//! - **Raw wheel readings**: [`WheelPosition`], [`WheelVelocity`]
//! - **Vectors**: [`Velocity`], [`ForceFeedbackVector`]
//! - **Steering**: [`SteeringWheelAngle`] with its lock
//! - **Tuning**: [`PidConfig`], [`FfbTuning`]
//! - **Per-tick snapshot**: [`TelemetryDataPoint`]
//! - **Derived metrics**: [`YawRateFactor`]
//!
//! # RT Safety
//!
//! All value types are `Copy`, construction never allocates and rejected
//! input only emits a `trace`-level event.
//!
//! # Example
//!
//! ```
//! use racing_wheel_quantities::{Speed, SteeringWheelAngle, YawRate, YawRateFactor};
//!
//! # fn main() -> racing_wheel_quantities::Result<()> {
//! let angle = SteeringWheelAngle::from_degrees(90.0, 7.85)?;
//! let speed = Speed::from_kilometers_per_hour(72.0)?;
//! let yaw = YawRate::new(0.5)?;
//!
//! let factor = YawRateFactor::from_components(angle, speed, yaw)?;
//! assert!(factor.value() > 0.0);
//!
//! assert!(Speed::new(f32::NAN).is_err());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod finite;

pub mod angle;
pub mod config;
pub mod pid;
pub mod scalar;
pub mod snapshot;
pub mod vector;
pub mod wheel;
pub mod yaw_rate_factor;

pub use angle::SteeringWheelAngle;
pub use config::FfbTuning;
pub use finite::Finite;
pub use pid::PidConfig;
pub use scalar::{EngineRpm, GForce, Scale, ShockVelocity, Speed, TireLoad, Torque, YawRate};
pub use snapshot::{SAMPLE_COUNT, TelemetryDataPoint, TelemetryDataPointBuilder};
pub use vector::{ForceFeedbackVector, Velocity};
pub use wheel::{WheelPosition, WheelVelocity};
pub use yaw_rate_factor::YawRateFactor;

pub use openracing_errors::{
    Bound, ErrorKind, OpenRacingError, Precondition, Result, ValidationError,
};
