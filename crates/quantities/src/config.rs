//! FFB tuning profiles.
//!
//! A profile carries the PID gains, the overall force scale and the steering
//! lock of the wheel. Profiles are stored as JSON or YAML; every value passes
//! through the same validating constructors as live telemetry.

use std::path::Path;

use openracing_errors::{OpenRacingError, Result, ValidationError};
use serde::{Deserialize, Serialize};

use crate::angle::SteeringWheelAngle;
use crate::finite::{Finite, positive};
use crate::pid::{PidConfig, PidConfigRepr};
use crate::scalar::Scale;

/// Validated FFB tuning profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FfbTuningRepr")]
pub struct FfbTuning {
    pid: PidConfig,
    overall_scale: Scale,
    max_steering_radians: Finite,
}

/// Profile as written on disk, before any value is validated.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct FfbTuningRepr {
    pid: PidConfigRepr,
    #[serde(default = "full_scale_percentage")]
    overall_scale: f32,
    max_steering_radians: f32,
}

fn full_scale_percentage() -> f32 {
    Scale::FULL.percentage()
}

impl TryFrom<FfbTuningRepr> for FfbTuning {
    type Error = ValidationError;

    fn try_from(repr: FfbTuningRepr) -> Result<Self> {
        FfbTuning::new(
            PidConfig::try_from(repr.pid)?,
            Scale::new(repr.overall_scale)?,
            repr.max_steering_radians,
        )
    }
}

/// Syntax errors become [`OpenRacingError::Config`]; value errors stay
/// [`OpenRacingError::Validation`] so callers keep the field and kind.
fn validate_repr(
    parsed: std::result::Result<FfbTuningRepr, String>,
    format: &'static str,
) -> std::result::Result<FfbTuning, OpenRacingError> {
    let repr = parsed.map_err(|message| {
        tracing::warn!(format, error = %message, "failed to parse tuning profile");
        OpenRacingError::config(message)
    })?;
    FfbTuning::try_from(repr).map_err(|err| {
        tracing::warn!(format, error = %err, "rejected tuning profile");
        OpenRacingError::from(err)
    })
}

impl FfbTuning {
    /// Create a profile.
    ///
    /// # Errors
    ///
    /// `max_steering_radians` must be finite and strictly positive.
    pub fn new(pid: PidConfig, overall_scale: Scale, max_steering_radians: f32) -> Result<Self> {
        Ok(Self {
            pid,
            overall_scale,
            max_steering_radians: positive("max_steering_radians", max_steering_radians)?,
        })
    }

    /// Parse a JSON profile.
    ///
    /// # Errors
    ///
    /// Returns [`OpenRacingError::Config`] for malformed JSON or unknown
    /// fields, and [`OpenRacingError::Validation`] for out-of-domain values.
    pub fn from_json_str(json: &str) -> std::result::Result<Self, OpenRacingError> {
        validate_repr(serde_json::from_str(json).map_err(|e| e.to_string()), "json")
    }

    /// Parse a YAML profile.
    ///
    /// # Errors
    ///
    /// Returns [`OpenRacingError::Config`] for malformed YAML or unknown
    /// fields, and [`OpenRacingError::Validation`] for out-of-domain values.
    pub fn from_yaml_str(yaml: &str) -> std::result::Result<Self, OpenRacingError> {
        validate_repr(serde_yaml::from_str(yaml).map_err(|e| e.to_string()), "yaml")
    }

    /// Load a profile from disk. The format follows the file extension:
    /// `.json`, `.yaml` or `.yml`.
    ///
    /// # Errors
    ///
    /// Returns [`OpenRacingError::Config`] for an unsupported extension,
    /// [`OpenRacingError::Io`] if the file cannot be read, and otherwise the
    /// errors of [`from_json_str`](Self::from_json_str) /
    /// [`from_yaml_str`](Self::from_yaml_str).
    pub fn load(path: impl AsRef<Path>) -> std::result::Result<Self, OpenRacingError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> std::result::Result<Self, OpenRacingError> =
            match extension.as_deref() {
                Some("json") => Self::from_json_str,
                Some("yaml" | "yml") => Self::from_yaml_str,
                _ => {
                    tracing::warn!(path = %path.display(), "unsupported tuning profile format");
                    return Err(OpenRacingError::config(format!(
                        "unsupported tuning profile format: {}",
                        path.display()
                    )));
                }
            };

        let contents = std::fs::read_to_string(path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to read tuning profile");
            OpenRacingError::from(e)
        })?;
        let tuning = parse(&contents)?;
        tracing::debug!(path = %path.display(), %tuning, "loaded tuning profile");
        Ok(tuning)
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`OpenRacingError::Config`] if serialization fails.
    pub fn to_json_string(&self) -> std::result::Result<String, OpenRacingError> {
        serde_json::to_string_pretty(self).map_err(|e| OpenRacingError::config(e.to_string()))
    }

    /// PID gains
    pub fn pid(&self) -> PidConfig {
        self.pid
    }

    /// Overall force scale
    pub fn overall_scale(&self) -> Scale {
        self.overall_scale
    }

    /// Steering lock in radians, measured from center
    pub fn max_steering_radians(&self) -> f32 {
        self.max_steering_radians.get()
    }

    /// Build a steering angle against the configured lock.
    ///
    /// # Errors
    ///
    /// Returns a non-finite or range error naming `radians`.
    pub fn steering_angle(&self, radians: f32) -> Result<SteeringWheelAngle> {
        SteeringWheelAngle::new(radians, self.max_steering_radians.get())
    }
}

impl std::fmt::Display for FfbTuning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}, lock {:.3} rad",
            self.pid,
            self.overall_scale,
            self.max_steering_radians.get()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openracing_errors::Bound;

    #[test]
    fn test_overall_scale_defaults_to_full() -> std::result::Result<(), OpenRacingError> {
        let tuning = FfbTuning::from_json_str(
            r#"{"pid":{"proportional":1.0,"integral":0.0,"derivative":0.1},"max_steering_radians":7.0}"#,
        )?;
        assert_eq!(tuning.overall_scale(), Scale::FULL);
        assert!((tuning.max_steering_radians() - 7.0).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn test_non_positive_lock_rejected() -> Result<()> {
        let pid = PidConfig::new(1.0, 0.0, 0.0)?;
        assert_eq!(
            FfbTuning::new(pid, Scale::FULL, 0.0),
            Err(ValidationError::out_of_range(
                "max_steering_radians",
                0.0,
                Bound::GreaterThan(0.0)
            ))
        );
        assert!(FfbTuning::new(pid, Scale::FULL, f32::INFINITY).is_err());
        Ok(())
    }

    #[test]
    fn test_steering_angle_uses_lock() -> Result<()> {
        let tuning = FfbTuning::new(PidConfig::new(1.0, 0.0, 0.0)?, Scale::FULL, 2.0)?;
        let angle = tuning.steering_angle(-1.5)?;
        assert!((angle.max_radians() - 2.0).abs() < f32::EPSILON);
        assert!(tuning.steering_angle(2.5).is_err());
        Ok(())
    }

    #[test]
    fn test_value_errors_keep_field() {
        let err = FfbTuning::from_json_str(
            r#"{"pid":{"proportional":1.0,"integral":0.0,"derivative":0.0},"overall_scale":-5.0,"max_steering_radians":7.0}"#,
        )
        .err();
        assert_eq!(
            err.as_ref().and_then(OpenRacingError::as_validation),
            Some(&ValidationError::out_of_range(
                "percentage",
                -5.0,
                Bound::AtLeast(0.0)
            ))
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = FfbTuning::from_json_str(
            r#"{"pid":{"proportional":1.0,"integral":0.0,"derivative":0.0},"max_steering_radians":7.0,"gain":3}"#,
        );
        assert!(matches!(err, Err(OpenRacingError::Config(_))));
    }
}
