//! PID controller gains.

use std::fmt;

use openracing_errors::{Result, ValidationError};
use serde::{Deserialize, Serialize};

use crate::finite::Finite;

/// Proportional, integral and derivative gains for the force controller.
///
/// Gains may be negative; only finiteness is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PidConfigRepr")]
pub struct PidConfig {
    proportional: Finite,
    integral: Finite,
    derivative: Finite,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PidConfigRepr {
    pub(crate) proportional: f32,
    pub(crate) integral: f32,
    pub(crate) derivative: f32,
}

impl TryFrom<PidConfigRepr> for PidConfig {
    type Error = ValidationError;

    fn try_from(repr: PidConfigRepr) -> Result<Self> {
        PidConfig::new(repr.proportional, repr.integral, repr.derivative)
    }
}

impl PidConfig {
    /// Create a gain set.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] naming `proportional`,
    /// `integral` or `derivative`.
    pub fn new(proportional: f32, integral: f32, derivative: f32) -> Result<Self> {
        Ok(PidConfig {
            proportional: Finite::new("proportional", proportional)?,
            integral: Finite::new("integral", integral)?,
            derivative: Finite::new("derivative", derivative)?,
        })
    }

    /// Proportional gain
    pub fn proportional(self) -> f32 {
        self.proportional.get()
    }

    /// Integral gain
    pub fn integral(self) -> f32 {
        self.integral.get()
    }

    /// Derivative gain
    pub fn derivative(self) -> f32 {
        self.derivative.get()
    }
}

impl fmt::Display for PidConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P={} I={} D={}",
            self.proportional.get(),
            self.integral.get(),
            self.derivative.get()
        )
    }
}
