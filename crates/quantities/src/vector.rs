//! Three-axis quantities built from validated components.

use std::fmt;

use openracing_errors::{Result, ValidationError};
use serde::{Deserialize, Serialize};

use crate::finite::{Finite, non_negative};

/// Euclidean norm without intermediate overflow for large finite components.
fn norm(x: f32, y: f32, z: f32) -> f32 {
    x.hypot(y).hypot(z)
}

/// Vehicle velocity in m/s, vehicle frame (x forward, y lateral, z vertical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "VelocityRepr")]
pub struct Velocity {
    x: Finite,
    y: Finite,
    z: Finite,
}

#[derive(Deserialize)]
struct VelocityRepr {
    x: f32,
    y: f32,
    z: f32,
}

impl TryFrom<VelocityRepr> for Velocity {
    type Error = ValidationError;

    fn try_from(repr: VelocityRepr) -> Result<Self> {
        Velocity::new(repr.x, repr.y, repr.z)
    }
}

impl Velocity {
    /// Create a velocity, validating each component.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFinite`] naming `x`, `y` or `z`.
    pub fn new(x: f32, y: f32, z: f32) -> Result<Self> {
        Ok(Velocity {
            x: Finite::new("x", x)?,
            y: Finite::new("y", y)?,
            z: Finite::new("z", z)?,
        })
    }

    /// X component
    pub fn x(self) -> f32 {
        self.x.get()
    }

    /// Y component
    pub fn y(self) -> f32 {
        self.y.get()
    }

    /// Z component
    pub fn z(self) -> f32 {
        self.z.get()
    }

    /// Forward velocity (x)
    pub fn forward(self) -> f32 {
        self.x.get()
    }

    /// Lateral velocity (y)
    pub fn lateral(self) -> f32 {
        self.y.get()
    }

    /// Euclidean norm
    pub fn magnitude(self) -> f32 {
        norm(self.x.get(), self.y.get(), self.z.get())
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2}) m/s",
            self.x.get(),
            self.y.get(),
            self.z.get()
        )
    }
}

/// Force feedback output for one control cycle.
///
/// `x`, `y`, `z` are forces in N. `damper` (N·s/m) and `inertia` (kg·m²)
/// are effect coefficients and never negative. They do not contribute to
/// [`ForceFeedbackVector::magnitude`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ForceFeedbackVectorRepr")]
pub struct ForceFeedbackVector {
    x: Finite,
    y: Finite,
    z: Finite,
    damper: Finite,
    inertia: Finite,
}

#[derive(Deserialize)]
struct ForceFeedbackVectorRepr {
    x: f32,
    y: f32,
    z: f32,
    damper: f32,
    inertia: f32,
}

impl TryFrom<ForceFeedbackVectorRepr> for ForceFeedbackVector {
    type Error = ValidationError;

    fn try_from(repr: ForceFeedbackVectorRepr) -> Result<Self> {
        ForceFeedbackVector::new(repr.x, repr.y, repr.z, repr.damper, repr.inertia)
    }
}

impl ForceFeedbackVector {
    /// No force, no damping, no inertia
    pub const ZERO: ForceFeedbackVector = ForceFeedbackVector {
        x: Finite::ZERO,
        y: Finite::ZERO,
        z: Finite::ZERO,
        damper: Finite::ZERO,
        inertia: Finite::ZERO,
    };

    /// Create a force vector.
    ///
    /// Components are checked in argument order.
    ///
    /// # Errors
    ///
    /// Returns a non-finite error naming the component, or a range error
    /// naming `damper` or `inertia` if negative.
    pub fn new(x: f32, y: f32, z: f32, damper: f32, inertia: f32) -> Result<Self> {
        Ok(ForceFeedbackVector {
            x: Finite::new("x", x)?,
            y: Finite::new("y", y)?,
            z: Finite::new("z", z)?,
            damper: non_negative("damper", damper)?,
            inertia: non_negative("inertia", inertia)?,
        })
    }

    /// The all-zero vector
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// X force in N
    pub fn x(self) -> f32 {
        self.x.get()
    }

    /// Y force in N
    pub fn y(self) -> f32 {
        self.y.get()
    }

    /// Z force in N
    pub fn z(self) -> f32 {
        self.z.get()
    }

    /// Damper coefficient in N·s/m
    pub fn damper(self) -> f32 {
        self.damper.get()
    }

    /// Inertia in kg·m²
    pub fn inertia(self) -> f32 {
        self.inertia.get()
    }

    /// Euclidean norm of the force components
    pub fn magnitude(self) -> f32 {
        norm(self.x.get(), self.y.get(), self.z.get())
    }
}

impl Default for ForceFeedbackVector {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for ForceFeedbackVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2}) N, damper {:.2}, inertia {:.3}",
            self.x.get(),
            self.y.get(),
            self.z.get(),
            self.damper.get(),
            self.inertia.get()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openracing_errors::Bound;

    #[test]
    fn test_velocity_components() -> Result<()> {
        let v = Velocity::new(30.0, -2.0, 0.5)?;
        assert!((v.forward() - 30.0).abs() < f32::EPSILON);
        assert!((v.lateral() + 2.0).abs() < f32::EPSILON);
        assert!((v.z() - 0.5).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn test_velocity_magnitude() -> Result<()> {
        let v = Velocity::new(3.0, 4.0, 12.0)?;
        assert!((v.magnitude() - 13.0).abs() < 1e-5);
        Ok(())
    }

    #[test]
    fn test_velocity_names_bad_component() {
        assert!(matches!(
            Velocity::new(1.0, f32::NAN, 0.0),
            Err(ValidationError::NonFinite { field: "y", .. })
        ));
        assert!(matches!(
            Velocity::new(1.0, 0.0, f32::NEG_INFINITY),
            Err(ValidationError::NonFinite { field: "z", .. })
        ));
    }

    #[test]
    fn test_force_vector_magnitude_ignores_effects() -> Result<()> {
        let v = ForceFeedbackVector::new(3.0, 4.0, 0.0, 10.0, 2.0)?;
        assert!((v.magnitude() - 5.0).abs() < 1e-6);
        assert!(ForceFeedbackVector::zero().magnitude().abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn test_magnitude_of_large_components_is_finite() -> Result<()> {
        let force = ForceFeedbackVector::new(3e20, 4e20, 0.0, 0.0, 0.0)?;
        assert!((force.magnitude() / 5e20 - 1.0).abs() < 1e-6);

        let velocity = Velocity::new(2e19, 0.0, 0.0)?;
        assert!((velocity.magnitude() / 2e19 - 1.0).abs() < 1e-6);

        let extreme = Velocity::new(f32::MAX, 0.0, 0.0)?;
        assert!(extreme.magnitude().is_finite());
        Ok(())
    }

    #[test]
    fn test_force_vector_effects_non_negative() -> Result<()> {
        assert_eq!(
            ForceFeedbackVector::new(0.0, 0.0, 0.0, -0.1, 0.0),
            Err(ValidationError::out_of_range(
                "damper",
                -0.1,
                Bound::AtLeast(0.0)
            ))
        );
        assert!(matches!(
            ForceFeedbackVector::new(0.0, 0.0, 0.0, 0.0, -1.0),
            Err(ValidationError::OutOfRange {
                field: "inertia",
                ..
            })
        ));
        assert!(ForceFeedbackVector::new(-50.0, 0.0, 0.0, 0.0, 0.0).is_ok());
        assert_eq!(
            ForceFeedbackVector::new(0.0, 0.0, 0.0, 0.0, 0.0)?,
            ForceFeedbackVector::default()
        );
        Ok(())
    }

    #[test]
    fn test_force_vector_checks_components_in_order() {
        assert!(matches!(
            ForceFeedbackVector::new(f32::NAN, 0.0, 0.0, -1.0, -1.0),
            Err(ValidationError::NonFinite { field: "x", .. })
        ));
        assert!(matches!(
            ForceFeedbackVector::new(0.0, 0.0, 0.0, f32::NAN, -1.0),
            Err(ValidationError::NonFinite {
                field: "damper",
                ..
            })
        ));
    }
}
