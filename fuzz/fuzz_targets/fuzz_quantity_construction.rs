//! Fuzzes every quantity constructor with arbitrary bit patterns.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_quantity_construction
#![no_main]
use libfuzzer_sys::fuzz_target;
use racing_wheel_quantities::{
    EngineRpm, ForceFeedbackVector, GForce, Scale, ShockVelocity, Speed, SteeringWheelAngle,
    TireLoad, Torque, Velocity, YawRate, YawRateFactor,
};

fn floats(data: &[u8]) -> impl Iterator<Item = f32> + '_ {
    data.chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
}

fuzz_target!(|data: &[u8]| {
    let mut it = floats(data);
    let (Some(a), Some(b), Some(c), Some(d), Some(e)) =
        (it.next(), it.next(), it.next(), it.next(), it.next())
    else {
        return;
    };

    // Anything that constructs must hold finite values.
    if let Ok(t) = Torque::new(a) {
        assert!(t.newton_meters().is_finite());
    }
    if let Ok(s) = Speed::from_kilometers_per_hour(a) {
        assert!(s.meters_per_second() >= 0.0);
    }
    if let Ok(s) = Scale::from_decimal(b) {
        assert!(s.percentage().is_finite());
    }
    if let Ok(rpm) = EngineRpm::new(a, Some(b)) {
        assert!(rpm.value() <= b);
    }
    if let Ok(g) = GForce::from_acceleration(c) {
        assert!(g.value().abs() <= GForce::MAX_MAGNITUDE);
    }
    let _ = ShockVelocity::new(d);
    let _ = TireLoad::new(d, e);
    let _ = Velocity::new(a, b, c);
    if let Ok(v) = ForceFeedbackVector::new(a, b, c, d, e) {
        assert!(v.damper() >= 0.0 && v.inertia() >= 0.0);
    }

    if let (Ok(angle), Ok(speed), Ok(yaw)) = (
        SteeringWheelAngle::from_degrees(a, b),
        Speed::new(c),
        YawRate::new(d),
    ) {
        assert!(angle.radians().abs() <= angle.max_radians());
        if let Ok(factor) = YawRateFactor::from_components(angle, speed, yaw) {
            assert!(factor.value().is_finite());
        }
    }
});
