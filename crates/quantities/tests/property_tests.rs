//! Property-based tests for quantity construction.
//!
//! Covers finiteness by construction, unit round trips and the inclusive
//! bounds of each domain.

use openracing_test_helpers::prelude::*;
use proptest::prelude::*;
use racing_wheel_quantities::{
    EngineRpm, ErrorKind, ForceFeedbackVector, GForce, Scale, ShockVelocity, Speed,
    SteeringWheelAngle, Torque, Velocity, YawRate,
};

fn non_finite() -> impl Strategy<Value = f32> {
    prop::sample::select(NON_FINITE_F32.to_vec())
}

mod finiteness {
    use super::*;

    proptest! {
        #[test]
        fn torque_accepts_any_finite(value in prop::num::f32::NORMAL | prop::num::f32::ZERO) {
            let torque = Torque::new(value);
            prop_assert!(torque.is_ok());
            prop_assert!(torque.map(Torque::newton_meters).is_ok_and(f32::is_finite));
        }

        #[test]
        fn every_scalar_rejects_non_finite(value in non_finite()) {
            prop_assert_eq!(must_err(Torque::new(value)).kind(), ErrorKind::NonFinite);
            prop_assert_eq!(must_err(YawRate::new(value)).kind(), ErrorKind::NonFinite);
            prop_assert_eq!(must_err(Speed::new(value)).kind(), ErrorKind::NonFinite);
            prop_assert_eq!(must_err(GForce::new(value)).kind(), ErrorKind::NonFinite);
            prop_assert_eq!(must_err(Scale::new(value)).kind(), ErrorKind::NonFinite);
            prop_assert_eq!(must_err(ShockVelocity::new(value)).kind(), ErrorKind::NonFinite);
            prop_assert_eq!(must_err(EngineRpm::new(value, None)).kind(), ErrorKind::NonFinite);
        }

        #[test]
        fn vectors_reject_any_non_finite_component(
            value in non_finite(),
            position in 0usize..5,
        ) {
            let mut components = [1.0_f32; 5];
            if let Some(slot) = components.get_mut(position) {
                *slot = value;
            }
            let [x, y, z, damper, inertia] = components;
            let err = must_err(ForceFeedbackVector::new(x, y, z, damper, inertia));
            prop_assert_eq!(err.kind(), ErrorKind::NonFinite);
            if position < 3 {
                prop_assert!(Velocity::new(x, y, z).is_err());
            }
        }

        #[test]
        fn constructed_vector_magnitude_is_finite(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            z in -1000.0f32..1000.0,
        ) {
            let vector = must(ForceFeedbackVector::new(x, y, z, 0.0, 0.0));
            prop_assert!(vector.magnitude().is_finite());
            prop_assert!(vector.magnitude() >= 0.0);
        }
    }

    #[test]
    fn extreme_finite_values_are_kept() {
        for value in EXTREME_FINITE_F32 {
            assert_eq!(must(Torque::new(value)).newton_meters().to_bits(), value.to_bits());
        }
    }
}

mod round_trips {
    use super::*;

    proptest! {
        #[test]
        fn speed_kmh_round_trip(kmh in 0.0f32..1000.0) {
            let speed = must(Speed::from_kilometers_per_hour(kmh));
            assert_relative_eq!(speed.to_kilometers_per_hour(), kmh, 1e-5);
        }

        #[test]
        fn speed_mph_round_trip(mph in 0.0f32..600.0) {
            let speed = must(Speed::from_miles_per_hour(mph));
            assert_relative_eq!(speed.to_miles_per_hour(), mph, 1e-5);
        }

        #[test]
        fn scale_decimal_round_trip(decimal in 0.0f32..10.0) {
            let scale = must(Scale::from_decimal(decimal));
            assert_relative_eq!(scale.as_decimal(), decimal, 1e-5);
        }

        #[test]
        fn steering_degrees_round_trip(
            lock in 0.01f32..50.0,
            fraction in -1.0f32..=1.0,
        ) {
            let angle = must(SteeringWheelAngle::new(lock * fraction, lock));
            let back = must(SteeringWheelAngle::from_degrees(angle.to_degrees(), lock));
            assert_relative_eq!(back.radians(), angle.radians(), 1e-5);
            prop_assert!(back.radians().abs() <= back.max_radians());
        }

        #[test]
        fn steering_degrees_round_trip_at_lock(lock in 0.01f32..50.0) {
            for radians in [lock, -lock] {
                let angle = must(SteeringWheelAngle::new(radians, lock));
                let back = must(SteeringWheelAngle::from_degrees(angle.to_degrees(), lock));
                assert_relative_eq!(back.radians(), radians, 1e-5);
            }
        }

        #[test]
        fn yaw_degrees_round_trip(degrees_per_second in -720.0f32..720.0) {
            let yaw = must(YawRate::from_degrees_per_second(degrees_per_second));
            assert_relative_eq!(yaw.to_degrees_per_second(), degrees_per_second, 1e-4);
        }
    }
}

mod boundaries {
    use super::*;

    proptest! {
        #[test]
        fn negative_speed_rejected(value in -1000.0f32..-1e-6) {
            let err = must_err(Speed::new(value));
            prop_assert_eq!(err.kind(), ErrorKind::Range);
            prop_assert_eq!(err.field(), Some("meters_per_second"));
        }

        #[test]
        fn rpm_above_max_rejected(max in 1.0f32..20000.0, excess in 1.0f32..1000.0) {
            let err = must_err(EngineRpm::new(max + excess, Some(max)));
            prop_assert_eq!(err.field(), Some("value"));
            prop_assert!(EngineRpm::new(max, Some(max)).is_ok());
        }

        #[test]
        fn g_force_within_bound(value in -32.0f32..=32.0) {
            prop_assert!(GForce::new(value).is_ok());
        }

        #[test]
        fn angle_beyond_lock_rejected(lock in 0.5f32..20.0, excess in 0.01f32..5.0) {
            let err = must_err(SteeringWheelAngle::new(lock + excess, lock));
            prop_assert_eq!(err.field(), Some("radians"));
            let err = must_err(SteeringWheelAngle::new(-(lock + excess), lock));
            prop_assert_eq!(err.field(), Some("radians"));
        }
    }

    #[test]
    fn speed_zero_accepted_tiny_negative_rejected() {
        assert_approx_eq!(must(Speed::new(0.0)).meters_per_second(), 0.0, f32::EPSILON);
        let err = must_err(Speed::new(-0.0001));
        assert_eq!(err.field(), Some("meters_per_second"));
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn steering_lock_is_inclusive() {
        let lock = 2.5 * std::f32::consts::PI;
        assert!(SteeringWheelAngle::new(lock, lock).is_ok());
        assert!(SteeringWheelAngle::new(-lock, lock).is_ok());
    }

    #[test]
    fn g_force_bound_is_inclusive() {
        assert!(GForce::new(GForce::MAX_MAGNITUDE).is_ok());
        assert!(GForce::new(-GForce::MAX_MAGNITUDE).is_ok());
        assert_eq!(must_err(GForce::new(32.5)).kind(), ErrorKind::Range);
    }
}
