//! Integration tests for per-tick telemetry snapshots.

use chrono::{DateTime, TimeZone, Utc};
use openracing_test_helpers::prelude::*;
use racing_wheel_quantities::{
    EngineRpm, ErrorKind, GForce, SAMPLE_COUNT, ShockVelocity, Speed, SteeringWheelAngle,
    TelemetryDataPoint, TelemetryDataPointBuilder, Torque, ValidationError, Velocity, YawRate,
    YawRateFactor,
};

fn sample_time() -> DateTime<Utc> {
    must_some(
        Utc.with_ymd_and_hms(2025, 3, 16, 5, 0, 0).single(),
        "valid timestamp",
    )
}

fn torques(count: usize) -> Vec<Torque> {
    (0..count)
        .map(|i| must(Torque::new(i as f32 * 0.5 - 1.0)))
        .collect()
}

fn shocks(count: usize) -> Vec<ShockVelocity> {
    (0..count)
        .map(|i| must(ShockVelocity::new(i as f32 * 0.01 - 0.03)))
        .collect()
}

fn builder() -> TelemetryDataPointBuilder {
    TelemetryDataPoint::builder()
        .steering_wheel_angle(must(SteeringWheelAngle::from_degrees(45.0, 7.85)))
        .yaw_rate(must(YawRate::new(0.35)))
        .velocity(must(Velocity::new(30.0, -0.4, 0.0)))
        .speed(must(Speed::from_kilometers_per_hour(108.0)))
        .g_force(must(GForce::new(1.8)))
        .engine_rpm(must(EngineRpm::new(7200.0, Some(8500.0))))
        .steering_wheel_torque_samples(&torques(SAMPLE_COUNT))
        .shock_velocities(&shocks(SAMPLE_COUNT))
        .timestamp(sample_time())
}

#[test]
fn six_samples_build() -> TestResult {
    let point = builder().gear(4).throttle(0.9).build()?;
    assert_eq!(point.steering_wheel_torque_samples().len(), 6);
    assert_eq!(point.shock_velocities().len(), 6);
    assert_eq!(point.gear(), 4);
    assert_eq!(point.timestamp(), sample_time());
    assert_approx_eq!(point.speed().meters_per_second(), 30.0, 1e-4);
    let last = must_some(point.steering_wheel_torque_samples().last(), "six samples");
    assert_approx_eq!(last.newton_meters(), 1.5, 1e-6);
    Ok(())
}

#[test]
fn five_torque_samples_rejected() {
    let err = must_err(
        builder()
            .steering_wheel_torque_samples(&torques(5))
            .build(),
    );
    assert_eq!(
        err,
        ValidationError::WrongLength {
            field: "steering_wheel_torque_samples",
            expected: 6,
            actual: 5,
        }
    );
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert_contains!(err.to_string(), "steering_wheel_torque_samples");
}

#[test]
fn seven_shock_velocities_rejected() {
    let err = must_err(builder().shock_velocities(&shocks(7)).build());
    assert_eq!(err.field(), Some("shock_velocities"));
}

#[test]
fn unset_timestamp_rejected() {
    let err = must_err(builder().timestamp(DateTime::<Utc>::default()).build());
    assert_eq!(err, ValidationError::Required("timestamp"));
    assert_eq!(err.kind(), ErrorKind::Structural);
}

#[test]
fn optional_fields_default() -> TestResult {
    let point = builder().build()?;
    assert!(point.is_on_track());
    assert_eq!(point.gear(), 0);
    assert_approx_eq!(point.throttle(), 0.0, f32::EPSILON);
    assert_approx_eq!(point.brake(), 0.0, f32::EPSILON);
    Ok(())
}

#[test]
fn non_finite_pedals_rejected() {
    for value in NON_FINITE_F32 {
        let err = must_err(builder().throttle(value).build());
        assert_eq!(err.field(), Some("throttle"));
        assert_eq!(err.kind(), ErrorKind::NonFinite);
    }
}

#[test]
fn snapshot_feeds_yaw_rate_factor() -> TestResult {
    let point = builder().build()?;
    let factor = YawRateFactor::from_components(
        point.steering_wheel_angle(),
        point.speed(),
        point.yaw_rate(),
    )?;
    let expected = 45.0_f32.to_radians() * 30.0 / 0.35;
    assert_relative_eq!(factor.value(), expected, 1e-4);
    Ok(())
}

#[test]
fn json_round_trip() -> TestResult {
    let point = builder().gear(-1).is_on_track(false).brake(0.4).build()?;
    let json = serde_json::to_string(&point)?;
    let restored: TelemetryDataPoint = serde_json::from_str(&json)?;
    assert_eq!(point, restored);
    Ok(())
}

#[test]
fn deserialization_validates() -> TestResult {
    let point = builder().build()?;
    let mut value = serde_json::to_value(point)?;

    let truncated = {
        let mut v = value.clone();
        if let Some(samples) = v
            .get_mut("steering_wheel_torque_samples")
            .and_then(serde_json::Value::as_array_mut)
        {
            samples.pop();
        }
        v
    };
    let err = must_err(serde_json::from_value::<TelemetryDataPoint>(truncated));
    assert_contains!(err.to_string(), "steering_wheel_torque_samples");

    if let Some(speed) = value.get_mut("speed") {
        *speed = serde_json::json!(-3.0);
    }
    let err = must_err(serde_json::from_value::<TelemetryDataPoint>(value));
    assert_contains!(err.to_string(), "meters_per_second");
    Ok(())
}

#[test]
fn optional_fields_default_on_load() -> TestResult {
    let point = builder().gear(3).is_on_track(false).build()?;
    let mut value = serde_json::to_value(point)?;
    if let Some(object) = value.as_object_mut() {
        object.remove("gear");
        object.remove("is_on_track");
        object.remove("throttle");
        object.remove("brake");
    }
    let restored: TelemetryDataPoint = serde_json::from_value(value)?;
    assert_eq!(restored.gear(), 0);
    assert!(restored.is_on_track());
    Ok(())
}
