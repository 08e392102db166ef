//! Fuzzes loading recorded telemetry snapshots from JSON.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_telemetry_point_json
#![no_main]
use libfuzzer_sys::fuzz_target;
use racing_wheel_quantities::{SAMPLE_COUNT, TelemetryDataPoint};

fuzz_target!(|data: &[u8]| {
    // Must never panic on arbitrary bytes; rejected input is expected.
    if let Ok(point) = serde_json::from_slice::<TelemetryDataPoint>(data) {
        assert_eq!(point.steering_wheel_torque_samples().len(), SAMPLE_COUNT);
        assert!(point.throttle().is_finite() && point.brake().is_finite());
    }
});
