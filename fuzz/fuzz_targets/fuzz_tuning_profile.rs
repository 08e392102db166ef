//! Fuzzes the YAML and JSON tuning profile parsers.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_tuning_profile
#![no_main]
use libfuzzer_sys::fuzz_target;
use racing_wheel_quantities::FfbTuning;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    for tuning in [FfbTuning::from_yaml_str(text), FfbTuning::from_json_str(text)]
        .into_iter()
        .flatten()
    {
        assert!(tuning.max_steering_radians() > 0.0);
    }
});
