//! End-to-end check of the full pipeline against the RGB reference
//! sensor's expected performance figures (1% relative tolerance).

use approx::assert_relative_eq;
use radiometry::params::models;
use radiometry::{compute, RawParameters};

fn reference() -> RawParameters {
    models::RGB_REFERENCE.clone()
}

#[test]
fn reference_scenario_matches_expected_figures() {
    let report = compute(&reference()).unwrap();

    assert_relative_eq!(
        report.geometry.aperture_area_m2,
        1.021e-4,
        max_relative = 0.01
    );
    assert_relative_eq!(
        report.geometry.detector_area_m2,
        2.541e-4,
        max_relative = 0.01
    );
    assert_relative_eq!(report.geometry.pixel_ifov_deg, 0.0215, max_relative = 0.01);
    assert_relative_eq!(report.geometry.ground_smear_m, 0.997, max_relative = 0.01);

    assert_relative_eq!(report.signal.electrons, 3.38e3, max_relative = 0.01);
    assert_relative_eq!(
        report.signal.saturation_fraction,
        0.282,
        max_relative = 0.01
    );

    assert_relative_eq!(report.noise.shot_e, 58.2, max_relative = 0.01);
    assert_relative_eq!(report.noise.readout_e, 21.3, max_relative = 0.01);

    assert_relative_eq!(report.snr.linear, 7.4, max_relative = 0.01);
    assert_relative_eq!(report.snr.db, 8.7, max_relative = 0.01);
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let a = compute(&reference()).unwrap();
    let b = compute(&reference()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn all_outputs_non_negative() {
    let report = compute(&reference()).unwrap();

    assert!(report.geometry.aperture_area_m2 >= 0.0);
    assert!(report.geometry.obscuration_area_m2 >= 0.0);
    assert!(report.geometry.detector_area_m2 >= 0.0);
    assert!(report.signal.electrons >= 0.0);
    assert!(report.signal.saturation_fraction >= 0.0);
    assert!(report.noise.shot_e >= 0.0);
    assert!(report.noise.dark_e >= 0.0);
    assert!(report.noise.quantization_e >= 0.0);
    assert!(report.noise.fixed_pattern_e >= 0.0);
    assert!(report.noise.readout_e >= 0.0);
    assert!(report.snr.linear > 0.0);
}

#[test]
fn exposure_monotonicity_below_saturation() {
    let mut previous = 0.0;
    for exposure in [2.0e-5, 5.0e-5, 1.0e-4, 2.0e-4] {
        let mut raw = reference();
        raw.exposure_s = exposure;
        let report = compute(&raw).unwrap();
        assert!(!report.signal.is_saturated());
        assert!(report.signal.electrons > previous);
        previous = report.signal.electrons;
    }
}

#[test]
fn validation_failures_name_the_field() {
    let mut raw = reference();
    raw.obscuration_diameter_mm = raw.aperture_diameter_mm;
    let err = compute(&raw).unwrap_err();
    assert!(err.to_string().contains("obscuration_diameter_mm"));

    let mut raw = reference();
    raw.quantum_efficiency = 0.0;
    let err = compute(&raw).unwrap_err();
    assert!(err.to_string().contains("quantum_efficiency"));
}
