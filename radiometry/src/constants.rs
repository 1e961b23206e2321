//! Physical and model constants used across the pipeline.
//!
//! Every stage takes its inputs explicitly; these constants are the only
//! values shared between stages, and all of them are compile-time
//! immutable.

/// Planck constant in J·s.
pub const PLANCK_J_S: f64 = 6.62607015e-34;

/// Speed of light in vacuum in m/s.
pub const SPEED_OF_LIGHT_M_S: f64 = 2.99792458e8;

/// Earth mean equatorial radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Orbital ground-speed constant for the circular-orbit approximation.
///
/// sqrt(this / (range_m + EARTH_RADIUS_M)) * 1000 gives the platform
/// ground speed in m/s. The trailing *1000 is part of the approximation,
/// not a generic unit conversion; keep the two together.
pub const ORBITAL_SPEED_CONSTANT: f64 = 398_600_000.5;

/// Dark current rate in electrons per pixel per second.
///
/// The model treats dark current as a fixed rate rather than a
/// per-sensor input. Override via [`crate::NoiseResult::with_dark_current_rate`]
/// when a sensor-specific figure is available.
pub const DARK_CURRENT_E_PER_S: f64 = 100.0;

/// ADC quantization noise floor in electrons.
pub const QUANTIZATION_NOISE_E: f64 = 5.0;

/// Fixed-pattern noise as a fraction of collected signal (0.05%).
pub const FIXED_PATTERN_FRACTION: f64 = 5e-4;
