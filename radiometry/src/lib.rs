//! Closed-form radiometric SNR estimation for electro-optical imaging sensors
//!
//! This crate computes the signal-to-noise ratio of a single pixel in an
//! imaging sensor observing a distant, diffuse spectral source. It is a
//! first-order performance estimator for design trade studies: given a
//! fixed set of optical, detector, and atmospheric-loss parameters, it
//! answers whether an aperture/detector combination meets a target SNR at
//! a given range and exposure time.
//!
//! The computation is a pure function-composition pipeline:
//! parameter validation and unit normalization, geometric derivations,
//! photon-to-electron signal conversion, a multi-source noise budget, and
//! the final SNR combination. Identical inputs always yield identical
//! outputs.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod noise;
pub mod params;
pub mod signal;
pub mod snr;
pub mod sweep;

// Re-exports for easier access
pub use error::RadiometryError;
pub use geometry::GeometryDerived;
pub use noise::NoiseResult;
pub use params::{RawParameters, SiParameters};
pub use signal::SignalResult;
pub use snr::{compute, SnrReport, SnrResult};
pub use sweep::sweep;
