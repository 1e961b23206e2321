//! Optical and geometric quantities derived from the normalized parameters.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::constants::{EARTH_RADIUS_M, ORBITAL_SPEED_CONSTANT};
use crate::error::RadiometryError;
use crate::params::SiParameters;

/// Geometric quantities feeding the signal model.
///
/// Pure function of [`SiParameters`] and the fixed constants in
/// [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryDerived {
    /// Clear aperture collecting area in m²
    pub aperture_area_m2: f64,
    /// Central obscuration area in m²
    pub obscuration_area_m2: f64,
    /// Total detector array area in m²
    pub detector_area_m2: f64,
    /// Instantaneous per-pixel field of view in degrees
    pub pixel_ifov_deg: f64,
    /// Ground distance traversed by the pixel footprint during exposure, in meters
    pub ground_smear_m: f64,
}

/// Area of a circle from its diameter.
fn circle_area_m2(diameter_m: f64) -> f64 {
    PI * diameter_m.powi(2) / 4.0
}

impl GeometryDerived {
    /// Derive all geometric quantities from normalized parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RadiometryError::InvalidParameter`] if the obscuration
    /// area is not strictly smaller than the aperture area. Parameters
    /// built through [`crate::RawParameters::to_si`] have already
    /// excluded this, but a hand-built `SiParameters` may not have.
    pub fn from_si(si: &SiParameters) -> Result<Self, RadiometryError> {
        let aperture_area_m2 = circle_area_m2(si.aperture_diameter_m);
        let obscuration_area_m2 = circle_area_m2(si.obscuration_diameter_m);

        if obscuration_area_m2 >= aperture_area_m2 {
            return Err(RadiometryError::invalid(
                "obscuration_diameter_m",
                "obscuration area strictly less than aperture area",
                si.obscuration_diameter_m,
            ));
        }

        let detector_area_m2 = si.pixel_pitch_m.powi(2) * si.pixel_count();

        let pixel_ifov_deg = (2.0 * (0.5 * si.pixel_pitch_m / si.focal_length_m).atan()).to_degrees();

        // Circular-orbit ground speed approximation. The *1000 belongs to
        // the constant's units, not to the exposure term.
        let ground_speed_m_s =
            (ORBITAL_SPEED_CONSTANT / (si.range_m + EARTH_RADIUS_M)).sqrt() * 1000.0;
        let ground_smear_m = si.exposure_s * ground_speed_m_s;

        Ok(Self {
            aperture_area_m2,
            obscuration_area_m2,
            detector_area_m2,
            pixel_ifov_deg,
            ground_smear_m,
        })
    }

    /// Net collecting area after subtracting the central obscuration, in m².
    pub fn collecting_area_m2(&self) -> f64 {
        self.aperture_area_m2 - self.obscuration_area_m2
    }
}
