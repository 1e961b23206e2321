//! Photon-to-electron signal model.
//!
//! Converts collected optical power into a per-pixel electron count using
//! a first-order radiometric model: detector area times the
//! collecting-area-over-focal-length² solid-angle term times spectral
//! bandwidth times radiance times cumulative transmittance, then photon
//! energy E = hc/λ to go from watts to photons, uniform illumination to
//! go from total flux to per-pixel flux, and quantum efficiency over the
//! exposure to go from photons to electrons.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{PLANCK_J_S, SPEED_OF_LIGHT_M_S};
use crate::geometry::GeometryDerived;
use crate::params::SiParameters;

/// Detected power, photon rates, and the collected electron count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    /// Optical power collected on the detector in watts
    pub collected_power_w: f64,
    /// Total detected photon rate over the whole array, photons/s
    pub total_photon_rate: f64,
    /// Per-pixel photon rate assuming uniform illumination, photons/s
    pub pixel_photon_rate: f64,
    /// Electrons collected in one pixel during the exposure
    pub electrons: f64,
    /// Collected electrons as a fraction of the well capacity
    pub saturation_fraction: f64,
}

impl SignalResult {
    /// Compute the signal chain for one operating point.
    ///
    /// Logs a warning when the pixel saturates; the numbers remain
    /// computable but the SNR estimate is physically meaningless at a
    /// clipped operating point, so callers should check
    /// [`SignalResult::is_saturated`].
    pub fn compute(si: &SiParameters, geometry: &GeometryDerived) -> Self {
        let collected_power_w = geometry.detector_area_m2
            * (geometry.collecting_area_m2() / si.focal_length_m.powi(2))
            * si.bandwidth_m
            * si.spectral_radiance_si
            * si.transmittance();

        // E = hc/λ per photon
        let total_photon_rate =
            si.wavelength_m * collected_power_w / (SPEED_OF_LIGHT_M_S * PLANCK_J_S);

        // Uniform illumination across the array
        let pixel_photon_rate = total_photon_rate / si.pixel_count();

        let electrons = pixel_photon_rate * si.quantum_efficiency * si.exposure_s;
        let saturation_fraction = electrons / si.well_capacity_e;

        if saturation_fraction >= 1.0 {
            warn!(
                electrons,
                well_capacity_e = si.well_capacity_e,
                saturation_fraction,
                "pixel saturated; SNR estimate is not meaningful at this operating point"
            );
        }

        Self {
            collected_power_w,
            total_photon_rate,
            pixel_photon_rate,
            electrons,
            saturation_fraction,
        }
    }

    /// True when the collected charge reaches or exceeds the well capacity.
    pub fn is_saturated(&self) -> bool {
        self.saturation_fraction >= 1.0
    }
}
