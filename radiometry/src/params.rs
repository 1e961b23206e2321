//! Input parameter records, validation, and unit normalization.
//!
//! [`RawParameters`] holds the user-facing inputs in conventional
//! engineering units (km, nm, mm, µm, s, dB). [`SiParameters`] holds the
//! same semantic quantities after normalization to SI base units; every
//! downstream formula reads only `SiParameters`, so mixed-unit bugs can
//! only be introduced in one place: the conversion table below.

use serde::{Deserialize, Serialize};

use crate::error::RadiometryError;

/// Unit-conversion factors, applied exactly once in [`RawParameters::to_si`].
pub mod conversion {
    /// Kilometers to meters.
    pub const M_PER_KM: f64 = 1.0e3;
    /// Nanometers to meters.
    pub const M_PER_NM: f64 = 1.0e-9;
    /// Millimeters to meters.
    pub const M_PER_MM: f64 = 1.0e-3;
    /// Micrometers to meters.
    pub const M_PER_UM: f64 = 1.0e-6;
    /// W/(sr·m²·µm) to W/(sr·m³).
    pub const RADIANCE_SI_PER_UM: f64 = 1.0e6;
}

/// User-facing sensor/optics/scene parameters in engineering units.
///
/// Fourteen physical inputs plus four loss fractions. Construct one,
/// then call [`RawParameters::to_si`] (directly or via
/// [`crate::compute`]) to validate and normalize it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawParameters {
    /// Slant range to the scene in kilometers
    pub range_km: f64,
    /// Center wavelength of the observed band in nanometers
    pub wavelength_nm: f64,
    /// Clear aperture diameter in millimeters
    pub aperture_diameter_mm: f64,
    /// Central obscuration diameter in millimeters (0 for unobscured optics)
    pub obscuration_diameter_mm: f64,
    /// Detector width in pixels
    pub pixels_x: u32,
    /// Detector height in pixels
    pub pixels_y: u32,
    /// Pixel pitch in micrometers
    pub pixel_pitch_um: f64,
    /// Effective focal length in millimeters
    pub focal_length_mm: f64,
    /// Spectral bandwidth in nanometers
    pub bandwidth_nm: f64,
    /// Typical scene spectral radiance in W/(sr·m²·µm)
    pub spectral_radiance: f64,
    /// Detector quantum efficiency (0, 1]
    pub quantum_efficiency: f64,
    /// Exposure (integration) time in seconds
    pub exposure_s: f64,
    /// Pixel full-well capacity in electrons
    pub well_capacity_e: f64,
    /// Sensor dynamic range in dB
    pub dynamic_range_db: f64,
    /// Atmospheric absorption loss fraction [0, 1)
    pub absorption_loss: f64,
    /// Atmospheric scatter loss fraction [0, 1)
    pub scatter_loss: f64,
    /// Optical train transmission loss fraction [0, 1)
    pub optical_loss: f64,
    /// Crop/vignetting loss fraction [0, 1)
    pub crop_loss: f64,
}

/// The same quantities as [`RawParameters`], normalized to SI base units.
///
/// All lengths in meters, radiance in W/(sr·m³). Dimensionless and
/// already-SI quantities pass through unchanged. Downstream stages read
/// only this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiParameters {
    /// Slant range in meters
    pub range_m: f64,
    /// Center wavelength in meters
    pub wavelength_m: f64,
    /// Clear aperture diameter in meters
    pub aperture_diameter_m: f64,
    /// Central obscuration diameter in meters
    pub obscuration_diameter_m: f64,
    /// Detector width in pixels
    pub pixels_x: u32,
    /// Detector height in pixels
    pub pixels_y: u32,
    /// Pixel pitch in meters
    pub pixel_pitch_m: f64,
    /// Effective focal length in meters
    pub focal_length_m: f64,
    /// Spectral bandwidth in meters
    pub bandwidth_m: f64,
    /// Scene spectral radiance in W/(sr·m³)
    pub spectral_radiance_si: f64,
    /// Detector quantum efficiency (0, 1]
    pub quantum_efficiency: f64,
    /// Exposure time in seconds
    pub exposure_s: f64,
    /// Pixel full-well capacity in electrons
    pub well_capacity_e: f64,
    /// Sensor dynamic range in dB
    pub dynamic_range_db: f64,
    /// Atmospheric absorption loss fraction
    pub absorption_loss: f64,
    /// Atmospheric scatter loss fraction
    pub scatter_loss: f64,
    /// Optical train transmission loss fraction
    pub optical_loss: f64,
    /// Crop/vignetting loss fraction
    pub crop_loss: f64,
}

fn require_positive(field: &'static str, value: f64) -> Result<(), RadiometryError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(RadiometryError::invalid(field, "strictly positive", value))
    }
}

fn require_loss_fraction(field: &'static str, value: f64) -> Result<(), RadiometryError> {
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(RadiometryError::invalid(field, "in [0, 1)", value))
    }
}

impl RawParameters {
    /// Validate physical plausibility of every field.
    ///
    /// # Errors
    ///
    /// Returns [`RadiometryError::InvalidParameter`] naming the first
    /// offending field and the violated constraint.
    pub fn validate(&self) -> Result<(), RadiometryError> {
        require_positive("range_km", self.range_km)?;
        require_positive("wavelength_nm", self.wavelength_nm)?;
        require_positive("aperture_diameter_mm", self.aperture_diameter_mm)?;
        if !self.obscuration_diameter_mm.is_finite() || self.obscuration_diameter_mm < 0.0 {
            return Err(RadiometryError::invalid(
                "obscuration_diameter_mm",
                "non-negative",
                self.obscuration_diameter_mm,
            ));
        }
        if self.obscuration_diameter_mm >= self.aperture_diameter_mm {
            return Err(RadiometryError::invalid(
                "obscuration_diameter_mm",
                "strictly less than aperture diameter",
                self.obscuration_diameter_mm,
            ));
        }
        if self.pixels_x == 0 {
            return Err(RadiometryError::invalid(
                "pixels_x",
                "strictly positive",
                0.0,
            ));
        }
        if self.pixels_y == 0 {
            return Err(RadiometryError::invalid(
                "pixels_y",
                "strictly positive",
                0.0,
            ));
        }
        require_positive("pixel_pitch_um", self.pixel_pitch_um)?;
        require_positive("focal_length_mm", self.focal_length_mm)?;
        require_positive("bandwidth_nm", self.bandwidth_nm)?;
        require_positive("spectral_radiance", self.spectral_radiance)?;
        if !(self.quantum_efficiency > 0.0 && self.quantum_efficiency <= 1.0) {
            return Err(RadiometryError::invalid(
                "quantum_efficiency",
                "in (0, 1]",
                self.quantum_efficiency,
            ));
        }
        require_positive("exposure_s", self.exposure_s)?;
        require_positive("well_capacity_e", self.well_capacity_e)?;
        require_positive("dynamic_range_db", self.dynamic_range_db)?;
        require_loss_fraction("absorption_loss", self.absorption_loss)?;
        require_loss_fraction("scatter_loss", self.scatter_loss)?;
        require_loss_fraction("optical_loss", self.optical_loss)?;
        require_loss_fraction("crop_loss", self.crop_loss)?;
        Ok(())
    }

    /// Validate, then normalize to SI base units.
    ///
    /// Applies the fixed multiplicative factors in [`conversion`] exactly
    /// once. No side effects.
    ///
    /// # Errors
    ///
    /// Returns [`RadiometryError::InvalidParameter`] if any field fails
    /// validation; no conversion takes place in that case.
    pub fn to_si(&self) -> Result<SiParameters, RadiometryError> {
        self.validate()?;
        Ok(SiParameters {
            range_m: self.range_km * conversion::M_PER_KM,
            wavelength_m: self.wavelength_nm * conversion::M_PER_NM,
            aperture_diameter_m: self.aperture_diameter_mm * conversion::M_PER_MM,
            obscuration_diameter_m: self.obscuration_diameter_mm * conversion::M_PER_MM,
            pixels_x: self.pixels_x,
            pixels_y: self.pixels_y,
            pixel_pitch_m: self.pixel_pitch_um * conversion::M_PER_UM,
            focal_length_m: self.focal_length_mm * conversion::M_PER_MM,
            bandwidth_m: self.bandwidth_nm * conversion::M_PER_NM,
            spectral_radiance_si: self.spectral_radiance * conversion::RADIANCE_SI_PER_UM,
            quantum_efficiency: self.quantum_efficiency,
            exposure_s: self.exposure_s,
            well_capacity_e: self.well_capacity_e,
            dynamic_range_db: self.dynamic_range_db,
            absorption_loss: self.absorption_loss,
            scatter_loss: self.scatter_loss,
            optical_loss: self.optical_loss,
            crop_loss: self.crop_loss,
        })
    }
}

impl SiParameters {
    /// Total pixel count of the detector array.
    pub fn pixel_count(&self) -> f64 {
        self.pixels_x as f64 * self.pixels_y as f64
    }

    /// Cumulative transmittance through all loss mechanisms.
    ///
    /// Product of (1 - loss) over absorption, scatter, optical, and crop
    /// losses. Always in (0, 1] for validated parameters.
    pub fn transmittance(&self) -> f64 {
        (1.0 - self.absorption_loss)
            * (1.0 - self.scatter_loss)
            * (1.0 - self.optical_loss)
            * (1.0 - self.crop_loss)
    }
}

/// Standard parameter models.
pub mod models {
    use super::*;
    use once_cell::sync::Lazy;

    /// RGB-like reference sensor at 400 km, the baseline trade-study
    /// configuration.
    pub static RGB_REFERENCE: Lazy<RawParameters> = Lazy::new(|| RawParameters {
        range_km: 400.0,
        wavelength_nm: 625.0,
        aperture_diameter_mm: 11.4,
        obscuration_diameter_mm: 0.0,
        pixels_x: 2200,
        pixels_y: 3208,
        pixel_pitch_um: 6.0,
        focal_length_mm: 16.0,
        bandwidth_nm: 300.0,
        spectral_radiance: 20.45,
        quantum_efficiency: 0.35,
        exposure_s: 1.3e-4,
        well_capacity_e: 12_000.0,
        dynamic_range_db: 55.0,
        absorption_loss: 0.11,
        scatter_loss: 0.058,
        optical_loss: 0.2,
        crop_loss: 0.6,
    });

    /// Panchromatic variant of the reference sensor: wider band centered
    /// in the visible, higher QE, no crop loss from a color filter array.
    pub static PAN_REFERENCE: Lazy<RawParameters> = Lazy::new(|| RawParameters {
        wavelength_nm: 675.0,
        bandwidth_nm: 450.0,
        quantum_efficiency: 0.45,
        crop_loss: 0.0,
        ..RGB_REFERENCE.clone()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_validates() {
        assert!(models::RGB_REFERENCE.validate().is_ok());
        assert!(models::PAN_REFERENCE.validate().is_ok());
    }

    #[test]
    fn test_conversion_round_trip() {
        let raw = models::RGB_REFERENCE.clone();
        let si = raw.to_si().unwrap();

        assert_relative_eq!(si.range_m / conversion::M_PER_KM, raw.range_km);
        assert_relative_eq!(si.wavelength_m / conversion::M_PER_NM, raw.wavelength_nm);
        assert_relative_eq!(
            si.aperture_diameter_m / conversion::M_PER_MM,
            raw.aperture_diameter_mm
        );
        assert_relative_eq!(si.pixel_pitch_m / conversion::M_PER_UM, raw.pixel_pitch_um);
        assert_relative_eq!(si.focal_length_m / conversion::M_PER_MM, raw.focal_length_mm);
        assert_relative_eq!(si.bandwidth_m / conversion::M_PER_NM, raw.bandwidth_nm);
        assert_relative_eq!(
            si.spectral_radiance_si / conversion::RADIANCE_SI_PER_UM,
            raw.spectral_radiance
        );

        // Pass-through quantities are untouched
        assert_eq!(si.quantum_efficiency, raw.quantum_efficiency);
        assert_eq!(si.exposure_s, raw.exposure_s);
        assert_eq!(si.well_capacity_e, raw.well_capacity_e);
        assert_eq!(si.dynamic_range_db, raw.dynamic_range_db);
        assert_eq!(si.pixels_x, raw.pixels_x);
        assert_eq!(si.pixels_y, raw.pixels_y);
    }

    #[test]
    fn test_obscuration_must_be_smaller_than_aperture() {
        let mut raw = models::RGB_REFERENCE.clone();

        raw.obscuration_diameter_mm = raw.aperture_diameter_mm;
        let err = raw.to_si().unwrap_err();
        assert!(matches!(
            err,
            RadiometryError::InvalidParameter {
                field: "obscuration_diameter_mm",
                ..
            }
        ));

        raw.obscuration_diameter_mm = raw.aperture_diameter_mm * 2.0;
        assert!(raw.to_si().is_err());

        // Strictly smaller is fine
        raw.obscuration_diameter_mm = raw.aperture_diameter_mm * 0.5;
        assert!(raw.to_si().is_ok());
    }

    #[test]
    fn test_quantum_efficiency_bounds() {
        let mut raw = models::RGB_REFERENCE.clone();

        raw.quantum_efficiency = 0.0;
        assert!(raw.validate().is_err());

        raw.quantum_efficiency = 1.01;
        assert!(raw.validate().is_err());

        raw.quantum_efficiency = 1.0;
        assert!(raw.validate().is_ok());
    }

    #[test]
    fn test_loss_fraction_bounds() {
        let mut raw = models::RGB_REFERENCE.clone();

        raw.scatter_loss = 1.0;
        assert!(raw.validate().is_err());

        raw.scatter_loss = -0.1;
        assert!(raw.validate().is_err());

        raw.scatter_loss = 0.0;
        assert!(raw.validate().is_ok());

        raw.scatter_loss = 0.999;
        assert!(raw.validate().is_ok());
    }

    #[test]
    fn test_positive_fields_rejected_at_zero() {
        for field in [
            "range_km",
            "wavelength_nm",
            "aperture_diameter_mm",
            "pixel_pitch_um",
            "focal_length_mm",
            "bandwidth_nm",
            "spectral_radiance",
            "exposure_s",
            "well_capacity_e",
            "dynamic_range_db",
        ] {
            let mut raw = models::RGB_REFERENCE.clone();
            match field {
                "range_km" => raw.range_km = 0.0,
                "wavelength_nm" => raw.wavelength_nm = 0.0,
                "aperture_diameter_mm" => raw.aperture_diameter_mm = 0.0,
                "pixel_pitch_um" => raw.pixel_pitch_um = 0.0,
                "focal_length_mm" => raw.focal_length_mm = 0.0,
                "bandwidth_nm" => raw.bandwidth_nm = 0.0,
                "spectral_radiance" => raw.spectral_radiance = 0.0,
                "exposure_s" => raw.exposure_s = 0.0,
                "well_capacity_e" => raw.well_capacity_e = 0.0,
                "dynamic_range_db" => raw.dynamic_range_db = 0.0,
                _ => unreachable!(),
            }
            let err = raw.validate().unwrap_err();
            match err {
                RadiometryError::InvalidParameter { field: named, .. } => {
                    assert_eq!(named, field);
                }
            }
        }
    }

    #[test]
    fn test_zero_pixel_counts_rejected() {
        let mut raw = models::RGB_REFERENCE.clone();
        raw.pixels_x = 0;
        assert!(raw.validate().is_err());

        let mut raw = models::RGB_REFERENCE.clone();
        raw.pixels_y = 0;
        assert!(raw.validate().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut raw = models::RGB_REFERENCE.clone();
        raw.range_km = f64::NAN;
        assert!(raw.validate().is_err());

        let mut raw = models::RGB_REFERENCE.clone();
        raw.focal_length_mm = f64::INFINITY;
        assert!(raw.validate().is_err());
    }

    #[test]
    fn test_transmittance() {
        let si = models::RGB_REFERENCE.to_si().unwrap();
        let expected = (1.0 - 0.11) * (1.0 - 0.058) * (1.0 - 0.2) * (1.0 - 0.6);
        assert_relative_eq!(si.transmittance(), expected);
        assert!(si.transmittance() > 0.0);
    }

    #[test]
    fn test_pixel_count() {
        let si = models::RGB_REFERENCE.to_si().unwrap();
        assert_eq!(si.pixel_count(), 2200.0 * 3208.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let raw = models::RGB_REFERENCE.clone();
        let json = serde_json::to_string(&raw).unwrap();
        let back: RawParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(raw, back);
    }
}
