//! Multi-source noise budget in electron units.
//!
//! Five independent closed-form noise terms. Each is exposed
//! individually, not just as a combined total, because trade studies
//! hinge on identifying the dominant source.

use serde::{Deserialize, Serialize};

use crate::constants::{DARK_CURRENT_E_PER_S, FIXED_PATTERN_FRACTION, QUANTIZATION_NOISE_E};
use crate::params::SiParameters;

/// Expected noise magnitudes per source, all in electrons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseResult {
    /// Shot noise, sqrt of collected electrons (Poisson)
    pub shot_e: f64,
    /// Dark-current noise accumulated over the exposure
    pub dark_e: f64,
    /// ADC quantization noise floor
    pub quantization_e: f64,
    /// Fixed-pattern (response non-uniformity) noise, proportional to signal
    pub fixed_pattern_e: f64,
    /// Readout noise, well capacity over the voltage-domain dynamic range
    pub readout_e: f64,
}

impl NoiseResult {
    /// Compute all five noise terms for a given collected electron count.
    ///
    /// Uses the model's fixed dark-current rate of
    /// [`DARK_CURRENT_E_PER_S`]; use
    /// [`NoiseResult::with_dark_current_rate`] for sensor-specific rates.
    pub fn compute(electrons: f64, si: &SiParameters) -> Self {
        Self::with_dark_current_rate(electrons, si, DARK_CURRENT_E_PER_S)
    }

    /// Compute the noise terms with an explicit dark-current rate in e⁻/s.
    pub fn with_dark_current_rate(
        electrons: f64,
        si: &SiParameters,
        dark_current_e_per_s: f64,
    ) -> Self {
        Self {
            shot_e: electrons.sqrt(),
            dark_e: dark_current_e_per_s * si.exposure_s,
            quantization_e: QUANTIZATION_NOISE_E,
            fixed_pattern_e: FIXED_PATTERN_FRACTION * electrons,
            readout_e: si.well_capacity_e / 10f64.powf(si.dynamic_range_db / 20.0),
        }
    }

    /// Name and magnitude of the largest noise term.
    pub fn dominant(&self) -> (&'static str, f64) {
        let terms = [
            ("shot", self.shot_e),
            ("dark", self.dark_e),
            ("quantization", self.quantization_e),
            ("fixed_pattern", self.fixed_pattern_e),
            ("readout", self.readout_e),
        ];
        terms
            .into_iter()
            .fold(("shot", f64::MIN), |best, term| {
                if term.1 > best.1 {
                    term
                } else {
                    best
                }
            })
    }
}
