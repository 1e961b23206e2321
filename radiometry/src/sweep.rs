//! Batch evaluation over a swept parameter.
//!
//! Every sweep point is an independent pure function of its parameters,
//! so the grid is an embarrassingly parallel map.

use rayon::prelude::*;

use crate::error::RadiometryError;
use crate::params::RawParameters;
use crate::snr::{compute, SnrReport};

/// Evaluate the pipeline across a grid of values for one parameter.
///
/// `apply` writes each grid value into a copy of `base` before
/// evaluation. Results come back in grid order regardless of scheduling.
///
/// # Errors
///
/// Fails with the first [`RadiometryError::InvalidParameter`] produced by
/// any grid point (e.g. a sweep that drives a loss fraction to 1.0).
///
/// # Examples
///
/// ```rust
/// use radiometry::params::models;
/// use radiometry::sweep;
///
/// let exposures: Vec<f64> = (1..=10).map(|i| i as f64 * 1e-5).collect();
/// let results = sweep(&models::RGB_REFERENCE, &exposures, |params, t| {
///     params.exposure_s = t;
/// })
/// .unwrap();
///
/// assert_eq!(results.len(), exposures.len());
/// ```
pub fn sweep<F>(
    base: &RawParameters,
    values: &[f64],
    apply: F,
) -> Result<Vec<(f64, SnrReport)>, RadiometryError>
where
    F: Fn(&mut RawParameters, f64) + Sync,
{
    values
        .par_iter()
        .map(|&value| {
            let mut params = base.clone();
            apply(&mut params, value);
            compute(&params).map(|report| (value, report))
        })
        .collect()
}

/// Evenly spaced grid of `steps` values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start];
    }
    let stride = (end - start) / (steps - 1) as f64;
    (0..steps).map(|i| start + stride * i as f64).collect()
}
