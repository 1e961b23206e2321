//! Error types for the radiometric pipeline.

use thiserror::Error;

/// Errors from parameter validation and derivation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RadiometryError {
    /// A parameter violates its physical-plausibility constraint.
    ///
    /// Raised before any numeric computation proceeds; invalid input is a
    /// caller bug, not a transient condition, so there are no retry
    /// semantics and no partial result.
    #[error("invalid parameter `{field}`: must be {constraint}, got {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        field: &'static str,
        /// The violated constraint, human readable.
        constraint: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl RadiometryError {
    pub(crate) fn invalid(field: &'static str, constraint: &'static str, value: f64) -> Self {
        Self::InvalidParameter {
            field,
            constraint,
            value,
        }
    }
}
