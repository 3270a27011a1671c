//! Shared error types.

use thiserror::Error;

/// Top-level error type for the crate.
///
/// The near-singularity case (a query point within
/// [`SINGULARITY_EPSILON`](crate::constants::SINGULARITY_EPSILON) of the
/// charge) is deliberately *not* an error; it returns a zero vector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Raised when a query point's dimensionality is incompatible with the
    /// charge's, after the 2D-to-3D zero-padding promotion.
    #[error("dimensionality mismatch: charge is {charge_dim}D but query point is {point_dim}D")]
    DimensionalityMismatch {
        /// Dimensionality of the charge position.
        charge_dim: usize,
        /// Dimensionality of the offending query point.
        point_dim: usize,
    },
    /// Raised before any evaluation when a sample request is malformed
    /// (zero point count, non-positive radius, inverted grid range).
    #[error("invalid sample parameters: {0}")]
    InvalidSampleParameters(String),
}
