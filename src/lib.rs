#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and numeric policy values.
pub mod constants;
/// Shared mathematical utilities (vector aliases, linspace).
pub mod math;
/// Point charges and the tagged 2D/3D spatial vector.
pub mod charge;
/// Single-point Coulomb-law field evaluation.
pub mod field;
/// Bulk field sampling over grids and spherical shells.
pub mod sampler;
/// Error types.
pub mod errors;
/// Export helpers (CSV, VTK).
pub mod io;

/// Common exports for downstream crates.
pub mod prelude;

pub use charge::{PointCharge, SpatialVec};
pub use errors::FieldError;
pub use field::evaluate;
pub use sampler::{sample, sample_sphere_adaptive, SampleSet, ShapeDescriptor};
