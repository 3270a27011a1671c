//! Convenience re-exports for field evaluation and sampling.

pub use crate::charge::{PointCharge, SpatialVec};
pub use crate::constants::*;
pub use crate::errors::FieldError;
pub use crate::field::evaluate;
pub use crate::io::{write_sample_csv, write_sample_vtk, write_vtk_header};
pub use crate::math::{linspace, Scalar, R2, R3};
pub use crate::sampler::{sample, sample_sphere_adaptive, SampleSet, ShapeDescriptor};
