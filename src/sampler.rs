//! Bulk field evaluation over structured point sets.

use std::f64::consts::PI;

use crate::charge::{PointCharge, SpatialVec};
use crate::constants::SINGULARITY_EPSILON;
use crate::errors::FieldError;
use crate::field::evaluate;
use crate::math::{linspace, Scalar};

/// Description of a structured point set to sample the field over.
///
/// Both shapes generate `n_points × n_points` coordinates in row-major
/// order; see [`sample`] for the exact index-to-coordinate mapping.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeDescriptor {
    /// Rectangular grid spanning `x_range × y_range`, endpoints inclusive.
    /// Produces 2D points for a 2D charge and z = 0 points for a 3D charge.
    Grid {
        /// (xmin, xmax) in meters; xmin must be strictly less than xmax.
        x_range: (Scalar, Scalar),
        /// (ymin, ymax) in meters; ymin must be strictly less than ymax.
        y_range: (Scalar, Scalar),
        /// Point count per axis; must be nonzero.
        n_points: usize,
    },
    /// Spherical shell of the given radius centered on the origin,
    /// parameterized by polar angle θ ∈ [0, π] and azimuth φ ∈ [0, 2π].
    /// Requires a 3D charge.
    Sphere {
        /// Shell radius in meters; must be strictly positive.
        radius: Scalar,
        /// Point count per angular axis; must be nonzero.
        n_points: usize,
    },
}

/// Parallel arrays of query points and the field vectors found there.
///
/// Invariant: `points().len() == vectors().len()`, and index `i` of one
/// always corresponds to index `i` of the other. Ordering is significant
/// and stable across calls with identical inputs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    points: Vec<SpatialVec>,
    vectors: Vec<SpatialVec>,
}

impl SampleSet {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            vectors: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, point: SpatialVec, vector: SpatialVec) {
        self.points.push(point);
        self.vectors.push(vector);
    }

    /// Query points, in generation order.
    #[must_use]
    pub fn points(&self) -> &[SpatialVec] {
        &self.points
    }

    /// Field vectors; `vectors()[i]` is the field at `points()[i]`.
    #[must_use]
    pub fn vectors(&self) -> &[SpatialVec] {
        &self.vectors
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the set holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over (point, vector) pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&SpatialVec, &SpatialVec)> {
        self.points.iter().zip(self.vectors.iter())
    }

    /// Direction-only copy of the set for arrow/quiver rendering: each
    /// vector is divided by its own magnitude *plus* the singularity
    /// epsilon. The soft guard means a zero field maps to a near-zero
    /// direction rather than NaN, without a branch per vector.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let vectors = self
            .vectors
            .iter()
            .map(|v| v.scale(1.0 / (v.norm() + SINGULARITY_EPSILON)))
            .collect();
        Self { points: self.points.clone(), vectors }
    }
}

fn validate(shape: &ShapeDescriptor) -> Result<(), FieldError> {
    let invalid = |msg: String| Err(FieldError::InvalidSampleParameters(msg));
    match *shape {
        ShapeDescriptor::Grid { x_range, y_range, n_points } => {
            if n_points == 0 {
                return invalid("n_points must be nonzero".into());
            }
            if x_range.0 >= x_range.1 {
                return invalid(format!(
                    "degenerate x_range: ({}, {})",
                    x_range.0, x_range.1
                ));
            }
            if y_range.0 >= y_range.1 {
                return invalid(format!(
                    "degenerate y_range: ({}, {})",
                    y_range.0, y_range.1
                ));
            }
            Ok(())
        }
        ShapeDescriptor::Sphere { radius, n_points } => {
            if n_points == 0 {
                return invalid("n_points must be nonzero".into());
            }
            if radius <= 0.0 {
                return invalid(format!("radius must be positive, got {radius}"));
            }
            Ok(())
        }
    }
}

/// Shell point for polar angle θ and azimuth φ at the given radius.
fn shell_point(radius: Scalar, theta: Scalar, phi: Scalar) -> SpatialVec {
    SpatialVec::d3(
        radius * theta.sin() * phi.cos(),
        radius * theta.sin() * phi.sin(),
        radius * theta.cos(),
    )
}

/// Evaluates `charge`'s field over every point described by `shape`.
///
/// The result always holds exactly `n_points²` samples in row-major order:
///
/// - `Grid`: `points()[i * n + j] = (x[i], y[j])` with each axis
///   `linspace`d over its range.
/// - `Sphere`: `points()[i * n + j]` uses `theta[i]` and `phi[j]`, with
///   θ spaced over [0, π] and φ over [0, 2π], converted to Cartesian
///   coordinates on the shell.
///
/// Validation runs before any evaluation; either the full set is produced
/// or an error is returned up front. Repeated calls with identical inputs
/// produce identical sets.
pub fn sample(charge: &PointCharge, shape: &ShapeDescriptor) -> Result<SampleSet, FieldError> {
    validate(shape)?;
    match *shape {
        ShapeDescriptor::Grid { x_range, y_range, n_points } => {
            let xs = linspace(x_range.0, x_range.1, n_points);
            let ys = linspace(y_range.0, y_range.1, n_points);
            let mut set = SampleSet::with_capacity(n_points * n_points);
            for &x in &xs {
                for &y in &ys {
                    let point = match charge.dim() {
                        2 => SpatialVec::d2(x, y),
                        _ => SpatialVec::d3(x, y, 0.0),
                    };
                    let vector = evaluate(charge, point)?;
                    set.push(point, vector);
                }
            }
            Ok(set)
        }
        ShapeDescriptor::Sphere { radius, n_points } => {
            if charge.dim() != 3 {
                return Err(FieldError::DimensionalityMismatch {
                    charge_dim: charge.dim(),
                    point_dim: 3,
                });
            }
            let thetas = linspace(0.0, PI, n_points);
            let phis = linspace(0.0, 2.0 * PI, n_points);
            let mut set = SampleSet::with_capacity(n_points * n_points);
            for &theta in &thetas {
                for &phi in &phis {
                    let point = shell_point(radius, theta, phi);
                    let vector = evaluate(charge, point)?;
                    set.push(point, vector);
                }
            }
            Ok(set)
        }
    }
}

/// Spherical-shell sampling with extra resolution near the charge.
///
/// The base `n_points × n_points` shell is generated exactly as
/// [`sample`] does for [`ShapeDescriptor::Sphere`], so consumers relying
/// on the plain row-major layout can use the first `n_points²` entries
/// unchanged. For every angular cell whose corner point lies within
/// `radius * 0.5` of the charge position, one additional sample at the
/// cell center is appended after the base grid.
pub fn sample_sphere_adaptive(
    charge: &PointCharge,
    radius: Scalar,
    n_points: usize,
) -> Result<SampleSet, FieldError> {
    let shape = ShapeDescriptor::Sphere { radius, n_points };
    let mut set = sample(charge, &shape)?;
    if n_points < 2 {
        return Ok(set);
    }

    let threshold = radius * 0.5;
    let thetas = linspace(0.0, PI, n_points);
    let phis = linspace(0.0, 2.0 * PI, n_points);
    let d_theta = PI / (n_points as Scalar - 1.0);
    let d_phi = 2.0 * PI / (n_points as Scalar - 1.0);

    for (i, &theta) in thetas[..n_points - 1].iter().enumerate() {
        for (j, &phi) in phis[..n_points - 1].iter().enumerate() {
            let corner = set.points()[i * n_points + j];
            let offset = match (corner, charge.position()) {
                (SpatialVec::D3(p), SpatialVec::D3(c)) => (p - c).norm(),
                _ => unreachable!("sphere sampling only produces 3D points"),
            };
            if offset < threshold {
                let center = shell_point(radius, theta + d_theta / 2.0, phi + d_phi / 2.0);
                let vector = evaluate(charge, center)?;
                set.push(center, vector);
            }
        }
    }
    Ok(set)
}
