//! Point charges and the tagged 2D/3D vector they live in.

use crate::math::{Scalar, R2, R3};

/// A spatial vector of either supported dimensionality.
///
/// Positions, query points, and field vectors are all `SpatialVec`s; the
/// tag carries the dimensionality that was fixed when the owning
/// [`PointCharge`] was constructed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpatialVec {
    /// Two-dimensional vector (x, y).
    D2(R2),
    /// Three-dimensional vector (x, y, z).
    D3(R3),
}

impl SpatialVec {
    /// Constructs a 2D vector.
    #[must_use]
    pub fn d2(x: Scalar, y: Scalar) -> Self {
        Self::D2(R2::new(x, y))
    }

    /// Constructs a 3D vector.
    #[must_use]
    pub fn d3(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::D3(R3::new(x, y, z))
    }

    /// Zero vector of the given dimensionality (2 or 3).
    ///
    /// # Panics
    /// Panics if `dim` is not 2 or 3; the crate never constructs any other
    /// dimensionality.
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        match dim {
            2 => Self::D2(R2::zeros()),
            3 => Self::D3(R3::zeros()),
            _ => unreachable!("only 2D and 3D vectors are supported"),
        }
    }

    /// Dimensionality of the vector (2 or 3).
    #[must_use]
    pub const fn dim(&self) -> usize {
        match self {
            Self::D2(_) => 2,
            Self::D3(_) => 3,
        }
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> Scalar {
        match self {
            Self::D2(v) => v.norm(),
            Self::D3(v) => v.norm(),
        }
    }

    /// Componentwise scaling by `factor`.
    #[must_use]
    pub fn scale(&self, factor: Scalar) -> Self {
        match self {
            Self::D2(v) => Self::D2(v * factor),
            Self::D3(v) => Self::D3(v * factor),
        }
    }

    /// Components as a slice-friendly fixed view: (x, y, z) with z = 0 for
    /// 2D vectors. Used by exporters that only speak 3D.
    #[must_use]
    pub fn xyz(&self) -> [Scalar; 3] {
        match self {
            Self::D2(v) => [v.x, v.y, 0.0],
            Self::D3(v) => [v.x, v.y, v.z],
        }
    }
}

impl From<R2> for SpatialVec {
    fn from(v: R2) -> Self {
        Self::D2(v)
    }
}

impl From<R3> for SpatialVec {
    fn from(v: R3) -> Self {
        Self::D3(v)
    }
}

/// Point charge in coulombs at a fixed 2D or 3D position in meters.
///
/// Immutable once constructed; the position's dimensionality determines the
/// dimensionality of every field vector the charge produces.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointCharge {
    magnitude: Scalar,
    position: SpatialVec,
}

impl PointCharge {
    /// Creates a charge of `magnitude` coulombs at `position`.
    #[must_use]
    pub const fn new(magnitude: Scalar, position: SpatialVec) -> Self {
        Self { magnitude, position }
    }

    /// Creates a 2D charge at (x, y).
    #[must_use]
    pub fn two_d(magnitude: Scalar, x: Scalar, y: Scalar) -> Self {
        Self::new(magnitude, SpatialVec::d2(x, y))
    }

    /// Creates a 3D charge at (x, y, z).
    #[must_use]
    pub fn three_d(magnitude: Scalar, x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self::new(magnitude, SpatialVec::d3(x, y, z))
    }

    /// Signed charge in coulombs.
    #[must_use]
    pub const fn magnitude(&self) -> Scalar {
        self.magnitude
    }

    /// Position in meters.
    #[must_use]
    pub const fn position(&self) -> SpatialVec {
        self.position
    }

    /// Dimensionality fixed at construction (2 or 3).
    #[must_use]
    pub const fn dim(&self) -> usize {
        self.position.dim()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn dimensionality_follows_position() {
        assert_eq!(PointCharge::two_d(1.0, 0.0, 0.0).dim(), 2);
        assert_eq!(PointCharge::three_d(1.0, 0.0, 0.0, 0.0).dim(), 3);
    }

    #[test]
    fn norm_matches_euclidean() {
        assert_relative_eq!(SpatialVec::d2(3.0, 4.0).norm(), 5.0, epsilon = 1.0e-12);
        assert_relative_eq!(SpatialVec::d3(1.0, 2.0, 2.0).norm(), 3.0, epsilon = 1.0e-12);
    }

    #[test]
    fn xyz_pads_two_d_with_zero() {
        assert_eq!(SpatialVec::d2(1.5, -2.5).xyz(), [1.5, -2.5, 0.0]);
    }
}
