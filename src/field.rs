//! Single-point electrostatic field evaluation (Coulomb's law).

use nalgebra::SVector;

use crate::charge::{PointCharge, SpatialVec};
use crate::constants::{COULOMB_CONSTANT, SINGULARITY_EPSILON};
use crate::errors::FieldError;
use crate::math::{Scalar, R3};

/// Coulomb field of a charge `q` at displacement `r` from it, for any
/// dimensionality. `r * k q / |r|³` is `k q r̂ / |r|²` without forming
/// the unit vector separately.
fn coulomb_field<const N: usize>(magnitude: Scalar, r: SVector<Scalar, N>) -> SVector<Scalar, N> {
    let r_mag = r.norm();
    if r_mag < SINGULARITY_EPSILON {
        return SVector::zeros();
    }
    r * (COULOMB_CONSTANT * magnitude / (r_mag * r_mag * r_mag))
}

/// Electrostatic field of `charge` at `point`, in N/C.
///
/// A 2D point queried against a 3D charge is promoted by appending a zero
/// z component; a 3D point against a 2D charge is a
/// [`FieldError::DimensionalityMismatch`].
///
/// Evaluation at (or within
/// [`SINGULARITY_EPSILON`](crate::constants::SINGULARITY_EPSILON) of) the
/// charge position returns the zero vector. This is a singularity-avoidance
/// policy, not a physical value: the true field diverges there.
///
/// Pure and deterministic; safe to call in any order or in parallel.
pub fn evaluate(charge: &PointCharge, point: SpatialVec) -> Result<SpatialVec, FieldError> {
    match (charge.position(), point) {
        (SpatialVec::D2(c), SpatialVec::D2(p)) => {
            Ok(SpatialVec::D2(coulomb_field(charge.magnitude(), p - c)))
        }
        (SpatialVec::D3(c), SpatialVec::D3(p)) => {
            Ok(SpatialVec::D3(coulomb_field(charge.magnitude(), p - c)))
        }
        (SpatialVec::D3(c), SpatialVec::D2(p)) => {
            let promoted = R3::new(p.x, p.y, 0.0);
            Ok(SpatialVec::D3(coulomb_field(charge.magnitude(), promoted - c)))
        }
        (SpatialVec::D2(_), SpatialVec::D3(_)) => Err(FieldError::DimensionalityMismatch {
            charge_dim: 2,
            point_dim: 3,
        }),
    }
}
