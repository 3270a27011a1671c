//! Physical constants and numeric policy values.
//!
//! ## Accuracy
//!
//! The Coulomb constant here is the common textbook rounding `8.99 × 10⁹`,
//! not the CODATA-derived `1 / (4πε₀) ≈ 8.9875 × 10⁹`. The rounded value is
//! intentional: downstream visualizations quote field strengths against it
//! (1 nC at 1 m reads exactly 8.99 N/C). Consumers needing metrological
//! accuracy should consult NIST directly.
//!
//! ## References
//!
//! - NIST Reference on Constants, Units, and Uncertainty:
//!   <https://physics.nist.gov/cuu/Constants/>

/// Coulomb's constant _k_ in N·m²/C².
/// Textbook rounding of `1 / (4πε₀)`; see the module notes on accuracy.
pub const COULOMB_CONSTANT: f64 = 8.99e9;

/// Vacuum permittivity ε₀ in farads per meter (F/m).
/// CODATA 2018 value, 11 significant figures.
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;

/// Distance below which a query point is treated as coincident with the
/// charge and the field evaluates to the zero vector instead of diverging.
pub const SINGULARITY_EPSILON: f64 = 1.0e-10;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn coulomb_constant_close_to_codata_derivation() {
        let exact = 1.0 / (4.0 * PI * VACUUM_PERMITTIVITY);
        assert_relative_eq!(COULOMB_CONSTANT, exact, max_relative = 1.0e-3);
    }
}
