//! Tidal and rotational bulge correction for a close pair
//!
//! Models the quadrupole distortion of two tidally interacting bodies
//! embedded in the wider hierarchy (e.g. an eclipsing binary or a
//! star-hot-Jupiter pair). The correction is an explicitly configured
//! capability rather than a hard-wired special case, but the conventional
//! choice is the innermost pair, `TidalCorrection::inner_pair(0, 1)`.

use jacobi::coords::relative_vector;
use jacobi::System;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Which pair, if any, receives the tidal/rotational correction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TidalCorrection {
    /// Pure point-mass gravity
    None,
    /// Tidal and rotational bulge terms on the designated pair
    ///
    /// `primary` must be the smaller index. Both bodies' distortions
    /// contribute, and both contributions are applied to the companion's
    /// acceleration slot (the correction lives on the pair's relative
    /// orbit).
    InnerPair { primary: usize, companion: usize },
}

impl TidalCorrection {
    /// Correction on the pair `(primary, companion)`, `primary < companion`
    pub fn inner_pair(primary: usize, companion: usize) -> Self {
        Self::InnerPair { primary, companion }
    }

    /// Adds the tidal and rotational bulge accelerations to `dv`
    ///
    /// For each body x of the pair the tidal coefficient is
    /// C_x = k2_x (R_x / d)⁵ with d the pair separation. With
    /// μ = (m_a + m_b)/2 the companion picks up
    ///
    ///   6 C_b m_a (s/d³) μ/m_b + 6 C_a m_b (s/d³) μ/m_a      (tidal bulge)
    ///   C_b ν_b² s μ/m_b      + C_a ν_a² s μ/m_a             (rotation, ν = 2π/P)
    ///
    /// where s is the pair's own separation vector. A zero coefficient
    /// contributes nothing and is skipped entirely, so point masses never
    /// evaluate 2π/P against an unset spin period.
    pub(crate) fn apply(&self, sys: &System, r: &[Vector3<f64>], dv: &mut [Vector3<f64>]) {
        let Self::InnerPair { primary, companion } = *self else {
            return;
        };
        let (a, b) = (primary, companion);

        let masses = sys.masses();
        let radii = sys.radii();
        let love = sys.love_numbers();
        let periods = sys.rotation_periods();

        let sep = relative_vector(r, masses, sys.eta(), a, b);
        let d = sep.norm();
        let over_d3 = sep / (d * d * d);
        let mu = 0.5 * (masses[a] + masses[b]);

        let c_a = love[a] * (radii[a] / d).powi(5);
        let c_b = love[b] * (radii[b] / d).powi(5);

        if c_b != 0.0 {
            let nu_b = 2.0 * std::f64::consts::PI / periods[b];
            dv[b] += over_d3 * (6.0 * c_b * masses[a] * mu / masses[b]);
            dv[b] += sep * (c_b * nu_b * nu_b * mu / masses[b]);
        }
        if c_a != 0.0 {
            let nu_a = 2.0 * std::f64::consts::PI / periods[a];
            dv[b] += over_d3 * (6.0 * c_a * masses[b] * mu / masses[a]);
            dv[b] += sep * (c_a * nu_a * nu_a * mu / masses[a]);
        }
    }
}
