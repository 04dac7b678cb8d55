//! Reduced-coordinate N-body gravity (direct O(N²) pairwise evaluation)

use jacobi::coords::relative_vector;
use jacobi::System;
use nalgebra::Vector3;

use crate::forces::tidal::TidalCorrection;

/// State derivative of the hierarchical system in reduced coordinates
///
/// Position derivatives are the velocities; velocity derivatives are the
/// democratic-heliocentric-style accelerations, optionally augmented by a
/// tidal/rotational correction on one configured close pair.
///
/// Body 0 is the coordinate origin: its position derivative is copied from
/// its velocity by convention and its acceleration is fixed at zero.
///
/// # Examples
///
/// ```
/// use jacobi::{Body, System};
/// use nbody::forces::ReducedGravity;
/// use nalgebra::Vector3;
///
/// let mut system = System::new();
/// system.add_body(Body::point_mass(1.0, Vector3::zeros(), Vector3::zeros()));
/// system.add_body(Body::point_mass(
///     1.0e-3,
///     Vector3::new(1.0, 0.0, 0.0),
///     Vector3::new(0.0, 1.0, 0.0),
/// ));
///
/// let gravity = ReducedGravity::new();
/// let mut dr = vec![Vector3::zeros(); 2];
/// let mut dv = vec![Vector3::zeros(); 2];
/// gravity.derivatives(&system, &system.positions, &system.velocities, &mut dr, &mut dv);
///
/// // The relative orbit accelerates toward the origin.
/// assert!(dv[1].x < 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ReducedGravity {
    /// Tidal/rotational bulge correction for a designated close pair
    pub tidal: TidalCorrection,
}

impl ReducedGravity {
    /// Creates a force model with no tidal correction
    pub fn new() -> Self {
        Self {
            tidal: TidalCorrection::None,
        }
    }

    /// Creates a force model with the given tidal correction
    pub fn with_tidal(tidal: TidalCorrection) -> Self {
        Self { tidal }
    }

    /// Evaluates the time derivative of the full state
    ///
    /// Reads positions `r` and velocities `v` (which need not be the
    /// system's own state arrays; the sub-stepper evaluates intermediate
    /// states), writes position derivatives into `dr` and velocity
    /// derivatives into `dv`. The system supplies the static attributes
    /// (masses, η, tidal parameters) only.
    pub fn derivatives(
        &self,
        sys: &System,
        r: &[Vector3<f64>],
        v: &[Vector3<f64>],
        dr: &mut [Vector3<f64>],
        dv: &mut [Vector3<f64>],
    ) {
        let n = sys.body_count();
        let masses = sys.masses();
        let eta = sys.eta();

        // Pairwise separations for i < j, scaled by 1/‖r‖³ for the active
        // gravity terms and by 1/‖r‖⁵ as an extension point for
        // higher-order force terms (computed, not yet consumed).
        let mut over_r3 = vec![Vector3::zeros(); n * n];
        let mut over_r5 = vec![Vector3::zeros(); n * n];
        for j in 0..n {
            for i in 0..j {
                let sep = relative_vector(r, masses, eta, i, j);
                let d2 = sep.norm_squared();
                let d = d2.sqrt();
                over_r3[i * n + j] = sep / (d2 * d);
                over_r5[i * n + j] = sep / (d2 * d2 * d);
            }
        }

        dr[0] = v[0];
        dv[0] = Vector3::zeros();

        for i in 1..n {
            // Local mass ratio η_i/η_{i-1} turns the two-body term into the
            // reduced-mass form of this frame.
            let q = eta[i] / eta[i - 1];
            let inv_eta = 1.0 / eta[i - 1];

            dr[i] = v[i];

            let mut acc = over_r3[i] * (q * masses[0]);
            for j in 1..i {
                acc += over_r3[j * n + i] * (q * masses[j]);
            }
            for j in (i + 1)..n {
                acc -= over_r3[i * n + j] * masses[j];
            }
            for j in 0..i {
                for k in (i + 1)..n {
                    acc += over_r3[j * n + k] * (masses[j] * masses[k] * inv_eta);
                }
            }

            dv[i] = acc;
        }

        self.tidal.apply(sys, r, dv);
    }
}

impl Default for ReducedGravity {
    fn default() -> Self {
        Self::new()
    }
}
