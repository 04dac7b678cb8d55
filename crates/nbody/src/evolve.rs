//! Adaptive order/step-size driver
//!
//! An outer adaptive-step loop wraps an inner adaptive-order loop: each
//! coarse step raises the extrapolation order until the error tolerance is
//! met, and an attempt that exhausts the order budget shrinks the step and
//! retries. Both loops are bounded (order by `MAX_ORDER`, shrinking by the
//! step floor), so every call terminates.

use jacobi::System;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::extrapolate::{substeps, ExtrapolationTable, MAX_ORDER};
use crate::forces::{ReducedGravity, TidalCorrection};
use crate::midpoint::modified_midpoint;

/// Factor divided into the step after an unconverged attempt
const STEP_SHRINK: f64 = 3.0;

/// Step-size and tolerance configuration for one integration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StepControl {
    /// Upper bound on |H|, must be positive
    pub max_step: f64,
    /// Floor under |H|; shrinking past it aborts the integration
    pub min_step: f64,
    /// Convergence error tolerance for one coarse step
    pub tolerance: f64,
}

/// The single failure mode of the driver
#[derive(Debug, Error)]
pub enum EvolveError {
    /// The controller could not meet the tolerance at any order even after
    /// shrinking the step to the configured floor. The system retains the
    /// last accepted state and time, short of the target.
    #[error("step size fell below {min_step:e} at t = {time_reached} before reaching the target")]
    StepSizeUnderflow {
        /// Simulation time of the last accepted state
        time_reached: f64,
        /// The configured step floor
        min_step: f64,
    },
}

/// Advances the system to `target_time` (forward or backward)
///
/// Positions and velocities are updated in place to the state at the
/// latest accepted time, which equals `target_time` on success; the
/// system's accelerations are filled from a final derivative evaluation at
/// that state. On `Err` the system holds the last accepted state, not the
/// target's, so callers must check the result before trusting it as final.
///
/// Malformed static input (non-increasing η, N < 2 with a tidal pair
/// configured) is a programmer error and panics via assertions rather than
/// producing an `Err`.
///
/// # Examples
///
/// ```
/// use jacobi::{Body, System};
/// use nbody::{evolve, ReducedGravity, StepControl};
/// use nalgebra::Vector3;
///
/// let mut system = System::new();
/// system.add_body(Body::point_mass(1.0, Vector3::zeros(), Vector3::zeros()));
/// system.add_body(Body::point_mass(
///     1.0e-3,
///     Vector3::new(1.0, 0.0, 0.0),
///     Vector3::new(0.0, 1.0005, 0.0),
/// ));
///
/// let gravity = ReducedGravity::new();
/// let control = StepControl {
///     max_step: 0.1,
///     min_step: 1.0e-12,
///     tolerance: 1.0e-12,
/// };
///
/// evolve(&mut system, &gravity, 1.0, &control).unwrap();
/// assert_eq!(system.time, 1.0);
/// ```
pub fn evolve(
    system: &mut System,
    gravity: &ReducedGravity,
    target_time: f64,
    control: &StepControl,
) -> Result<(), EvolveError> {
    assert!(control.max_step > 0.0, "max_step must be positive");
    assert!(control.min_step > 0.0, "min_step must be positive");
    assert!(control.tolerance > 0.0, "tolerance must be positive");
    assert!(
        system.body_count() >= 2,
        "the reduced frame needs at least two bodies"
    );
    if let TidalCorrection::InnerPair { primary, companion } = gravity.tidal {
        assert!(
            primary < companion && companion < system.body_count(),
            "tidal pair ({primary}, {companion}) out of range for {} bodies",
            system.body_count()
        );
    }

    let n = system.body_count();

    // Accepted state, owned by this invocation; the system is only written
    // back at the end.
    let mut r = system.positions.clone();
    let mut v = system.velocities.clone();
    let mut sample_r = vec![Vector3::zeros(); n];
    let mut sample_v = vec![Vector3::zeros(); n];
    let mut table = ExtrapolationTable::new(n);

    let clamp = |remaining: f64| {
        if remaining.abs() < control.max_step {
            remaining
        } else {
            remaining.signum() * control.max_step
        }
    };

    let mut h = clamp(target_time - system.time);
    let mut status = Ok(());

    while h != 0.0 {
        let mut k = 0;
        let mut error = 1.0;
        // The k == 0 clause guarantees at least one refinement even when
        // the tolerance is 1.0 or looser, so an accepted step always has a
        // table row to read.
        while (k == 0 || error > control.tolerance) && k < MAX_ORDER {
            modified_midpoint(system, gravity, &r, &v, substeps(k), h, &mut sample_r, &mut sample_v);
            error = table.extrapolate(&sample_r, &sample_v, k);
            k += 1;
        }

        if error > control.tolerance {
            // Order budget exhausted without convergence.
            h /= STEP_SHRINK;
            debug!(step = h, error, "order budget exhausted, shrinking step");
            if h.abs() < control.min_step {
                status = Err(EvolveError::StepSizeUnderflow {
                    time_reached: system.time,
                    min_step: control.min_step,
                });
                break;
            }
        } else {
            system.time += h;
            table.best(k - 1, &mut r, &mut v);
            trace!(time = system.time, step = h, order = k, error, "step accepted");
            h = clamp(target_time - system.time);
        }
    }

    // One last evaluation so the caller receives the accelerations at the
    // accepted state, on the failure exit as much as on success.
    let mut dr = vec![Vector3::zeros(); n];
    let mut acc = vec![Vector3::zeros(); n];
    gravity.derivatives(system, &r, &v, &mut dr, &mut acc);

    system.positions.copy_from_slice(&r);
    system.velocities.copy_from_slice(&v);
    system.accelerations.copy_from_slice(&acc);
    status
}
