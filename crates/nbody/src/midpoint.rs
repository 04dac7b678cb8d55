//! Gragg's modified midpoint rule
//!
//! Advances a copy of the state over one coarse step H using n equal
//! sub-steps. The rule is explicit and time-symmetric, so its local error
//! expansion contains only even powers of the sub-step size; that is the
//! property the rational extrapolation exploits.

use jacobi::System;
use nalgebra::Vector3;

use crate::forces::ReducedGravity;

/// One modified-midpoint sample of the state after step `big_h`
///
/// Starting from `(r0, v0)`, takes `n_sub` sub-steps of size H/n. The
/// first sub-step is a plain Euler step; every later sub-step leapfrogs
/// over the previous state with 2h. A final derivative evaluation at the
/// endpoint feeds the symmetrized average
///
///   y* = (y_{n-1} + y_n + h f(y_n)) / 2
///
/// which cancels the leading odd-order error term. Positions and
/// velocities are smoothed independently into `out_r`/`out_v`.
///
/// `n_sub` must be at least 2 and even per the calling convention of the
/// extrapolation sequence.
pub fn modified_midpoint(
    sys: &System,
    gravity: &ReducedGravity,
    r0: &[Vector3<f64>],
    v0: &[Vector3<f64>],
    n_sub: usize,
    big_h: f64,
    out_r: &mut [Vector3<f64>],
    out_v: &mut [Vector3<f64>],
) {
    let n = r0.len();
    let h = big_h / n_sub as f64;
    let two_h = 2.0 * h;

    // Rolling z_{m-1} / z_m / z_{m+1} buffers, rotated by swapping.
    let mut prev_r = r0.to_vec();
    let mut prev_v = v0.to_vec();
    let mut curr_r = r0.to_vec();
    let mut curr_v = v0.to_vec();
    let mut next_r = vec![Vector3::zeros(); n];
    let mut next_v = vec![Vector3::zeros(); n];

    let mut dr = vec![Vector3::zeros(); n];
    let mut dv = vec![Vector3::zeros(); n];

    for m in 0..n_sub {
        gravity.derivatives(sys, &curr_r, &curr_v, &mut dr, &mut dv);

        // At m = 0, prev still equals the initial state, so the same
        // update expression yields the Euler starter z₁ = z₀ + h f(z₀).
        let step = if m == 0 { h } else { two_h };
        for i in 0..n {
            next_r[i] = prev_r[i] + dr[i] * step;
            next_v[i] = prev_v[i] + dv[i] * step;
        }

        std::mem::swap(&mut prev_r, &mut curr_r);
        std::mem::swap(&mut curr_r, &mut next_r);
        std::mem::swap(&mut prev_v, &mut curr_v);
        std::mem::swap(&mut curr_v, &mut next_v);
    }

    // curr = z_n, prev = z_{n-1}; one more evaluation at the endpoint.
    gravity.derivatives(sys, &curr_r, &curr_v, &mut dr, &mut dv);
    for i in 0..n {
        out_r[i] = 0.5 * (prev_r[i] + curr_r[i] + dr[i] * h);
        out_v[i] = 0.5 * (prev_v[i] + curr_v[i] + dv[i] * h);
    }
}
