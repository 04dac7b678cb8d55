//! Rational-function (Neville-style) extrapolation toward zero step size
//!
//! Consumes one modified-midpoint sample per extrapolation order and fills
//! a triangular table whose diagonal converges on the zero-sub-step-size
//! limit. The difference between the last two diagonal entries serves as
//! the convergence error estimate.

use nalgebra::Vector3;

/// Hard bound on the extrapolation order; the coefficient table below is
/// only valid up to this order and must not be extended without
/// recomputing it.
pub const MAX_ORDER: usize = 8;

/// Sub-step count for extrapolation order `k`
///
/// A linear sequence, not the classical geometric Bulirsch-Stoer sequence
/// (2, 4, 6, 8, 12, ...). Changing it invalidates the coefficient table
/// and the convergence behavior, so it is preserved as is.
pub fn substeps(k: usize) -> usize {
    2 * (k + 1)
}

/// Rational extrapolation coefficients for the 2(k+1) sub-step sequence,
/// indexed `[k][k - (j + 1)]` when filling column j+1 of row k. Only the
/// strict lower triangle is ever read.
const RAT2: [[f64; MAX_ORDER]; MAX_ORDER] = [
    [
        -1.0,
        -1.3333333333333332593,
        -1.125,
        -1.0666666666666666519,
        -1.0416666666666667407,
        -1.028571428571428692,
        -1.0208333333333332593,
        -1.0158730158730158166,
    ],
    [
        0.33333333333333331483,
        -1.0,
        -1.7999999999999998224,
        -1.3333333333333332593,
        -1.1904761904761904656,
        -1.125,
        -1.0888888888888887951,
        -1.0666666666666666519,
    ],
    [
        0.125,
        0.80000000000000004441,
        -1.0,
        -2.2857142857142855874,
        -1.5625,
        -1.3333333333333332593,
        -1.2249999999999998668,
        -1.1636363636363635798,
    ],
    [
        0.066666666666666665741,
        0.33333333333333331483,
        1.2857142857142858094,
        -1.0,
        -2.7777777777777785673,
        -1.7999999999999998224,
        -1.4848484848484846399,
        -1.3333333333333332593,
    ],
    [
        0.041666666666666664354,
        0.19047619047619046562,
        0.56249999999999988898,
        1.7777777777777776791,
        -1.0,
        -3.2727272727272738173,
        -2.0416666666666665186,
        -1.6410256410256409687,
    ],
    [
        0.028571428571428570536,
        0.125,
        0.33333333333333331483,
        0.80000000000000004441,
        2.2727272727272729291,
        -1.0,
        -3.7692307692307682743,
        -2.2857142857142855874,
    ],
    [
        0.020833333333333332177,
        0.088888888888888892281,
        0.22499999999999995004,
        0.48484848484848486194,
        1.0416666666666669627,
        2.769230769230766942,
        -1.0,
        -4.2666666666666666075,
    ],
    [
        0.015873015873015872135,
        0.066666666666666665741,
        0.16363636363636363535,
        0.33333333333333331483,
        0.64102564102564085768,
        1.2857142857142858094,
        3.2666666666666679397,
        -1.0,
    ],
];

/// Triangular extrapolation table for positions and velocities
///
/// Cells are indexed (body, order k, refinement column j). A cell at
/// (k, j+1) is computed only from cells written earlier in the same
/// coarse-step attempt, so the storage is reused across attempts without
/// clearing. One table is owned by one driver invocation.
#[derive(Debug, Clone)]
pub struct ExtrapolationTable {
    bodies: usize,
    r: Vec<Vector3<f64>>,
    v: Vec<Vector3<f64>>,
}

impl ExtrapolationTable {
    /// Table sized for `bodies` bodies
    pub fn new(bodies: usize) -> Self {
        Self {
            bodies,
            r: vec![Vector3::zeros(); bodies * MAX_ORDER * MAX_ORDER],
            v: vec![Vector3::zeros(); bodies * MAX_ORDER * MAX_ORDER],
        }
    }

    fn idx(&self, body: usize, k: usize, j: usize) -> usize {
        (body * MAX_ORDER + k) * MAX_ORDER + j
    }

    /// Inserts the order-`k` sample and refines the table diagonally
    ///
    /// Returns the scalar convergence error: the sum over all bodies and
    /// axes of the squared difference between the last two diagonal
    /// entries, for positions and velocities combined. At k = 0 the error
    /// is defined as 1.0 so at least one refinement always happens.
    pub fn extrapolate(
        &mut self,
        sample_r: &[Vector3<f64>],
        sample_v: &[Vector3<f64>],
        k: usize,
    ) -> f64 {
        assert!(k < MAX_ORDER, "extrapolation order {k} out of range");

        for i in 0..self.bodies {
            let cell = self.idx(i, k, 0);
            self.r[cell] = sample_r[i];
            self.v[cell] = sample_v[i];
        }

        for j in 0..k {
            let coeff = RAT2[k][k - (j + 1)];
            for i in 0..self.bodies {
                let cur = self.idx(i, k, j);
                let below = self.idx(i, k - 1, j);
                self.r[cur + 1] = self.r[cur] + (self.r[cur] - self.r[below]) * coeff;
                self.v[cur + 1] = self.v[cur] + (self.v[cur] - self.v[below]) * coeff;
            }
        }

        if k == 0 {
            return 1.0;
        }

        let mut error = 0.0;
        for i in 0..self.bodies {
            let dr = self.r[self.idx(i, k, k)] - self.r[self.idx(i, k, k - 1)];
            let dv = self.v[self.idx(i, k, k)] - self.v[self.idx(i, k, k - 1)];
            error += dr.norm_squared() + dv.norm_squared();
        }
        error
    }

    /// Copies the best estimate at order `k` (the diagonal entry) out
    pub fn best(&self, k: usize, out_r: &mut [Vector3<f64>], out_v: &mut [Vector3<f64>]) {
        for i in 0..self.bodies {
            let cell = self.idx(i, k, k);
            out_r[i] = self.r[cell];
            out_v[i] = self.v[cell];
        }
    }
}
