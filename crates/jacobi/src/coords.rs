//! Separation vectors in the reduced coordinate frame

use nalgebra::Vector3;

/// Separation between the reduced coordinates of bodies `i` and `j`
///
/// Antisymmetric in its indices: `relative_vector(.., i, j)` equals
/// `-relative_vector(.., j, i)`. Internally the smaller index is processed
/// first and the overall sign flipped for the swapped case.
///
/// The caller guarantees `i != j`, both indices in range, and every
/// `eta[k]` nonzero (η strictly increasing and positive in a well-formed
/// system).
///
/// # Examples
///
/// ```
/// use jacobi::relative_vector;
/// use nalgebra::Vector3;
///
/// let positions = vec![Vector3::zeros(), Vector3::new(1.0, 0.0, 0.0)];
/// let masses = [1.0, 0.5];
/// let eta = [1.0, 1.5];
///
/// // For the innermost pair the separation is just -r₁.
/// let sep = relative_vector(&positions, &masses, &eta, 0, 1);
/// assert_eq!(sep, Vector3::new(-1.0, 0.0, 0.0));
/// ```
pub fn relative_vector(
    positions: &[Vector3<f64>],
    masses: &[f64],
    eta: &[f64],
    i: usize,
    j: usize,
) -> Vector3<f64> {
    let sign = if i < j { 1.0 } else { -1.0 };
    let (i, j) = if i < j { (i, j) } else { (j, i) };

    let mut sep = if i == 0 {
        -positions[j]
    } else {
        positions[i] * (eta[i - 1] / eta[i]) - positions[j]
    };

    // Bodies strictly between the pair enter with weight m_k/η_k.
    let first = if i == 0 { 1 } else { i + 1 };
    for k in first..j {
        sep -= positions[k] * (masses[k] / eta[k]);
    }

    sep * sign
}
