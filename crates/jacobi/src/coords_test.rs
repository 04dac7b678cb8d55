use approx::assert_relative_eq;
use nalgebra::Vector3;

use crate::coords::relative_vector;

fn four_body_frame() -> (Vec<Vector3<f64>>, [f64; 4], [f64; 4]) {
    let positions = vec![
        Vector3::zeros(),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 2.0, 0.0),
        Vector3::new(0.0, 0.0, 3.0),
    ];
    let masses = [1.0, 0.5, 0.25, 0.125];
    // Cumulative sums of the masses above
    let eta = [1.0, 1.5, 1.75, 1.875];
    (positions, masses, eta)
}

#[test]
fn test_innermost_pair_is_negated_position() {
    let (positions, masses, eta) = four_body_frame();

    let sep = relative_vector(&positions, &masses, &eta, 0, 1);

    assert_eq!(sep, -positions[1]);
}

#[test]
fn test_antisymmetry_all_pairs() {
    let (positions, masses, eta) = four_body_frame();

    for i in 0..4 {
        for j in 0..4 {
            if i == j {
                continue;
            }
            let forward = relative_vector(&positions, &masses, &eta, i, j);
            let backward = relative_vector(&positions, &masses, &eta, j, i);

            assert_relative_eq!(forward.x, -backward.x);
            assert_relative_eq!(forward.y, -backward.y);
            assert_relative_eq!(forward.z, -backward.z);
        }
    }
}

#[test]
fn test_origin_pair_with_intermediate_body() {
    let (positions, masses, eta) = four_body_frame();

    // (0, 2): -r₂ - (m₁/η₁) r₁
    let sep = relative_vector(&positions, &masses, &eta, 0, 2);
    let expected = -positions[2] - positions[1] * (masses[1] / eta[1]);

    assert_relative_eq!(sep.x, expected.x);
    assert_relative_eq!(sep.y, expected.y);
    assert_relative_eq!(sep.z, expected.z);

    // Hand-computed: (-1/3, -2, 0)
    assert_relative_eq!(sep.x, -1.0 / 3.0);
    assert_relative_eq!(sep.y, -2.0);
    assert_relative_eq!(sep.z, 0.0);
}

#[test]
fn test_inner_pair_with_intermediate_body() {
    let (positions, masses, eta) = four_body_frame();

    // (1, 3): (η₀/η₁) r₁ - r₃ - (m₂/η₂) r₂
    let sep = relative_vector(&positions, &masses, &eta, 1, 3);

    assert_relative_eq!(sep.x, 2.0 / 3.0);
    assert_relative_eq!(sep.y, -2.0 / 7.0);
    assert_relative_eq!(sep.z, -3.0);
}

#[test]
fn test_adjacent_pair_has_no_intermediate_sum() {
    let (positions, masses, eta) = four_body_frame();

    let sep = relative_vector(&positions, &masses, &eta, 1, 2);
    let expected = positions[1] * (eta[0] / eta[1]) - positions[2];

    assert_relative_eq!(sep.x, expected.x);
    assert_relative_eq!(sep.y, expected.y);
    assert_relative_eq!(sep.z, expected.z);
}
