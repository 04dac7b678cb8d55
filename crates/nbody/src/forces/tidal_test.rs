use approx::assert_relative_eq;
use jacobi::{Body, System};
use nalgebra::Vector3;

use crate::forces::{ReducedGravity, TidalCorrection};

/// Equal-mass binary at separation 2; only the companion is distorted.
fn binary_with_tidal_companion() -> (System, Body) {
    let companion = Body::tidal(
        1.0,
        1.0, // radius
        5.0, // rotation period
        0.1, // Love number
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(0.0, 0.5, 0.0),
    );

    let mut system = System::new();
    system.add_body(Body::point_mass(1.0, Vector3::zeros(), Vector3::zeros()));
    system.add_body(companion);
    (system, companion)
}

fn accelerations_of(system: &System, gravity: &ReducedGravity) -> Vec<Vector3<f64>> {
    let n = system.body_count();
    let mut dr = vec![Vector3::zeros(); n];
    let mut dv = vec![Vector3::zeros(); n];
    gravity.derivatives(system, &system.positions, &system.velocities, &mut dr, &mut dv);
    dv
}

#[test]
fn test_zero_love_number_is_pure_gravity() {
    let mut system = System::new();
    system.add_body(Body::point_mass(1.0, Vector3::zeros(), Vector3::zeros()));
    system.add_body(Body::point_mass(
        1.0e-3,
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
    ));

    let plain = accelerations_of(&system, &ReducedGravity::new());
    let corrected = accelerations_of(
        &system,
        &ReducedGravity::with_tidal(TidalCorrection::inner_pair(0, 1)),
    );

    for (a, b) in plain.iter().zip(corrected.iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_correction_targets_companion_slot_only() {
    let (mut system, _) = binary_with_tidal_companion();
    system.add_body(Body::point_mass(
        1.0e-6,
        Vector3::new(20.0, 0.0, 0.0),
        Vector3::new(0.0, 0.3, 0.0),
    ));

    let plain = accelerations_of(&system, &ReducedGravity::new());
    let corrected = accelerations_of(
        &system,
        &ReducedGravity::with_tidal(TidalCorrection::inner_pair(0, 1)),
    );

    assert_eq!(plain[0], corrected[0]);
    assert_ne!(plain[1], corrected[1]);
    assert_eq!(plain[2], corrected[2]);
}

#[test]
fn test_companion_bulge_terms() {
    let (system, companion) = binary_with_tidal_companion();

    let plain = accelerations_of(&system, &ReducedGravity::new());
    let corrected = accelerations_of(
        &system,
        &ReducedGravity::with_tidal(TidalCorrection::inner_pair(0, 1)),
    );
    let delta = corrected[1] - plain[1];

    // Separation s = -r₁ = (-2, 0, 0), d = 2, μ = (m₀ + m₁)/2 = 1.
    let sep = Vector3::new(-2.0, 0.0, 0.0);
    let d: f64 = 2.0;
    let over_d3 = sep / d.powi(3);
    let mu = 1.0;

    let c1 = companion.love_number * (companion.radius / d).powi(5);
    let nu1 = companion.spin_rate();
    let expected = over_d3 * (6.0 * c1 * 1.0 * mu / 1.0) + sep * (c1 * nu1 * nu1 * mu / 1.0);

    assert_relative_eq!(delta.x, expected.x, max_relative = 1e-12);
    assert_relative_eq!(delta.y, expected.y);
    assert_relative_eq!(delta.z, expected.z);
}

#[test]
fn test_both_bodies_distortions_contribute() {
    let (system_one, _) = binary_with_tidal_companion();

    // Same binary, but the primary is distorted too.
    let mut system_two = System::new();
    system_two.add_body(Body::tidal(
        1.0,
        1.0,
        5.0,
        0.1,
        Vector3::zeros(),
        Vector3::zeros(),
    ));
    system_two.add_body(Body::tidal(
        1.0,
        1.0,
        5.0,
        0.1,
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(0.0, 0.5, 0.0),
    ));

    let gravity = ReducedGravity::with_tidal(TidalCorrection::inner_pair(0, 1));
    let one_sided = accelerations_of(&system_one, &gravity);
    let two_sided = accelerations_of(&system_two, &gravity);

    let plain = accelerations_of(&system_one, &ReducedGravity::new());
    let delta_one = one_sided[1] - plain[1];
    let delta_two = two_sided[1] - plain[1];

    // With equal masses and identical tidal parameters the two distortions
    // contribute equally, doubling the correction.
    assert_relative_eq!(delta_two.x, 2.0 * delta_one.x, max_relative = 1e-12);
}

#[test]
fn test_tidal_force_falls_off_as_fifth_power() {
    let (system_near, _) = binary_with_tidal_companion();
    let (mut system_far, _) = binary_with_tidal_companion();
    system_far.positions[1] *= 2.0;

    let gravity = ReducedGravity::with_tidal(TidalCorrection::inner_pair(0, 1));
    let plain = ReducedGravity::new();

    let near_delta =
        (accelerations_of(&system_near, &gravity)[1] - accelerations_of(&system_near, &plain)[1]).x;
    let far_delta =
        (accelerations_of(&system_far, &gravity)[1] - accelerations_of(&system_far, &plain)[1]).x;

    // C ∝ (R/d)⁵; the 1/d³-scaled term therefore drops by 2⁵·2² = 128 and
    // the rotational term (∝ d · d⁻⁵) by 2⁴. Check the dominant scaling
    // regime loosely: doubling the separation weakens the correction by
    // well over an order of magnitude.
    assert!(near_delta.abs() > 16.0 * far_delta.abs());
}
