use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Per-body attributes supplied once at system construction.
///
/// Masses are gravitational parameters (G = 1 units), so the force model
/// never multiplies by a gravitational constant. `radius`,
/// `rotation_period` and `love_number` feed the tidal/rotational bulge
/// correction; they are ignored for bodies outside the configured tidal
/// pair.
///
/// Position and velocity are reduced (Jacobi-like) coordinates: body i's
/// position is a relative vector against the mass-weighted center of
/// bodies 0..i.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    /// Gravitational parameter (mass in G = 1 units), must be positive
    pub mass: f64,
    /// Physical radius, same length unit as positions
    pub radius: f64,
    /// Spin period, same time unit as the integration bounds
    pub rotation_period: f64,
    /// Tidal Love number k2 (dimensionless deformability)
    pub love_number: f64,
    /// Reduced-coordinate position
    pub position: Vector3<f64>,
    /// Reduced-coordinate velocity
    pub velocity: Vector3<f64>,
}

impl Body {
    /// Creates a body with no tidal response (zero radius and Love number)
    ///
    /// # Examples
    ///
    /// ```
    /// use jacobi::Body;
    /// use nalgebra::Vector3;
    ///
    /// let planet = Body::point_mass(
    ///     1.0e-3,
    ///     Vector3::new(1.0, 0.0, 0.0),
    ///     Vector3::new(0.0, 1.0, 0.0),
    /// );
    /// assert_eq!(planet.love_number, 0.0);
    /// ```
    pub fn point_mass(mass: f64, position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Body {
            mass,
            radius: 0.0,
            rotation_period: 0.0,
            love_number: 0.0,
            position,
            velocity,
        }
    }

    /// Creates a tidally responsive body
    pub fn tidal(
        mass: f64,
        radius: f64,
        rotation_period: f64,
        love_number: f64,
        position: Vector3<f64>,
        velocity: Vector3<f64>,
    ) -> Self {
        Body {
            mass,
            radius,
            rotation_period,
            love_number,
            position,
            velocity,
        }
    }

    /// Spin angular frequency 2π/P
    ///
    /// Requires a nonzero `rotation_period`; bodies built with
    /// [`Body::point_mass`] carry a zero period (their spin never enters
    /// the force model) and return infinity here.
    pub fn spin_rate(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.rotation_period
    }
}
