use crate::body::Body;
use crate::coords::relative_vector;
use nalgebra::Vector3;

/// Complete state of a hierarchical N-body system at a given time
///
/// Static attributes are stored per-attribute (structure of arrays) so the
/// force evaluation can borrow plain `&[f64]` slices without touching the
/// mutable state. The cumulative mass array η is maintained on every
/// `add_body` call: η_0 = m_0 and η_i = η_{i-1} + m_i, which keeps it
/// strictly increasing as long as masses are positive.
///
/// Positions and velocities are mutated by the integration driver at the
/// end of each accepted step; accelerations are an output filled at the
/// final accepted state.
#[derive(Debug, Clone, Default)]
pub struct System {
    /// Current simulation time
    pub time: f64,
    masses: Vec<f64>,
    eta: Vec<f64>,
    radii: Vec<f64>,
    rotation_periods: Vec<f64>,
    love_numbers: Vec<f64>,
    /// Reduced-coordinate positions, entry 0 conventionally zero
    pub positions: Vec<Vector3<f64>>,
    /// Reduced-coordinate velocities
    pub velocities: Vec<Vector3<f64>>,
    /// Accelerations at the last accepted state (output only)
    pub accelerations: Vec<Vector3<f64>>,
}

impl System {
    /// Creates an empty system at t = 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a body, extending η with the new cumulative mass
    ///
    /// # Examples
    ///
    /// ```
    /// use jacobi::{Body, System};
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
    /// assert_eq!(system.body_count(), 2);
    /// assert_eq!(system.eta(), &[1.0, 1.001]);
    /// ```
    pub fn add_body(&mut self, body: Body) {
        debug_assert!(body.mass > 0.0, "body mass must be positive");
        let eta_prev = self.eta.last().copied().unwrap_or(0.0);
        self.eta.push(eta_prev + body.mass);
        self.masses.push(body.mass);
        self.radii.push(body.radius);
        self.rotation_periods.push(body.rotation_period);
        self.love_numbers.push(body.love_number);
        self.positions.push(body.position);
        self.velocities.push(body.velocity);
        self.accelerations.push(Vector3::zeros());
    }

    /// Number of bodies in the system
    pub fn body_count(&self) -> usize {
        self.masses.len()
    }

    /// Gravitational parameters (G = 1 masses)
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Cumulative mass array η, strictly increasing
    pub fn eta(&self) -> &[f64] {
        &self.eta
    }

    /// Physical radii
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    /// Spin periods
    pub fn rotation_periods(&self) -> &[f64] {
        &self.rotation_periods
    }

    /// Tidal Love numbers k2
    pub fn love_numbers(&self) -> &[f64] {
        &self.love_numbers
    }

    /// Separation between bodies `i` and `j` at the current state
    pub fn separation(&self, i: usize, j: usize) -> Vector3<f64> {
        relative_vector(&self.positions, &self.masses, &self.eta, i, j)
    }

    /// Total mass of the ensemble (η of the outermost body)
    pub fn total_mass(&self) -> f64 {
        self.eta.last().copied().unwrap_or(0.0)
    }
}
