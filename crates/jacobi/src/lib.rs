//! Body ensembles in a Jacobi-like reduced coordinate frame
//!
//! Each body's position is expressed relative to the mass-weighted center
//! of the bodies with smaller index, parameterized by the cumulative mass
//! array η. Body 0 sits at the coordinate origin; its position is
//! conventionally zero and unused.

pub mod body;
pub mod coords;
pub mod system;

#[cfg(test)]
mod coords_test;

pub use body::Body;
pub use coords::relative_vector;
pub use system::System;
