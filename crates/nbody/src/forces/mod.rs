//! Force models for the reduced-coordinate N-body system
//!
//! `ReducedGravity` evaluates the full state derivative: pairwise gravity
//! in the Jacobi-like frame plus an optional tidal/rotational bulge
//! correction for a designated close pair.

pub mod gravity;
pub mod tidal;

#[cfg(test)]
mod tidal_test;

pub use gravity::ReducedGravity;
pub use tidal::TidalCorrection;
