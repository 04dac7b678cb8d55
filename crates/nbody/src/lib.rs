//! Variable-order, adaptive-step Bulirsch-Stoer N-body integrator
//!
//! Advances a hierarchical N-body system (a close, tidally distorted inner
//! binary plus wider companions in a Jacobi-like reduced frame) forward or
//! backward in time. The engine pairs Gragg's modified midpoint rule with
//! rational-function extrapolation toward the zero-sub-step limit and an
//! adaptive order/step-size controller.

pub mod evolve;
pub mod extrapolate;
pub mod forces;
pub mod midpoint;


pub use evolve::{evolve, EvolveError, StepControl};
pub use forces::{ReducedGravity, TidalCorrection};
