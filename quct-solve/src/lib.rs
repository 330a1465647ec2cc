//! Scalar numerical solvers for the QUCT analysis crates.
//!
//! This crate defines the shared abstractions the domain crates build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control
//!   actions
//! - [`EquationProblem`] — adapts the scalar solver variable to a model
//!   input and extracts a residual from the output
//!
//! Solvers live in [`equation`]. The only solver currently provided is
//! [`equation::bisection`], which offers guaranteed convergence on a
//! bracketed interval.

pub mod equation;

mod model;
mod observer;

pub use equation::EquationProblem;
pub use model::{Model, Snapshot};
pub use observer::Observer;
