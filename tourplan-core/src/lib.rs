//! Core domain types for the tourplan route optimiser.
//!
//! The crate models a single solving session: an ordered selection of
//! [`Location`] labels, a [`CostLookup`] holding pairwise costs, the dense
//! [`CostMatrix`] projected from it, and the [`RouteResult`] returned to
//! callers. Solvers plug in through the [`Solver`] trait and are driven by
//! [`plan_route`].
//!
//! Constructors return `Result` to surface invalid input early. A missing
//! cost is always an error and never defaults to zero, because zero is the
//! "no direct edge" marker for the greedy heuristic.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod builder;
pub mod cancel;
pub mod location;
pub mod lookup;
pub mod matrix;
pub mod plan;
pub mod request;
pub mod route;
pub mod solver;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use builder::{AnchoredMatrix, CostMatrixBuilder};
pub use cancel::CancellationToken;
pub use location::Location;
pub use lookup::{CostLookup, CostTable};
pub use matrix::{Cost, CostMatrix, CostMatrixError};
pub use plan::plan_route;
pub use request::{SolveRequest, SolveRequestValidationError};
pub use route::RouteResult;
pub use solver::{SolveError, Solver, Tour};
