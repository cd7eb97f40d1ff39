//! Facade crate for the tourplan route optimiser.
//!
//! This crate re-exports the core domain types and exposes the heuristic and
//! exact solvers behind feature flags.

#![forbid(unsafe_code)]

pub use tourplan_core::{
    AnchoredMatrix, CancellationToken, Cost, CostLookup, CostMatrix, CostMatrixBuilder,
    CostMatrixError, CostTable, Location, RouteResult, SolveError, SolveRequest,
    SolveRequestValidationError, Solver, Tour, plan_route,
};

#[cfg(feature = "solver-greedy")]
pub use tourplan_solver_greedy::GreedySolver;

#[cfg(feature = "solver-exact")]
pub use tourplan_solver_exact::{
    EXACT_LOCATIONS_CEILING, HeldKarpConfig, HeldKarpSolver, MAX_EXACT_LOCATIONS,
    RECOMMENDED_EXACT_LOCATIONS,
};
