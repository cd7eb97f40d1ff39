//! Exact tour solver for small instances.
//!
//! This crate provides [`HeldKarpSolver`], a bitmask dynamic program that
//! returns the true minimum-cost closed tour anchored at index 0. Time grows
//! as `n² · 2ⁿ` and memory as `n · 2ⁿ`, so instances are capped at
//! [`MAX_EXACT_LOCATIONS`] by default and can be raised no further than
//! [`EXACT_LOCATIONS_CEILING`]. Callers choosing between solvers
//! should fall back to a heuristic above [`RECOMMENDED_EXACT_LOCATIONS`].
//!
//! The solver only accepts `start == 0`. Rotate the selection first, for
//! example with [`tourplan_core::CostMatrixBuilder::build_anchored`], or let
//! [`tourplan_core::plan_route`] do it.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod memo;
mod solver;

pub use solver::{
    EXACT_LOCATIONS_CEILING, HeldKarpConfig, HeldKarpSolver, MAX_EXACT_LOCATIONS,
    RECOMMENDED_EXACT_LOCATIONS,
};
