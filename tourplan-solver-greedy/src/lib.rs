//! Nearest-neighbour tour construction for tourplan.
//!
//! This crate provides [`GreedySolver`], the fast approximate implementation
//! of the [`Solver`](tourplan_core::Solver) trait. It builds a closed tour in
//! a single O(n²) pass by always moving to the cheapest unvisited location.
//!
//! Zero-cost entries are read as "no direct edge" and are never chosen, so a
//! genuinely free edge between two distinct locations is skipped. Instances
//! whose remaining locations are only reachable through such entries fail
//! with [`SolveError::NoFeasibleMove`](tourplan_core::SolveError::NoFeasibleMove).

#![forbid(unsafe_code)]

mod solver;

pub use solver::GreedySolver;
