//! Shared test harness modules for the tourplan CLI.

use super::*;
use crate::locations::{LocationsArgs, run_locations_with};
use crate::solve::{
    DefaultSolveSolverBuilder, SolveArgs, SolveConfig, SolveOutput, SolveSolverBuilder,
    SolverChoice, config_from_layers_for_test, parse_stops, run_solve_with,
};

mod helpers;
