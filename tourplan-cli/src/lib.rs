//! Command-line interface for the tourplan route optimiser.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod locations;
mod solve;

pub use error::CliError;
use locations::{LocationsArgs, run_locations};
use solve::{SolveArgs, run_solve};

const ARG_STOPS: &str = "stops";
const ARG_START: &str = "start";
const ARG_MEASURE: &str = "measure";
const ARG_SOLVER: &str = "solver";
const ARG_TABLE: &str = "table";
const ARG_TABLES_DIR: &str = "tables-dir";
const ARG_DEADLINE_MS: &str = "deadline-ms";
const ENV_STOPS: &str = "TOURPLAN_CMDS_SOLVE_STOPS";

/// Run the tourplan CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments fail to parse, configuration cannot be
/// merged, the cost table cannot be loaded or the solver rejects the request.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Solve(args) => run_solve(args),
        Command::Locations(args) => run_locations(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tourplan",
    about = "Plan the cheapest closed tour through a set of cities",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find a closed tour through the selected stops.
    Solve(SolveArgs),
    /// List the locations a cost table covers.
    Locations(LocationsArgs),
}

#[cfg(test)]
mod tests;
