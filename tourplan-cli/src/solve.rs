//! Solve command implementation for the tourplan CLI.

use std::io::Write;
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tourplan_core::{
    CancellationToken, CostTable, Location, RouteResult, SolveRequest, Solver, plan_route,
};
use tourplan_data::{Measure, load_table, locate_table};
use tourplan_solver_exact::{HeldKarpSolver, RECOMMENDED_EXACT_LOCATIONS};
use tourplan_solver_greedy::GreedySolver;

use crate::{
    ARG_DEADLINE_MS, ARG_MEASURE, ARG_SOLVER, ARG_START, ARG_STOPS, ARG_TABLE, ARG_TABLES_DIR,
    CliError, ENV_STOPS,
};

/// Which algorithm answers a solve invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SolverChoice {
    /// Exact for small selections, greedy otherwise.
    #[default]
    Auto,
    /// Nearest-neighbour heuristic.
    Greedy,
    /// Held–Karp dynamic program.
    Exact,
}

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "solve",
    long_about = "Select the cities to visit and the one to start from. \
                 Costs come from a CSV or JSON table; options can be set \
                 through CLI flags, configuration files, or environment \
                 variables.",
    about = "Plan a closed tour through the selected stops"
)]
#[ortho_config(prefix = "TOURPLAN")]
pub(crate) struct SolveArgs {
    /// Comma-separated stop labels, e.g. "New York,Chicago,Houston".
    #[arg(long = ARG_STOPS, value_name = "labels")]
    #[serde(default)]
    pub(crate) stops: Option<String>,
    /// Label the tour starts and ends at. Defaults to the first stop.
    #[arg(long = ARG_START, value_name = "label")]
    #[serde(default)]
    pub(crate) start: Option<String>,
    /// Whether costs are distances or travel times.
    #[arg(long = ARG_MEASURE, value_name = "measure")]
    #[serde(default)]
    pub(crate) measure: Option<Measure>,
    /// Algorithm used to build the tour.
    #[arg(long = ARG_SOLVER, value_enum)]
    #[serde(default)]
    pub(crate) solver: Option<SolverChoice>,
    /// Explicit path to the cost table.
    #[arg(long = ARG_TABLE, value_name = "path")]
    #[serde(default)]
    pub(crate) table: Option<Utf8PathBuf>,
    /// Directory holding the default table for the chosen measure.
    #[arg(long = ARG_TABLES_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) tables_dir: Option<Utf8PathBuf>,
    /// Abandon the solve after this many milliseconds.
    #[arg(long = ARG_DEADLINE_MS, value_name = "ms")]
    #[serde(default)]
    pub(crate) deadline_ms: Option<u64>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    pub(crate) stops: Vec<Location>,
    pub(crate) start: Location,
    pub(crate) measure: Measure,
    pub(crate) solver: SolverChoice,
    pub(crate) table: Utf8PathBuf,
    pub(crate) deadline: Option<Duration>,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        locate_table(&self.table)?;
        Ok(())
    }

    pub(crate) fn request(&self) -> SolveRequest {
        SolveRequest::new(self.stops.clone(), self.start.clone())
    }

    fn cancellation_token(&self) -> CancellationToken {
        match self.deadline {
            Some(deadline) => CancellationToken::never().with_deadline(deadline),
            None => CancellationToken::never(),
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let missing_stops = CliError::MissingArgument {
            field: ARG_STOPS,
            env: ENV_STOPS,
        };
        let stops = parse_stops(args.stops.as_deref().ok_or(missing_stops)?);
        let start = match args.start {
            Some(label) => Location::new(label.trim()),
            None => stops.first().cloned().ok_or(CliError::MissingArgument {
                field: ARG_STOPS,
                env: ENV_STOPS,
            })?,
        };
        let measure = args.measure.unwrap_or_default();
        let table = resolve_table_path(args.table, args.tables_dir, measure);

        Ok(Self {
            stops,
            start,
            measure,
            solver: args.solver.unwrap_or_default(),
            table,
            deadline: args.deadline_ms.map(Duration::from_millis),
        })
    }
}

/// Split a comma-separated list into trimmed, non-empty labels.
pub(crate) fn parse_stops(raw: &str) -> Vec<Location> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(Location::from)
        .collect()
}

/// Explicit table path, or the measure's default file inside `tables_dir`.
pub(crate) fn resolve_table_path(
    table: Option<Utf8PathBuf>,
    tables_dir: Option<Utf8PathBuf>,
    measure: Measure,
) -> Utf8PathBuf {
    table.unwrap_or_else(|| {
        let dir = tables_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        measure.table_path(&dir)
    })
}

/// JSON document printed by a successful solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SolveOutput {
    pub(crate) route: RouteResult,
    pub(crate) measure: Measure,
    pub(crate) formatted_cost: String,
}

/// Builds a solver instance for the current solve invocation.
pub(crate) trait SolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError>;
}

pub(crate) struct DefaultSolveSolverBuilder;

impl SolveSolverBuilder for DefaultSolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
        let choice = match config.solver {
            SolverChoice::Auto if config.stops.len() <= RECOMMENDED_EXACT_LOCATIONS => {
                SolverChoice::Exact
            }
            SolverChoice::Auto => SolverChoice::Greedy,
            explicit => explicit,
        };
        log::debug!(
            "using {choice:?} solver for {} stops",
            config.stops.len()
        );
        Ok(match choice {
            SolverChoice::Exact => Box::new(HeldKarpSolver::new()),
            SolverChoice::Greedy | SolverChoice::Auto => Box::new(GreedySolver::new()),
        })
    }
}

pub(crate) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultSolveSolverBuilder;
    run_solve_with(args, &builder, &mut stdout)
}

pub(crate) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    let output = execute_solve(&config, builder)?;
    write_json(writer, &output)
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_solve(
    config: &SolveConfig,
    builder: &dyn SolveSolverBuilder,
) -> Result<SolveOutput, CliError> {
    let request = config.request();
    request.validate()?;
    let table = load_cost_table(&config.table)?;
    let solver = builder.build(config)?;
    let route = plan_route(&request, &table, &*solver, &config.cancellation_token())
        .map_err(|source| CliError::Solve { source })?;
    Ok(SolveOutput {
        formatted_cost: config.measure.format_cost(route.total_cost),
        measure: config.measure,
        route,
    })
}

fn load_cost_table(path: &Utf8Path) -> Result<CostTable, CliError> {
    Ok(load_table(path)?)
}

/// Pretty-print `value` as JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
