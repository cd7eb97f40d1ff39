//! `locations` command: list the labels a cost table covers.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tourplan_core::Location;
use tourplan_data::{Measure, load_table, locate_table};

use crate::solve::{resolve_table_path, write_json};
use crate::{ARG_MEASURE, ARG_TABLE, ARG_TABLES_DIR, CliError};

/// CLI arguments for the `locations` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "locations", about = "List the locations a cost table covers")]
#[ortho_config(prefix = "TOURPLAN")]
pub(crate) struct LocationsArgs {
    /// Whether costs are distances or travel times.
    #[arg(long = ARG_MEASURE, value_name = "measure")]
    #[serde(default)]
    pub(crate) measure: Option<Measure>,
    /// Explicit path to the cost table.
    #[arg(long = ARG_TABLE, value_name = "path")]
    #[serde(default)]
    pub(crate) table: Option<Utf8PathBuf>,
    /// Directory holding the default table for the chosen measure.
    #[arg(long = ARG_TABLES_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) tables_dir: Option<Utf8PathBuf>,
}

pub(crate) fn run_locations(args: LocationsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_locations_with(args, &mut stdout)
}

pub(crate) fn run_locations_with(
    args: LocationsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let measure = merged.measure.unwrap_or_default();
    let path = locate_table(&resolve_table_path(merged.table, merged.tables_dir, measure))?;
    let table = load_table(&path)?;
    let labels: Vec<&Location> = table.locations().collect();
    write_json(writer, &labels)
}
