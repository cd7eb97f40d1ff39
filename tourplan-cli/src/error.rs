//! Error types emitted by the tourplan CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use thiserror::Error;
use tourplan_core::{SolveError, SolveRequestValidationError};
use tourplan_data::TableLoadError;

/// Errors emitted by the tourplan CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The cost table could not be found or parsed.
    #[error(transparent)]
    Table(#[from] TableLoadError),
    /// The selected stops do not form a valid request.
    #[error("invalid selection: {0}")]
    InvalidRequest(#[from] SolveRequestValidationError),
    /// The solver rejected the request.
    #[error("solver failed: {source}")]
    Solve {
        /// Underlying solver error.
        source: SolveError,
    },
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
