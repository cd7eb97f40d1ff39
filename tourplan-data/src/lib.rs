//! Cost table loading for the tourplan route optimiser.
//!
//! Responsibilities:
//! - Read pairwise cost tables from CSV or JSON files into a
//!   [`tourplan_core::CostTable`].
//! - Map each [`Measure`] to its conventional table file and render costs
//!   in that measure's units.
//!
//! Boundaries:
//! - Do not project tables onto selections or solve (live in
//!   `tourplan-core` and the solver crates).
//!
//! Invariants:
//! - A cell that is not a non-negative integer is an error, never zero.

#![forbid(unsafe_code)]

mod fs;
pub mod measure;
pub mod table;

pub use measure::{Measure, UnknownMeasure};
pub use table::{TableFormat, TableLoadError, load_csv_table, load_json_table, load_table, locate_table};
