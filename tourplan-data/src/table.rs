//! Readers for pairwise cost tables.
//!
//! Two layouts are accepted:
//!
//! - CSV with a header row. The first header cell is ignored and the rest
//!   name the destination columns. Every data row starts with its origin
//!   label followed by one integer cost per column.
//! - JSON mapping origin label to an object of destination label to cost.

use std::io::{self, BufReader, Read};

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tourplan_core::{Cost, CostTable, Location};

use crate::fs::{file_is_file, open_utf8_file};

/// Errors raised while locating or parsing a cost table.
#[derive(Debug, Error)]
pub enum TableLoadError {
    /// The table file does not exist or is not a regular file.
    #[error("cost table {path} was not found")]
    NotFound {
        /// Path that was probed.
        path: Utf8PathBuf,
    },
    /// The table file could not be opened.
    #[error("failed to open cost table {path}: {source}")]
    Open {
        /// Path of the table file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file extension names no supported layout.
    #[error("unsupported cost table format for {path}; expected .csv or .json")]
    UnsupportedFormat {
        /// Path of the table file.
        path: Utf8PathBuf,
    },
    /// The CSV reader rejected the input.
    #[error("malformed CSV cost table: {0}")]
    Csv(#[from] csv::Error),
    /// The JSON decoder rejected the input.
    #[error("malformed JSON cost table: {0}")]
    Json(#[from] serde_json::Error),
    /// The CSV input has no header row.
    #[error("cost table has no header row")]
    MissingHeader,
    /// A data row has a different number of costs than the header has columns.
    #[error("row {line} ({label}) has {found} costs but the header names {expected} columns")]
    RaggedRow {
        /// One-based line number of the row.
        line: u64,
        /// Origin label of the row.
        label: String,
        /// Costs present on the row.
        found: usize,
        /// Columns named by the header.
        expected: usize,
    },
    /// A cell is not a non-negative integer.
    #[error("invalid cost {value:?} from {from} to {to}")]
    InvalidCost {
        /// Origin label.
        from: String,
        /// Destination label.
        to: String,
        /// Raw cell content.
        value: String,
    },
}

/// Layout of a cost table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Header row plus one labelled row per origin.
    Csv,
    /// Nested JSON object.
    Json,
}

impl TableFormat {
    /// Infer the layout from a file extension, ignoring case.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        let extension = path.extension()?;
        if extension.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else if extension.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Parse a CSV cost table.
///
/// # Errors
///
/// Returns [`TableLoadError::MissingHeader`] for empty input,
/// [`TableLoadError::RaggedRow`] when a row's width differs from the header,
/// [`TableLoadError::InvalidCost`] for a cell that is not a non-negative
/// integer and [`TableLoadError::Csv`] for malformed CSV.
///
/// # Examples
/// ```
/// use tourplan_core::{CostLookup, Location};
/// use tourplan_data::load_csv_table;
///
/// let csv = "city,Oslo,Bergen\nOslo,0,463\nBergen,463,0\n";
/// let table = load_csv_table(csv.as_bytes())?;
/// assert_eq!(table.cost(&Location::from("Oslo"), &Location::from("Bergen")), Some(463));
/// # Ok::<(), tourplan_data::TableLoadError>(())
/// ```
pub fn load_csv_table<R: Read>(reader: R) -> Result<CostTable, TableLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = csv_reader.records();

    let header = records.next().ok_or(TableLoadError::MissingHeader)??;
    let columns: Vec<Location> = header.iter().skip(1).map(Location::from).collect();

    let mut table = CostTable::new();
    for row in records {
        let record = row?;
        let mut cells = record.iter();
        let Some(label) = cells.next() else {
            continue;
        };
        let costs: Vec<&str> = cells.collect();
        if costs.len() != columns.len() {
            return Err(TableLoadError::RaggedRow {
                line: record.position().map_or(0, csv::Position::line),
                label: label.to_owned(),
                found: costs.len(),
                expected: columns.len(),
            });
        }
        let from = Location::from(label);
        for (to, raw) in columns.iter().zip(costs) {
            let cost = parse_cost(raw).ok_or_else(|| TableLoadError::InvalidCost {
                from: label.to_owned(),
                to: to.to_string(),
                value: raw.to_owned(),
            })?;
            table.insert(from.clone(), to.clone(), cost);
        }
    }
    log::debug!(
        "loaded CSV cost table with {} columns and {} rows",
        columns.len(),
        table.len()
    );
    Ok(table)
}

/// Parse a JSON cost table.
///
/// # Errors
///
/// Returns [`TableLoadError::Json`] when the input is not an object of
/// objects holding non-negative integers.
pub fn load_json_table<R: Read>(reader: R) -> Result<CostTable, TableLoadError> {
    let table: CostTable = serde_json::from_reader(reader)?;
    log::debug!("loaded JSON cost table with {} rows", table.len());
    Ok(table)
}

/// Load a cost table from `path`, choosing the layout from its extension.
///
/// # Errors
///
/// Returns [`TableLoadError::UnsupportedFormat`] for an unknown extension,
/// [`TableLoadError::Open`] when the file cannot be opened and any parse
/// error raised by [`load_csv_table`] or [`load_json_table`].
pub fn load_table(path: &Utf8Path) -> Result<CostTable, TableLoadError> {
    let format = TableFormat::from_path(path).ok_or_else(|| TableLoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let file = open_utf8_file(path).map_err(|source| TableLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("reading cost table from {path}");
    let reader = BufReader::new(file);
    match format {
        TableFormat::Csv => load_csv_table(reader),
        TableFormat::Json => load_json_table(reader),
    }
}

/// Confirm that `path` names a regular file before loading it.
///
/// # Errors
///
/// Returns [`TableLoadError::NotFound`] when the path is missing or is not a
/// regular file.
pub fn locate_table(path: &Utf8Path) -> Result<Utf8PathBuf, TableLoadError> {
    match file_is_file(path) {
        Ok(true) => Ok(path.to_path_buf()),
        Ok(false) | Err(_) => Err(TableLoadError::NotFound {
            path: path.to_path_buf(),
        }),
    }
}

fn parse_cost(raw: &str) -> Option<Cost> {
    raw.parse::<Cost>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tourplan_core::CostLookup;

    fn cost(table: &CostTable, from: &str, to: &str) -> Option<Cost> {
        table.cost(&Location::from(from), &Location::from(to))
    }

    #[rstest]
    fn reads_labelled_rows_against_header_columns() {
        let csv = "\
,A,B,C
A,0,10,15
B,12,0,35
C,15,35,0
";
        let table = load_csv_table(csv.as_bytes()).expect("valid table");
        assert_eq!(table.len(), 3);
        assert_eq!(cost(&table, "A", "B"), Some(10));
        assert_eq!(cost(&table, "B", "A"), Some(12));
        assert_eq!(cost(&table, "C", "C"), Some(0));
    }

    #[rstest]
    fn trims_whitespace_around_cells() {
        let csv = "city, New York , Chicago\nNew York, 0, 790\nChicago, 790 ,0\n";
        let table = load_csv_table(csv.as_bytes()).expect("valid table");
        assert_eq!(cost(&table, "New York", "Chicago"), Some(790));
    }

    #[rstest]
    fn empty_input_has_no_header() {
        let err = load_csv_table(&b""[..]).expect_err("no header");
        assert!(matches!(err, TableLoadError::MissingHeader));
    }

    #[rstest]
    #[case("x,A,B\nA,0\n", 1)]
    #[case("x,A,B\nA,0,1,2\n", 3)]
    fn rejects_ragged_rows(#[case] csv: &str, #[case] found: usize) {
        let err = load_csv_table(csv.as_bytes()).expect_err("ragged");
        assert!(
            matches!(
                err,
                TableLoadError::RaggedRow { line: 2, ref label, found: f, expected: 2 }
                    if label == "A" && f == found
            ),
            "unexpected error: {err:?}"
        );
    }

    #[rstest]
    #[case("-3")]
    #[case("1.5")]
    #[case("")]
    #[case("far")]
    fn rejects_non_integer_costs(#[case] cell: &str) {
        let csv = format!("x,A,B\nA,0,{cell}\n");
        let err = load_csv_table(csv.as_bytes()).expect_err("invalid cost");
        assert!(
            matches!(
                err,
                TableLoadError::InvalidCost { ref from, ref to, ref value }
                    if from == "A" && to == "B" && value == cell
            ),
            "unexpected error: {err:?}"
        );
    }

    #[rstest]
    fn reads_nested_json() {
        let json = r#"{"A": {"A": 0, "B": 7}, "B": {"A": 9, "B": 0}}"#;
        let table = load_json_table(json.as_bytes()).expect("valid table");
        assert_eq!(cost(&table, "A", "B"), Some(7));
        assert_eq!(cost(&table, "B", "A"), Some(9));
    }

    #[rstest]
    fn rejects_negative_json_costs() {
        let json = r#"{"A": {"B": -1}}"#;
        let err = load_json_table(json.as_bytes()).expect_err("negative");
        assert!(matches!(err, TableLoadError::Json(_)));
    }

    #[rstest]
    #[case("costs.csv", Some(TableFormat::Csv))]
    #[case("COSTS.JSON", Some(TableFormat::Json))]
    #[case("costs.txt", None)]
    #[case("costs", None)]
    fn detects_format_from_extension(#[case] path: &str, #[case] expected: Option<TableFormat>) {
        assert_eq!(TableFormat::from_path(Utf8Path::new(path)), expected);
    }
}
