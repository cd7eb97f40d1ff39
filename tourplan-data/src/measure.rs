//! Cost measures and their presentation.

use std::fmt;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tourplan_core::Cost;

/// Minutes in an hour, for rendering [`Measure::Time`] costs.
const MINUTES_PER_HOUR: Cost = 60;

/// What a cost table measures.
///
/// # Examples
/// ```
/// use tourplan_data::Measure;
///
/// assert_eq!(Measure::Distance.format_cost(412), "412 kilometers");
/// assert_eq!(Measure::Time.format_cost(135), "2 hours 15 minutes");
/// assert_eq!("time".parse::<Measure>(), Ok(Measure::Time));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    /// Road distance in kilometres.
    #[default]
    Distance,
    /// Travel time in minutes.
    Time,
}

impl Measure {
    /// Every supported measure.
    pub const ALL: [Self; 2] = [Self::Distance, Self::Time];

    /// Lower-case name used on the command line and in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Time => "time",
        }
    }

    /// Conventional file name of this measure's cost table.
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Distance => "distance_cost.csv",
            Self::Time => "time_cost.csv",
        }
    }

    /// Path of this measure's table inside `dir`.
    #[must_use]
    pub fn table_path(self, dir: &Utf8Path) -> Utf8PathBuf {
        dir.join(self.default_file_name())
    }

    /// Render a total cost in this measure's units.
    ///
    /// Distances print as kilometres; times print as whole hours and the
    /// remaining minutes.
    #[must_use]
    pub fn format_cost(self, cost: Cost) -> String {
        match self {
            Self::Distance => format!("{cost} kilometers"),
            Self::Time => {
                #[expect(
                    clippy::integer_division,
                    clippy::integer_division_remainder_used,
                    reason = "whole hours and leftover minutes are intended"
                )]
                let (hours, minutes) = (cost / MINUTES_PER_HOUR, cost % MINUTES_PER_HOUR);
                format!("{hours} hours {minutes} minutes")
            }
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised measure name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown measure: {0}; expected distance or time")]
pub struct UnknownMeasure(pub String);

impl FromStr for Measure {
    type Err = UnknownMeasure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|measure| measure.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMeasure(s.to_owned()))
    }
}
