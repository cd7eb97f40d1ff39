//! Opaque location labels.

use std::borrow::Borrow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Label identifying a place that may be visited.
///
/// Labels are compared verbatim; callers are responsible for normalising
/// case or whitespace before building a request.
///
/// # Examples
/// ```
/// use tourplan_core::Location;
///
/// let depot = Location::new("Depot");
/// assert_eq!(depot.as_str(), "Depot");
/// assert_eq!(depot, Location::from("Depot"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Location(String);

impl Location {
    /// Wrap a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Borrow the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Location {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Location {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl Borrow<str> for Location {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
