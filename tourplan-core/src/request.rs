//! Solve requests and their validation.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Location;

/// Reasons a [`SolveRequest`] is rejected before any solving begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveRequestValidationError {
    /// Fewer than two locations were selected.
    #[error("select at least two locations to calculate a route, got {count}")]
    TooFewLocations {
        /// Number of locations selected.
        count: usize,
    },
    /// The start label is not among the selected locations.
    #[error("start location {start} must be one of the selected locations")]
    StartNotSelected {
        /// The requested start label.
        start: Location,
    },
    /// A label was selected more than once.
    #[error("location {location} was selected more than once")]
    DuplicateLocation {
        /// The repeated label.
        location: Location,
    },
}

/// Parameters for a single solve call.
///
/// The order of `locations` defines matrix indices `0..n`.
///
/// # Examples
/// ```
/// use tourplan_core::{Location, SolveRequest};
///
/// let request = SolveRequest::new(
///     vec![Location::from("A"), Location::from("B")],
///     Location::from("B"),
/// );
/// assert!(request.validate().is_ok());
/// assert_eq!(request.start_index(), Ok(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveRequest {
    /// Selected locations in index order.
    pub locations: Vec<Location>,
    /// Where the tour starts and ends.
    pub start: Location,
}

impl SolveRequest {
    /// Construct a request without validating it.
    #[must_use]
    pub const fn new(locations: Vec<Location>, start: Location) -> Self {
        Self { locations, start }
    }

    /// Check the request can be solved.
    ///
    /// # Errors
    ///
    /// Returns the first [`SolveRequestValidationError`] found, checking the
    /// selection size, then duplicates, then the start label.
    pub fn validate(&self) -> Result<(), SolveRequestValidationError> {
        let count = self.locations.len();
        if count < 2 {
            return Err(SolveRequestValidationError::TooFewLocations { count });
        }
        let mut seen = HashSet::with_capacity(count);
        if let Some(location) = self.locations.iter().find(|loc| !seen.insert(*loc)) {
            return Err(SolveRequestValidationError::DuplicateLocation {
                location: location.clone(),
            });
        }
        self.start_index().map(|_| ())
    }

    /// Position of the start label within `locations`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveRequestValidationError::StartNotSelected`] when the
    /// start label is absent.
    pub fn start_index(&self) -> Result<usize, SolveRequestValidationError> {
        self.locations
            .iter()
            .position(|loc| *loc == self.start)
            .ok_or_else(|| SolveRequestValidationError::StartNotSelected {
                start: self.start.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(labels: &[&str], start: &str) -> SolveRequest {
        SolveRequest::new(
            labels.iter().copied().map(Location::from).collect(),
            Location::from(start),
        )
    }

    #[rstest]
    #[case(&[], "A", 0)]
    #[case(&["A"], "A", 1)]
    fn rejects_small_selections(#[case] labels: &[&str], #[case] start: &str, #[case] count: usize) {
        let err = request(labels, start).validate().expect_err("too few");
        assert_eq!(err, SolveRequestValidationError::TooFewLocations { count });
    }

    #[rstest]
    fn rejects_start_outside_selection() {
        let err = request(&["A", "B"], "C").validate().expect_err("bad start");
        assert_eq!(
            err,
            SolveRequestValidationError::StartNotSelected { start: "C".into() }
        );
    }

    #[rstest]
    fn rejects_duplicate_labels() {
        let err = request(&["A", "B", "A"], "A")
            .validate()
            .expect_err("duplicate");
        assert_eq!(
            err,
            SolveRequestValidationError::DuplicateLocation {
                location: "A".into()
            }
        );
    }

    #[rstest]
    #[case("A", 0)]
    #[case("C", 2)]
    fn resolves_start_index(#[case] start: &str, #[case] expected: usize) {
        let req = request(&["A", "B", "C"], start);
        assert!(req.validate().is_ok());
        assert_eq!(req.start_index(), Ok(expected));
    }
}
