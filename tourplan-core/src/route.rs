//! Routes handed to presentation collaborators.
//!
//! Maps index tours back to labels and pairs them with their cost.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Cost, Location, SolveError, Tour};

/// A closed tour expressed as labels, with its total cost.
///
/// # Examples
/// ```
/// use tourplan_core::{Location, RouteResult, Tour};
///
/// # fn main() -> Result<(), tourplan_core::SolveError> {
/// let labels = [Location::from("A"), Location::from("B")];
/// let route = RouteResult::from_tour(&Tour::new(vec![0, 1, 0], 9), &labels, "greedy")?;
/// let names: Vec<&str> = route.stops.iter().map(Location::as_str).collect();
/// assert_eq!(names, ["A", "B", "A"]);
/// assert_eq!(route.total_cost, 9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteResult {
    /// Labels in visiting order, with the start repeated at the end.
    pub stops: Vec<Location>,
    /// Sum of every traversed edge including the closing one.
    pub total_cost: Cost,
    /// Name of the solver that produced the tour.
    pub solver: String,
}

impl RouteResult {
    /// Translate `tour` into labels drawn from `locations`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::UnknownTourIndex`] when the tour references an
    /// index outside `locations`.
    pub fn from_tour(
        tour: &Tour,
        locations: &[Location],
        solver: &str,
    ) -> Result<Self, SolveError> {
        let stops = tour
            .order()
            .iter()
            .map(|&index| {
                locations
                    .get(index)
                    .cloned()
                    .ok_or(SolveError::UnknownTourIndex { index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            stops,
            total_cost: tour.cost(),
            solver: solver.to_owned(),
        })
    }

    /// Consecutive `(from, to)` label pairs along the route.
    pub fn legs(&self) -> impl Iterator<Item = (&Location, &Location)> {
        self.stops.iter().zip(self.stops.iter().skip(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unknown_index_is_rejected() {
        let labels = [Location::from("A"), Location::from("B")];
        let err = RouteResult::from_tour(&Tour::new(vec![0, 2, 0], 1), &labels, "test")
            .expect_err("index 2 has no label");
        assert_eq!(err, SolveError::UnknownTourIndex { index: 2 });
    }

    #[rstest]
    fn legs_walk_consecutive_stops() {
        let labels = [Location::from("A"), Location::from("B"), Location::from("C")];
        let route = RouteResult::from_tour(&Tour::new(vec![0, 2, 1, 0], 5), &labels, "test")
            .expect("valid tour");
        let legs: Vec<(&str, &str)> = route
            .legs()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .collect();
        assert_eq!(legs, [("A", "C"), ("C", "B"), ("B", "A")]);
    }
}
