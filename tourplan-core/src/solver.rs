//! The solver seam and its result and error types.

use thiserror::Error;

use crate::{CancellationToken, Cost, CostMatrix, CostMatrixError, SolveRequestValidationError};

/// A closed tour over matrix indices together with its total cost.
///
/// `order` starts at the tour's start index, visits every index once and
/// repeats the start at the end, so its length is `n + 1`.
///
/// # Examples
/// ```
/// use tourplan_core::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 0], 12);
/// assert_eq!(tour.start(), Some(0));
/// assert_eq!(tour.visits(), &[0, 2, 1]);
/// assert!(tour.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tour {
    order: Vec<usize>,
    cost: Cost,
}

impl Tour {
    /// Pair a closed visiting order with its cost.
    #[must_use]
    pub const fn new(order: Vec<usize>, cost: Cost) -> Self {
        Self { order, cost }
    }

    /// Pair `order` with the sum of its consecutive edges in `matrix`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::UnknownTourIndex`] when `order` names an index
    /// outside `matrix`.
    ///
    /// # Examples
    /// ```
    /// use tourplan_core::{CostMatrix, Tour};
    ///
    /// let matrix = CostMatrix::new(vec![vec![0, 2, 9], vec![7, 0, 3], vec![1, 8, 0]])?;
    /// let tour = Tour::closed(vec![0, 1, 2, 0], &matrix)?;
    /// assert_eq!(tour.cost(), 6);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn closed(order: Vec<usize>, matrix: &CostMatrix) -> Result<Self, SolveError> {
        if let Some(&index) = order.iter().find(|&&index| index >= matrix.len()) {
            return Err(SolveError::UnknownTourIndex { index });
        }
        let cost = matrix
            .tour_cost(&order)
            .ok_or(SolveError::UnknownTourIndex {
                index: matrix.len(),
            })?;
        Ok(Self { order, cost })
    }

    /// Visiting order including the closing return to the start.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Total cost including the closing edge.
    #[must_use]
    pub const fn cost(&self) -> Cost {
        self.cost
    }

    /// First index of the tour.
    #[must_use]
    pub fn start(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Visiting order without the closing return.
    #[must_use]
    pub fn visits(&self) -> &[usize] {
        self.order
            .split_last()
            .map(|(_, visits)| visits)
            .unwrap_or_default()
    }

    /// Whether the tour ends where it began.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.order.len() > 1 && self.order.first() == self.order.last()
    }

    /// Consume the tour, returning the order and cost.
    #[must_use]
    pub fn into_parts(self) -> (Vec<usize>, Cost) {
        (self.order, self.cost)
    }
}

/// Errors returned by [`Solver::solve`] and [`crate::plan_route`].
///
/// Every variant is a deterministic function of the input; retrying the same
/// call yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The request failed validation before solving began.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] SolveRequestValidationError),
    /// The cost matrix could not be built from the lookup.
    #[error("cannot build cost matrix: {0}")]
    CostMatrix(#[from] CostMatrixError),
    /// The instance has fewer locations than the solver needs.
    #[error("instance of size {size} is too small; at least two locations are required")]
    InstanceTooSmall {
        /// Number of locations in the instance.
        size: usize,
    },
    /// The instance exceeds the solver's size ceiling.
    #[error("instance of size {size} exceeds the solver limit of {max} locations")]
    InstanceTooLarge {
        /// Number of locations in the instance.
        size: usize,
        /// Largest supported instance.
        max: usize,
    },
    /// The start index does not address a matrix row.
    #[error("start index {start} is out of range for {size} locations")]
    StartOutOfRange {
        /// Requested start index.
        start: usize,
        /// Number of locations in the matrix.
        size: usize,
    },
    /// The solver only supports tours anchored at index 0.
    #[error("solver requires the tour to start at index 0, got {start}")]
    UnsupportedStart {
        /// Requested start index.
        start: usize,
    },
    /// Greedy construction found no positive-cost edge to an unvisited node.
    #[error("no positive-cost move from location {from}; {unvisited} locations left unvisited")]
    NoFeasibleMove {
        /// Index the tour was stuck at.
        from: usize,
        /// Number of locations still unvisited.
        unvisited: usize,
    },
    /// A solver produced an index with no corresponding label.
    #[error("tour references unknown location index {index}")]
    UnknownTourIndex {
        /// Offending index.
        index: usize,
    },
    /// The cancellation token fired before a result was computed.
    #[error("solve was cancelled before completion")]
    Cancelled,
}

/// Compute a closed tour over a [`CostMatrix`].
///
/// Implementations are pure functions of their arguments and hold no state
/// across calls, so they must be `Send + Sync` and safe to share between
/// worker threads.
pub trait Solver: Send + Sync {
    /// Short identifier recorded on the [`RouteResult`](crate::RouteResult).
    fn name(&self) -> &'static str;

    /// Whether the solver only accepts `start == 0`.
    ///
    /// [`crate::plan_route`] rotates the selection for such solvers.
    fn requires_zero_start(&self) -> bool {
        false
    }

    /// Solve `matrix`, starting and ending at `start`.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] describing why no tour was produced.
    fn solve(
        &self,
        matrix: &CostMatrix,
        start: usize,
        cancel: &CancellationToken,
    ) -> Result<Tour, SolveError>;
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn requires_zero_start(&self) -> bool {
        (**self).requires_zero_start()
    }

    fn solve(
        &self,
        matrix: &CostMatrix,
        start: usize,
        cancel: &CancellationToken,
    ) -> Result<Tour, SolveError> {
        (**self).solve(matrix, start, cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct IdentitySolver;

    impl Solver for IdentitySolver {
        fn name(&self) -> &'static str {
            "identity"
        }

        fn solve(
            &self,
            matrix: &CostMatrix,
            start: usize,
            cancel: &CancellationToken,
        ) -> Result<Tour, SolveError> {
            cancel.check()?;
            let size = matrix.len();
            if start >= size {
                return Err(SolveError::StartOutOfRange { start, size });
            }
            let mut order: Vec<usize> = (0..size).map(|i| (start + i) % size).collect();
            order.push(start);
            Tour::closed(order, matrix)
        }
    }

    fn matrix() -> CostMatrix {
        CostMatrix::new(vec![vec![0, 1, 2], vec![3, 0, 4], vec![5, 6, 0]]).expect("valid matrix")
    }

    #[rstest]
    #[case(0, vec![0, 1, 2, 0], 10)]
    #[case(2, vec![2, 0, 1, 2], 10)]
    fn boxed_solver_delegates(
        #[case] start: usize,
        #[case] order: Vec<usize>,
        #[case] cost: Cost,
    ) {
        let solver: Box<dyn Solver> = Box::new(IdentitySolver);
        let tour = solver
            .solve(&matrix(), start, &CancellationToken::new())
            .expect("tour");
        assert_eq!(tour, Tour::new(order, cost));
        assert_eq!(solver.name(), "identity");
        assert!(!solver.requires_zero_start());
    }

    #[rstest]
    fn cancelled_token_stops_solver() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = IdentitySolver
            .solve(&matrix(), 0, &cancel)
            .expect_err("cancelled");
        assert_eq!(err, SolveError::Cancelled);
    }

    #[rstest]
    #[case(vec![0, 1, 2, 0], 10)]
    #[case(vec![2, 1, 0, 2], 11)]
    #[case(vec![1, 0, 1], 4)]
    fn closed_tour_sums_every_edge(#[case] order: Vec<usize>, #[case] cost: Cost) {
        let tour = Tour::closed(order.clone(), &matrix()).expect("indices in range");
        assert_eq!(tour.order(), order.as_slice());
        assert_eq!(tour.cost(), cost);
    }

    #[rstest]
    #[case(vec![0, 3, 0], 3)]
    #[case(vec![7], 7)]
    fn closed_tour_rejects_unknown_indices(#[case] order: Vec<usize>, #[case] index: usize) {
        let err = Tour::closed(order, &matrix()).expect_err("index out of range");
        assert_eq!(err, SolveError::UnknownTourIndex { index });
    }

    #[rstest]
    fn open_order_is_not_closed() {
        let tour = Tour::new(vec![0, 1], 3);
        assert!(!tour.is_closed());
        assert_eq!(tour.visits(), &[0]);
        assert_eq!(tour.into_parts(), (vec![0, 1], 3));
    }
}
