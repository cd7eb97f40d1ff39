//! Dense pairwise cost matrices.
//!
//! A [`CostMatrix`] is the input shared by every solver. It is square, holds
//! at least two locations and has a zero diagonal. Entries may differ by
//! direction, so `cost(i, j)` and `cost(j, i)` are independent.

use thiserror::Error;

use crate::Location;

/// Scalar cost of travelling along one edge (kilometres, minutes, ...).
///
/// Sums of costs saturate at [`Cost::MAX`] rather than overflowing.
pub type Cost = u64;

/// Errors raised while constructing a [`CostMatrix`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostMatrixError {
    /// Fewer than two locations were supplied.
    #[error("a cost matrix needs at least two locations, got {count}")]
    TooFewLocations {
        /// Number of locations supplied.
        count: usize,
    },
    /// A row length did not match the number of rows.
    #[error("row {row} has {len} entries but {expected} were expected")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Expected row length.
        expected: usize,
    },
    /// A location had a non-zero cost to itself.
    #[error("diagonal entry {index} must be zero, found {cost}")]
    NonZeroDiagonal {
        /// Index of the offending diagonal entry.
        index: usize,
        /// Cost found on the diagonal.
        cost: Cost,
    },
    /// The lookup had no entry for an ordered pair of selected locations.
    #[error("no cost recorded from {from} to {to}")]
    LookupMissing {
        /// Origin label of the missing entry.
        from: Location,
        /// Destination label of the missing entry.
        to: Location,
    },
    /// The anchor label for a rotated build is not among the selection.
    #[error("start location {start} is not among the selected locations")]
    StartNotSelected {
        /// The requested start label.
        start: Location,
    },
    /// A location appeared more than once in the selection.
    #[error("location {location} was selected more than once")]
    DuplicateLocation {
        /// The repeated label.
        location: Location,
    },
}

/// Square matrix of pairwise costs between selected locations.
///
/// Costs are stored row-major in a single allocation. The matrix is
/// immutable once built.
///
/// # Examples
/// ```
/// use tourplan_core::CostMatrix;
///
/// # fn main() -> Result<(), tourplan_core::CostMatrixError> {
/// let matrix = CostMatrix::new(vec![vec![0, 4], vec![6, 0]])?;
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(matrix.get(1, 0), Some(6));
/// assert_eq!(matrix.tour_cost(&[0, 1, 0]), Some(10));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    size: usize,
    costs: Vec<Cost>,
}

impl CostMatrix {
    /// Validate and flatten a matrix given as rows.
    ///
    /// # Errors
    ///
    /// Returns [`CostMatrixError::TooFewLocations`] when fewer than two rows
    /// are supplied, [`CostMatrixError::NotSquare`] when a row has the wrong
    /// length and [`CostMatrixError::NonZeroDiagonal`] when a location has a
    /// cost to itself.
    pub fn new(rows: Vec<Vec<Cost>>) -> Result<Self, CostMatrixError> {
        let size = rows.len();
        if size < 2 {
            return Err(CostMatrixError::TooFewLocations { count: size });
        }
        let mut costs = Vec::with_capacity(size.saturating_mul(size));
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(CostMatrixError::NotSquare {
                    row: row_index,
                    len: row.len(),
                    expected: size,
                });
            }
            if let Some(&cost) = row.get(row_index)
                && cost != 0
            {
                return Err(CostMatrixError::NonZeroDiagonal {
                    index: row_index,
                    cost,
                });
            }
            costs.extend(row);
        }
        Ok(Self { size, costs })
    }

    /// Number of locations covered by the matrix.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Always `false` for a validated matrix; provided for API symmetry.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Cost from `from` to `to`, or `None` when either index is out of range.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<Cost> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.costs.get(from * self.size + to).copied()
    }

    /// Cost from `from` to `to`.
    ///
    /// Solvers call this in their inner loops with indices already bounded
    /// by [`CostMatrix::len`].
    ///
    /// # Panics
    ///
    /// Panics if either index is not below [`CostMatrix::len`].
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "out-of-range indices are a caller bug documented under Panics"
    )]
    pub fn cost(&self, from: usize, to: usize) -> Cost {
        assert!(
            from < self.size && to < self.size,
            "matrix index ({from}, {to}) out of range for size {}",
            self.size
        );
        self.costs[from * self.size + to]
    }

    /// Borrow the outgoing costs of `from`.
    #[must_use]
    pub fn row(&self, from: usize) -> Option<&[Cost]> {
        let start = from.checked_mul(self.size)?;
        self.costs.get(start..start.checked_add(self.size)?)
    }

    /// Sum the edges along `order`, visiting consecutive pairs.
    ///
    /// Returns `None` when `order` references an index outside the matrix.
    #[must_use]
    pub fn tour_cost(&self, order: &[usize]) -> Option<Cost> {
        order.windows(2).try_fold(0, |total: Cost, pair| match pair {
            [from, to] => self.get(*from, *to).map(|edge| total.saturating_add(edge)),
            _ => Some(total),
        })
    }

    /// Copy the matrix back into nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Cost>> {
        self.costs
            .chunks(self.size)
            .map(<[Cost]>::to_vec)
            .collect()
    }
}

impl TryFrom<Vec<Vec<Cost>>> for CostMatrix {
    type Error = CostMatrixError;

    fn try_from(rows: Vec<Vec<Cost>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}
