//! Project a cost lookup onto the selected locations.
//!
//! The builder is the only place that reads a [`CostLookup`]. Every ordered
//! pair of selected labels must have an entry; the first gap found, in
//! row-major order, is reported as [`CostMatrixError::LookupMissing`].

use std::collections::HashSet;

use crate::{CostLookup, CostMatrix, CostMatrixError, Location, SolveRequest};

/// Selection rotated so the start label sits at index 0, with its matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchoredMatrix {
    /// Selected labels, starting with the requested start.
    pub locations: Vec<Location>,
    /// Costs between `locations`, in the same order.
    pub matrix: CostMatrix,
}

/// Builds dense [`CostMatrix`] values from a [`CostLookup`].
///
/// # Examples
/// ```
/// use tourplan_core::{CostMatrixBuilder, CostTable, Location};
///
/// # fn main() -> Result<(), tourplan_core::CostMatrixError> {
/// let mut table = CostTable::new();
/// table.insert_symmetric("A".into(), "B".into(), 10);
/// table.insert_symmetric("A".into(), "C".into(), 15);
/// table.insert_symmetric("B".into(), "C".into(), 35);
///
/// let selected = [Location::from("C"), Location::from("A")];
/// let matrix = CostMatrixBuilder::new(&table).build(&selected)?;
/// assert_eq!(matrix.to_rows(), vec![vec![0, 15], vec![15, 0]]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CostMatrixBuilder<'a, L: ?Sized> {
    lookup: &'a L,
}

impl<'a, L> CostMatrixBuilder<'a, L>
where
    L: CostLookup + ?Sized,
{
    /// Wrap a lookup.
    #[must_use]
    pub const fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    /// Build the `k x k` matrix where entry `(i, j)` is the lookup cost from
    /// `selected[i]` to `selected[j]`.
    ///
    /// # Errors
    ///
    /// Returns [`CostMatrixError::TooFewLocations`] for fewer than two labels,
    /// [`CostMatrixError::DuplicateLocation`] for a repeated label,
    /// [`CostMatrixError::LookupMissing`] for the first absent entry and the
    /// [`CostMatrix::new`] errors for a table with non-zero self-costs.
    pub fn build(&self, selected: &[Location]) -> Result<CostMatrix, CostMatrixError> {
        if selected.len() < 2 {
            return Err(CostMatrixError::TooFewLocations {
                count: selected.len(),
            });
        }
        let mut seen = HashSet::with_capacity(selected.len());
        if let Some(location) = selected.iter().find(|loc| !seen.insert(*loc)) {
            return Err(CostMatrixError::DuplicateLocation {
                location: location.clone(),
            });
        }

        let rows = selected
            .iter()
            .map(|from| {
                selected
                    .iter()
                    .map(|to| {
                        self.lookup
                            .cost(from, to)
                            .ok_or_else(|| CostMatrixError::LookupMissing {
                                from: from.clone(),
                                to: to.clone(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("projected {} locations into a cost matrix", selected.len());
        CostMatrix::new(rows)
    }

    /// Rotate the request's selection so the start comes first, then build.
    ///
    /// Rotation keeps the relative order of the remaining labels. Solvers
    /// that fix index 0 as the tour anchor rely on this.
    ///
    /// # Errors
    ///
    /// Returns [`CostMatrixError::StartNotSelected`] when the start label is
    /// not part of the selection, plus every error from
    /// [`CostMatrixBuilder::build`].
    pub fn build_anchored(
        &self,
        request: &SolveRequest,
    ) -> Result<AnchoredMatrix, CostMatrixError> {
        let start = request
            .start_index()
            .map_err(|_| CostMatrixError::StartNotSelected {
                start: request.start.clone(),
            })?;
        let mut locations = request.locations.clone();
        locations.rotate_left(start);
        let matrix = self.build(&locations)?;
        Ok(AnchoredMatrix { locations, matrix })
    }
}
