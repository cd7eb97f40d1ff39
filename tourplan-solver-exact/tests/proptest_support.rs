//! Proptest strategies for exact solver property-based tests.

use proptest::prelude::*;
use tourplan_core::{Cost, CostMatrix};

/// Strategy for a square matrix of `min_size..=max_size` locations with a
/// zero diagonal and costs in `0..=max_cost` elsewhere.
///
/// Zero off-diagonal costs are allowed; the exact solver treats them as
/// ordinary edges.
pub fn cost_matrix(
    min_size: usize,
    max_size: usize,
    min_cost: Cost,
    max_cost: Cost,
) -> impl Strategy<Value = CostMatrix> {
    (min_size..=max_size).prop_flat_map(move |size| {
        proptest::collection::vec(
            proptest::collection::vec(min_cost..=max_cost, size),
            size,
        )
        .prop_filter_map("generated rows form a cost matrix", |rows| {
            CostMatrix::new(zero_diagonal(rows)).ok()
        })
    })
}

/// Strategy for symmetric matrices, built by mirroring the upper triangle.
pub fn symmetric_cost_matrix(
    min_size: usize,
    max_size: usize,
    max_cost: Cost,
) -> impl Strategy<Value = CostMatrix> {
    cost_matrix(min_size, max_size, 1, max_cost).prop_filter_map(
        "mirrored rows form a cost matrix",
        |matrix| {
            let mut rows = matrix.to_rows();
            let size = rows.len();
            for from in 0..size {
                for to in 0..from {
                    let mirrored = matrix.get(to, from);
                    if let (Some(cell), Some(cost)) =
                        (rows.get_mut(from).and_then(|row| row.get_mut(to)), mirrored)
                    {
                        *cell = cost;
                    }
                }
            }
            CostMatrix::new(rows).ok()
        },
    )
}

fn zero_diagonal(mut rows: Vec<Vec<Cost>>) -> Vec<Vec<Cost>> {
    for (index, row) in rows.iter_mut().enumerate() {
        if let Some(cell) = row.get_mut(index) {
            *cell = 0;
        }
    }
    rows
}
