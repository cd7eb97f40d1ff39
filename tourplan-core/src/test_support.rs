//! Fixtures shared by unit, behaviour and property tests.
//!
//! Available to this crate's tests and, through the `test-support` feature,
//! to the solver crates.

use crate::{Cost, CostMatrix, CostTable, Location};

/// Turn string literals into labels.
#[must_use]
pub fn labels(names: &[&str]) -> Vec<Location> {
    names.iter().copied().map(Location::from).collect()
}

/// Symmetric table over `A`..`D` whose optimal closed tour costs 80.
///
/// | pair | cost |
/// |------|------|
/// | A-B  | 10   |
/// | A-C  | 15   |
/// | A-D  | 20   |
/// | B-C  | 35   |
/// | B-D  | 25   |
/// | C-D  | 30   |
#[must_use]
pub fn four_city_table() -> CostTable {
    symmetric_table(&[
        ("A", "B", 10),
        ("A", "C", 15),
        ("A", "D", 20),
        ("B", "C", 35),
        ("B", "D", 25),
        ("C", "D", 30),
    ])
}

/// Road distances in miles between five US cities.
#[must_use]
pub fn us_cities_table() -> CostTable {
    symmetric_table(&[
        ("New York", "Los Angeles", 2795),
        ("New York", "Chicago", 790),
        ("New York", "Houston", 1627),
        ("New York", "Phoenix", 2445),
        ("Los Angeles", "Chicago", 2015),
        ("Los Angeles", "Houston", 1547),
        ("Los Angeles", "Phoenix", 372),
        ("Chicago", "Houston", 1084),
        ("Chicago", "Phoenix", 1745),
        ("Houston", "Phoenix", 1174),
    ])
}

/// Labels of [`us_cities_table`] in their conventional order.
#[must_use]
pub fn us_cities() -> Vec<Location> {
    labels(&["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"])
}

/// Build a symmetric table from undirected edges.
#[must_use]
pub fn symmetric_table(edges: &[(&str, &str, Cost)]) -> CostTable {
    let mut table = CostTable::new();
    for &(a, b, cost) in edges {
        table.insert_symmetric(a.into(), b.into(), cost);
    }
    table
}

/// Build a matrix from literal rows.
///
/// # Panics
///
/// Panics when the rows do not form a valid [`CostMatrix`].
#[must_use]
#[expect(
    clippy::expect_used,
    reason = "fixtures fail loudly on malformed literals"
)]
pub fn matrix(rows: &[&[Cost]]) -> CostMatrix {
    CostMatrix::new(rows.iter().map(|row| row.to_vec()).collect()).expect("valid fixture matrix")
}

/// Cheapest closed tour from index 0, found by trying every permutation.
///
/// Only practical for small matrices; used as an oracle for the solvers.
#[must_use]
pub fn brute_force_optimum(matrix: &CostMatrix) -> Cost {
    let size = matrix.len();
    let mut visited = vec![false; size];
    if let Some(start) = visited.first_mut() {
        *start = true;
    }
    extend_tour(matrix, 0, 1, 0, &mut visited)
}

fn extend_tour(
    matrix: &CostMatrix,
    current: usize,
    placed: usize,
    cost_so_far: Cost,
    visited: &mut [bool],
) -> Cost {
    if placed == matrix.len() {
        return cost_so_far.saturating_add(matrix.cost(current, 0));
    }
    let mut best = Cost::MAX;
    for next in 0..matrix.len() {
        if visited.get(next).copied().unwrap_or(true) {
            continue;
        }
        if let Some(flag) = visited.get_mut(next) {
            *flag = true;
        }
        let total = extend_tour(
            matrix,
            next,
            placed + 1,
            cost_so_far.saturating_add(matrix.cost(current, next)),
            visited,
        );
        best = best.min(total);
        if let Some(flag) = visited.get_mut(next) {
            *flag = false;
        }
    }
    best
}

/// Whether `order` is a closed tour from `start` visiting every index of a
/// `size`-location matrix exactly once.
#[must_use]
pub fn is_closed_permutation(order: &[usize], start: usize, size: usize) -> bool {
    if order.len() != size + 1 || order.first() != Some(&start) || order.last() != Some(&start) {
        return false;
    }
    let mut seen = vec![false; size];
    order.iter().take(size).all(|&index| {
        seen.get_mut(index)
            .is_some_and(|flag| !std::mem::replace(flag, true))
    })
}
