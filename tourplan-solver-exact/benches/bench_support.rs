//! Benchmark support utilities for the tour solvers.
//!
//! Provides deterministic cost matrices built from seeded random points so
//! benchmark runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tourplan_core::{Cost, CostMatrix};

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Side length of the square grid points are drawn from.
const GRID_SIZE: i64 = 1_000;

/// Largest extra cost added to one direction of an edge.
const MAX_DETOUR: Cost = 25;

/// Generate a directed cost matrix over `count` random grid points.
///
/// Each edge costs the Manhattan distance between its endpoints plus a small
/// per-direction detour, so the matrix is asymmetric and every off-diagonal
/// cost is positive.
#[must_use]
pub fn generate_cost_matrix(count: usize, seed: u64) -> Option<CostMatrix> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points: Vec<(i64, i64)> = (0..count)
        .map(|_| (rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE)))
        .collect();

    let rows = points
        .iter()
        .enumerate()
        .map(|(i, &(xi, yi))| {
            points
                .iter()
                .enumerate()
                .map(|(j, &(xj, yj))| {
                    if i == j {
                        return 0;
                    }
                    let distance = xi.abs_diff(xj) + yi.abs_diff(yj);
                    distance.max(1) + rng.gen_range(0..=MAX_DETOUR)
                })
                .collect()
        })
        .collect();
    CostMatrix::new(rows).ok()
}
