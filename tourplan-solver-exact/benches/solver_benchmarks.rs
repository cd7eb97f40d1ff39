//! Criterion benchmarks for the exact and greedy solvers.
//!
//! Measures solve time across instance sizes up to the recommended exact
//! ceiling so the exponential growth of Held–Karp is visible next to the
//! quadratic heuristic.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package tourplan-solver-exact
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tourplan_core::{CancellationToken, Solver};
use tourplan_solver_exact::{HeldKarpSolver, RECOMMENDED_EXACT_LOCATIONS};
use tourplan_solver_greedy::GreedySolver;

mod bench_support;

use bench_support::{BENCHMARK_SEED, generate_cost_matrix};

/// Instance sizes to benchmark.
const PROBLEM_SIZES: &[usize] = &[8, 12, RECOMMENDED_EXACT_LOCATIONS];

fn bench_solvers(c: &mut Criterion, name: &str, solver: &dyn Solver) {
    let mut group = c.benchmark_group(name);
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    let cancel = CancellationToken::new();
    for &size in PROBLEM_SIZES {
        let Some(matrix) = generate_cost_matrix(size, BENCHMARK_SEED) else {
            continue;
        };
        #[expect(
            clippy::as_conversions,
            reason = "Safe conversion for small problem sizes"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("locations", size), &size, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking solve performance, result is intentionally discarded"
                )]
                let _ = solver.solve(&matrix, 0, &cancel);
            });
        });
    }

    group.finish();
}

fn bench_held_karp(c: &mut Criterion) {
    bench_solvers(c, "held_karp", &HeldKarpSolver::new());
}

fn bench_greedy(c: &mut Criterion) {
    bench_solvers(c, "greedy", &GreedySolver);
}

criterion_group!(benches, bench_held_karp, bench_greedy);
criterion_main!(benches);
