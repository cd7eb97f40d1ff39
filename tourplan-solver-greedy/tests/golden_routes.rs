#![expect(
    clippy::expect_used,
    reason = "regression tests use expect for readable failures"
)]

//! Golden route regression tests for the greedy solver.
//!
//! Each fixture carries a full cost matrix aligned with its labels, the
//! start label and the route the nearest-neighbour heuristic is known to
//! produce. The whole pipeline runs through [`plan_route`] so label mapping
//! is covered alongside the heuristic.

use std::fs;
use std::path::PathBuf;

use rstest::rstest;
use serde::Deserialize;
use tourplan_core::{CancellationToken, Cost, CostTable, Location, SolveRequest, plan_route};
use tourplan_solver_greedy::GreedySolver;

/// Deserialised golden route fixture.
#[derive(Debug, Deserialize)]
struct GoldenRoute {
    name: String,
    #[expect(dead_code, reason = "kept for documentation in JSON files")]
    description: String,
    locations: Vec<Location>,
    costs: Vec<Vec<Cost>>,
    start: Location,
    expected: ExpectedRoute,
}

#[derive(Debug, Deserialize)]
struct ExpectedRoute {
    stops: Vec<Location>,
    total_cost: Cost,
}

fn load_golden_route(filename: &str) -> GoldenRoute {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(filename);
    let content = fs::read_to_string(&path).expect("failed to read golden route file");
    serde_json::from_str(&content).expect("failed to parse golden route JSON")
}

/// Expand aligned matrix rows into a label-keyed table.
fn build_table(locations: &[Location], costs: &[Vec<Cost>]) -> CostTable {
    locations
        .iter()
        .zip(costs)
        .flat_map(|(from, row)| {
            locations
                .iter()
                .zip(row)
                .map(move |(to, &cost)| (from.clone(), to.clone(), cost))
        })
        .collect()
}

#[rstest]
#[case("us_cities.json")]
#[case("four_city_from_c.json")]
#[case("asymmetric_triangle.json")]
fn golden_route_regression(#[case] filename: &str) {
    let golden = load_golden_route(filename);
    let table = build_table(&golden.locations, &golden.costs);
    let request = SolveRequest::new(golden.locations.clone(), golden.start.clone());

    let route = plan_route(&request, &table, &GreedySolver, &CancellationToken::new())
        .expect("golden route should solve successfully");

    assert_eq!(
        route.stops, golden.expected.stops,
        "{}: stop order mismatch",
        golden.name
    );
    assert_eq!(
        route.total_cost, golden.expected.total_cost,
        "{}: cost mismatch",
        golden.name
    );
    assert_eq!(route.solver, GreedySolver::NAME);
}
