#![expect(
    clippy::expect_used,
    reason = "property tests use expect for readable failures"
)]

//! Property-based tests for `CostMatrixBuilder`.
//!
//! # Invariants tested
//!
//! - **Projection:** entry `(i, j)` equals the lookup cost from the `i`-th
//!   to the `j`-th selected label, for every pair.
//! - **Anchoring:** `build_anchored` rotates the selection so the start is
//!   first, keeps the remaining order and projects the same costs.

use proptest::prelude::*;
use tourplan_core::{
    Cost, CostLookup, CostMatrix, CostMatrixBuilder, CostTable, Location, SolveRequest,
};

const MAX_TABLE_SIZE: usize = 8;
const MAX_GENERATED_COST: Cost = 500;

fn label(index: usize) -> Location {
    Location::new(format!("L{index}"))
}

/// Strategy for a complete table over `2..=MAX_TABLE_SIZE` labels, a
/// shuffled selection of at least two of them and a position in it.
fn table_and_selection() -> impl Strategy<Value = (CostTable, Vec<Location>, usize)> {
    (2..=MAX_TABLE_SIZE).prop_flat_map(|size| {
        let costs = proptest::collection::vec(0..=MAX_GENERATED_COST, size * size);
        let selection = proptest::sample::subsequence((0..size).collect::<Vec<_>>(), 2..=size)
            .prop_shuffle();
        (costs, selection).prop_flat_map(move |(costs, selection)| {
            let mut table = CostTable::new();
            for (from, row) in costs.chunks(size).enumerate() {
                for (to, &raw) in row.iter().enumerate() {
                    let cost = if from == to { 0 } else { raw };
                    table.insert(label(from), label(to), cost);
                }
            }
            let picked: Vec<Location> = selection.into_iter().map(label).collect();
            let positions = 0..picked.len();
            (Just(table), Just(picked), positions)
        })
    })
}

fn assert_projects(
    table: &CostTable,
    labels: &[Location],
    matrix: &CostMatrix,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(matrix.len(), labels.len());
    for (i, from) in labels.iter().enumerate() {
        for (j, to) in labels.iter().enumerate() {
            prop_assert_eq!(
                matrix.get(i, j),
                table.cost(from, to),
                "entry ({}, {}) for {} -> {}",
                i,
                j,
                from,
                to
            );
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: Every entry is the lookup cost of the selected pair.
    #[test]
    fn build_projects_every_selected_pair(
        (table, selection, _start) in table_and_selection()
    ) {
        let matrix = CostMatrixBuilder::new(&table)
            .build(&selection)
            .expect("complete tables cover every selection");
        assert_projects(&table, &selection, &matrix)?;
    }

    /// Property: Anchoring rotates the selection and projects the same costs.
    #[test]
    fn build_anchored_rotates_then_projects(
        (table, selection, start) in table_and_selection()
    ) {
        let start_label = selection.get(start).cloned().expect("position in range");
        let request = SolveRequest::new(selection.clone(), start_label.clone());
        let anchored = CostMatrixBuilder::new(&table)
            .build_anchored(&request)
            .expect("complete tables cover every selection");

        let mut rotated = selection.clone();
        rotated.rotate_left(start);
        prop_assert_eq!(anchored.locations.first(), Some(&start_label));
        prop_assert_eq!(&anchored.locations, &rotated);
        assert_projects(&table, &anchored.locations, &anchored.matrix)?;
    }
}
