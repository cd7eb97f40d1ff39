//! `HeldKarpSolver` implementation.
//!
//! Subsets are processed in order of increasing size so every state a
//! recurrence step reads has already been finalised.

use std::time::Instant;

use tourplan_core::{CancellationToken, CostMatrix, SolveError, Solver, Tour};

use crate::memo::{Entry, MASK_CEILING, Memo, SubsetsOfSize, bit, full_mask, members};

/// Default hard ceiling on instance size.
pub const MAX_EXACT_LOCATIONS: usize = 20;

/// Advisory ceiling above which callers should prefer a heuristic.
pub const RECOMMENDED_EXACT_LOCATIONS: usize = 16;

/// Largest ceiling [`HeldKarpConfig::max_locations`] may raise the solver to.
///
/// The state table holds `2^(n-1) * n` slots of nine bytes each, so 24
/// locations already need about 1.8 GiB.
pub const EXACT_LOCATIONS_CEILING: usize = 24;

/// Configuration for [`HeldKarpSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeldKarpConfig {
    /// Largest instance the solver accepts. Memory grows as `2^n * n`;
    /// values above [`EXACT_LOCATIONS_CEILING`] are clamped to it.
    pub max_locations: usize,
}

impl Default for HeldKarpConfig {
    fn default() -> Self {
        Self {
            max_locations: MAX_EXACT_LOCATIONS,
        }
    }
}

/// Exact solver using the Held–Karp bitmask dynamic program.
///
/// Tours always start and end at index 0. When several tours share the
/// optimal cost, the one whose predecessor chain picks the lowest index at
/// each step is returned, so output is reproducible.
///
/// # Examples
/// ```
/// use tourplan_core::{CancellationToken, CostMatrix, Solver};
/// use tourplan_solver_exact::HeldKarpSolver;
///
/// let matrix = CostMatrix::new(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ])?;
/// let tour = HeldKarpSolver::new().solve(&matrix, 0, &CancellationToken::new())?;
/// assert_eq!(tour.order(), &[0, 2, 3, 1, 0]);
/// assert_eq!(tour.cost(), 80);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeldKarpSolver {
    config: HeldKarpConfig,
}

impl HeldKarpSolver {
    /// Identifier recorded on routes produced by this solver.
    pub const NAME: &'static str = "held-karp";

    /// Construct a solver using the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HeldKarpConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: HeldKarpConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> HeldKarpConfig {
        self.config
    }

    /// Largest instance this solver will attempt.
    #[must_use]
    pub fn max_locations(&self) -> usize {
        self.config.max_locations.min(EXACT_LOCATIONS_CEILING)
    }

    fn check_instance(&self, size: usize, start: usize) -> Result<(), SolveError> {
        if size < 2 {
            return Err(SolveError::InstanceTooSmall { size });
        }
        let max = self.max_locations();
        if size > max {
            return Err(SolveError::InstanceTooLarge { size, max });
        }
        if start >= size {
            return Err(SolveError::StartOutOfRange { start, size });
        }
        if start != 0 {
            return Err(SolveError::UnsupportedStart { start });
        }
        Ok(())
    }
}

impl Solver for HeldKarpSolver {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn requires_zero_start(&self) -> bool {
        true
    }

    fn solve(
        &self,
        matrix: &CostMatrix,
        start: usize,
        cancel: &CancellationToken,
    ) -> Result<Tour, SolveError> {
        self.check_instance(matrix.len(), start)?;
        cancel.check()?;
        let started_at = Instant::now();
        let tour = held_karp(matrix, cancel)?;
        log::debug!(
            "held-karp solved {} locations in {:?}, cost {}",
            matrix.len(),
            started_at.elapsed(),
            tour.cost()
        );
        Ok(tour)
    }
}

fn held_karp(matrix: &CostMatrix, cancel: &CancellationToken) -> Result<Tour, SolveError> {
    let size = matrix.len();
    let memo = fill_memo(matrix, cancel)?;
    cancel.check()?;

    let full = full_mask(size);
    let mut closing: Option<Entry> = None;
    for last in members(full) {
        let candidate = Entry {
            cost: memo
                .entry(full, last)
                .cost
                .saturating_add(matrix.cost(last, 0)),
            predecessor: last,
        };
        if candidate.improves_on(closing) {
            closing = Some(candidate);
        }
    }
    let Some(Entry {
        cost,
        predecessor: last,
    }) = closing
    else {
        return Err(SolveError::InstanceTooSmall { size });
    };

    Ok(Tour::new(reconstruct(&memo, size, last), cost))
}

/// Run the recurrence over every subset of the non-anchor nodes.
fn fill_memo(matrix: &CostMatrix, cancel: &CancellationToken) -> Result<Memo, SolveError> {
    let size = matrix.len();
    let mut memo = Memo::new(size);
    log::trace!("held-karp table holds {} states", memo.states());

    for node in 1..size {
        memo.record(
            bit(node),
            node,
            Entry {
                cost: matrix.cost(0, node),
                predecessor: 0,
            },
        );
    }

    let width = u32::try_from(size - 1).map_err(|_| SolveError::InstanceTooLarge {
        size,
        max: MASK_CEILING,
    })?;
    for subset_size in 2..=width {
        cancel.check()?;
        log::trace!("held-karp expanding subsets of size {subset_size}");
        for subset in SubsetsOfSize::new(subset_size, width) {
            for node in members(subset) {
                if let Some(entry) = cheapest_arrival(&memo, matrix, subset & !bit(node), node) {
                    memo.record(subset, node, entry);
                }
            }
        }
    }
    Ok(memo)
}

/// Best way to reach `node` after visiting exactly `previous`.
fn cheapest_arrival(
    memo: &Memo,
    matrix: &CostMatrix,
    previous: u32,
    node: usize,
) -> Option<Entry> {
    let mut best: Option<Entry> = None;
    for via in members(previous) {
        let candidate = Entry {
            cost: memo
                .entry(previous, via)
                .cost
                .saturating_add(matrix.cost(via, node)),
            predecessor: via,
        };
        if candidate.improves_on(best) {
            best = Some(candidate);
        }
    }
    best
}

/// Walk predecessors back from `last` and return the forward closed order.
fn reconstruct(memo: &Memo, size: usize, last: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(size + 1);
    let mut mask = full_mask(size);
    let mut node = last;
    while node != 0 && mask != 0 {
        order.push(node);
        let previous = memo.entry(mask, node).predecessor;
        mask &= !bit(node);
        node = previous;
    }
    order.push(0);
    order.reverse();
    order.push(0);
    order
}
