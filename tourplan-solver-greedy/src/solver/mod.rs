//! `GreedySolver` implementation.

use tourplan_core::{CancellationToken, Cost, CostMatrix, SolveError, Solver, Tour};

/// Nearest-neighbour heuristic.
///
/// Starting from the requested index, repeatedly moves to the unvisited
/// location with the smallest strictly positive cost, then returns to the
/// start. Ties go to the lowest index. The result carries no optimality
/// guarantee.
///
/// # Examples
/// ```
/// use tourplan_core::{CancellationToken, CostMatrix, Solver};
/// use tourplan_solver_greedy::GreedySolver;
///
/// let matrix = CostMatrix::new(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ])?;
/// let tour = GreedySolver.solve(&matrix, 0, &CancellationToken::new())?;
/// assert_eq!(tour.order(), &[0, 1, 3, 2, 0]);
/// assert_eq!(tour.cost(), 80);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl GreedySolver {
    /// Identifier recorded on routes produced by this solver.
    pub const NAME: &'static str = "greedy";

    /// Construct the solver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Solver for GreedySolver {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn solve(
        &self,
        matrix: &CostMatrix,
        start: usize,
        cancel: &CancellationToken,
    ) -> Result<Tour, SolveError> {
        cancel.check()?;
        construct_tour(matrix, start)
    }
}

fn construct_tour(matrix: &CostMatrix, start: usize) -> Result<Tour, SolveError> {
    let size = matrix.len();
    if size < 2 {
        return Err(SolveError::InstanceTooSmall { size });
    }
    if start >= size {
        return Err(SolveError::StartOutOfRange { start, size });
    }

    let mut visited = vec![false; size];
    mark_visited(&mut visited, start);
    let mut order = Vec::with_capacity(size + 1);
    order.push(start);
    let mut total: Cost = 0;
    let mut current = start;

    for placed in 1..size {
        let (next, edge) = nearest_unvisited(matrix, current, &visited).ok_or(
            SolveError::NoFeasibleMove {
                from: current,
                unvisited: size - placed,
            },
        )?;
        log::trace!("greedy step {placed}: {current} -> {next} costs {edge}");
        mark_visited(&mut visited, next);
        order.push(next);
        total = total.saturating_add(edge);
        current = next;
    }

    total = total.saturating_add(matrix.cost(current, start));
    order.push(start);
    log::debug!("greedy tour from {start} over {size} locations costs {total}");
    Ok(Tour::new(order, total))
}

/// Cheapest strictly positive edge from `current` to an unvisited index.
///
/// Scans in ascending index order and only replaces the incumbent on a
/// strictly smaller cost, so the lowest index wins ties.
fn nearest_unvisited(
    matrix: &CostMatrix,
    current: usize,
    visited: &[bool],
) -> Option<(usize, Cost)> {
    matrix
        .row(current)?
        .iter()
        .zip(visited)
        .enumerate()
        .filter(|&(_, (&cost, &seen))| !seen && cost > 0)
        .fold(None, |best, (index, (&cost, _))| match best {
            Some((_, best_cost)) if best_cost <= cost => best,
            _ => Some((index, cost)),
        })
}

fn mark_visited(visited: &mut [bool], index: usize) {
    if let Some(flag) = visited.get_mut(index) {
        *flag = true;
    }
}
