//! End-to-end route planning for one request.

use crate::{
    CancellationToken, CostLookup, CostMatrixBuilder, RouteResult, SolveError, SolveRequest,
    Solver,
};

/// Validate `request`, project `lookup` onto it and solve with `solver`.
///
/// Solvers that report [`Solver::requires_zero_start`] receive a matrix
/// rotated so the start label is index 0; all others receive the selection in
/// request order together with the start's position.
///
/// # Errors
///
/// Returns [`SolveError::InvalidRequest`] for a malformed request,
/// [`SolveError::CostMatrix`] when the lookup cannot cover the selection, and
/// any error raised by the solver itself.
///
/// # Examples
/// ```
/// use tourplan_core::{
///     CancellationToken, CostMatrix, CostTable, Location, SolveError, SolveRequest, Solver,
///     Tour, plan_route,
/// };
///
/// struct InOrder;
///
/// impl Solver for InOrder {
///     fn name(&self) -> &'static str {
///         "in-order"
///     }
///
///     fn solve(
///         &self,
///         matrix: &CostMatrix,
///         start: usize,
///         _cancel: &CancellationToken,
///     ) -> Result<Tour, SolveError> {
///         Tour::closed(vec![start, 1 - start, start], matrix)
///     }
/// }
///
/// let mut table = CostTable::new();
/// table.insert_symmetric("A".into(), "B".into(), 4);
/// let request = SolveRequest::new(vec!["A".into(), "B".into()], Location::from("B"));
/// let route = plan_route(&request, &table, &InOrder, &CancellationToken::new())?;
/// assert_eq!(route.total_cost, 8);
/// assert_eq!(route.stops.first(), Some(&Location::from("B")));
/// # Ok::<(), SolveError>(())
/// ```
pub fn plan_route<L, S>(
    request: &SolveRequest,
    lookup: &L,
    solver: &S,
    cancel: &CancellationToken,
) -> Result<RouteResult, SolveError>
where
    L: CostLookup + ?Sized,
    S: Solver + ?Sized,
{
    request.validate()?;
    let builder = CostMatrixBuilder::new(lookup);
    let (locations, matrix, start) = if solver.requires_zero_start() {
        let anchored = builder.build_anchored(request)?;
        (anchored.locations, anchored.matrix, 0)
    } else {
        let matrix = builder.build(&request.locations)?;
        (request.locations.clone(), matrix, request.start_index()?)
    };

    log::debug!(
        "solving {} locations from {} with {}",
        locations.len(),
        request.start,
        solver.name()
    );
    let tour = solver.solve(&matrix, start, cancel)?;
    let route = RouteResult::from_tour(&tour, &locations, solver.name())?;
    log::info!(
        "{} produced a {}-stop tour costing {}",
        solver.name(),
        locations.len(),
        route.total_cost
    );
    Ok(route)
}
