//! Conway's Game of Life on a square grid (B3/S23, Moore neighborhood).

use super::grid::count_neighbors;
use super::parallel::Executor;
use crate::config::Boundary;
use crate::state::Grid;

/// Next state of one cell under the B3/S23 rule.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}

/// Advance `current` by one generation, writing every cell of `next`.
///
/// `next` must have the same shape as `current`; it is fully overwritten.
pub fn step_into(current: &Grid<bool>, next: &mut Vec<bool>, boundary: Boundary, exec: &Executor) {
    let cols = current.cols();
    next.resize(current.cells().len(), false);

    exec.for_each_row(next, cols, |row, out| {
        for (col, cell) in out.iter_mut().enumerate() {
            let alive = current.cells()[row * cols + col];
            *cell = next_state(alive, count_neighbors(current, row, col, boundary));
        }
    });
}

/// Run `steps` generations of Life on `initial`.
pub fn step(initial: &Grid<bool>, steps: usize, boundary: Boundary) -> Grid<bool> {
    step_with(&Executor::sequential(), initial, steps, boundary)
}

/// Like [`step`], spreading each generation's rows over `exec`.
pub fn step_with(
    exec: &Executor,
    initial: &Grid<bool>,
    steps: usize,
    boundary: Boundary,
) -> Grid<bool> {
    if steps == 0 || initial.is_empty() {
        return initial.clone();
    }

    let (rows, cols) = (initial.rows(), initial.cols());
    let mut current = initial.clone();
    let mut next = Vec::with_capacity(current.cells().len());

    for generation in 0..steps {
        step_into(&current, &mut next, boundary, exec);
        let snapshot = std::mem::take(&mut next);
        next = std::mem::replace(&mut current, Grid::from_parts(rows, cols, snapshot)).into_cells();
        tracing::trace!(generation = generation + 1, alive = current.population(), "life step");
    }

    tracing::debug!(
        rows,
        cols,
        steps,
        ?boundary,
        alive = current.population(),
        "life run finished"
    );
    current
}

/// Iterate over successive generations, starting with `initial` itself.
pub fn generations(initial: &Grid<bool>, boundary: Boundary) -> impl Iterator<Item = Grid<bool>> {
    std::iter::successors(Some(initial.clone()), move |grid| Some(step(grid, 1, boundary)))
}
