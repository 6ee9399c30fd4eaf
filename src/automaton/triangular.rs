//! Game of Life on a triangular tessellation (B4/S456).
//!
//! Cells alternate between up- and down-pointing triangles along each row.
//! An up triangle touches 3 cells in the row above and 5 in the row below; a
//! down triangle is the mirror image. Both see the 4 cells within two columns
//! on their own row, 12 neighbors in total.
//!
//! The working buffer carries a 1-row, 2-column border so every neighbor
//! window stays in range. A periodic boundary rewrites that border from the
//! opposite edges before each generation. A fixed boundary never touches it,
//! so it keeps the zero fill it was created with.

use super::grid::PaddedGrid;
use super::parallel::Executor;
use crate::config::Boundary;
use crate::state::Grid;

/// Border rows above and below the interior.
pub const PAD_ROWS: usize = 1;
/// Border columns left and right of the interior.
pub const PAD_COLS: usize = 2;

const UP_OFFSETS: [(isize, isize); 12] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -2),
    (0, -1),
    (0, 1),
    (0, 2),
    (1, -2),
    (1, -1),
    (1, 0),
    (1, 1),
    (1, 2),
];

const DOWN_OFFSETS: [(isize, isize); 12] = [
    (-1, -2),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (-1, 2),
    (0, -2),
    (0, -1),
    (0, 1),
    (0, 2),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Which way a triangular cell points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Up,
    Down,
}

impl Orientation {
    /// Orientation of the cell at padded coordinates `(row, col)`.
    #[inline]
    pub fn at(row: usize, col: usize) -> Self {
        if (row + col + 1) % 2 == 0 {
            Orientation::Up
        } else {
            Orientation::Down
        }
    }

    /// Orientation of the cell at un-padded grid coordinates. The top-left
    /// cell points up.
    #[inline]
    pub fn of_cell(row: usize, col: usize) -> Self {
        Orientation::at(row + PAD_ROWS, col + PAD_COLS)
    }

    /// (row, col) deltas of the 12 edge- and vertex-sharing neighbors.
    pub fn offsets(self) -> &'static [(isize, isize); 12] {
        match self {
            Orientation::Up => &UP_OFFSETS,
            Orientation::Down => &DOWN_OFFSETS,
        }
    }
}

/// Next state of one cell under the B4/S456 rule.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 4..=6) | (false, 4))
}

/// Count live neighbors of the interior cell at padded `(row, col)`.
pub fn count_neighbors(padded: &PaddedGrid<bool>, row: usize, col: usize) -> u8 {
    Orientation::at(row, col)
        .offsets()
        .iter()
        .filter(|&&(dr, dc)| {
            padded.get(
                (row as isize + dr) as usize,
                (col as isize + dc) as usize,
            )
        })
        .count() as u8
}

/// Compute the next generation's interior from `current`. `next`'s border is
/// left as is.
fn advance(current: &PaddedGrid<bool>, next: &mut PaddedGrid<bool>, exec: &Executor) {
    let width = current.width();
    let rows = current.interior_rows();
    let cols = current.interior_cols();

    exec.for_each_row(next.cells_mut(), width, |row, out| {
        if !rows.contains(&row) {
            return;
        }
        for col in cols.clone() {
            let alive = current.get(row, col);
            out[col] = next_state(alive, count_neighbors(current, row, col));
        }
    });
}

/// Run `steps` generations of triangular Life on `initial`.
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

    let mut current = PaddedGrid::new(initial, PAD_ROWS, PAD_COLS);
    let mut next = current.clone();

    for generation in 0..steps {
        current.refresh_border(boundary);
        advance(&current, &mut next, exec);
        std::mem::swap(&mut current, &mut next);
        tracing::trace!(generation = generation + 1, "triangular step");
    }

    let result = current.interior();
    tracing::debug!(
        rows = result.rows(),
        cols = result.cols(),
        steps,
        ?boundary,
        alive = result.population(),
        "triangular run finished"
    );
    result
}

/// Iterate over successive generations, starting with `initial` itself.
pub fn generations(initial: &Grid<bool>, boundary: Boundary) -> impl Iterator<Item = Grid<bool>> {
    std::iter::successors(Some(initial.clone()), move |grid| Some(step(grid, 1, boundary)))
}
