//! Abelian sandpile relaxation with an open (sink) boundary.
//!
//! Each pass collects every cell above the threshold from one snapshot, then
//! topples all of them together: 4 grains leave the cell and 1 lands on each
//! orthogonal neighbor. Grains pushed onto the 1-cell border are discarded
//! when the border is cleared at the end of the pass.

use crate::config::{GRAINS_PER_NEIGHBOR, SANDPILE_THRESHOLD};
use crate::state::Grid;

use super::grid::PaddedGrid;

/// Result of relaxing a sandpile, with avalanche statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relaxation {
    /// The stable configuration.
    pub grid: Grid<i64>,
    /// Number of toppling passes performed.
    pub passes: u64,
    /// Total number of individual topples across all passes.
    pub topples: u64,
    /// Grains that fell off the grid.
    pub lost: i64,
}

/// Relax `initial` until no cell holds more than 3 grains.
pub fn relax(initial: &Grid<i64>) -> Grid<i64> {
    relax_counted(initial).grid
}

/// Relax `initial`, also reporting how much toppling it took.
pub fn relax_counted(initial: &Grid<i64>) -> Relaxation {
    let mut padded = PaddedGrid::new(initial, 1, 1);
    let width = padded.width();
    let mut unstable: Vec<usize> = Vec::new();
    let mut passes = 0u64;
    let mut topples = 0u64;
    let mut lost = 0i64;

    loop {
        unstable.clear();
        unstable.extend(
            padded
                .cells()
                .iter()
                .enumerate()
                .filter(|&(_, &grains)| grains > SANDPILE_THRESHOLD)
                .map(|(idx, _)| idx),
        );
        if unstable.is_empty() {
            break;
        }

        // Border cells are always zero here, so every unstable index is
        // interior and its 4 neighbors are in range.
        let cells = padded.cells_mut();
        for &idx in &unstable {
            cells[idx] -= 4 * GRAINS_PER_NEIGHBOR;
            cells[idx - width] += GRAINS_PER_NEIGHBOR;
            cells[idx + width] += GRAINS_PER_NEIGHBOR;
            cells[idx - 1] += GRAINS_PER_NEIGHBOR;
            cells[idx + 1] += GRAINS_PER_NEIGHBOR;
        }

        let spilled: i64 = padded.border_indices().map(|idx| padded.cells()[idx]).sum();
        padded.clear_border();

        passes += 1;
        topples += unstable.len() as u64;
        lost += spilled;

        tracing::trace!(pass = passes, unstable = unstable.len(), spilled, "sandpile pass");
    }

    let grid = padded.interior();
    tracing::debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        passes,
        topples,
        lost,
        "sandpile relaxed"
    );

    Relaxation {
        grid,
        passes,
        topples,
        lost,
    }
}

/// True when no cell exceeds the toppling threshold.
pub fn is_stable(grid: &Grid<i64>) -> bool {
    grid.cells().iter().all(|&grains| grains <= SANDPILE_THRESHOLD)
}
