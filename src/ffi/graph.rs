//! Life on an arbitrary adjacency relation.

use super::{cell_count, status, write_bool_cells, LA_ERR_NULL};
use crate::automaton::graph::{self, AdjacencyRelation, RuleSet};
use crate::config::step_count;
use crate::error::Result;

/// Read `len` counts, tolerating a null pointer when `len` is 0.
unsafe fn read_counts(ptr: *const u32, len: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    std::slice::from_raw_parts(ptr, len)
        .iter()
        .map(|&count| count as usize)
        .collect()
}

#[allow(clippy::too_many_arguments)]
unsafe fn run(
    adjacency: *const u8,
    n: usize,
    cells: *const u8,
    steps: i64,
    survive: *const u32,
    survive_len: usize,
    birth: *const u32,
    birth_len: usize,
    out: *mut u8,
) -> Result<()> {
    let steps = step_count(steps)?;
    let len = cell_count(n, n)?;

    let matrix = std::slice::from_raw_parts(adjacency, len);
    let rows: Vec<Vec<bool>> = matrix
        .chunks(n.max(1))
        .map(|row| row.iter().map(|&edge| edge != 0).collect())
        .collect();
    let relation = AdjacencyRelation::from_rows(&rows)?;

    let state: Vec<bool> = std::slice::from_raw_parts(cells, n)
        .iter()
        .map(|&value| value != 0)
        .collect();
    let rules = RuleSet::new(read_counts(survive, survive_len), read_counts(birth, birth_len));

    let result = graph::step(&relation, &state, steps, &rules)?;
    write_bool_cells(out, &result);
    Ok(())
}

/// Runs `steps` generations of Life over `n` cells whose neighbors are given
/// by a row-major `n x n` adjacency matrix (non-zero = neighbor).
///
/// # Safety
/// - `adjacency` must point to `n * n` readable bytes
/// - `cells` must point to `n` readable bytes, `out` to `n` writable bytes
/// - `survive` / `birth` must point to `survive_len` / `birth_len` counts;
///   either may be null when its length is 0
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 on shape mismatch, 3 on negative `steps`.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn la_life_generic_step(
    adjacency: *const u8,
    n: usize,
    cells: *const u8,
    steps: i64,
    survive: *const u32,
    survive_len: usize,
    birth: *const u32,
    birth_len: usize,
    out: *mut u8,
) -> i32 {
    if adjacency.is_null() || cells.is_null() || out.is_null() {
        return LA_ERR_NULL;
    }
    if (survive.is_null() && survive_len > 0) || (birth.is_null() && birth_len > 0) {
        return LA_ERR_NULL;
    }

    status(run(
        adjacency,
        n,
        cells,
        steps,
        survive,
        survive_len,
        birth,
        birth_len,
        out,
    ))
}
