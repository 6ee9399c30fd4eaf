//! Square and triangular Life stepping.

use super::{read_bool_grid, status, write_bool_cells, LA_ERR_NULL};
use crate::automaton::{stepping, triangular};
use crate::config::{step_count, Boundary};
use crate::error::Result;
use crate::state::Grid;

type Engine = fn(&Grid<bool>, usize, Boundary) -> Grid<bool>;

unsafe fn run(
    engine: Engine,
    cells: *const u8,
    rows: usize,
    cols: usize,
    steps: i64,
    periodic: u8,
    out: *mut u8,
) -> Result<()> {
    let steps = step_count(steps)?;
    let grid = read_bool_grid(cells, rows, cols)?;
    let result = engine(&grid, steps, Boundary::from(periodic != 0));
    write_bool_cells(out, result.cells());
    Ok(())
}

/// Runs `steps` generations of B3/S23 Life on a square `rows x cols` grid.
///
/// # Safety
/// - `cells` must point to `rows * cols` readable bytes (0 = dead, non-zero = alive)
/// - `out` must point to `rows * cols` writable bytes; it receives 0/1 values
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 on shape mismatch, 3 on negative `steps`.
#[no_mangle]
pub unsafe extern "C" fn la_life_step(
    cells: *const u8,
    rows: usize,
    cols: usize,
    steps: i64,
    periodic: u8,
    out: *mut u8,
) -> i32 {
    if cells.is_null() || out.is_null() {
        return LA_ERR_NULL;
    }
    status(run(stepping::step, cells, rows, cols, steps, periodic, out))
}

/// Runs `steps` generations of B4/S456 Life on a triangular `rows x cols` grid.
/// The top-left triangle points up.
///
/// # Safety
/// Same contract as [`la_life_step`].
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 on shape mismatch, 3 on negative `steps`.
#[no_mangle]
pub unsafe extern "C" fn la_lifetri_step(
    cells: *const u8,
    rows: usize,
    cols: usize,
    steps: i64,
    periodic: u8,
    out: *mut u8,
) -> i32 {
    if cells.is_null() || out.is_null() {
        return LA_ERR_NULL;
    }
    status(run(triangular::step, cells, rows, cols, steps, periodic, out))
}
