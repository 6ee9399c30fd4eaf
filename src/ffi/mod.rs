//! C FFI layer.
//!
//! This module exports C ABI functions for drivers written in other languages.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions. Cell
//! states cross the boundary as `u8` (0 = dead, non-zero = alive) and every
//! fallible call returns an `i32` status code.

pub mod graph;
pub mod grid;
pub mod lifecycle;
pub mod life;
pub mod sandpile;

pub use graph::la_life_generic_step;
pub use grid::{la_session_get_cell, la_session_set_cell, la_session_step};
pub use life::{la_life_step, la_lifetri_step};
pub use lifecycle::{la_session_create, la_session_destroy, la_session_generation};
pub use sandpile::la_sandpile_relax;

use crate::error::{AutomatonError, Result};
use crate::state::Grid;

/// Call succeeded.
pub const LA_OK: i32 = 0;
/// A required pointer was null.
pub const LA_ERR_NULL: i32 = 1;

/// Convert an engine result into a status code, logging rejections.
pub(crate) fn status(result: Result<()>) -> i32 {
    match result {
        Ok(()) => LA_OK,
        Err(err) => {
            tracing::warn!(%err, "ffi call rejected");
            err.status_code()
        }
    }
}

/// Number of cells in a `rows x cols` buffer.
pub(crate) fn cell_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or(AutomatonError::ShapeMismatch {
        what: "ffi buffer",
        expected: usize::MAX,
        found: rows,
    })
}

/// Copy a caller buffer of `rows * cols` cells into a grid.
///
/// # Safety
/// `cells` must be non-null and point to at least `rows * cols` readable values.
pub(crate) unsafe fn read_grid<T: Copy>(
    cells: *const T,
    rows: usize,
    cols: usize,
) -> Result<Grid<T>> {
    let len = cell_count(rows, cols)?;
    let slice = std::slice::from_raw_parts(cells, len);
    Grid::from_vec(rows, cols, slice.to_vec())
}

/// Copy a caller buffer of `u8` cells into a boolean grid.
///
/// # Safety
/// Same contract as [`read_grid`].
pub(crate) unsafe fn read_bool_grid(
    cells: *const u8,
    rows: usize,
    cols: usize,
) -> Result<Grid<bool>> {
    Ok(read_grid(cells, rows, cols)?.map(|value| value != 0))
}

/// Write a boolean grid into a caller buffer as 0/1 bytes.
///
/// # Safety
/// `out` must be non-null and point to at least `grid.cells().len()` writable bytes.
pub(crate) unsafe fn write_bool_cells(out: *mut u8, cells: &[bool]) {
    let out = std::slice::from_raw_parts_mut(out, cells.len());
    for (slot, &alive) in out.iter_mut().zip(cells) {
        *slot = alive as u8;
    }
}
