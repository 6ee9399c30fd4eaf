//! Sandpile relaxation.

use super::{read_grid, status, LA_ERR_NULL};
use crate::automaton::sandpile;

/// Relaxes a `rows x cols` sandpile and writes the stable grid to `out`.
///
/// # Safety
/// - `cells` must point to `rows * cols` readable `i64` values
/// - `out` must point to `rows * cols` writable `i64` values
/// - `cells` and `out` may be the same buffer
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 on shape mismatch.
#[no_mangle]
pub unsafe extern "C" fn la_sandpile_relax(
    cells: *const i64,
    rows: usize,
    cols: usize,
    out: *mut i64,
) -> i32 {
    if cells.is_null() || out.is_null() {
        return LA_ERR_NULL;
    }

    status(read_grid(cells, rows, cols).map(|grid| {
        let relaxed = sandpile::relax(&grid);
        let out = std::slice::from_raw_parts_mut(out, relaxed.cells().len());
        out.copy_from_slice(relaxed.cells());
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_relax_three_by_three() {
        let cells = [4i64; 9];
        let mut out = [0i64; 9];

        let code = unsafe { la_sandpile_relax(cells.as_ptr(), 3, 3, out.as_mut_ptr()) };

        assert_eq!(code, 0);
        assert_eq!(out, [0, 3, 0, 3, 0, 3, 0, 3, 0]);
        // Input untouched
        assert_eq!(cells, [4i64; 9]);
    }

    #[test]
    fn test_relax_in_place() {
        let mut cells = [0i64, 4, 0];
        let ptr = cells.as_mut_ptr();

        let code = unsafe { la_sandpile_relax(ptr, 1, 3, ptr) };

        assert_eq!(code, 0);
        assert_eq!(cells, [1, 0, 1]);
    }

    #[test]
    fn test_null_pointer_handling() {
        let mut out = [0i64; 4];
        unsafe {
            assert_eq!(la_sandpile_relax(ptr::null(), 2, 2, out.as_mut_ptr()), 1);
            assert_eq!(la_sandpile_relax(out.as_ptr(), 2, 2, ptr::null_mut()), 1);
        }
    }
}
