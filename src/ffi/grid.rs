//! Session cell access and stepping.

use super::{status, LA_ERR_NULL};
use crate::automaton::Session;
use crate::config::step_count;

/// Sets a cell to alive (non-zero) or dead (0).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Session
///
/// Out-of-bounds coordinates are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn la_session_set_cell(ptr: *mut Session, row: usize, col: usize, alive: u8) {
    if ptr.is_null() {
        return;
    }
    (*ptr).set(row, col, alive != 0);
}

/// Gets the state of a cell (0 = dead, 1 = alive).
///
/// # Safety
/// - `ptr` must be a valid pointer to a Session
///
/// # Returns
/// 0 if out of bounds, null pointer, or dead; 1 if alive.
#[no_mangle]
pub unsafe extern "C" fn la_session_get_cell(ptr: *const Session, row: usize, col: usize) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).get(row, col).unwrap_or(false) as u8
}

/// Advances a session by `steps` generations.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Session
///
/// # Returns
/// 0 on success, 1 on null pointer, 3 on negative `steps`.
#[no_mangle]
pub unsafe extern "C" fn la_session_step(ptr: *mut Session, steps: i64) -> i32 {
    if ptr.is_null() {
        return LA_ERR_NULL;
    }
    let session = &mut *ptr;
    status(step_count(steps).map(|steps| session.advance(steps)))
}
