//! Session creation, destruction, and generation queries.

use crate::automaton::Session;
use crate::config::{Boundary, Lattice};

/// Creates a new all-dead Life session and returns an opaque pointer.
///
/// `lattice` is 0 for square cells, 1 for triangular cells. `num_threads` of
/// 0 or 1 steps on the calling thread.
///
/// # Returns
/// A pointer to a new Session, or null on an unknown lattice tag or a zero
/// dimension.
///
/// # Safety
/// The returned pointer must eventually be freed with `la_session_destroy()`.
#[no_mangle]
pub extern "C" fn la_session_create(
    rows: usize,
    cols: usize,
    lattice: u8,
    periodic: u8,
    num_threads: u8,
) -> *mut Session {
    if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
        return std::ptr::null_mut();
    }
    let Some(lattice) = Lattice::from_tag(lattice) else {
        tracing::warn!(lattice, "unknown lattice tag");
        return std::ptr::null_mut();
    };

    let session = Session::new(rows, cols, lattice, Boundary::from(periodic != 0), num_threads);
    Box::into_raw(Box::new(session))
}

/// Destroys a session and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `la_session_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn la_session_destroy(ptr: *mut Session) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the number of generations a session has been stepped.
///
/// # Safety
/// - `ptr` must be a valid pointer to a Session, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn la_session_generation(ptr: *const Session) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}
