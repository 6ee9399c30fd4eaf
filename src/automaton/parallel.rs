//! Row-parallel work distribution for the Life engines.
//!
//! Core invariant: every step reads an immutable generation-N snapshot and
//! writes a separate generation-N+1 buffer. Each worker owns a disjoint slice
//! of the output, so processing order can never change the result.

use rayon::prelude::*;

/// Runs per-row (or per-cell) update closures, either inline or on a
/// dedicated rayon thread pool.
pub struct Executor {
    pool: Option<rayon::ThreadPool>,
}

impl Executor {
    /// Run everything on the calling thread.
    pub fn sequential() -> Self {
        Executor { pool: None }
    }

    /// Build an executor with `num_threads` workers. 0 and 1 mean sequential.
    pub fn new(num_threads: u8) -> Self {
        if num_threads <= 1 {
            return Executor::sequential();
        }

        match rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads as usize)
            .build()
        {
            Ok(pool) => Executor { pool: Some(pool) },
            Err(err) => {
                tracing::warn!(num_threads, %err, "thread pool unavailable, stepping sequentially");
                Executor::sequential()
            }
        }
    }

    /// Number of worker threads a step is spread over.
    pub fn num_threads(&self) -> usize {
        self.pool.as_ref().map_or(1, |pool| pool.current_num_threads())
    }

    pub fn is_parallel(&self) -> bool {
        self.pool.is_some()
    }

    /// Call `f(row_index, row)` for each `width`-sized row of `cells`.
    pub fn for_each_row<T, F>(&self, cells: &mut [T], width: usize, f: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Sync + Send,
    {
        if width == 0 {
            return;
        }

        match &self.pool {
            Some(pool) => pool.install(|| {
                cells
                    .par_chunks_mut(width)
                    .enumerate()
                    .for_each(|(row, slice)| f(row, slice))
            }),
            None => cells
                .chunks_mut(width)
                .enumerate()
                .for_each(|(row, slice)| f(row, slice)),
        }
    }

    /// Call `f(index, cell)` for each element of `cells`.
    pub fn for_each_cell<T, F>(&self, cells: &mut [T], f: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync + Send,
    {
        match &self.pool {
            Some(pool) => pool.install(|| {
                cells
                    .par_iter_mut()
                    .enumerate()
                    .for_each(|(idx, cell)| f(idx, cell))
            }),
            None => cells
                .iter_mut()
                .enumerate()
                .for_each(|(idx, cell)| f(idx, cell)),
        }
    }
}

impl Default for Executor {
    fn default() -> Self {
        Executor::sequential()
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("num_threads", &self.num_threads())
            .finish()
    }
}
