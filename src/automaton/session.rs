//! Stateful stepping driver for callers that advance a lattice a few
//! generations at a time (for example across the C ABI).

use super::parallel::Executor;
use super::{stepping, triangular};
use crate::config::{Boundary, Lattice};
use crate::state::Grid;

/// A Life grid plus everything needed to keep stepping it.
#[derive(Debug)]
pub struct Session {
    grid: Grid<bool>,
    lattice: Lattice,
    boundary: Boundary,
    generation: u64,
    executor: Executor,
}

impl Session {
    /// Create an all-dead session. `num_threads` of 0 or 1 steps sequentially.
    pub fn new(
        rows: usize,
        cols: usize,
        lattice: Lattice,
        boundary: Boundary,
        num_threads: u8,
    ) -> Self {
        Session::from_grid(Grid::new(rows, cols, false), lattice, boundary, num_threads)
    }

    /// Start a session from an existing grid.
    pub fn from_grid(
        grid: Grid<bool>,
        lattice: Lattice,
        boundary: Boundary,
        num_threads: u8,
    ) -> Self {
        Session {
            grid,
            lattice,
            boundary,
            generation: 0,
            executor: Executor::new(num_threads),
        }
    }

    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Generations stepped since creation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.grid.get(row, col)
    }

    /// Set a cell. Out-of-bounds coordinates are silently ignored.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.grid.set(row, col, alive);
    }

    /// Current generation, borrowed.
    pub fn grid(&self) -> &Grid<bool> {
        &self.grid
    }

    /// Copy of the current generation for an external sink.
    pub fn snapshot(&self) -> Grid<bool> {
        self.grid.clone()
    }

    /// Advance by one generation.
    pub fn step(&mut self) {
        self.advance(1);
    }

    /// Advance by `steps` generations.
    pub fn advance(&mut self, steps: usize) {
        if steps == 0 {
            return;
        }
        self.grid = match self.lattice {
            Lattice::Square => {
                stepping::step_with(&self.executor, &self.grid, steps, self.boundary)
            }
            Lattice::Triangular => {
                triangular::step_with(&self.executor, &self.grid, steps, self.boundary)
            }
        };
        self.generation += steps as u64;
    }
}
