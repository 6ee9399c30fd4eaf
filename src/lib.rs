//! Lattice Automata - sandpiles and Game of Life variants
//!
//! Four engines, each a pure function from an initial configuration to a
//! final one:
//!
//! - [`automaton::sandpile`]: Abelian sandpile relaxation with a sink boundary
//! - [`automaton::stepping`]: Life on a square grid (B3/S23)
//! - [`automaton::triangular`]: Life on a triangular tessellation (B4/S456)
//! - [`automaton::graph`]: Life on an arbitrary adjacency relation
//!
//! The `ffi` module exposes the same engines through a C ABI.
//!
//! # Example
//!
//! ```
//! use lattice_automata::{automaton::stepping, Boundary, Grid};
//!
//! let mut grid = Grid::new(5, 5, false);
//! grid.set(2, 1, true);
//! grid.set(2, 2, true);
//! grid.set(2, 3, true);
//!
//! let after = stepping::step(&grid, 2, Boundary::Fixed);
//! assert_eq!(after, grid);
//! ```

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;

#[cfg(test)]
mod tests;

pub use config::{Boundary, Lattice};
pub use error::{AutomatonError, Result};
pub use state::Grid;
