//! Core automaton engines.
//!
//! Every engine reads an immutable snapshot of generation N and writes
//! generation N+1 into a separate buffer. The FFI layer in `ffi/` calls
//! these functions.

pub mod graph;
pub mod grid;
pub mod parallel;
pub mod sandpile;
pub mod session;
pub mod stepping;
pub mod triangular;

pub use graph::{AdjacencyRelation, RuleSet};
pub use grid::{count_neighbors, PaddedGrid};
pub use parallel::Executor;
pub use sandpile::{relax, relax_counted, Relaxation};
pub use session::Session;
pub use triangular::Orientation;
