//! Boundary modes, lattice kinds and input validation shared by every engine.

use crate::error::{AutomatonError, Result};

/// A sandpile cell holding more grains than this topples.
pub const SANDPILE_THRESHOLD: i64 = 3;

/// Grains a toppling cell sends to each orthogonal neighbor.
pub const GRAINS_PER_NEIGHBOR: i64 = 1;

/// How neighbor lookups treat cells outside the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Outside cells are permanently dead (or zero).
    #[default]
    Fixed,
    /// Opposite edges are neighbors (torus).
    Periodic,
}

impl Boundary {
    pub fn is_periodic(self) -> bool {
        self == Boundary::Periodic
    }
}

impl From<bool> for Boundary {
    fn from(periodic: bool) -> Self {
        if periodic {
            Boundary::Periodic
        } else {
            Boundary::Fixed
        }
    }
}

/// Tessellation a [`crate::automaton::Session`] steps over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lattice {
    /// Square cells, 8-neighbor Life.
    #[default]
    Square,
    /// Triangular cells, 12-neighbor Life (B4/S456).
    Triangular,
}

impl Lattice {
    /// Decode the lattice tag used by the C ABI (0 = square, 1 = triangular).
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Lattice::Square),
            1 => Some(Lattice::Triangular),
            _ => None,
        }
    }
}

/// Validate a signed step count coming from a caller.
pub fn step_count(steps: i64) -> Result<usize> {
    usize::try_from(steps).map_err(|_| AutomatonError::InvalidStepCount(steps))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_from_bool() {
        assert_eq!(Boundary::from(true), Boundary::Periodic);
        assert_eq!(Boundary::from(false), Boundary::Fixed);
        assert_eq!(Boundary::default(), Boundary::Fixed);
    }

    #[test]
    fn test_step_count() {
        assert_eq!(step_count(0), Ok(0));
        assert_eq!(step_count(17), Ok(17));
        assert_eq!(step_count(-1), Err(AutomatonError::InvalidStepCount(-1)));
    }

    #[test]
    fn test_lattice_tags() {
        assert_eq!(Lattice::from_tag(0), Some(Lattice::Square));
        assert_eq!(Lattice::from_tag(1), Some(Lattice::Triangular));
        assert_eq!(Lattice::from_tag(2), None);
    }
}
