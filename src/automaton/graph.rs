//! Life on an arbitrary graph given as a Boolean adjacency relation.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::grid::{neighbor_coord, MOORE_OFFSETS};
use super::parallel::Executor;
use super::triangular::Orientation;
use crate::config::Boundary;
use crate::error::{AutomatonError, Result};

/// Square Boolean matrix: entry (i, j) is true iff cell j is a neighbor of
/// cell i.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyRelation {
    n: usize,
    entries: Vec<bool>,
}

impl AdjacencyRelation {
    /// A relation over `n` cells with no edges.
    pub fn empty(n: usize) -> Self {
        AdjacencyRelation {
            n,
            entries: vec![false; n * n],
        }
    }

    /// Build from matrix rows, rejecting anything that is not square.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        let mut entries = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            if row.len() != n {
                return Err(AutomatonError::ShapeMismatch {
                    what: "adjacency row",
                    expected: n,
                    found: row.len(),
                });
            }
            entries.extend_from_slice(row);
        }
        Ok(AdjacencyRelation { n, entries })
    }

    /// Adjacency of an 8-neighbor `rows x cols` grid, cells numbered row-major.
    ///
    /// A periodic grid needs at least 3 rows and 3 columns: below that two
    /// offsets wrap onto the same cell, which the square engine counts twice
    /// but a relation can only hold once.
    pub fn moore(rows: usize, cols: usize, boundary: Boundary) -> Result<Self> {
        check_torus_extent(rows, cols, boundary, 3, 3)?;

        let mut adjacency = AdjacencyRelation::empty(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                for &(dr, dc) in &MOORE_OFFSETS {
                    let target = neighbor_coord(rows, cols, row, col, dr, dc, boundary);
                    if let Some((nr, nc)) = target {
                        adjacency.connect(row * cols + col, nr * cols + nc);
                    }
                }
            }
        }
        Ok(adjacency)
    }

    /// Adjacency of a triangular `rows x cols` tessellation, cells numbered
    /// row-major.
    ///
    /// A periodic grid needs at least 3 rows and 5 columns for its 12
    /// neighbors to be distinct cells.
    pub fn triangular(rows: usize, cols: usize, boundary: Boundary) -> Result<Self> {
        check_torus_extent(rows, cols, boundary, 3, 5)?;

        let mut adjacency = AdjacencyRelation::empty(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                for &(dr, dc) in Orientation::of_cell(row, col).offsets() {
                    let target = neighbor_coord(rows, cols, row, col, dr, dc, boundary);
                    if let Some((nr, nc)) = target {
                        adjacency.connect(row * cols + col, nr * cols + nc);
                    }
                }
            }
        }
        Ok(adjacency)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Mark `j` as a neighbor of `i`. Out-of-range indices are ignored.
    pub fn connect(&mut self, i: usize, j: usize) {
        if i < self.n && j < self.n {
            self.entries[i * self.n + j] = true;
        }
    }

    pub fn contains(&self, i: usize, j: usize) -> bool {
        i < self.n && j < self.n && self.entries[i * self.n + j]
    }

    /// Row `i` of the matrix.
    pub fn row(&self, i: usize) -> &[bool] {
        &self.entries[i * self.n..(i + 1) * self.n]
    }

    /// Live neighbors of cell `i`: the dot product of row `i` with `state`.
    pub fn live_neighbors(&self, i: usize, state: &[bool]) -> usize {
        self.row(i)
            .iter()
            .zip(state)
            .filter(|&(&edge, &alive)| edge && alive)
            .count()
    }
}

/// Reject non-empty periodic grids too small for every wrapped neighbor to be
/// a distinct cell.
fn check_torus_extent(
    rows: usize,
    cols: usize,
    boundary: Boundary,
    min_rows: usize,
    min_cols: usize,
) -> Result<()> {
    if !boundary.is_periodic() || rows == 0 || cols == 0 {
        return Ok(());
    }
    if rows < min_rows {
        return Err(AutomatonError::ShapeMismatch {
            what: "periodic grid rows",
            expected: min_rows,
            found: rows,
        });
    }
    if cols < min_cols {
        return Err(AutomatonError::ShapeMismatch {
            what: "periodic grid columns",
            expected: min_cols,
            found: cols,
        });
    }
    Ok(())
}

/// Neighbor counts at which live cells survive and dead cells are born.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSet {
    pub survive: HashSet<usize>,
    pub birth: HashSet<usize>,
}

impl RuleSet {
    pub fn new(
        survive: impl IntoIterator<Item = usize>,
        birth: impl IntoIterator<Item = usize>,
    ) -> Self {
        RuleSet {
            survive: survive.into_iter().collect(),
            birth: birth.into_iter().collect(),
        }
    }

    /// Conway's rule, B3/S23.
    pub fn conway() -> Self {
        RuleSet::new([2, 3], [3])
    }

    /// The triangular lattice rule, B4/S456.
    pub fn triangular() -> Self {
        RuleSet::new([4, 5, 6], [4])
    }

    /// Alive next generation iff (alive and count in survive) or count in birth.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: usize) -> bool {
        (alive && self.survive.contains(&neighbors)) || self.birth.contains(&neighbors)
    }
}

impl FromStr for RuleSet {
    type Err = AutomatonError;

    /// Parse `B<digits>/S<digits>` notation, in either order, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || AutomatonError::InvalidRule(s.to_string());
        let mut birth = None;
        let mut survive = None;

        for part in s.trim().split('/') {
            let mut chars = part.chars();
            let target = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut birth,
                Some('S') => &mut survive,
                _ => return Err(invalid()),
            };
            if target.is_some() {
                return Err(invalid());
            }
            let counts = chars
                .map(|c| c.to_digit(10).map(|d| d as usize))
                .collect::<Option<HashSet<usize>>>()
                .ok_or_else(invalid)?;
            *target = Some(counts);
        }

        match (birth, survive) {
            (Some(birth), Some(survive)) => Ok(RuleSet { survive, birth }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |set: &HashSet<usize>| {
            let mut counts: Vec<_> = set.iter().copied().collect();
            counts.sort_unstable();
            counts.iter().map(|c| c.to_string()).collect::<String>()
        };
        write!(f, "B{}/S{}", digits(&self.birth), digits(&self.survive))
    }
}

/// Run `steps` generations over the graph described by `adjacency`.
pub fn step(
    adjacency: &AdjacencyRelation,
    initial: &[bool],
    steps: usize,
    rules: &RuleSet,
) -> Result<Vec<bool>> {
    step_with(&Executor::sequential(), adjacency, initial, steps, rules)
}

/// Like [`step`], spreading each generation's cells over `exec`.
pub fn step_with(
    exec: &Executor,
    adjacency: &AdjacencyRelation,
    initial: &[bool],
    steps: usize,
    rules: &RuleSet,
) -> Result<Vec<bool>> {
    if adjacency.len() != initial.len() {
        return Err(AutomatonError::ShapeMismatch {
            what: "adjacency relation",
            expected: initial.len(),
            found: adjacency.len(),
        });
    }

    let mut current = initial.to_vec();
    let mut next = vec![false; current.len()];

    for generation in 0..steps {
        let snapshot = &current;
        exec.for_each_cell(&mut next, |i, cell| {
            *cell = rules.next_state(snapshot[i], adjacency.live_neighbors(i, snapshot));
        });
        std::mem::swap(&mut current, &mut next);
        tracing::trace!(generation = generation + 1, "graph step");
    }

    tracing::debug!(
        cells = current.len(),
        steps,
        rule = %rules,
        alive = current.iter().filter(|&&alive| alive).count(),
        "graph run finished"
    );
    Ok(current)
}
