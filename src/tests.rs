//! Cross-engine properties: every engine against the others and against
//! straightforward reference recomputations.

use crate::automaton::graph::{self, AdjacencyRelation, RuleSet};
use crate::automaton::{sandpile, stepping, triangular, Executor};
use crate::config::Boundary;
use crate::state::Grid;

/// Generate a pseudo-random boolean grid using a simple LCG.
fn noisy_grid(rows: usize, cols: usize, seed_base: u32, one_in: u32) -> Grid<bool> {
    let mut lcg_state = seed_base.wrapping_mul(1103515245).wrapping_add(12345);
    let mut grid = Grid::new(rows, cols, false);
    for r in 0..rows {
        for c in 0..cols {
            lcg_state = lcg_state.wrapping_mul(1103515245).wrapping_add(12345);
            grid.set(r, c, (lcg_state >> 16) % one_in == 0);
        }
    }
    grid
}

/// Generate a pseudo-random sandpile with heights in `0..max`.
fn noisy_pile(rows: usize, cols: usize, seed_base: u32, max: u32) -> Grid<i64> {
    let mut lcg_state = seed_base.wrapping_mul(1103515245).wrapping_add(12345);
    let mut grid = Grid::new(rows, cols, 0i64);
    for r in 0..rows {
        for c in 0..cols {
            lcg_state = lcg_state.wrapping_mul(1103515245).wrapping_add(12345);
            grid.set(r, c, ((lcg_state >> 16) % max) as i64);
        }
    }
    grid
}

/// One Life generation computed the slow way: a fresh output grid, every
/// neighbor looked up in the untouched input.
fn reference_life_step(grid: &Grid<bool>, boundary: Boundary) -> Grid<bool> {
    let (rows, cols) = (grid.rows() as isize, grid.cols() as isize);
    let mut next = Grid::new(grid.rows(), grid.cols(), false);
    for r in 0..rows {
        for c in 0..cols {
            let mut count = 0;
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let (nr, nc) = match boundary {
                        Boundary::Periodic => {
                            ((r + dr).rem_euclid(rows), (c + dc).rem_euclid(cols))
                        }
                        Boundary::Fixed => (r + dr, c + dc),
                    };
                    if grid.get(nr as usize, nc as usize) == Some(true) {
                        count += 1;
                    }
                }
            }
            let alive = grid.get(r as usize, c as usize) == Some(true);
            next.set(r as usize, c as usize, count == 3 || (alive && count == 2));
        }
    }
    next
}

#[test]
fn test_life_matches_reference_recomputation() {
    for boundary in [Boundary::Fixed, Boundary::Periodic] {
        let mut expected = noisy_grid(14, 21, 9, 3);
        let start = expected.clone();
        for _ in 0..8 {
            expected = reference_life_step(&expected, boundary);
        }
        assert_eq!(stepping::step(&start, 8, boundary), expected, "{:?}", boundary);
    }
}

#[test]
fn test_generic_engine_reproduces_square_life() {
    let rules = RuleSet::conway();
    for seed in 1..4 {
        let start = noisy_grid(10, 13, seed, 3);
        let adjacency = AdjacencyRelation::moore(10, 13, Boundary::Fixed).unwrap();

        let via_graph = graph::step(&adjacency, start.cells(), 11, &rules).unwrap();
        let via_grid = stepping::step(&start, 11, Boundary::Fixed);

        assert_eq!(via_graph, via_grid.cells(), "seed {}", seed);
    }
}

#[test]
fn test_generic_engine_reproduces_periodic_square_life() {
    let start = noisy_grid(8, 9, 31, 2);
    let adjacency = AdjacencyRelation::moore(8, 9, Boundary::Periodic).unwrap();

    let via_graph = graph::step(&adjacency, start.cells(), 7, &RuleSet::conway()).unwrap();
    let via_grid = stepping::step(&start, 7, Boundary::Periodic);

    assert_eq!(via_graph, via_grid.cells());
}

#[test]
fn test_generic_engine_reproduces_triangular_life() {
    let rules = RuleSet::triangular();
    for boundary in [Boundary::Fixed, Boundary::Periodic] {
        let start = noisy_grid(6, 10, 17, 2);
        let adjacency = AdjacencyRelation::triangular(6, 10, boundary).unwrap();

        let via_graph = graph::step(&adjacency, start.cells(), 6, &rules).unwrap();
        let via_tri = triangular::step(&start, 6, boundary);

        assert_eq!(via_graph, via_tri.cells(), "{:?}", boundary);
    }
}

#[test]
fn test_all_engines_parallel_match_sequential() {
    let exec = Executor::new(4);
    let start = noisy_grid(31, 29, 5, 3);

    for boundary in [Boundary::Fixed, Boundary::Periodic] {
        assert_eq!(
            stepping::step_with(&exec, &start, 15, boundary),
            stepping::step(&start, 15, boundary)
        );
        assert_eq!(
            triangular::step_with(&exec, &start, 15, boundary),
            triangular::step(&start, 15, boundary)
        );
    }

    let adjacency = AdjacencyRelation::triangular(31, 29, Boundary::Periodic).unwrap();
    let rules = RuleSet::triangular();
    assert_eq!(
        graph::step_with(&exec, &adjacency, start.cells(), 5, &rules).unwrap(),
        graph::step(&adjacency, start.cells(), 5, &rules).unwrap()
    );
}

#[test]
fn test_sandpile_mass_never_increases() {
    for seed in 0..6 {
        let start = noisy_pile(9, 12, seed, 9);
        let report = sandpile::relax_counted(&start);

        assert!(report.grid.mass() <= start.mass(), "seed {}", seed);
        assert_eq!(report.grid.mass() + report.lost, start.mass());
        if report.lost == 0 {
            assert_eq!(report.grid.mass(), start.mass());
        }
    }
}

#[test]
fn test_sandpile_stable_and_idempotent() {
    for seed in 0..6 {
        let start = noisy_pile(11, 7, seed, 12);
        let relaxed = sandpile::relax(&start);

        assert!(sandpile::is_stable(&relaxed), "seed {}", seed);
        assert_eq!(sandpile::relax(&relaxed), relaxed);
    }
}

#[test]
fn test_sandpile_abelian_property() {
    // Adding grains one at a time and relaxing after each matches adding them
    // all at once and relaxing once.
    let base = noisy_pile(6, 6, 3, 4);
    let drops = [(2, 3), (0, 0), (5, 1), (2, 3), (3, 3), (1, 4)];

    let mut all_at_once = base.clone();
    for &(r, c) in &drops {
        let v = all_at_once.get(r, c).unwrap();
        all_at_once.set(r, c, v + 1);
    }
    let all_at_once = sandpile::relax(&all_at_once);

    let mut incremental = sandpile::relax(&base);
    for &(r, c) in &drops {
        let v = incremental.get(r, c).unwrap();
        incremental.set(r, c, v + 1);
        incremental = sandpile::relax(&incremental);
    }

    assert_eq!(incremental, all_at_once);
}

#[test]
fn test_triangular_periodic_all_dead_stays_dead() {
    for (rows, cols) in [(1, 1), (2, 3), (5, 8), (7, 7)] {
        let dead = Grid::new(rows, cols, false);
        assert_eq!(triangular::step(&dead, 40, Boundary::Periodic), dead);
    }
}

#[test]
fn test_zero_steps_identity_everywhere() {
    let start = noisy_grid(5, 7, 99, 2);
    for boundary in [Boundary::Fixed, Boundary::Periodic] {
        assert_eq!(stepping::step(&start, 0, boundary), start);
        assert_eq!(triangular::step(&start, 0, boundary), start);
    }
    let adjacency = AdjacencyRelation::moore(5, 7, Boundary::Fixed).unwrap();
    assert_eq!(
        graph::step(&adjacency, start.cells(), 0, &RuleSet::conway()).unwrap(),
        start.cells()
    );
}
