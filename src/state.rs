//! Core grid structure and helper methods.

use crate::error::{AutomatonError, Result};

/// A rectangular grid of cells stored row-major.
///
/// Dimensions are fixed at construction. Engines never mutate a caller's grid;
/// they copy it into their own buffers and return a fresh `Grid`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }

    /// Build a grid from a slice of rows, rejecting ragged input.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(AutomatonError::ShapeMismatch {
                    what: "grid row",
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Grid {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Wrap a flat row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self> {
        let expected = rows.checked_mul(cols).ok_or(AutomatonError::ShapeMismatch {
            what: "grid buffer",
            expected: usize::MAX,
            found: cells.len(),
        })?;
        if cells.len() != expected {
            return Err(AutomatonError::ShapeMismatch {
                what: "grid buffer",
                expected,
                found: cells.len(),
            });
        }
        Ok(Grid { rows, cols, cells })
    }

    /// Assemble a grid from a buffer the caller already sized correctly.
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<T>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Grid { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the grid has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }

    /// Linear index of `(row, col)`.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Check if coordinates are within grid bounds.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell value, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if self.in_bounds(row, col) {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Set a cell value. Out-of-bounds coordinates are silently ignored.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if self.in_bounds(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = value;
        }
    }

    /// Iterate over the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[T]> {
        // chunks() panics on 0, and a zero-width grid has no cells to yield anyway
        self.cells.chunks(self.cols.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.row_slices().map(|row| row.to_vec()).collect()
    }

    /// Apply `f` to every cell, keeping the shape.
    pub fn map<U, F: Fn(T) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|&c| f(c)).collect(),
        }
    }
}

impl Grid<i64> {
    /// Total number of grains on the grid.
    pub fn mass(&self) -> i64 {
        self.cells.iter().sum()
    }
}

impl Grid<bool> {
    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[vec![1i64, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(1, 0), Some(4));
        assert_eq!(grid.get(0, 2), Some(3));
        assert_eq!(grid.mass(), 21);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(&[vec![true, false], vec![true]]).unwrap_err();
        assert_eq!(
            err,
            AutomatonError::ShapeMismatch {
                what: "grid row",
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn test_from_vec_length_checked() {
        assert!(Grid::from_vec(2, 2, vec![0i64; 4]).is_ok());
        assert!(Grid::from_vec(2, 2, vec![0i64; 5]).is_err());
    }

    #[test]
    fn test_index_and_bounds() {
        let grid = Grid::new(4, 5, false);

        // First cell
        assert_eq!(grid.index(0, 0), 0);
        // Last cell
        assert_eq!(grid.index(3, 4), 19);
        assert_eq!(grid.index(1, 0), 5);

        assert!(grid.in_bounds(3, 4));
        assert!(!grid.in_bounds(4, 0));
        assert!(!grid.in_bounds(0, 5));
        assert_eq!(grid.get(4, 0), None);
    }

    #[test]
    fn test_set_ignores_out_of_bounds() {
        let mut grid = Grid::new(3, 3, false);
        grid.set(1, 1, true);
        grid.set(3, 3, true);
        assert_eq!(grid.population(), 1);
        assert_eq!(grid.get(1, 1), Some(true));
    }

    #[test]
    fn test_to_rows_round_trips_shape() {
        let rows = vec![vec![0i64, 1], vec![2, 3], vec![4, 5]];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.to_rows(), rows);

        let empty: Grid<bool> = Grid::from_rows::<Vec<bool>>(&[]).unwrap();
        assert!(empty.is_empty());
        assert!(empty.to_rows().is_empty());
    }
}
