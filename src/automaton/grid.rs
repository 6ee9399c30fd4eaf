//! Padded buffers and boundary-aware neighbor lookup.

use std::ops::Range;

use crate::config::Boundary;
use crate::state::Grid;

/// Offsets of the 8 Moore neighbors, as (row, col) deltas.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Resolve `(row + dr, col + dc)` on a `rows x cols` grid under `boundary`.
///
/// Returns `None` when the target falls outside a fixed-boundary grid.
#[inline]
pub fn neighbor_coord(
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    boundary: Boundary,
) -> Option<(usize, usize)> {
    let r = row as isize + dr;
    let c = col as isize + dc;
    match boundary {
        Boundary::Fixed => {
            if r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols {
                Some((r as usize, c as usize))
            } else {
                None
            }
        }
        Boundary::Periodic => Some((
            r.rem_euclid(rows as isize) as usize,
            c.rem_euclid(cols as isize) as usize,
        )),
    }
}

/// Count live Moore neighbors of `(row, col)`.
///
/// On a periodic grid narrower than 3 cells an offset can wrap back onto the
/// same cell, and it is counted once per offset (circular padding).
pub fn count_neighbors(grid: &Grid<bool>, row: usize, col: usize, boundary: Boundary) -> u8 {
    let mut count = 0;

    for &(dr, dc) in &MOORE_OFFSETS {
        let target = neighbor_coord(grid.rows(), grid.cols(), row, col, dr, dc, boundary);
        if let Some((nr, nc)) = target {
            count += grid.cells()[grid.index(nr, nc)] as u8;
        }
    }

    count
}

/// A grid surrounded by a border of sentinel (default-valued) cells.
///
/// All coordinates taken by accessor methods are padded coordinates; the
/// interior starts at `(pad_rows, pad_cols)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedGrid<T> {
    rows: usize,
    cols: usize,
    pad_rows: usize,
    pad_cols: usize,
    cells: Vec<T>,
}

impl<T: Copy + Default> PaddedGrid<T> {
    /// Copy `grid` into a buffer with a zero (default) border.
    pub fn new(grid: &Grid<T>, pad_rows: usize, pad_cols: usize) -> Self {
        let width = grid.cols() + 2 * pad_cols;
        let height = grid.rows() + 2 * pad_rows;
        let mut cells = vec![T::default(); width * height];

        for (r, row) in grid.row_slices().enumerate() {
            let start = (r + pad_rows) * width + pad_cols;
            cells[start..start + row.len()].copy_from_slice(row);
        }

        PaddedGrid {
            rows: grid.rows(),
            cols: grid.cols(),
            pad_rows,
            pad_cols,
            cells,
        }
    }

    /// Padded row length.
    #[inline]
    pub fn width(&self) -> usize {
        self.cols + 2 * self.pad_cols
    }

    /// Padded row count.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows + 2 * self.pad_rows
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width() + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[self.index(row, col)]
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Padded row indices covering the interior.
    pub fn interior_rows(&self) -> Range<usize> {
        self.pad_rows..self.pad_rows + self.rows
    }

    /// Padded column indices covering the interior.
    pub fn interior_cols(&self) -> Range<usize> {
        self.pad_cols..self.pad_cols + self.cols
    }

    #[inline]
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        !self.interior_rows().contains(&row) || !self.interior_cols().contains(&col)
    }

    /// Buffer indices of the border ring, row by row.
    pub fn border_indices(&self) -> impl Iterator<Item = usize> {
        let width = self.width();
        let interior = self.interior_rows();
        let (left, right) = (self.pad_cols, self.pad_cols + self.cols);

        (0..self.height()).flat_map(move |row| {
            let cols = if interior.contains(&row) {
                (0..left).chain(right..width)
            } else {
                (0..width).chain(0..0)
            };
            cols.map(move |col| row * width + col)
        })
    }

    /// Reset every border cell to the sentinel value.
    pub fn clear_border(&mut self) {
        for idx in self.border_indices() {
            self.cells[idx] = T::default();
        }
    }

    /// Overwrite the border with the opposite edge's interior cells, corners
    /// included, so the padded buffer reads as a torus.
    ///
    /// Every border cell takes its value from the interior, even when the
    /// border is wider than the interior (a single-column grid under a
    /// 2-column border sees that column repeated on both sides).
    pub fn wrap_border(&mut self) {
        if self.rows == 0 || self.cols == 0 {
            return;
        }

        let width = self.width();
        for idx in self.border_indices() {
            let (row, col) = (idx / width, idx % width);
            let src_row = (row as isize - self.pad_rows as isize).rem_euclid(self.rows as isize)
                as usize
                + self.pad_rows;
            let src_col = (col as isize - self.pad_cols as isize).rem_euclid(self.cols as isize)
                as usize
                + self.pad_cols;
            let value = self.get(src_row, src_col);
            self.cells[idx] = value;
        }
    }

    /// Prepare the border for a neighbor pass.
    ///
    /// A fixed boundary leaves the border at whatever it already holds.
    pub fn refresh_border(&mut self, boundary: Boundary) {
        if boundary.is_periodic() {
            self.wrap_border();
        }
    }

    /// Strip the border.
    pub fn interior(&self) -> Grid<T> {
        let mut cells = Vec::with_capacity(self.rows * self.cols);
        for row in self.interior_rows() {
            let start = self.index(row, self.pad_cols);
            cells.extend_from_slice(&self.cells[start..start + self.cols]);
        }
        Grid::from_parts(self.rows, self.cols, cells)
    }
}
