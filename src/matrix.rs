//! Concrete grids: [`Matrix`] (one row-major buffer) and [`NestedMatrix`]
//! (one buffer per row).
//!
//! Both backings implement [`Grid`] and [`GridMut`] with identical
//! semantics, so every search strategy runs unchanged on either.

use crate::core::{Grid, GridMut, Value, render};
use crate::error::OutOfBounds;
use std::fmt;

/// A `rows x cols` matrix stored in a single row-major buffer.
///
/// # Examples
///
/// ```
/// use sortmat::prelude::*;
///
/// let mut matrix = Matrix::new(2, 3);
/// matrix.set(1, 2, 7)?;
///
/// assert_eq!(matrix.get(1, 2)?, 7);
/// assert_eq!(matrix.row(1)?, &[0, 0, 7]);
/// assert!(matrix.set(2, 0, 1).is_err());
/// # Ok::<(), sortmat::error::OutOfBounds>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    entries: Vec<Value>,
}

impl Matrix {
    /// Creates a `rows x cols` matrix filled with zeros.
    ///
    /// Either dimension may be zero, giving an empty matrix.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: vec![0; cell_count(rows, cols)],
        }
    }

    /// Builds a matrix from nested rows.
    ///
    /// The matrix has one row per inner vector and as many columns as the
    /// longest of them; shorter rows are padded with zeros. Sortedness is not
    /// checked.
    pub fn from_rows(rows: &[Vec<Value>]) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut matrix = Self::new(rows.len(), cols);
        for (i, row) in rows.iter().enumerate() {
            let start = i * cols;
            matrix.entries[start..start + row.len()].copy_from_slice(row);
        }
        matrix
    }

    /// Builds a matrix whose cell `(i, j)` is `f(i, j)`.
    ///
    /// ```
    /// use sortmat::prelude::*;
    ///
    /// // Row-major fill with 1..=6.
    /// let matrix = Matrix::from_fn(2, 3, |i, j| (i * 3 + j + 1) as Value);
    /// assert_eq!(matrix.row(1).unwrap(), &[4, 5, 6]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Value) -> Self {
        let mut entries = Vec::with_capacity(cell_count(rows, cols));
        entries.extend(
            (0..rows)
                .flat_map(|i| (0..cols).map(move |j| (i, j)))
                .map(|(i, j)| f(i, j)),
        );
        Self {
            rows,
            cols,
            entries,
        }
    }

    /// Returns `true` if every row and every column is non-decreasing.
    pub fn is_sorted(&self) -> bool {
        is_sorted(self)
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, OutOfBounds> {
        if row >= self.rows || col >= self.cols {
            return Err(OutOfBounds::Cell {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}

impl Grid for Matrix {
    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> Result<Value, OutOfBounds> {
        self.index(row, col).map(|k| self.entries[k])
    }

    fn row(&self, row: usize) -> Result<&[Value], OutOfBounds> {
        if row >= self.rows {
            return Err(OutOfBounds::Row {
                row,
                rows: self.rows,
            });
        }
        let start = row * self.cols;
        Ok(&self.entries[start..start + self.cols])
    }
}

impl GridMut for Matrix {
    fn set(&mut self, row: usize, col: usize, value: Value) -> Result<(), OutOfBounds> {
        let k = self.index(row, col)?;
        self.entries[k] = value;
        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl From<NestedMatrix> for Matrix {
    fn from(nested: NestedMatrix) -> Self {
        Self {
            rows: nested.rows,
            cols: nested.cols,
            entries: nested.entries.into_iter().flatten().collect(),
        }
    }
}

/// A `rows x cols` matrix stored as one vector per row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NestedMatrix {
    rows: usize,
    cols: usize,
    entries: Vec<Vec<Value>>,
}

impl NestedMatrix {
    /// Creates a `rows x cols` matrix filled with zeros.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: vec![vec![0; cols]; rows],
        }
    }

    /// Builds a matrix from nested rows, padding short rows with zeros.
    pub fn from_rows(rows: &[Vec<Value>]) -> Self {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        let entries = rows
            .iter()
            .map(|row| {
                let mut padded = row.clone();
                padded.resize(cols, 0);
                padded
            })
            .collect();
        Self {
            rows: rows.len(),
            cols,
            entries,
        }
    }

    /// Returns `true` if every row and every column is non-decreasing.
    pub fn is_sorted(&self) -> bool {
        is_sorted(self)
    }
}

impl Grid for NestedMatrix {
    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }

    fn get(&self, row: usize, col: usize) -> Result<Value, OutOfBounds> {
        self.entries
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(OutOfBounds::Cell {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
    }

    fn row(&self, row: usize) -> Result<&[Value], OutOfBounds> {
        self.entries
            .get(row)
            .map(Vec::as_slice)
            .ok_or(OutOfBounds::Row {
                row,
                rows: self.rows,
            })
    }
}

impl GridMut for NestedMatrix {
    fn set(&mut self, row: usize, col: usize, value: Value) -> Result<(), OutOfBounds> {
        let (rows, cols) = (self.rows, self.cols);
        let cell = self
            .entries
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(OutOfBounds::Cell {
                row,
                col,
                rows,
                cols,
            })?;
        *cell = value;
        Ok(())
    }
}

impl fmt::Display for NestedMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl From<Matrix> for NestedMatrix {
    fn from(matrix: Matrix) -> Self {
        let entries = if matrix.cols == 0 {
            vec![Vec::new(); matrix.rows]
        } else {
            matrix
                .entries
                .chunks_exact(matrix.cols)
                .map(<[Value]>::to_vec)
                .collect()
        };
        Self {
            rows: matrix.rows,
            cols: matrix.cols,
            entries,
        }
    }
}

fn cell_count(rows: usize, cols: usize) -> usize {
    match rows.checked_mul(cols) {
        Some(n) => n,
        None => panic!("Matrix dimensions {rows}x{cols} overflow usize"),
    }
}

fn is_sorted<G: Grid + ?Sized>(grid: &G) -> bool {
    let rows: Option<Vec<&[Value]>> = (0..grid.rows()).map(|i| grid.row(i).ok()).collect();
    let Some(rows) = rows else {
        return false;
    };
    let rows_sorted = rows.iter().all(|row| row.windows(2).all(|w| w[0] <= w[1]));
    let cols_sorted = rows
        .windows(2)
        .all(|pair| pair[0].iter().zip(pair[1].iter()).all(|(up, down)| up <= down));
    rows_sorted && cols_sorted
}
