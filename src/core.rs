//! Core traits and types for sorted matrix search.
//!
//! This module defines:
//! - [`Grid`] / [`GridMut`]: the capability interface every search strategy reads through.
//! - [`SearchResult`]: the tagged outcome of a search.
//! - [`Window`]: a half-open sub-rectangle used by the quadrant search.
//! - [`CountingGrid`]: a wrapper counting reads, to observe pruning.

use crate::error::{InvalidWindow, OutOfBounds, WindowBound};
use std::cell::Cell;
use std::fmt;

/// The scalar stored in every cell.
pub type Value = i64;

/// Read access to a dense, rectangular grid of [`Value`]s.
///
/// The searches in [`crate::algo`] assume each row and each column is
/// non-decreasing. Implementors are not required to check this; a grid that
/// violates it never makes a search panic, but may produce false negatives.
///
/// # Examples
///
/// Implementing for a custom storage:
///
/// ```
/// use sortmat::core::{Grid, Value};
/// use sortmat::error::OutOfBounds;
///
/// // A single-row grid over a borrowed slice.
/// struct Strip<'a>(&'a [Value]);
///
/// impl Grid for Strip<'_> {
///     fn rows(&self) -> usize {
///         1
///     }
///
///     fn cols(&self) -> usize {
///         self.0.len()
///     }
///
///     fn get(&self, row: usize, col: usize) -> Result<Value, OutOfBounds> {
///         self.row(row)?
///             .get(col)
///             .copied()
///             .ok_or(OutOfBounds::Cell { row, col, rows: 1, cols: self.0.len() })
///     }
///
///     fn row(&self, row: usize) -> Result<&[Value], OutOfBounds> {
///         if row == 0 {
///             Ok(self.0)
///         } else {
///             Err(OutOfBounds::Row { row, rows: 1 })
///         }
///     }
/// }
///
/// let strip = Strip(&[1, 3, 5]);
/// assert!(sortmat::contains_linear(&strip, 3).is_found());
/// ```
pub trait Grid {
    /// Returns the number of rows.
    fn rows(&self) -> usize;

    /// Returns the number of columns.
    fn cols(&self) -> usize;

    /// Returns the value at `(row, col)`.
    fn get(&self, row: usize, col: usize) -> Result<Value, OutOfBounds>;

    /// Returns row `row` as a borrowed slice of length [`cols`](Grid::cols).
    fn row(&self, row: usize) -> Result<&[Value], OutOfBounds>;

    /// Returns `(rows, cols)`.
    fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Returns `true` if the grid has no cells.
    fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }
}

/// Single-cell write access.
pub trait GridMut: Grid {
    /// Writes `value` at `(row, col)`. On error the grid is left untouched.
    fn set(&mut self, row: usize, col: usize, value: Value) -> Result<(), OutOfBounds>;
}

impl<G: Grid + ?Sized> Grid for &G {
    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn cols(&self) -> usize {
        (**self).cols()
    }

    fn get(&self, row: usize, col: usize) -> Result<Value, OutOfBounds> {
        (**self).get(row, col)
    }

    fn row(&self, row: usize) -> Result<&[Value], OutOfBounds> {
        (**self).row(row)
    }
}

/// Outcome of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchResult {
    /// The target is stored at `(row, col)`.
    Found { row: usize, col: usize },
    /// The target is not in the searched region.
    NotFound,
}

impl SearchResult {
    /// Returns `true` for [`SearchResult::Found`].
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found { .. })
    }

    /// Returns `(row, col)` if the target was found.
    #[inline]
    pub fn position(&self) -> Option<(usize, usize)> {
        match *self {
            SearchResult::Found { row, col } => Some((row, col)),
            SearchResult::NotFound => None,
        }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchResult::Found { row, col } => write!(f, "found at ({row}, {col})"),
            SearchResult::NotFound => f.write_str("not found"),
        }
    }
}

/// The half-open region `[ai, bi) × [aj, bj)`.
///
/// Bounds are signed so that negative bounds can be expressed and rejected
/// by [`Window::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    pub ai: isize,
    pub aj: isize,
    pub bi: isize,
    pub bj: isize,
}

impl Window {
    pub fn new(ai: isize, aj: isize, bi: isize, bj: isize) -> Self {
        Self { ai, aj, bi, bj }
    }

    /// The window covering the whole grid, `(0, 0) - (rows, cols)`.
    pub fn full<G: Grid + ?Sized>(grid: &G) -> Self {
        Self::new(0, 0, to_isize(grid.rows()), to_isize(grid.cols()))
    }

    /// Number of rows, `bi - ai`.
    #[inline]
    pub fn height(&self) -> isize {
        self.bi - self.ai
    }

    /// Number of columns, `bj - aj`.
    #[inline]
    pub fn width(&self) -> isize {
        self.bj - self.aj
    }

    /// Checks that the window is a half-open sub-rectangle of a
    /// `rows x cols` grid.
    ///
    /// Bounds are checked in the order `ai`, `bi`, `aj`, `bj`; the first
    /// offending one is reported. An inverted window is reported only once
    /// all four bounds are individually in range.
    pub fn validate(&self, rows: usize, cols: usize) -> Result<(), InvalidWindow> {
        check_bound(WindowBound::Ai, self.ai, rows)?;
        check_bound(WindowBound::Bi, self.bi, rows)?;
        check_bound(WindowBound::Aj, self.aj, cols)?;
        check_bound(WindowBound::Bj, self.bj, cols)?;
        if self.bi < self.ai || self.bj < self.aj {
            return Err(InvalidWindow::Inverted {
                ai: self.ai,
                aj: self.aj,
                bi: self.bi,
                bj: self.bj,
            });
        }
        Ok(())
    }

    /// Splits the window at its midpoints into top-left, top-right,
    /// bottom-left and bottom-right quadrants, in that order.
    ///
    /// The top and left halves get the smaller share when a side is odd.
    pub fn quadrants(&self) -> [Window; 4] {
        let row_mid = self.ai + self.height() / 2;
        let col_mid = self.aj + self.width() / 2;
        [
            Window::new(self.ai, self.aj, row_mid, col_mid),
            Window::new(self.ai, col_mid, row_mid, self.bj),
            Window::new(row_mid, self.aj, self.bi, col_mid),
            Window::new(row_mid, col_mid, self.bi, self.bj),
        ]
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) - ({}, {})", self.ai, self.aj, self.bi, self.bj)
    }
}

fn check_bound(bound: WindowBound, value: isize, limit: usize) -> Result<(), InvalidWindow> {
    // `value` is non-negative once the first test fails, so the cast is lossless.
    if value < 0 || value as usize > limit {
        return Err(InvalidWindow::Bound {
            bound,
            value,
            limit,
        });
    }
    Ok(())
}

#[inline]
fn to_isize(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

/// A [`Grid`] wrapper counting how many times the wrapped grid is read.
///
/// Cell reads ([`Grid::get`]) and row reads ([`Grid::row`]) are counted
/// separately, including reads that fail.
///
/// ```
/// use sortmat::prelude::*;
///
/// let matrix = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]);
/// let probe = CountingGrid::new(&matrix);
///
/// // 0 is below the top-left corner: pruned after reading both corners.
/// assert_eq!(contains_experimental(&probe, 0, 0, 2, 2, 0), Ok(SearchResult::NotFound));
/// assert_eq!(probe.reads(), 2);
/// ```
#[derive(Debug)]
pub struct CountingGrid<'a, G: Grid + ?Sized> {
    inner: &'a G,
    reads: Cell<usize>,
    row_reads: Cell<usize>,
}

impl<'a, G: Grid + ?Sized> CountingGrid<'a, G> {
    pub fn new(inner: &'a G) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
            row_reads: Cell::new(0),
        }
    }

    /// Number of [`Grid::get`] calls so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Number of [`Grid::row`] calls so far.
    pub fn row_reads(&self) -> usize {
        self.row_reads.get()
    }

    /// Resets both counters to zero.
    pub fn reset(&self) {
        self.reads.set(0);
        self.row_reads.set(0);
    }
}

impl<G: Grid + ?Sized> Grid for CountingGrid<'_, G> {
    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn cols(&self) -> usize {
        self.inner.cols()
    }

    fn get(&self, row: usize, col: usize) -> Result<Value, OutOfBounds> {
        self.reads.set(self.reads.get() + 1);
        self.inner.get(row, col)
    }

    fn row(&self, row: usize) -> Result<&[Value], OutOfBounds> {
        self.row_reads.set(self.row_reads.get() + 1);
        self.inner.row(row)
    }
}

/// Writes `grid` as text: every value right-aligned to the width of the
/// widest value and followed by a space, rows separated by newlines.
pub(crate) fn render<G: Grid + ?Sized>(grid: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let rows: Vec<&[Value]> = (0..grid.rows())
        .map(|i| grid.row(i))
        .collect::<Result<_, _>>()
        .map_err(|_| fmt::Error)?;

    let width = rows
        .iter()
        .flat_map(|row| row.iter())
        .map(|value| value.to_string().len())
        .max()
        .unwrap_or(0);

    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            f.write_str("\n")?;
        }
        for value in row.iter() {
            write!(f, "{value:>width$} ")?;
        }
    }
    Ok(())
}
