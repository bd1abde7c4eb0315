//! Error types returned by the containers and the quadrant search.
//!
//! There are exactly two kinds of failure:
//! - [`OutOfBounds`]: a cell or row index outside a container.
//! - [`InvalidWindow`]: a search window that is not a half-open sub-rectangle
//!   of the matrix.
//!
//! Both are plain values: none of them leaves a container in a modified state.

use std::fmt;
use thiserror::Error;

/// A coordinate or row index fell outside the container's dimensions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutOfBounds {
    /// The cell `(row, col)` does not exist.
    #[error("Cell ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    Cell {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The row `row` does not exist.
    #[error("Row {row} is out of bounds for a matrix with {rows} rows")]
    Row { row: usize, rows: usize },
}

/// One of the four bounds of a search window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowBound {
    /// First row (inclusive).
    Ai,
    /// First column (inclusive).
    Aj,
    /// Last row (exclusive).
    Bi,
    /// Last column (exclusive).
    Bj,
}

impl fmt::Display for WindowBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WindowBound::Ai => "ai",
            WindowBound::Aj => "aj",
            WindowBound::Bi => "bi",
            WindowBound::Bj => "bj",
        })
    }
}

/// The window passed to the quadrant search is not a valid half-open
/// sub-rectangle of the matrix.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidWindow {
    /// A single bound is negative or exceeds the matching dimension.
    #[error("Invalid {bound} {value}: must lie in [0, {limit}]")]
    Bound {
        bound: WindowBound,
        value: isize,
        limit: usize,
    },

    /// The end of the window precedes its start.
    #[error("Invalid window ({ai}, {aj}) - ({bi}, {bj})")]
    Inverted {
        ai: isize,
        aj: isize,
        bi: isize,
        bj: isize,
    },
}

impl InvalidWindow {
    /// Returns the offending bound, or `None` for an inverted window.
    pub fn bound(&self) -> Option<WindowBound> {
        match self {
            InvalidWindow::Bound { bound, .. } => Some(*bound),
            InvalidWindow::Inverted { .. } => None,
        }
    }
}
