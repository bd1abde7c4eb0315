//! # Sortmat
//!
//! `sortmat` locates values in a *sorted matrix*: a grid whose every row is
//! non-decreasing left to right and whose every column is non-decreasing top
//! to bottom.
//!
//! It provides three interchangeable strategies, so they can be compared on
//! the same input:
//!
//! - **Staircase search** ([`contains_linear`]): O(rows + cols) reads, starting
//!   from the top-right corner and moving only left or down.
//! - **Row-wise binary search** ([`contains_bs`]): O(rows · log cols), one
//!   [`binary_search`] per row.
//! - **Quadrant search** ([`contains_experimental`]): recursive
//!   divide-and-conquer over half-open windows, pruned by corner values.
//!
//! Strategies read matrices through the [`Grid`] trait, which is implemented
//! by the two bundled backings, [`Matrix`] (a single row-major buffer) and
//! [`NestedMatrix`] (one vector per row), and can be implemented for any
//! other rectangular storage.
//!
//! ## Usage
//!
//! ```rust
//! use sortmat::prelude::*;
//!
//! // 10x10 matrix filled row-major with 1..=100.
//! let matrix = Matrix::from_fn(10, 10, |i, j| (i * 10 + j + 1) as Value);
//!
//! assert_eq!(contains_linear(&matrix, 57), SearchResult::Found { row: 5, col: 6 });
//! assert_eq!(contains_bs(&matrix, 271), SearchResult::NotFound);
//! assert_eq!(
//!     contains_experimental(&matrix, 0, 0, 10, 10, 57),
//!     Ok(SearchResult::Found { row: 5, col: 6 })
//! );
//! ```
//!
//! ## Errors
//!
//! Containers report out-of-range coordinates with
//! [`OutOfBounds`](error::OutOfBounds); the quadrant search reports malformed
//! windows with [`InvalidWindow`](error::InvalidWindow). Nothing in this
//! crate panics on well-formed input.
//!
//! ## Sortedness
//!
//! The sortedness of a matrix is the caller's responsibility and is never
//! checked by the searches. On an unsorted matrix they still terminate
//! without panicking, but may miss values that are present.
//! [`Matrix::is_sorted`] can be used to check fixtures.

pub mod algo;
pub mod core;
pub mod error;
pub mod matrix;
pub use algo::{
    Strategy, binary_search, contains_bs, contains_experimental, contains_in_window,
    contains_linear,
};
pub use core::{CountingGrid, Grid, GridMut, SearchResult, Value, Window};
pub use matrix::{Matrix, NestedMatrix};

pub mod prelude {
    pub use crate::algo::{
        Strategy, binary_search, contains_bs, contains_experimental, contains_in_window,
        contains_linear,
    };
    pub use crate::core::{CountingGrid, Grid, GridMut, SearchResult, Value, Window};
    pub use crate::error::{InvalidWindow, OutOfBounds};
    pub use crate::matrix::{Matrix, NestedMatrix};
}
