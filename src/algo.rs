//! Search strategies for sorted matrices.
//!
//! All strategies assume every row and every column of the grid is
//! non-decreasing, and only read the grid through [`Grid::get`] and
//! [`Grid::row`]:
//! - **Staircase** ([`contains_linear`]): walks from the top-right corner,
//!   O(rows + cols).
//! - **Row-wise binary search** ([`contains_bs`]): one [`binary_search`] per
//!   row, O(rows · log cols).
//! - **Quadrant search** ([`contains_experimental`]): recursive
//!   divide-and-conquer, pruning windows whose corner values do not bracket
//!   the target. Experimental: no tight bound is claimed.
//!
//! [`Strategy`] names the three so they can be driven uniformly.

use crate::core::{Grid, SearchResult, Value, Window};
use crate::error::InvalidWindow;
use std::cmp::Ordering;
use std::fmt;

/// Finds `target` in a non-decreasing slice.
///
/// Returns the index of an occurrence, or `None` if there is none. When
/// `target` occurs several times any of its indices may be returned.
/// Performs O(log n) comparisons.
///
/// # Examples
///
/// ```
/// use sortmat::binary_search;
///
/// let values = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&values, 7), Some(3));
/// assert_eq!(binary_search(&values, 4), None);
/// assert_eq!(binary_search(&[], 4), None);
/// ```
pub fn binary_search(values: &[Value], target: Value) -> Option<usize> {
    let mut lo = 0;
    let mut hi = values.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match values[mid].cmp(&target) {
            Ordering::Equal => return Some(mid),
            Ordering::Greater => hi = mid,
            Ordering::Less => lo = mid + 1,
        }
    }

    None
}

/// Staircase search.
///
/// Starts at the top-right corner. A cell larger than `target` rules out the
/// rest of its column, so the cursor moves left; a smaller cell rules out the
/// rest of its row, so the cursor moves down. Stops when the cursor leaves
/// the grid.
///
/// Performs at most `rows + cols` reads and no allocation.
///
/// # Examples
///
/// ```
/// use sortmat::prelude::*;
///
/// let matrix = Matrix::from_rows(&[vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]]);
///
/// assert_eq!(contains_linear(&matrix, 6), SearchResult::Found { row: 2, col: 1 });
/// assert_eq!(contains_linear(&matrix, 10), SearchResult::NotFound);
/// ```
pub fn contains_linear<G: Grid + ?Sized>(grid: &G, target: Value) -> SearchResult {
    let (rows, cols) = grid.dimensions();
    log::debug!("Staircase search for {target} in a {rows}x{cols} grid");

    if cols == 0 {
        return SearchResult::NotFound;
    }

    let mut i = 0;
    let mut j = cols;
    // `j` is one past the current column so that moving left off the grid
    // ends the loop instead of underflowing.
    while i < rows && j > 0 {
        let Ok(value) = grid.get(i, j - 1) else {
            break;
        };
        match value.cmp(&target) {
            Ordering::Equal => return SearchResult::Found { row: i, col: j - 1 },
            Ordering::Greater => j -= 1,
            Ordering::Less => i += 1,
        }
    }

    SearchResult::NotFound
}

/// Row-wise binary search.
///
/// Runs [`binary_search`] on each row in increasing row order and returns the
/// first hit, so when `target` appears in several rows the lowest row index
/// is reported.
///
/// # Examples
///
/// ```
/// use sortmat::prelude::*;
///
/// let matrix = Matrix::from_rows(&[vec![1, 2, 3], vec![2, 3, 4]]);
///
/// // 3 is in both rows: row 0 wins.
/// assert_eq!(contains_bs(&matrix, 3), SearchResult::Found { row: 0, col: 2 });
/// assert_eq!(contains_bs(&matrix, 5), SearchResult::NotFound);
/// ```
pub fn contains_bs<G: Grid + ?Sized>(grid: &G, target: Value) -> SearchResult {
    log::debug!(
        "Row-wise binary search for {target} in a {}x{} grid",
        grid.rows(),
        grid.cols()
    );

    for i in 0..grid.rows() {
        let Ok(row) = grid.row(i) else {
            break;
        };
        if let Some(col) = binary_search(row, target) {
            return SearchResult::Found { row: i, col };
        }
    }

    SearchResult::NotFound
}

/// Quadrant search restricted to the half-open window `[ai, bi) × [aj, bj)`.
///
/// The window is validated on entry and again by every recursive call; an
/// invalid window fails with [`InvalidWindow`] before the grid is read. Pass
/// `(0, 0, rows, cols)` to search the whole grid.
///
/// For a window with more than one cell, the top-left corner is its minimum
/// and the bottom-right corner its maximum. If `target` lies outside that
/// range the window is discarded; otherwise it is split at its midpoints
/// and the top-left, top-right, bottom-left and bottom-right quadrants are
/// searched in that order, stopping at the first match.
///
/// Recursion depth is O(log max(rows, cols)).
///
/// # Examples
///
/// ```
/// use sortmat::prelude::*;
/// use sortmat::error::WindowBound;
///
/// let matrix = Matrix::from_fn(4, 4, |i, j| (i * 4 + j) as Value);
///
/// assert_eq!(
///     contains_experimental(&matrix, 0, 0, 4, 4, 9),
///     Ok(SearchResult::Found { row: 2, col: 1 })
/// );
/// // 9 is outside the top half.
/// assert_eq!(contains_experimental(&matrix, 0, 0, 2, 4, 9), Ok(SearchResult::NotFound));
///
/// let err = contains_experimental(&matrix, -1, 0, 4, 4, 9).unwrap_err();
/// assert_eq!(err.bound(), Some(WindowBound::Ai));
/// ```
pub fn contains_experimental<G: Grid + ?Sized>(
    grid: &G,
    ai: isize,
    aj: isize,
    bi: isize,
    bj: isize,
    target: Value,
) -> Result<SearchResult, InvalidWindow> {
    contains_in_window(grid, Window::new(ai, aj, bi, bj), target)
}

/// Same as [`contains_experimental`], taking the bounds as a [`Window`].
pub fn contains_in_window<G: Grid + ?Sized>(
    grid: &G,
    window: Window,
    target: Value,
) -> Result<SearchResult, InvalidWindow> {
    log::debug!("Quadrant search for {target} in window {window}");
    search_window(grid, window, target)
}

fn search_window<G: Grid + ?Sized>(
    grid: &G,
    window: Window,
    target: Value,
) -> Result<SearchResult, InvalidWindow> {
    window.validate(grid.rows(), grid.cols())?;

    let (height, width) = (window.height(), window.width());
    if height == 0 || width == 0 {
        return Ok(SearchResult::NotFound);
    }

    // Bounds are validated, hence non-negative and inside the grid.
    let (ai, aj) = (window.ai as usize, window.aj as usize);
    let (bi, bj) = (window.bi as usize, window.bj as usize);

    if height == 1 && width == 1 {
        return Ok(match grid.get(ai, aj) {
            Ok(value) if value == target => SearchResult::Found { row: ai, col: aj },
            _ => SearchResult::NotFound,
        });
    }

    let (Ok(min), Ok(max)) = (grid.get(ai, aj), grid.get(bi - 1, bj - 1)) else {
        return Ok(SearchResult::NotFound);
    };
    if target < min || max < target {
        log::trace!("Pruned window {window}: {target} outside [{min}, {max}]");
        return Ok(SearchResult::NotFound);
    }

    for quadrant in window.quadrants() {
        log::trace!("Descending into {quadrant}");
        let result = search_window(grid, quadrant, target)?;
        if result.is_found() {
            return Ok(result);
        }
    }

    Ok(SearchResult::NotFound)
}

/// The available search strategies.
///
/// ```
/// use sortmat::prelude::*;
///
/// let matrix = Matrix::from_fn(10, 10, |i, j| (i * 10 + j + 1) as Value);
///
/// for strategy in Strategy::ALL {
///     assert_eq!(strategy.search(&matrix, 57), Ok(SearchResult::Found { row: 5, col: 6 }));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`contains_linear`].
    Linear,
    /// [`contains_bs`].
    BinarySearch,
    /// [`contains_experimental`] over the whole grid.
    Quadrant,
}

impl Strategy {
    /// Every strategy, in the order the harness runs them.
    pub const ALL: [Strategy; 3] = [Strategy::Linear, Strategy::BinarySearch, Strategy::Quadrant];

    /// A short, stable identifier.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Linear => "linear",
            Strategy::BinarySearch => "binary-search",
            Strategy::Quadrant => "quadrant",
        }
    }

    /// Searches the whole of `grid` for `target`.
    ///
    /// The quadrant strategy searches [`Window::full`], which is always a
    /// valid window, so in practice this never returns an error.
    pub fn search<G: Grid + ?Sized>(
        &self,
        grid: &G,
        target: Value,
    ) -> Result<SearchResult, InvalidWindow> {
        match self {
            Strategy::Linear => Ok(contains_linear(grid, target)),
            Strategy::BinarySearch => Ok(contains_bs(grid, target)),
            Strategy::Quadrant => contains_in_window(grid, Window::full(grid), target),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
