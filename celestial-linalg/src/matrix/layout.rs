//! Column-major element addressing.
//!
//! Every matrix stores its N² scalars column after column, so that the buffer returned
//! by [`Matrix::as_slice`](super::Matrix::as_slice) can be handed straight to a graphics
//! API expecting column-major data. Element `(row, col)` lives at `col * N + row`:
//!
//! ```text
//!          col 0  col 1  col 2  col 3
//! row 0  [   0      4      8     12 ]
//! row 1  [   1      5      9     13 ]
//! row 2  [   2      6     10     14 ]
//! row 3  [   3      7     11     15 ]
//! ```
//!
//! All element reads and writes in the crate go through [`column_major_index`].

use crate::errors::{LinalgError, LinalgResult};

/// Offset of element `(row, col)` in the column-major buffer of an `N`×`N` matrix.
///
/// Performs no bounds checking: an out-of-range `row` can still map to a valid offset
/// in another column.
///
/// ```
/// use celestial_linalg::matrix::column_major_index;
///
/// assert_eq!(column_major_index::<4>(0, 3), 12);
/// assert_eq!(column_major_index::<3>(2, 1), 5);
/// ```
#[inline(always)]
pub const fn column_major_index<const N: usize>(row: usize, col: usize) -> usize {
    col * N + row
}

/// Bounds-checked [`column_major_index`]; panics on an out-of-range row or column.
#[inline]
#[track_caller]
pub(crate) fn checked_index<const N: usize>(row: usize, col: usize) -> usize {
    if row >= N || col >= N {
        panic!("Matrix index out of bounds: ({}, {}) for {}x{}", row, col, N, N);
    }
    column_major_index::<N>(row, col)
}

/// Fallible [`column_major_index`] for the `try_*` accessors.
#[inline]
pub(crate) fn try_index<const N: usize>(
    operation: &str,
    row: usize,
    col: usize,
) -> LinalgResult<usize> {
    if row >= N {
        return Err(LinalgError::index_out_of_bounds(operation, row, N));
    }
    if col >= N {
        return Err(LinalgError::index_out_of_bounds(operation, col, N));
    }
    Ok(column_major_index::<N>(row, col))
}

/// Panics unless `index < N`; used for whole-row and whole-column access.
#[inline]
#[track_caller]
pub(crate) fn check_line<const N: usize>(kind: &str, index: usize) {
    if index >= N {
        panic!("Matrix {} index out of bounds: {} for {}x{}", kind, index, N, N);
    }
}
