//! Flat/2D board conversions.
//!
//! The solver exchanges 81-value flat arrays with its callers; regions and
//! masks are naturally two-dimensional. This module provides the conversions
//! between the two views: row-major reshaping, transposition, and 3x3 box
//! extraction. All functions are generic over the element type, so the same
//! operations apply to boards of [`Cell`] indices, digit values, and mask
//! booleans alike.

use std::array;

use crate::{cell::Cell, error::ShapeError};

/// Partitions a flat sequence of 81 values into 9 rows of 9.
///
/// Rows are consecutive, non-overlapping groups of 9 values in input order.
///
/// # Errors
///
/// Returns [`ShapeError::BadLength`] if `flat` does not contain exactly
/// 81 values.
///
/// # Examples
///
/// ```
/// use esdoku_core::grid;
///
/// let flat: Vec<u8> = (0..81).collect();
/// let rows = grid::reshape(&flat)?;
/// assert_eq!(rows[0][0], 0);
/// assert_eq!(rows[4][4], 40);
/// assert_eq!(rows[8][8], 80);
/// # Ok::<(), esdoku_core::ShapeError>(())
/// ```
pub fn reshape<T>(flat: &[T]) -> Result<[[T; 9]; 9], ShapeError>
where
    T: Copy,
{
    if flat.len() != 81 {
        return Err(ShapeError::BadLength { len: flat.len() });
    }
    Ok(array::from_fn(|r| array::from_fn(|c| flat[r * 9 + c])))
}

/// Flattens 9 rows of 9 back into a single 81-value array, in row-major
/// order.
///
/// This is the inverse of [`reshape`].
#[must_use]
pub fn flatten<T>(rows: &[[T; 9]; 9]) -> [T; 81]
where
    T: Copy,
{
    array::from_fn(|i| rows[i / 9][i % 9])
}

/// Swaps the row and column axes of a 9x9 matrix.
///
/// Transposition is an involution: `transpose(&transpose(&m)) == m`.
///
/// # Examples
///
/// ```
/// use esdoku_core::grid;
///
/// let flat: Vec<u8> = (0..81).collect();
/// let rows = grid::reshape(&flat)?;
/// let cols = grid::transpose(&rows);
/// assert_eq!(cols[0], [0, 9, 18, 27, 36, 45, 54, 63, 72]);
/// assert_eq!(grid::transpose(&cols), rows);
/// # Ok::<(), esdoku_core::ShapeError>(())
/// ```
#[must_use]
pub fn transpose<T>(rows: &[[T; 9]; 9]) -> [[T; 9]; 9]
where
    T: Copy,
{
    array::from_fn(|r| array::from_fn(|c| rows[c][r]))
}

/// Extracts the 3x3 box with the given top-left coordinate, in row-major
/// order within the block.
///
/// # Panics
///
/// Panics unless both `top_row` and `top_col` are 0, 3 or 6. Any other value
/// is a caller error, not a solver failure.
///
/// # Examples
///
/// ```
/// use esdoku_core::grid;
///
/// let flat: Vec<u8> = (0..81).collect();
/// let rows = grid::reshape(&flat)?;
/// assert_eq!(grid::box_at(&rows, 0, 0), [0, 1, 2, 9, 10, 11, 18, 19, 20]);
/// # Ok::<(), esdoku_core::ShapeError>(())
/// ```
#[must_use]
pub fn box_at<T>(rows: &[[T; 9]; 9], top_row: u8, top_col: u8) -> [T; 9]
where
    T: Copy,
{
    assert!(
        matches!(top_row, 0 | 3 | 6) && matches!(top_col, 0 | 3 | 6),
        "Box coordinates must be 0, 3 or 6"
    );
    let (top_row, top_col) = (usize::from(top_row), usize::from(top_col));
    array::from_fn(|i| rows[top_row + i / 3][top_col + i % 3])
}

/// Returns all 9 boxes, iterating `top_row` then `top_col` in ascending
/// order.
///
/// This matches the classic box enumeration from the top-left box to the
/// bottom-right one, row-major over the 3x3 grid of boxes.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn all_boxes<T>(rows: &[[T; 9]; 9]) -> [[T; 9]; 9]
where
    T: Copy,
{
    array::from_fn(|i| box_at(rows, (i / 3 * 3) as u8, (i % 3 * 3) as u8))
}

/// Returns the canonical 9x9 board of cell indices.
///
/// Row `r` holds the cells `r * 9 .. r * 9 + 9`. This is the board the
/// region builder filters with a shape mask.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn index_grid() -> [[Cell; 9]; 9] {
    array::from_fn(|r| array::from_fn(|c| Cell::from_row_col(r as u8, c as u8)))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_reshape_rejects_bad_length() {
        let short = [0u8; 80];
        assert_eq!(reshape(&short), Err(ShapeError::BadLength { len: 80 }));
        let long = [0u8; 82];
        assert_eq!(reshape(&long), Err(ShapeError::BadLength { len: 82 }));
        assert_eq!(reshape::<u8>(&[]), Err(ShapeError::BadLength { len: 0 }));
    }

    #[test]
    fn test_reshape_row_major() {
        let flat: Vec<u8> = (0..81).collect();
        let rows = reshape(&flat).unwrap();
        assert_eq!(rows[0], [0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(rows[8], [72, 73, 74, 75, 76, 77, 78, 79, 80]);
    }

    #[test]
    fn test_transpose_swaps_axes() {
        let flat: Vec<u8> = (0..81).collect();
        let rows = reshape(&flat).unwrap();
        let cols = transpose(&rows);
        for r in 0..9 {
            for c in 0..9 {
                assert_eq!(cols[r][c], rows[c][r]);
            }
        }
    }

    #[test]
    fn test_box_at_top_left() {
        let flat: Vec<u8> = (0..81).collect();
        let rows = reshape(&flat).unwrap();
        assert_eq!(box_at(&rows, 0, 0), [0, 1, 2, 9, 10, 11, 18, 19, 20]);
        assert_eq!(box_at(&rows, 6, 6), [60, 61, 62, 69, 70, 71, 78, 79, 80]);
    }

    #[test]
    #[should_panic(expected = "Box coordinates must be 0, 3 or 6")]
    fn test_box_at_rejects_bad_coordinate() {
        let rows = index_grid();
        let _ = box_at(&rows, 1, 0);
    }

    #[test]
    fn test_all_boxes_enumeration_order() {
        let flat: Vec<u8> = (0..81).collect();
        let rows = reshape(&flat).unwrap();
        let boxes = all_boxes(&rows);
        // top-left box first, then left-to-right, top-to-bottom
        assert_eq!(boxes[0], box_at(&rows, 0, 0));
        assert_eq!(boxes[1], box_at(&rows, 0, 3));
        assert_eq!(boxes[2], box_at(&rows, 0, 6));
        assert_eq!(boxes[3], box_at(&rows, 3, 0));
        assert_eq!(boxes[8], box_at(&rows, 6, 6));

        // the 9 boxes partition all 81 indices exactly once
        let mut seen: Vec<u8> = boxes.iter().flatten().copied().collect();
        seen.sort_unstable();
        let expected: Vec<u8> = (0..81).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_index_grid() {
        let rows = index_grid();
        assert_eq!(rows[0][0], Cell::new(0));
        assert_eq!(rows[4][4], Cell::new(40));
        assert_eq!(rows[8][8], Cell::new(80));
    }

    proptest! {
        #[test]
        fn prop_reshape_transpose_round_trip(flat in prop::collection::vec(any::<u8>(), 81)) {
            let rows = reshape(&flat).unwrap();
            prop_assert_eq!(transpose(&transpose(&rows)), rows);
        }

        #[test]
        fn prop_reshape_flatten_round_trip(flat in prop::collection::vec(any::<u8>(), 81)) {
            let rows = reshape(&flat).unwrap();
            prop_assert_eq!(flatten(&rows).to_vec(), flat);
        }

        #[test]
        fn prop_reshape_rejects_non_81(len in 0usize..200) {
            prop_assume!(len != 81);
            let flat = vec![0u8; len];
            prop_assert_eq!(reshape(&flat), Err(ShapeError::BadLength { len }));
        }
    }
}
