//! Shape mask parsing.
//!
//! A shape mask is a 9x9 boolean overlay marking which cells participate in
//! the extra regions of the S-Doku variant. Masks are parsed once from 9
//! text lines and never mutated afterwards.

use crate::{error::ShapeError, grid};

/// The 9 lines defining the standard S overlay.
///
/// Spaces are outside the shape; any other character is inside.
pub const S_SHAPE_LINES: [&str; 9] = [
    "  XXXXX  ",
    " X     XX",
    "X        ",
    "X        ",
    " XXXXXXX ",
    "        X",
    "        X",
    "XX     X ",
    "  XXXXX  ",
];

/// An immutable 9x9 boolean overlay on the board.
///
/// `true` marks a cell as inside the shape. The region builder filters board
/// rows and columns through the mask to assemble the shape's extra regions.
///
/// # Examples
///
/// ```
/// use esdoku_core::ShapeMask;
///
/// let mask = ShapeMask::from_lines(&[
///     "XXXXXXXXX", "         ", "         ", "         ", "         ",
///     "         ", "         ", "         ", "         ",
/// ])?;
/// assert!(mask.contains(0, 0));
/// assert!(!mask.contains(1, 0));
/// # Ok::<(), esdoku_core::ShapeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMask {
    inside: [[bool; 9]; 9],
}

impl ShapeMask {
    /// Parses a mask from 9 lines of 9 characters.
    ///
    /// A space maps to "outside" (`false`); any other character maps to
    /// "inside" (`true`). Line length is counted in characters, not bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::BadLineCount`] if `lines` does not contain
    /// exactly 9 lines, or [`ShapeError::BadLineLength`] if any line does
    /// not contain exactly 9 characters.
    pub fn from_lines(lines: &[&str]) -> Result<Self, ShapeError> {
        if lines.len() != 9 {
            return Err(ShapeError::BadLineCount { count: lines.len() });
        }
        let mut inside = [[false; 9]; 9];
        for (r, line) in lines.iter().enumerate() {
            let mut count = 0;
            for (c, ch) in line.chars().enumerate() {
                if c < 9 {
                    inside[r][c] = ch != ' ';
                }
                count += 1;
            }
            if count != 9 {
                return Err(ShapeError::BadLineLength { line: r, len: count });
            }
        }
        Ok(Self { inside })
    }

    /// Returns the standard S overlay built from [`S_SHAPE_LINES`].
    #[must_use]
    pub fn s_shape() -> Self {
        match Self::from_lines(&S_SHAPE_LINES) {
            Ok(mask) => mask,
            // S_SHAPE_LINES is a well-formed constant
            Err(_) => unreachable!(),
        }
    }

    /// Returns `true` if the cell at `(row, col)` is inside the shape.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub fn contains(&self, row: u8, col: u8) -> bool {
        self.inside[usize::from(row)][usize::from(col)]
    }

    /// Returns one row of the mask.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in the range 0-8.
    #[must_use]
    pub fn row(&self, row: u8) -> [bool; 9] {
        self.inside[usize::from(row)]
    }

    /// Returns the mask with its row and column axes swapped.
    ///
    /// Column specs are resolved against the transposed mask, so that
    /// "column `i`" means the `i`-th column of the original overlay.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            inside: grid::transpose(&self.inside),
        }
    }

    /// Returns the number of cells inside the shape.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.inside.iter().flatten().filter(|&&b| b).count()
    }
}
