//! Board cell indices.

use std::fmt::{self, Display};

/// A cell index on the 9x9 board, in the range 0-80.
///
/// Cells are numbered in row-major order: `row = index / 9`,
/// `col = index % 9`. This is the index space that hint arrays and
/// solutions use, and the index space in which regions are expressed.
///
/// # Examples
///
/// ```
/// use esdoku_core::Cell;
///
/// let cell = Cell::new(40);
/// assert_eq!(cell.row(), 4);
/// assert_eq!(cell.col(), 4);
///
/// let same = Cell::from_row_col(4, 4);
/// assert_eq!(cell, same);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    index: u8,
}

impl Cell {
    /// Creates a new cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 81, "Cell index must be 0-80");
        Self { index }
    }

    /// Creates a cell index from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "Row and column must be 0-8");
        Self {
            index: row * 9 + col,
        }
    }

    /// Returns the flat index (0-80).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.index / 9
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.index % 9
    }

    /// Returns the top row of the 3x3 box containing this cell (0, 3 or 6).
    #[must_use]
    pub const fn box_row(self) -> u8 {
        self.row() / 3 * 3
    }

    /// Returns the leftmost column of the 3x3 box containing this cell
    /// (0, 3 or 6).
    #[must_use]
    pub const fn box_col(self) -> u8 {
        self.col() / 3 * 3
    }

    /// Returns an iterator over all 81 cells in index order.
    ///
    /// # Examples
    ///
    /// ```
    /// use esdoku_core::Cell;
    ///
    /// let cells: Vec<_> = Cell::all().collect();
    /// assert_eq!(cells.len(), 81);
    /// assert_eq!(cells[0].index(), 0);
    /// assert_eq!(cells[80].index(), 80);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Cell::new)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row(), self.col())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_round_trip() {
        for cell in Cell::all() {
            assert_eq!(Cell::from_row_col(cell.row(), cell.col()), cell);
        }
    }

    #[test]
    fn test_coordinates() {
        let cell = Cell::new(0);
        assert_eq!((cell.row(), cell.col()), (0, 0));

        let cell = Cell::new(80);
        assert_eq!((cell.row(), cell.col()), (8, 8));

        let cell = Cell::new(40);
        assert_eq!((cell.row(), cell.col()), (4, 4));
    }

    #[test]
    fn test_box_coordinates() {
        assert_eq!(Cell::from_row_col(0, 0).box_row(), 0);
        assert_eq!(Cell::from_row_col(2, 2).box_row(), 0);
        assert_eq!(Cell::from_row_col(4, 4).box_row(), 3);
        assert_eq!(Cell::from_row_col(4, 4).box_col(), 3);
        assert_eq!(Cell::from_row_col(8, 6).box_row(), 6);
        assert_eq!(Cell::from_row_col(8, 6).box_col(), 6);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Cell::new(0)), "r0c0");
        assert_eq!(format!("{}", Cell::new(80)), "r8c8");
    }

    #[test]
    #[should_panic(expected = "Cell index must be 0-80")]
    fn test_rejects_out_of_range() {
        let _ = Cell::new(81);
    }

    #[test]
    #[should_panic(expected = "Row and column must be 0-8")]
    fn test_rejects_bad_row() {
        let _ = Cell::from_row_col(9, 0);
    }
}
