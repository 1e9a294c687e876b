//! Region derivation.
//!
//! A region ("ennead") is an ordered group of exactly 9 cells that must
//! collectively contain each digit 1-9 exactly once. Classic puzzles use the
//! 27 fixed geometric regions (rows, columns, 3x3 boxes); the S-Doku variant
//! adds 6 more, assembled by filtering board rows and columns through a
//! [`ShapeMask`].
//!
//! # Examples
//!
//! ```
//! use esdoku_core::region;
//!
//! let regions = region::classic_regions();
//! assert_eq!(regions.len(), 27);
//! ```

use std::fmt::{self, Display};

use crate::{
    cell::Cell,
    error::RegionError,
    grid::{self, index_grid},
    mask::ShapeMask,
};

/// Names which rows or columns of the mask contribute to one shape region.
///
/// The two variants select along different axes: a `Rows` spec filters the
/// named board rows through the corresponding mask rows, a `Cols` spec does
/// the same after transposing both the mask and the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSpec {
    /// Row indices (0-8) contributing to the region, in spec order.
    Rows([u8; 3]),
    /// Column indices (0-8) contributing to the region, in spec order.
    Cols([u8; 3]),
}

impl GroupSpec {
    /// The six predefined specs of the S overlay: three row bands then
    /// three column bands.
    pub const S_DEFAULT: [Self; 6] = [
        Self::Rows([0, 1, 2]),
        Self::Rows([3, 4, 5]),
        Self::Rows([6, 7, 8]),
        Self::Cols([0, 1, 2]),
        Self::Cols([3, 4, 5]),
        Self::Cols([6, 7, 8]),
    ];
}

impl Display for GroupSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, [a, b, c]) = match self {
            Self::Rows(indices) => ("rows", *indices),
            Self::Cols(indices) => ("cols", *indices),
        };
        write!(f, "{kind} {{{a}, {b}, {c}}}")
    }
}

/// Identifies a region for display and debugging.
///
/// Labels have no effect on the distinctness constraint; they only name
/// regions in debug output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionLabel {
    /// A row, identified by its index (0-8).
    Row(u8),
    /// A column, identified by its index (0-8).
    Col(u8),
    /// A 3x3 box, identified by its index (0-8, left to right, top to
    /// bottom).
    Box(u8),
    /// A shape region, identified by its spec's position in the spec list.
    Shape(u8),
}

impl Display for RegionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(i) => write!(f, "row {i}"),
            Self::Col(i) => write!(f, "col {i}"),
            Self::Box(i) => write!(f, "box {i}"),
            Self::Shape(i) => write!(f, "shape {i}"),
        }
    }
}

/// An ordered group of exactly 9 cells under a distinctness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ennead {
    label: RegionLabel,
    cells: [Cell; 9],
}

impl Ennead {
    /// Creates a region from a label and its 9 cells.
    #[must_use]
    pub const fn new(label: RegionLabel, cells: [Cell; 9]) -> Self {
        Self { label, cells }
    }

    /// Returns the region's label.
    #[must_use]
    pub const fn label(self) -> RegionLabel {
        self.label
    }

    /// Returns the region's cells, in derivation order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

/// Filters board cells positionwise wherever the mask is true, preserving
/// order.
///
/// The result length is data-dependent (0-9).
///
/// # Examples
///
/// ```
/// use esdoku_core::{Cell, region};
///
/// let mask_row = [false, true, false, true, false, false, false, false, false];
/// let board_row: [Cell; 9] = std::array::from_fn(|i| Cell::new(i as u8));
/// let selected = region::select_enabled(&mask_row, &board_row);
/// assert_eq!(selected, vec![Cell::new(1), Cell::new(3)]);
/// ```
#[must_use]
pub fn select_enabled(mask_row: &[bool; 9], board_row: &[Cell; 9]) -> Vec<Cell> {
    mask_row
        .iter()
        .zip(board_row)
        .filter_map(|(&inside, &cell)| inside.then_some(cell))
        .collect()
}

/// Assembles the region a group spec selects from the masked board.
///
/// For a [`GroupSpec::Rows`] spec, the named rows are visited in spec order
/// and each contributes its enabled cells left to right. A
/// [`GroupSpec::Cols`] spec works the same way on the transposed mask and
/// board. The concatenation order has no semantic effect on the distinctness
/// constraint, but it is deterministic and reproducible.
///
/// # Errors
///
/// Returns [`RegionError::BadEnneadSize`] if the spec selects a total other
/// than exactly 9 cells. A malformed mask is a configuration bug; the region
/// is never truncated or padded.
///
/// # Panics
///
/// Panics if the spec names a row or column index outside 0-8.
pub fn ennead_for_spec(
    mask: &ShapeMask,
    spec: GroupSpec,
    board: &[[Cell; 9]; 9],
) -> Result<[Cell; 9], RegionError> {
    let (mask, board, indices) = match spec {
        GroupSpec::Rows(indices) => (*mask, *board, indices),
        GroupSpec::Cols(indices) => (mask.transpose(), grid::transpose(board), indices),
    };

    let mut cells = Vec::with_capacity(9);
    for index in indices {
        cells.extend(select_enabled(&mask.row(index), &board[usize::from(index)]));
    }

    let size = cells.len();
    cells
        .try_into()
        .map_err(|_| RegionError::BadEnneadSize { spec, size })
}

/// Derives one region per spec, in spec-list order.
///
/// Each region is labelled [`RegionLabel::Shape`] with its spec's position.
/// Derivation is deterministic: the same mask, specs, and board always yield
/// identical ordered output.
///
/// # Errors
///
/// Returns [`RegionError::BadEnneadSize`] if any spec selects a total other
/// than exactly 9 cells.
pub fn all_enneads(
    mask: &ShapeMask,
    specs: &[GroupSpec],
    board: &[[Cell; 9]; 9],
) -> Result<Vec<Ennead>, RegionError> {
    specs
        .iter()
        .enumerate()
        .map(|(i, &spec)| {
            let cells = ennead_for_spec(mask, spec, board)?;
            #[expect(clippy::cast_possible_truncation)]
            let label = RegionLabel::Shape(i as u8);
            Ok(Ennead::new(label, cells))
        })
        .collect()
}

/// Returns the 27 fixed geometric regions of a classic puzzle.
///
/// Order is rows 0-8, columns 0-8, then boxes 0-8 with boxes enumerated
/// from the top-left, row-major over the 3x3 grid of boxes.
#[must_use]
pub fn classic_regions() -> Vec<Ennead> {
    let rows = index_grid();
    let cols = grid::transpose(&rows);
    let boxes = grid::all_boxes(&rows);

    let mut regions = Vec::with_capacity(27);
    for i in 0..9u8 {
        regions.push(Ennead::new(RegionLabel::Row(i), rows[usize::from(i)]));
    }
    for i in 0..9u8 {
        regions.push(Ennead::new(RegionLabel::Col(i), cols[usize::from(i)]));
    }
    for i in 0..9u8 {
        regions.push(Ennead::new(RegionLabel::Box(i), boxes[usize::from(i)]));
    }
    regions
}

/// Returns the full region list of a shaped puzzle: the 27 classic regions
/// followed by one shape region per spec.
///
/// # Errors
///
/// Returns [`RegionError::BadEnneadSize`] if any spec selects a total other
/// than exactly 9 cells.
pub fn shaped_regions(mask: &ShapeMask, specs: &[GroupSpec]) -> Result<Vec<Ennead>, RegionError> {
    let mut regions = classic_regions();
    regions.extend(all_enneads(mask, specs, &index_grid())?);
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(indices: [u8; 9]) -> [Cell; 9] {
        indices.map(Cell::new)
    }

    #[test]
    fn test_select_enabled_preserves_order() {
        let board = index_grid();
        let mask_row = [true, false, true, false, true, false, true, false, true];
        let selected = select_enabled(&mask_row, &board[0]);
        assert_eq!(selected, vec![
            Cell::new(0),
            Cell::new(2),
            Cell::new(4),
            Cell::new(6),
            Cell::new(8)
        ]);
    }

    #[test]
    fn test_select_enabled_empty_mask_row() {
        let board = index_grid();
        assert_eq!(select_enabled(&[false; 9], &board[0]), vec![]);
        assert_eq!(select_enabled(&[true; 9], &board[0]).len(), 9);
    }

    #[test]
    fn test_ennead_for_first_row_band() {
        // worked example from the S overlay: rows {0,1,2} select
        // 5 + 3 + 1 cells in spec order, left to right within each row
        let mask = ShapeMask::s_shape();
        let board = index_grid();
        let ennead = ennead_for_spec(&mask, GroupSpec::Rows([0, 1, 2]), &board).unwrap();
        assert_eq!(ennead, cells([2, 3, 4, 5, 6, 10, 16, 17, 18]));
    }

    #[test]
    fn test_cols_spec_uses_transposed_axes() {
        let mask = ShapeMask::s_shape();
        let board = index_grid();
        let ennead = ennead_for_spec(&mask, GroupSpec::Cols([0, 1, 2]), &board).unwrap();
        // column 0 is inside at rows 2, 3, 7; column 1 at rows 1, 4, 7;
        // column 2 at rows 0, 4, 8
        assert_eq!(ennead, cells([18, 27, 63, 10, 37, 64, 2, 38, 74]));
    }

    #[test]
    fn test_malformed_mask_is_a_configuration_error() {
        // a mask with a single marked cell cannot yield a 9-cell region
        let mut lines = ["         "; 9];
        lines[0] = "X        ";
        let mask = ShapeMask::from_lines(&lines).unwrap();
        let board = index_grid();

        let spec = GroupSpec::Rows([0, 1, 2]);
        let err = ennead_for_spec(&mask, spec, &board).unwrap_err();
        assert_eq!(err, RegionError::BadEnneadSize { spec, size: 1 });
    }

    #[test]
    fn test_all_enneads_default_specs() {
        let mask = ShapeMask::s_shape();
        let board = index_grid();
        let enneads = all_enneads(&mask, &GroupSpec::S_DEFAULT, &board).unwrap();
        assert_eq!(enneads.len(), 6);
        for (i, ennead) in (0..).zip(&enneads) {
            assert_eq!(ennead.label(), RegionLabel::Shape(i));
        }
        // together the six regions cover every masked cell twice
        // (once via a row band, once via a column band)
        let mut counts = [0usize; 81];
        for ennead in &enneads {
            for cell in ennead.cells() {
                counts[usize::from(cell.index())] += 1;
            }
        }
        for (i, count) in counts.iter().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let cell = Cell::new(i as u8);
            let expected = if mask.contains(cell.row(), cell.col()) {
                2
            } else {
                0
            };
            assert_eq!(*count, expected, "cell {cell}");
        }
    }

    #[test]
    fn test_all_enneads_deterministic() {
        let mask = ShapeMask::s_shape();
        let board = index_grid();
        let first = all_enneads(&mask, &GroupSpec::S_DEFAULT, &board).unwrap();
        let second = all_enneads(&mask, &GroupSpec::S_DEFAULT, &board).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_classic_regions_partition() {
        let regions = classic_regions();
        assert_eq!(regions.len(), 27);
        assert_eq!(regions[0].label(), RegionLabel::Row(0));
        assert_eq!(regions[9].label(), RegionLabel::Col(0));
        assert_eq!(regions[18].label(), RegionLabel::Box(0));

        // first box is the classic top-left enumeration
        assert_eq!(
            regions[18].cells(),
            &cells([0, 1, 2, 9, 10, 11, 18, 19, 20])
        );

        // rows, columns, and boxes each partition the 81 cells exactly once
        for chunk in regions.chunks(9) {
            let mut seen = [false; 81];
            for cell in chunk.iter().flat_map(Ennead::cells) {
                assert!(!seen[usize::from(cell.index())]);
                seen[usize::from(cell.index())] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_shaped_regions_count() {
        let mask = ShapeMask::s_shape();
        let regions = shaped_regions(&mask, &GroupSpec::S_DEFAULT).unwrap();
        assert_eq!(regions.len(), 33);
        assert_eq!(regions[27].label(), RegionLabel::Shape(0));
        assert_eq!(regions[32].label(), RegionLabel::Shape(5));
    }

    #[test]
    fn test_group_spec_display() {
        assert_eq!(GroupSpec::Rows([0, 1, 2]).to_string(), "rows {0, 1, 2}");
        assert_eq!(GroupSpec::Cols([6, 7, 8]).to_string(), "cols {6, 7, 8}");
    }
}
