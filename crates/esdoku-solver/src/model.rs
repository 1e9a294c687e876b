//! Constraint model construction.
//!
//! A [`Model`] is the solver's view of one puzzle: 81 variables with
//! candidate-set domains, plus the list of regions whose members must be
//! pairwise distinct. Hints are applied once at build time by pinning the
//! hinted variables to singleton domains; the 1-9 domain constraint is
//! embedded by construction, since a [`DigitSet`] cannot hold anything else.

use esdoku_core::{
    Cell, Digit, DigitSet, Ennead, GroupSpec, RegionError, ShapeMask,
    region::{classic_regions, shaped_regions},
};

use crate::error::SolveError;

/// The problem variant being solved.
///
/// Both variants constrain the 27 fixed geometric regions; the shaped
/// variant adds one extra region per group spec, derived from the mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    /// Classic Sudoku: rows, columns, and 3x3 boxes.
    Classic,
    /// S-Doku: the classic regions plus shape-derived extras.
    Shaped {
        /// The boolean overlay marking cells inside the shape.
        mask: ShapeMask,
        /// The group specs naming which mask rows/columns feed each extra
        /// region.
        specs: Vec<GroupSpec>,
    },
}

impl Variant {
    /// Returns the S-Doku variant with the standard S overlay and its six
    /// predefined group specs.
    ///
    /// # Examples
    ///
    /// ```
    /// use esdoku_solver::Variant;
    ///
    /// let variant = Variant::s_doku();
    /// assert_ne!(variant, Variant::Classic);
    /// ```
    #[must_use]
    pub fn s_doku() -> Self {
        Self::Shaped {
            mask: ShapeMask::s_shape(),
            specs: GroupSpec::S_DEFAULT.to_vec(),
        }
    }

    /// Derives this variant's full region list.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError`] if a shaped variant's mask and specs derive
    /// a region that does not total exactly 9 cells.
    pub fn regions(&self) -> Result<Vec<Ennead>, RegionError> {
        match self {
            Self::Classic => Ok(classic_regions()),
            Self::Shaped { mask, specs } => shaped_regions(mask, specs),
        }
    }
}

/// A validated 81-value hint array.
///
/// `0` denotes an unknown cell; 1-9 is a fixed given. Hints are read once
/// at solve start and never mutated.
///
/// # Examples
///
/// ```
/// use esdoku_core::{Cell, Digit};
/// use esdoku_solver::Hints;
///
/// let mut values = [0u8; 81];
/// values[40] = 5;
/// let hints = Hints::from_slice(&values)?;
/// assert_eq!(hints.get(Cell::new(40)), Some(Digit::D5));
/// assert_eq!(hints.get(Cell::new(0)), None);
/// # Ok::<(), esdoku_solver::SolveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hints {
    values: [u8; 81],
}

impl Hints {
    /// Validates a flat hint slice.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::BadHintLength`] if the slice does not contain
    /// exactly 81 values, or [`SolveError::BadHintValue`] for a value
    /// outside 0-9.
    pub fn from_slice(hints: &[u8]) -> Result<Self, SolveError> {
        let values: [u8; 81] = hints
            .try_into()
            .map_err(|_| SolveError::BadHintLength { len: hints.len() })?;
        for cell in Cell::all() {
            let value = values[usize::from(cell.index())];
            if value > 9 {
                return Err(SolveError::BadHintValue { cell, value });
            }
        }
        Ok(Self { values })
    }

    /// Returns the hinted digit at a cell, or `None` for an unknown cell.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Digit> {
        Digit::try_from_value(self.values[usize::from(cell.index())])
    }

    /// Returns the raw 81-value array.
    #[must_use]
    pub const fn as_array(&self) -> &[u8; 81] {
        &self.values
    }
}

/// One puzzle's variables and distinctness groups, ready for search.
#[derive(Debug, Clone)]
pub struct Model {
    domains: [DigitSet; 81],
    regions: Vec<Ennead>,
}

impl Model {
    /// Builds the model for a hint array under a variant's regions.
    ///
    /// Every variable starts with the full 1-9 domain; hinted variables are
    /// pinned to the singleton containing their given. A contradiction
    /// between hints (two identical givens in one region) is not detected
    /// here; the engine's root propagation proves such puzzles
    /// unsatisfiable and the search yields zero solutions.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Region`] if the variant's regions cannot be
    /// derived.
    pub fn build(hints: &Hints, variant: &Variant) -> Result<Self, SolveError> {
        let regions = variant.regions()?;
        let mut domains = [DigitSet::FULL; 81];
        for cell in Cell::all() {
            if let Some(digit) = hints.get(cell) {
                domains[usize::from(cell.index())] = DigitSet::from_elem(digit);
            }
        }
        Ok(Self { domains, regions })
    }

    /// Returns the initial per-variable domains.
    #[must_use]
    pub const fn domains(&self) -> &[DigitSet; 81] {
        &self.domains
    }

    /// Returns the distinctness groups, classic regions first.
    #[must_use]
    pub fn regions(&self) -> &[Ennead] {
        &self.regions
    }
}
