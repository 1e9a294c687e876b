//! Constraint propagation and depth-first search.
//!
//! The engine explores a search tree whose nodes each own a full copy of
//! the 81 per-cell domains. At every node it first propagates naked singles
//! to a fixpoint, then either records a solution, abandons a contradiction,
//! or branches on the most constrained undecided cell. Copy-on-branch keeps
//! sibling branches independent: a domain grid is 81 [`DigitSet`]s, so a
//! snapshot is a cheap stack copy.

use std::array;

use esdoku_core::{Cell, Digit, DigitSet, Ennead};

use crate::{
    error::SolveError,
    model::{Hints, Model, Variant},
};

/// How many solutions to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Stop the instant this many solutions have been found.
    ///
    /// `Count(0)` returns an empty list without performing any search.
    /// Exhausting the tree below the count yields fewer solutions, which is
    /// a valid partial result, not an error.
    Count(usize),
    /// Enumerate every solution.
    All,
}

impl Limit {
    const fn reached(self, found: usize) -> bool {
        match self {
            Self::Count(k) => found >= k,
            Self::All => false,
        }
    }
}

/// A completed assignment satisfying every constraint.
///
/// Values are digits 1-9 in original cell-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    values: [u8; 81],
}

impl Solution {
    /// Returns the flat 81-value array.
    #[must_use]
    pub const fn values(&self) -> &[u8; 81] {
        &self.values
    }

    /// Returns the digit at a cell.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Digit {
        Digit::from_value(self.values[usize::from(cell.index())])
    }

    /// Returns the solution partitioned into 9 rows of 9, for display.
    #[must_use]
    pub fn rows(&self) -> [[u8; 9]; 9] {
        array::from_fn(|r| array::from_fn(|c| self.values[r * 9 + c]))
    }
}

/// Solves a puzzle end to end.
///
/// Validates the hint array, derives the variant's regions, builds the
/// constraint model, and enumerates up to `limit` solutions in the order
/// found by the deterministic depth-first search (smallest domain first,
/// ties by lowest cell index, candidate values ascending).
///
/// An unsatisfiable puzzle is not an error; it yields an empty list once
/// every branch has been proven dead.
///
/// # Errors
///
/// Returns [`SolveError::BadHintLength`] or [`SolveError::BadHintValue`]
/// for a malformed hint array, and [`SolveError::Region`] for an
/// inconsistent shaped-variant configuration. All are surfaced before any
/// search starts.
///
/// # Examples
///
/// ```
/// use esdoku_solver::{Limit, Variant, solve};
///
/// // Two identical givens in one row: provably unsatisfiable, not an error.
/// let mut hints = [0u8; 81];
/// hints[0] = 5;
/// hints[1] = 5;
/// let solutions = solve(&hints, Limit::Count(1), &Variant::Classic)?;
/// assert!(solutions.is_empty());
/// # Ok::<(), esdoku_solver::SolveError>(())
/// ```
pub fn solve(hints: &[u8], limit: Limit, variant: &Variant) -> Result<Vec<Solution>, SolveError> {
    let hints = Hints::from_slice(hints)?;
    let model = Model::build(&hints, variant)?;
    Ok(enumerate(&model, limit))
}

/// Enumerates up to `limit` solutions of a prebuilt model.
///
/// This is the search entry point for callers that reuse one [`Model`]
/// across calls; [`solve`] wraps it with input validation.
#[must_use]
pub fn enumerate(model: &Model, limit: Limit) -> Vec<Solution> {
    if limit.reached(0) {
        return Vec::new();
    }
    let mut searcher = Searcher {
        regions: model.regions(),
        limit,
        solutions: Vec::new(),
    };
    searcher.search(*model.domains());
    searcher.solutions
}

/// One search invocation's state: the region list, the enumeration limit,
/// and the solutions collected so far.
struct Searcher<'a> {
    regions: &'a [Ennead],
    limit: Limit,
    solutions: Vec<Solution>,
}

impl Searcher<'_> {
    fn done(&self) -> bool {
        self.limit.reached(self.solutions.len())
    }

    /// Explores the subtree rooted at `domains`, depth first.
    ///
    /// The node owns its domain grid; children receive copies, so
    /// backtracking is simply returning.
    fn search(&mut self, mut domains: [DigitSet; 81]) {
        if !propagate(&mut domains, self.regions) {
            return;
        }
        match branch_cell(&domains) {
            None => self.solutions.push(extract(&domains)),
            Some(cell) => {
                let candidates = domains[usize::from(cell.index())];
                for digit in candidates.iter() {
                    if self.done() {
                        return;
                    }
                    let mut child = domains;
                    child[usize::from(cell.index())] = DigitSet::from_elem(digit);
                    self.search(child);
                }
            }
        }
    }
}

/// Eliminates naked singles to a fixpoint.
///
/// For every region, a solved cell's digit is removed from every other
/// domain in that region, repeating until a full pass changes nothing.
/// Returns `false` as soon as any domain empties, marking the node dead.
fn propagate(domains: &mut [DigitSet; 81], regions: &[Ennead]) -> bool {
    loop {
        let mut changed = false;
        for region in regions {
            for (i, &cell) in region.cells().iter().enumerate() {
                let Some(digit) = domains[usize::from(cell.index())].as_single() else {
                    continue;
                };
                for (j, &other) in region.cells().iter().enumerate() {
                    if i == j {
                        continue;
                    }
                    let domain = &mut domains[usize::from(other.index())];
                    if domain.contains(digit) {
                        domain.remove(digit);
                        if domain.is_empty() {
                            return false;
                        }
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            return true;
        }
    }
}

/// Picks the undecided cell with the smallest domain, ties broken by the
/// lowest cell index. Returns `None` when every cell is decided.
fn branch_cell(domains: &[DigitSet; 81]) -> Option<Cell> {
    let mut best: Option<(u32, Cell)> = None;
    for cell in Cell::all() {
        let len = domains[usize::from(cell.index())].len();
        if len > 1 && best.is_none_or(|(best_len, _)| len < best_len) {
            best = Some((len, cell));
        }
    }
    best.map(|(_, cell)| cell)
}

/// Converts an all-singleton domain grid into a flat solution.
fn extract(domains: &[DigitSet; 81]) -> Solution {
    let values = array::from_fn(|i| match domains[i].as_single() {
        Some(digit) => digit.value(),
        // search() only extracts after propagate() succeeded with no
        // branch cell left, so every domain is a singleton
        None => unreachable!(),
    });
    Solution { values }
}
