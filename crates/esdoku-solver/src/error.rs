//! Solver error taxonomy.

use esdoku_core::{Cell, RegionError};

/// An error surfaced before any search starts.
///
/// Malformed puzzle input and inconsistent region configuration are the
/// only error conditions of the solver. An unsatisfiable puzzle is *not* an
/// error: the search proves every branch dead and returns an empty solution
/// list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolveError {
    /// The hint array does not contain exactly 81 values.
    #[display("hint array has {len} values, expected 81")]
    BadHintLength {
        /// The actual input length.
        len: usize,
    },
    /// A hint value lies outside 0-9.
    #[display("hint at {cell} is {value}, expected 0-9")]
    BadHintValue {
        /// The offending cell.
        cell: Cell,
        /// The offending value.
        value: u8,
    },
    /// The shape mask and group specs derive a malformed region.
    ///
    /// This indicates a configuration bug, not a puzzle-data problem.
    #[display("invalid region configuration: {_0}")]
    Region(#[from] RegionError),
}
