//! Finite-domain solver for classic Sudoku and the S-Doku variant.
//!
//! The solver fills a 9x9 grid with digits 1-9 so that every configured
//! 9-cell region contains each digit exactly once, subject to a partial
//! assignment of givens. Classic puzzles constrain the 27 geometric
//! regions; the S-Doku variant adds six more, derived from a shape overlay
//! (see [`esdoku_core`]).
//!
//! The engine is a plain propagate/branch/backtrack loop: naked-single
//! elimination to a fixpoint at every node, then depth-first branching on
//! the most constrained cell, with copy-on-branch domain state. Search is
//! single-threaded and deterministic, and stops the instant the requested
//! number of solutions has been found.
//!
//! # Examples
//!
//! ```
//! use esdoku_solver::{Limit, Variant, solve};
//!
//! # #[rustfmt::skip]
//! let hints: [u8; 81] = [
//!     2, 0, 7, 0, 1, 0, 5, 0, 8,
//!     0, 0, 0, 6, 7, 8, 0, 0, 0,
//!     8, 0, 0, 0, 0, 0, 0, 0, 6,
//!     0, 7, 0, 9, 0, 6, 0, 5, 0,
//!     4, 9, 0, 0, 0, 0, 0, 1, 3,
//!     0, 3, 0, 4, 0, 1, 0, 2, 0,
//!     5, 0, 0, 0, 0, 0, 0, 0, 1,
//!     0, 0, 0, 2, 9, 4, 0, 0, 0,
//!     3, 0, 6, 0, 8, 0, 4, 0, 9,
//! ];
//!
//! let solutions = solve(&hints, Limit::Count(1), &Variant::Classic)?;
//! assert_eq!(solutions.len(), 1);
//! assert_eq!(solutions[0].rows()[0], [2, 6, 7, 3, 1, 9, 5, 4, 8]);
//! # Ok::<(), esdoku_solver::SolveError>(())
//! ```

pub mod engine;
pub mod error;
pub mod model;

pub use self::{
    engine::{Limit, Solution, enumerate, solve},
    error::SolveError,
    model::{Hints, Model, Variant},
};
