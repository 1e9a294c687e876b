//! Core data structures for the esdoku solver.
//!
//! This crate provides the board-level building blocks shared by the
//! constraint model and search engine: typed digits and cell indices,
//! candidate sets, flat/2D grid conversions, shape mask parsing, and region
//! derivation.
//!
//! # Overview
//!
//! The crate is organized around three concerns:
//!
//! 1. **Value types**
//!    - [`digit`]: Type-safe digits 1-9
//!    - [`cell`]: Board cell indices 0-80 in row-major order
//!    - [`digit_set`]: Candidate sets, the per-cell domains of the solver
//!
//! 2. **Board geometry**
//!    - [`grid`]: Row-major reshaping, transposition, and 3x3 box extraction
//!
//! 3. **Regions**
//!    - [`mask`]: The 9x9 boolean shape overlay of the S-Doku variant
//!    - [`region`]: Derivation of the 9-cell groups ("enneads") whose
//!      members must be pairwise distinct
//!
//! # Examples
//!
//! ```
//! use esdoku_core::{GroupSpec, ShapeMask, region};
//!
//! // Classic puzzles constrain 27 regions: rows, columns, and boxes.
//! assert_eq!(region::classic_regions().len(), 27);
//!
//! // The S-Doku variant adds six more, derived from the shape overlay.
//! let mask = ShapeMask::s_shape();
//! let regions = region::shaped_regions(&mask, &GroupSpec::S_DEFAULT)?;
//! assert_eq!(regions.len(), 33);
//! # Ok::<(), esdoku_core::RegionError>(())
//! ```

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod error;
pub mod grid;
pub mod mask;
pub mod region;

// Re-export commonly used types
pub use self::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    error::{RegionError, ShapeError},
    mask::ShapeMask,
    region::{Ennead, GroupSpec, RegionLabel},
};
