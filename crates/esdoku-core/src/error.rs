//! Error types for board and region construction.

use crate::region::GroupSpec;

/// An error produced while reshaping flat data or parsing a shape mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ShapeError {
    /// The flat input does not contain exactly 81 values.
    #[display("expected 81 values, got {len}")]
    BadLength {
        /// The actual input length.
        len: usize,
    },
    /// The mask does not contain exactly 9 lines.
    #[display("expected 9 mask lines, got {count}")]
    BadLineCount {
        /// The actual number of lines.
        count: usize,
    },
    /// A mask line does not contain exactly 9 characters.
    #[display("mask line {line} has {len} characters, expected 9")]
    BadLineLength {
        /// The offending line index (0-8).
        line: usize,
        /// The actual character count of that line.
        len: usize,
    },
}

/// An error produced while deriving regions from a shape mask.
///
/// This indicates an internally inconsistent mask/spec combination, a
/// configuration bug rather than a puzzle-data problem. Region derivation
/// fails fast instead of truncating or padding a malformed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RegionError {
    /// A group spec selected a number of cells other than exactly 9.
    #[display("group spec {spec} selects {size} cells, expected 9")]
    BadEnneadSize {
        /// The offending spec.
        spec: GroupSpec,
        /// The number of cells the spec actually selected.
        size: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ShapeError::BadLength { len: 80 }.to_string(),
            "expected 81 values, got 80"
        );
        assert_eq!(
            ShapeError::BadLineCount { count: 8 }.to_string(),
            "expected 9 mask lines, got 8"
        );
        assert_eq!(
            ShapeError::BadLineLength { line: 2, len: 10 }.to_string(),
            "mask line 2 has 10 characters, expected 9"
        );
        assert_eq!(
            RegionError::BadEnneadSize {
                spec: GroupSpec::Rows([0, 1, 2]),
                size: 8
            }
            .to_string(),
            "group spec rows {0, 1, 2} selects 8 cells, expected 9"
        );
    }
}
