//! A set of candidate digits (1-9) for a single cell.
//!
//! This module provides [`DigitSet`], a 16-bit bitset where bits 0-8
//! represent digits 1-9 respectively. The solver uses one `DigitSet` per
//! cell as that cell's remaining domain.
//!
//! # Examples
//!
//! ```
//! use esdoku_core::{Digit, DigitSet};
//!
//! let mut set = DigitSet::new();
//! set.insert(Digit::D1);
//! set.insert(Digit::D5);
//! set.insert(Digit::D9);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(Digit::D5));
//! assert!(!set.contains(Digit::D2));
//! ```

use std::{
    fmt::{self, Debug},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

use crate::digit::Digit;

/// A set of digits 1-9, represented as a bitset.
///
/// The implementation uses a 16-bit integer where bits 0-8 represent digits
/// 1-9 respectively, providing efficient storage and fast set operations.
/// Cloning is a copy, which is what makes the solver's copy-on-branch
/// search state cheap.
///
/// # Examples
///
/// ```
/// use esdoku_core::{Digit, DigitSet};
///
/// // Start from a full domain and eliminate candidates
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert!(candidates.contains(Digit::D1));
/// ```
///
/// # Set Operations
///
/// ```
/// use esdoku_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// let union = a | b;
/// assert_eq!(
///     union,
///     DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4])
/// );
///
/// let intersection = a & b;
/// assert_eq!(intersection, DigitSet::from_iter([Digit::D2, Digit::D3]));
///
/// let diff = a.difference(b);
/// assert_eq!(diff, DigitSet::from_iter([Digit::D1]));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

const ALL_BITS: u16 = 0x01ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };
    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: ALL_BITS };

    /// Creates a new, empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing exactly one digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use esdoku_core::{Digit, DigitSet};
    ///
    /// let set = DigitSet::from_elem(Digit::D4);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(Digit::D4));
    /// ```
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self {
            bits: Self::bit(digit),
        }
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !Self::bit(digit);
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.bits.count_ones()
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the sole digit if the set is a singleton, `None` otherwise.
    ///
    /// A singleton domain is a solved cell (a "naked single" during
    /// propagation).
    ///
    /// # Examples
    ///
    /// ```
    /// use esdoku_core::{Digit, DigitSet};
    ///
    /// assert_eq!(DigitSet::from_elem(Digit::D7).as_single(), Some(Digit::D7));
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.bits.count_ones() != 1 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        Digit::try_from_value(value)
    }

    /// Returns the union of `self` and `other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the intersection of `self` and `other`.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the digits in the set, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use esdoku_core::{Digit, DigitSet};
    ///
    /// let set = DigitSet::from_iter([Digit::D9, Digit::D1, Digit::D5]);
    /// let digits: Vec<_> = set.iter().collect();
    /// assert_eq!(digits, vec![Digit::D1, Digit::D5, Digit::D9]);
    /// ```
    pub fn iter(self) -> impl Iterator<Item = Digit> {
        Digit::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl Not for DigitSet {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            bits: !self.bits & ALL_BITS,
        }
    }
}
