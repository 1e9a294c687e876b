//! Board digit representation.

use std::fmt::{self, Display};

/// A board digit in the range 1-9.
///
/// This enum provides type-safe representation of the digits a cell may hold,
/// preventing invalid values at compile time. Each variant corresponds to
/// exactly one digit value.
///
/// # Examples
///
/// ```
/// use esdoku_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Create from a u8 value
/// let digit = Digit::from_value(7);
/// assert_eq!(digit, Digit::D7);
///
/// // Iterate over all digits
/// for digit in Digit::ALL {
///     println!("{digit}");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 1 to 9, in ascending order.
    ///
    /// The solver's value ordering during branching is exactly this order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9. Use [`try_from_value`]
    /// for untrusted input.
    ///
    /// [`try_from_value`]: Digit::try_from_value
    ///
    /// # Examples
    ///
    /// ```
    /// use esdoku_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(5), Digit::D5);
    /// assert_eq!(Digit::from_value(1), Digit::D1);
    /// ```
    ///
    /// ```should_panic
    /// use esdoku_core::Digit;
    ///
    /// // This will panic
    /// let _ = Digit::from_value(0);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match Self::try_from_value(value) {
            Some(digit) => digit,
            None => panic!("Invalid digit value: {value}"),
        }
    }

    /// Creates a digit from a u8 value, returning `None` outside 1-9.
    ///
    /// This is the non-panicking counterpart of [`from_value`], used when
    /// the value comes from untrusted input such as a hint array.
    ///
    /// [`from_value`]: Digit::from_value
    ///
    /// # Examples
    ///
    /// ```
    /// use esdoku_core::Digit;
    ///
    /// assert_eq!(Digit::try_from_value(3), Some(Digit::D3));
    /// assert_eq!(Digit::try_from_value(0), None);
    /// assert_eq!(Digit::try_from_value(10), None);
    /// ```
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-9).
    ///
    /// # Examples
    ///
    /// ```
    /// use esdoku_core::Digit;
    ///
    /// assert_eq!(Digit::D1.value(), 1);
    /// assert_eq!(Digit::D9.value(), 9);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        // from_value and value() round-trip for boundary values
        assert_eq!(Digit::from_value(1), Digit::D1);
        assert_eq!(Digit::from_value(9), Digit::D9);
        assert_eq!(Digit::D1.value(), 1);
        assert_eq!(Digit::D9.value(), 9);

        // ALL constant contains all 9 digits in ascending order
        assert_eq!(Digit::ALL.len(), 9);
        for (i, digit) in (1..).zip(Digit::ALL) {
            assert_eq!(digit.value(), i);
        }

        // Display trait
        assert_eq!(format!("{}", Digit::D1), "1");
        assert_eq!(format!("{}", Digit::D9), "9");

        // From<Digit> for u8
        let value: u8 = Digit::D5.into();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_try_from_value() {
        for value in 1..=9 {
            assert_eq!(Digit::try_from_value(value), Some(Digit::from_value(value)));
        }
        assert_eq!(Digit::try_from_value(0), None);
        assert_eq!(Digit::try_from_value(10), None);
        assert_eq!(Digit::try_from_value(u8::MAX), None);
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 0")]
    fn test_from_value_zero_panics() {
        let _ = Digit::from_value(0);
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 10")]
    fn test_from_value_ten_panics() {
        let _ = Digit::from_value(10);
    }
}
