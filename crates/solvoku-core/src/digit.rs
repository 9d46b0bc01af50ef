//! The nine Sudoku digits.

use std::fmt::{self, Display};

/// A Sudoku digit in the range 1-9.
///
/// There is no zero variant: an empty cell is represented by the absence of a
/// digit (`Option<Digit>` at API boundaries, a candidate set inside the grid).
///
/// # Examples
///
/// ```
/// use solvoku_core::Digit;
///
/// let digit = Digit::new(5).unwrap();
/// assert_eq!(digit, Digit::D5);
/// assert_eq!(digit.get(), 5);
/// assert_eq!(Digit::new(0), None);
///
/// for digit in Digit::ALL {
///     assert!((1..=9).contains(&digit.get()));
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
    /// All nine digits in ascending order.
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

    /// Creates a digit from its numeric value, or `None` if the value is
    /// outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use solvoku_core::Digit;
    ///
    /// assert_eq!(Digit::new(1), Some(Digit::D1));
    /// assert_eq!(Digit::new(9), Some(Digit::D9));
    /// assert_eq!(Digit::new(0), None);
    /// assert_eq!(Digit::new(10), None);
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
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

    /// Creates a digit from an ASCII character `'1'..='9'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use solvoku_core::Digit;
    ///
    /// assert_eq!(Digit::from_char('7'), Some(Digit::D7));
    /// assert_eq!(Digit::from_char('0'), None);
    /// assert_eq!(Digit::from_char('x'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let value = c.to_digit(10)?;
        Self::new(u8::try_from(value).ok()?)
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based index of this digit (0-8), for table addressing.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Returns the ASCII character for this digit.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.get()) as char
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.get(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.get()
    }
}

impl TryFrom<u8> for Digit {
    type Error = u8;

    /// Converts a numeric value into a digit, returning the rejected value on
    /// failure.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(value)
    }
}
