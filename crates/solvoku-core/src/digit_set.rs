//! Candidate sets over the nine digits.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

use crate::Digit;

/// A set of [`Digit`]s backed by a 9-bit mask.
///
/// Iteration yields digits in ascending numeric order, which is what makes
/// candidate enumeration deterministic throughout the solver.
///
/// # Examples
///
/// ```
/// use solvoku_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::EMPTY;
/// assert!(set.insert(Digit::D3));
/// assert!(set.insert(Digit::D7));
/// assert!(!set.insert(Digit::D3));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Digit::D7));
///
/// let digits: Vec<_> = set.iter().collect();
/// assert_eq!(digits, [Digit::D3, Digit::D7]);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const MASK: u16 = (1 << 9) - 1;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(MASK);

    const fn bit(digit: Digit) -> u16 {
        1 << digit.index()
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self(Self::bit(digit))
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Adds a digit to the set. Returns `true` if it was not already present.
    pub fn insert(&mut self, digit: Digit) -> bool {
        let old = self.0;
        self.0 |= Self::bit(digit);
        self.0 != old
    }

    /// Removes a digit from the set. Returns `true` if it was present.
    pub fn remove(&mut self, digit: Digit) -> bool {
        let old = self.0;
        self.0 &= !Self::bit(digit);
        self.0 != old
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member if the set has exactly one, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use solvoku_core::{Digit, DigitSet};
    ///
    /// assert_eq!(DigitSet::from_elem(Digit::D4).single(), Some(Digit::D4));
    /// assert_eq!(DigitSet::EMPTY.single(), None);
    /// assert_eq!(DigitSet::FULL.single(), None);
    /// ```
    #[must_use]
    pub fn single(self) -> Option<Digit> {
        if self.0.is_power_of_two() {
            Some(Digit::ALL[self.0.trailing_zeros() as usize])
        } else {
            None
        }
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Digits {
        Digits(self.0)
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Not for DigitSet {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & MASK)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Digits;

    fn into_iter(self) -> Digits {
        self.iter()
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::get)).finish()
    }
}

/// Iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone)]
pub struct Digits(u16);

impl Iterator for Digits {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Digit::ALL[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Digits {
    fn next_back(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let index = (15 - self.0.leading_zeros()) as usize;
        self.0 &= !(1 << index);
        Some(Digit::ALL[index])
    }
}

impl ExactSizeIterator for Digits {}
impl FusedIterator for Digits {}
