//! Test utilities for rule implementations.
//!
//! This module provides [`RuleTester`], a testing harness for verifying that
//! propagation rules make exactly the deductions they should.
//!
//! # Example
//!
//! ```
//! use solvoku_core::{Digit, Position};
//! use solvoku_solver::{rule::NakedSingle, testing::RuleTester};
//!
//! RuleTester::from_str(
//!     "
//!     123 456 78_
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//! ",
//! )
//! .apply_once(&NakedSingle::new())
//! .assert_assigned(Position::new(0, 8), Digit::D9);
//! ```

use std::str::FromStr as _;

use solvoku_core::{Digit, DigitSet, Grid, Position};

use crate::rule::Rule;

/// A test harness for verifying rule implementations.
///
/// `RuleTester` keeps the initial and current state of a grid, so a test can
/// apply rules and assert on the difference between the two.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct RuleTester {
    initial: Grid,
    current: Grid,
}

impl RuleTester {
    /// Creates a new tester from an initial grid state.
    #[must_use]
    pub fn new(initial: Grid) -> Self {
        let current = initial.clone();
        Self { initial, current }
    }

    /// Creates a new tester from a grid string.
    ///
    /// The string format matches [`Grid::from_str`]:
    /// - Digits 1-9 represent clue cells
    /// - `.`, `_`, or `0` represent empty cells
    /// - Whitespace is ignored
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a valid grid.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let grid = Grid::from_str(s).unwrap();
        Self::new(grid)
    }

    /// Returns the current grid state.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// Applies the rule once and returns self for chaining.
    #[track_caller]
    pub fn apply_once<R>(mut self, rule: &R) -> Self
    where
        R: Rule,
    {
        rule.apply(&mut self.current);
        self
    }

    /// Applies the rule repeatedly until it makes no more progress.
    #[track_caller]
    pub fn apply_until_stuck<R>(mut self, rule: &R) -> Self
    where
        R: Rule,
    {
        while rule.apply(&mut self.current) {}
        self
    }

    /// Asserts that a cell was assigned the given digit.
    ///
    /// This verifies that:
    /// - The cell was initially undetermined
    /// - The cell is now determined with the expected digit
    ///
    /// # Panics
    ///
    /// Panics if the cell was not assigned as expected.
    #[track_caller]
    pub fn assert_assigned(self, pos: Position, digit: Digit) -> Self {
        assert!(
            !self.initial.is_determined(pos),
            "Expected initial cell at {pos} to be undetermined, but it holds {:?}",
            self.initial.value(pos)
        );
        assert_eq!(
            self.current.value(pos),
            Some(digit),
            "Expected cell at {pos} to be assigned {digit}, but its candidates are {:?}",
            self.current.candidates(pos)
        );
        self
    }

    /// Asserts that all specified candidates were removed from a cell.
    ///
    /// Other candidates may also have been removed; this method only checks
    /// that the specified ones are gone.
    ///
    /// # Panics
    ///
    /// Panics if any of the specified digits are still present in the cell's
    /// candidates, or were never there to begin with.
    #[track_caller]
    pub fn assert_removed_includes<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates(pos);
        let current = self.current.candidates(pos);
        assert_eq!(
            initial & digits,
            digits,
            "Expected initial candidates at {pos} to include {digits:?}, but initial candidates are: {initial:?}"
        );
        assert!(
            (current & digits).is_empty(),
            "Expected all of {digits:?} to be removed from {pos}, but {current:?} still contains some: {:?}",
            current & digits
        );
        self
    }

    /// Asserts that exactly the specified candidates were removed from a cell.
    ///
    /// # Panics
    ///
    /// Panics if the removed candidates don't exactly match the specified set.
    #[track_caller]
    pub fn assert_removed_exact<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates(pos);
        let current = self.current.candidates(pos);
        let removed = initial.difference(current);
        assert_eq!(
            removed, digits,
            "Expected exactly {digits:?} to be removed from {pos}, but removed candidates are: {removed:?} (initial: {initial:?}, current: {current:?})"
        );
        self
    }

    /// Asserts that a cell's state has not changed.
    ///
    /// # Panics
    ///
    /// Panics if the cell's value or candidates differ from the initial state.
    #[track_caller]
    pub fn assert_no_change(self, pos: Position) -> Self {
        let initial = self.initial.cell(pos);
        let current = self.current.cell(pos);
        assert_eq!(
            initial, current,
            "Expected no change at {pos}, but the cell changed from {initial:?} to {current:?}"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::BoxedRule;

    // Mock rule for testing that always returns false (no change)
    #[derive(Debug)]
    struct NoOpRule;

    impl Rule for NoOpRule {
        fn name(&self) -> &'static str {
            "no-op"
        }

        fn clone_box(&self) -> BoxedRule {
            Box::new(NoOpRule)
        }

        fn apply(&self, _grid: &mut Grid) -> bool {
            false
        }
    }

    // Mock rule that assigns D1 at row 0, column 0 if it is still open
    #[derive(Debug)]
    struct AssignD1At00;

    impl Rule for AssignD1At00 {
        fn name(&self) -> &'static str {
            "assign-d1-at-00"
        }

        fn clone_box(&self) -> BoxedRule {
            Box::new(AssignD1At00)
        }

        fn apply(&self, grid: &mut Grid) -> bool {
            let pos = Position::new(0, 0);
            if grid.is_determined(pos) {
                false
            } else {
                grid.assign(pos, Digit::D1);
                true
            }
        }
    }

    #[test]
    fn test_apply_once_and_assert_assigned() {
        RuleTester::new(Grid::empty())
            .apply_once(&AssignD1At00)
            .assert_assigned(Position::new(0, 0), Digit::D1);
    }

    #[test]
    fn test_apply_until_stuck_terminates() {
        // AssignD1At00 fires once, then reports no progress.
        RuleTester::new(Grid::empty())
            .apply_until_stuck(&AssignD1At00)
            .assert_assigned(Position::new(0, 0), Digit::D1);
    }

    #[test]
    fn test_assigning_removes_peer_candidates() {
        RuleTester::new(Grid::empty())
            .apply_once(&AssignD1At00)
            .assert_removed_exact(Position::new(0, 5), [Digit::D1])
            .assert_removed_exact(Position::new(7, 0), [Digit::D1])
            .assert_removed_exact(Position::new(2, 2), [Digit::D1]);
    }

    #[test]
    fn test_assert_no_change() {
        RuleTester::new(Grid::empty())
            .apply_once(&NoOpRule)
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(4, 4));
    }

    #[test]
    #[should_panic(expected = "Expected no change at")]
    fn test_assert_no_change_fails_when_changed() {
        RuleTester::new(Grid::empty())
            .apply_once(&AssignD1At00)
            .assert_no_change(Position::new(0, 0));
    }

    #[test]
    #[should_panic(expected = "Expected cell at")]
    fn test_assert_assigned_fails_when_not_assigned() {
        RuleTester::new(Grid::empty())
            .apply_once(&NoOpRule)
            .assert_assigned(Position::new(0, 0), Digit::D1);
    }

    #[test]
    fn test_method_chaining() {
        RuleTester::new(Grid::empty())
            .apply_once(&AssignD1At00)
            .assert_assigned(Position::new(0, 0), Digit::D1)
            .apply_once(&NoOpRule)
            .assert_no_change(Position::new(5, 5));
    }
}
