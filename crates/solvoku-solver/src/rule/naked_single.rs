use solvoku_core::{Grid, Position};

use super::{BoxedRule, Rule};

const NAME: &str = "naked single";

/// Assigns every open cell whose candidate set has shrunk to one digit.
///
/// Peer elimination is built into [`Grid::assign`], so each placement
/// immediately strips the digit from the cell's row, column, and block. A
/// placement early in the sweep can expose further naked singles later in
/// the same sweep, and those are picked up before the call returns.
///
/// # Examples
///
/// ```
/// use solvoku_core::{Digit, Grid, Position};
/// use solvoku_solver::rule::{NakedSingle, Rule as _};
///
/// let mut grid: Grid = ("12345678_".to_owned() + &"_".repeat(72)).parse()?;
///
/// assert!(NakedSingle::new().apply(&mut grid));
/// assert_eq!(grid.value(Position::new(0, 8)), Some(Digit::D9));
/// # Ok::<(), solvoku_core::GridError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new [`NakedSingle`] rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> bool {
        let mut changed = false;
        for pos in Position::ALL {
            if let Some(digit) = grid.candidates(pos).single() {
                grid.assign(pos, digit);
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use solvoku_core::Digit;

    use super::*;
    use crate::testing::RuleTester;

    #[test]
    fn test_assigns_sole_candidate() {
        RuleTester::from_str(
            "
            123 456 78_
            ___ ___ ___
            ___ ___ ___

            ___ ___ ___
            ___ ___ ___
            ___ ___ ___

            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ",
        )
        .apply_once(&NakedSingle::new())
        .assert_assigned(Position::new(0, 8), Digit::D9);
    }

    #[test]
    fn test_assignment_prunes_peers() {
        RuleTester::from_str(
            "
            123 456 78_
            ___ ___ ___
            ___ ___ ___

            ___ ___ ___
            ___ ___ ___
            ___ ___ ___

            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ",
        )
        .apply_once(&NakedSingle::new())
        .assert_removed_includes(Position::new(1, 8), [Digit::D9])
        .assert_removed_includes(Position::new(8, 8), [Digit::D9]);
    }

    #[test]
    fn test_assigns_several_singles_in_one_sweep() {
        RuleTester::from_str(
            "
            123 456 78_
            ___ ___ ___
            ___ ___ ___

            91_ 234 567
            ___ ___ ___
            ___ ___ ___

            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ",
        )
        .apply_once(&NakedSingle::new())
        .assert_assigned(Position::new(0, 8), Digit::D9)
        .assert_assigned(Position::new(3, 2), Digit::D8);
    }

    #[test]
    fn test_no_change_without_singles() {
        RuleTester::new(Grid::empty())
            .apply_once(&NakedSingle::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(4, 4));
    }

    #[test]
    fn test_ignores_cells_with_no_candidates() {
        let mut grid = Grid::empty();
        for digit in Digit::ALL {
            grid.eliminate(Position::new(0, 0), digit);
        }

        RuleTester::new(grid)
            .apply_once(&NakedSingle::new())
            .assert_no_change(Position::new(0, 0));
    }
}
