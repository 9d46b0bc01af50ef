use solvoku_core::{Digit, Grid, Position, Unit};

use super::{BoxedRule, Rule};

const NAME: &str = "aligned block";

/// Completes a neighboring block that has exactly one open cell off a
/// determined cell's line.
///
/// Take a determined cell and a sibling block in the same band of three.
/// The sibling block needs the digit somewhere, and the digit cannot sit on
/// the determined cell's own row, which leaves the six sibling cells off
/// that row. When five of those six are already determined and the digit is
/// still missing from the sibling block, the last open cell must take it.
/// The same reasoning runs down the column bands.
///
/// ```text
/// 1 . . | . . . | . . .
/// . . . | 2 3 4 | . . .
/// . . . | 5 6 ! | . . .
/// ```
///
/// The 1 cannot occupy the middle block's top row, and five of the other
/// six cells are known, so the marked cell takes it.
///
/// The open cell must still carry the digit as a candidate; a probe that
/// fails that gate is skipped, leaving any latent contradiction to the
/// conflict scan.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlignedBlock;

impl AlignedBlock {
    /// Creates a new [`AlignedBlock`] rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for AlignedBlock {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> bool {
        let mut changed = false;
        for origin in Position::ALL {
            let Some(digit) = grid.value(origin) else {
                continue;
            };
            for sibling in row_band_siblings(origin.block()) {
                let off_row = Unit::Block(sibling)
                    .positions()
                    .into_iter()
                    .filter(|pos| pos.row() != origin.row());
                changed |= complete(grid, sibling, off_row, digit);
            }
            for sibling in column_band_siblings(origin.block()) {
                let off_column = Unit::Block(sibling)
                    .positions()
                    .into_iter()
                    .filter(|pos| pos.col() != origin.col());
                changed |= complete(grid, sibling, off_column, digit);
            }
        }
        changed
    }
}

/// Assigns `digit` to the sole open cell among `cells` of block `sibling`,
/// provided the block still needs the digit and the cell still allows it.
fn complete<I>(grid: &mut Grid, sibling: u8, cells: I, digit: Digit) -> bool
where
    I: IntoIterator<Item = Position>,
{
    let Some(open) = sole_open(grid, cells) else {
        return false;
    };
    if grid.unit_digits(Unit::Block(sibling)).contains(digit)
        || !grid.candidates(open).contains(digit)
    {
        return false;
    }
    grid.assign(open, digit);
    true
}

/// Returns the only undetermined position among `cells`, or `None` when
/// none or several are open.
fn sole_open<I>(grid: &Grid, cells: I) -> Option<Position>
where
    I: IntoIterator<Item = Position>,
{
    let mut open = cells.into_iter().filter(|&pos| !grid.is_determined(pos));
    match (open.next(), open.next()) {
        (Some(pos), None) => Some(pos),
        _ => None,
    }
}

/// The two other blocks in `block`'s row of blocks.
fn row_band_siblings(block: u8) -> [u8; 2] {
    let base = block / 3 * 3;
    match block % 3 {
        0 => [base + 1, base + 2],
        1 => [base, base + 2],
        _ => [base, base + 1],
    }
}

/// The two other blocks in `block`'s column of blocks.
fn column_band_siblings(block: u8) -> [u8; 2] {
    let base = block % 3;
    match block / 3 {
        0 => [base + 3, base + 6],
        1 => [base, base + 6],
        _ => [base, base + 3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RuleTester;

    #[test]
    fn test_band_sibling_lookup() {
        assert_eq!(row_band_siblings(0), [1, 2]);
        assert_eq!(row_band_siblings(4), [3, 5]);
        assert_eq!(row_band_siblings(8), [6, 7]);
        assert_eq!(column_band_siblings(0), [3, 6]);
        assert_eq!(column_band_siblings(4), [1, 7]);
        assert_eq!(column_band_siblings(8), [2, 5]);
    }

    #[test]
    fn test_completes_block_along_row_band() {
        RuleTester::from_str(
            "
            1__ ___ ___
            ___ 234 ___
            ___ 56_ ___

            ___ ___ ___
            ___ ___ ___
            ___ ___ ___

            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ",
        )
        .apply_once(&AlignedBlock::new())
        .assert_assigned(Position::new(2, 5), Digit::D1);
    }

    #[test]
    fn test_completes_block_along_column_band() {
        RuleTester::from_str(
            "
            1__ ___ ___
            ___ ___ ___
            ___ ___ ___

            _23 ___ ___
            _45 ___ ___
            _6_ ___ ___

            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ",
        )
        .apply_once(&AlignedBlock::new())
        .assert_assigned(Position::new(5, 2), Digit::D1);
    }

    #[test]
    fn test_needs_exactly_one_open_cell() {
        RuleTester::from_str(
            "
            1__ ___ ___
            ___ _34 ___
            ___ 56_ ___

            ___ ___ ___
            ___ ___ ___
            ___ ___ ___

            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ",
        )
        .apply_once(&AlignedBlock::new())
        .assert_no_change(Position::new(1, 3))
        .assert_no_change(Position::new(2, 5));
    }

    #[test]
    fn test_respects_candidate_gate() {
        // The 1 in row 9 strips the candidate from r3c6 first.
        RuleTester::from_str(
            "
            1__ ___ ___
            ___ 234 ___
            ___ 56_ ___

            ___ ___ ___
            ___ ___ ___
            ___ ___ ___

            ___ ___ ___
            ___ ___ ___
            ___ __1 ___
            ",
        )
        .apply_once(&AlignedBlock::new())
        .assert_no_change(Position::new(2, 5));
    }

    #[test]
    fn test_skips_block_that_already_has_the_digit() {
        RuleTester::from_str(
            "
            1__ ___ ___
            ___ 214 ___
            ___ 56_ ___

            ___ ___ ___
            ___ ___ ___
            ___ ___ ___

            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ",
        )
        .apply_once(&AlignedBlock::new())
        .assert_no_change(Position::new(2, 5));
    }
}
