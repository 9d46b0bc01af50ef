use solvoku_core::{Digit, Grid, Position, Unit};

use super::{BoxedRule, Rule};

const NAME: &str = "hidden single";

/// Assigns a digit that has exactly one cell left to go to within a unit.
///
/// A cell can carry several candidates and still be forced: when every
/// other cell of one of its units has lost a digit, that digit has nowhere
/// else to go. Rows, columns, and blocks are scanned independently.
///
/// # Examples
///
/// ```
/// use solvoku_core::{Digit, Grid, Position, Unit};
/// use solvoku_solver::rule::{HiddenSingle, Rule as _};
///
/// // 5 survives only at r1c4 within the top row.
/// let mut grid = Grid::empty();
/// for pos in Unit::Row(0).positions() {
///     if pos != Position::new(0, 3) {
///         grid.eliminate(pos, Digit::D5);
///     }
/// }
///
/// assert!(HiddenSingle::new().apply(&mut grid));
/// assert_eq!(grid.value(Position::new(0, 3)), Some(Digit::D5));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new [`HiddenSingle`] rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> bool {
        let mut changed = false;
        for unit in Unit::ALL {
            for digit in Digit::ALL {
                if let Some(pos) = sole_holder(grid, unit, digit) {
                    grid.assign(pos, digit);
                    changed = true;
                }
            }
        }
        changed
    }
}

/// Returns the only position in `unit` still holding `digit` as a
/// candidate, or `None` when there are none or several.
fn sole_holder(grid: &Grid, unit: Unit, digit: Digit) -> Option<Position> {
    let mut holders = unit
        .positions()
        .into_iter()
        .filter(|&pos| grid.candidates(pos).contains(digit));
    match (holders.next(), holders.next()) {
        (Some(pos), None) => Some(pos),
        _ => None,
    }
}
