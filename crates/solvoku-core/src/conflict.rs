//! Duplicate detection across units.

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, Grid, Unit};

/// A determined digit that appears twice within one unit.
///
/// Produced by [`Grid::find_conflict`]; renders as e.g. `duplicate 5 in
/// row 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("duplicate {digit} in {unit}")]
pub struct Conflict {
    /// The unit containing the duplicate.
    pub unit: Unit,
    /// The duplicated digit.
    pub digit: Digit,
}

impl Grid {
    /// Scans every row, column, and block for a duplicated determined digit.
    ///
    /// Returns the first conflict in [`Unit::ALL`] order, or `None` when no
    /// determined digit repeats within a unit. Pending cells and their
    /// candidates are ignored. This check is the sole validity oracle of the
    /// solving pipeline: the driver runs it on the clues, and the search runs
    /// it after every tentative assignment.
    #[must_use]
    pub fn find_conflict(&self) -> Option<Conflict> {
        for unit in Unit::ALL {
            let mut seen = DigitSet::EMPTY;
            for pos in unit.positions() {
                if let Some(digit) = self.value(pos)
                    && !seen.insert(digit)
                {
                    return Some(Conflict { unit, digit });
                }
            }
        }
        None
    }

    /// Returns `true` if any unit contains a duplicated determined digit.
    #[must_use]
    pub fn has_conflict(&self) -> bool {
        self.find_conflict().is_some()
    }
}
