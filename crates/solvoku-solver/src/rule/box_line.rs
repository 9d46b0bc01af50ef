use solvoku_core::{Digit, Grid, Position, Unit};
use tinyvec::ArrayVec;

use super::{BoxedRule, Rule};

const NAME: &str = "box-line";

/// Strips a candidate from a line when a block confines it to that line.
///
/// If every cell of a block that still allows a digit lies on one row, the
/// block has to place the digit on that row, so the digit cannot appear in
/// the row's cells outside the block; likewise for columns. Unlike the
/// single rules this one never assigns, it only shrinks candidate sets for
/// the other rules to pick up on a later round.
///
/// ```text
/// * * * | x x x | x x x
/// . . . | . . . | . . .
/// . . . | . . . | . . .
/// ```
///
/// With the digit confined to the starred cells of the left block, the `x`
/// cells lose it.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoxLine;

impl BoxLine {
    /// Creates a new [`BoxLine`] rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Rule for BoxLine {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> bool {
        let mut changed = false;
        for block in 0..9 {
            for digit in Digit::ALL {
                let mut holders = ArrayVec::<[Position; 9]>::new();
                for pos in Unit::Block(block).positions() {
                    if grid.candidates(pos).contains(digit) {
                        holders.push(pos);
                    }
                }
                let Some((&first, rest)) = holders.split_first() else {
                    continue;
                };

                // A lone holder counts as confined on both axes.
                if rest.iter().all(|pos| pos.row() == first.row()) {
                    for pos in Unit::Row(first.row()).positions() {
                        if pos.block() != block {
                            changed |= grid.eliminate(pos, digit);
                        }
                    }
                }
                if rest.iter().all(|pos| pos.col() == first.col()) {
                    for pos in Unit::Column(first.col()).positions() {
                        if pos.block() != block {
                            changed |= grid.eliminate(pos, digit);
                        }
                    }
                }
            }
        }
        changed
    }
}
