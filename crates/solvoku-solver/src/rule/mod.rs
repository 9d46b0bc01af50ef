//! Constraint propagation rules.
//!
//! This module provides the deduction rules the propagation engine applies.
//! Each rule implements the [`Rule`] trait and sweeps a grid for every
//! instance of its pattern in one call. Rules only assign values and shrink
//! candidate sets; peer elimination happens inside
//! [`Grid::assign`](solvoku_core::Grid::assign), so every placement a rule
//! makes is propagated before the next rule runs.

use std::fmt::Debug;

use solvoku_core::Grid;

pub use self::{
    aligned_block::AlignedBlock, box_line::BoxLine, hidden_single::HiddenSingle,
    naked_single::NakedSingle,
};

mod aligned_block;
mod box_line;
mod hidden_single;
mod naked_single;

/// Returns the standard rule battery in application order.
///
/// The order runs from cheapest to most specialized:
/// - **Naked Single**: a cell with only one remaining candidate
/// - **Hidden Single**: a digit with only one possible cell within a unit
/// - **Aligned Block**: a block forced to take its row's or column's one
///   missing digit
/// - **Box-Line**: candidates confined to one line of a block, eliminated
///   from the rest of the line
///
/// The first two place digits directly; the last two mostly feed the singles
/// on the next round. [`Propagator`](crate::Propagator) applies them in this
/// order within every round.
///
/// # Examples
///
/// ```
/// use solvoku_solver::rule;
///
/// let rules = rule::standard_rules();
/// assert_eq!(rules.len(), 4);
/// ```
#[must_use]
pub fn standard_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::new()),
        Box::new(AlignedBlock::new()),
        Box::new(BoxLine::new()),
    ]
}

/// A deduction rule that solves cells or prunes candidates without guessing.
pub trait Rule: Debug + Send + Sync {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the rule.
    fn clone_box(&self) -> BoxedRule;

    /// Applies the rule everywhere it matches on the grid.
    ///
    /// # Arguments
    ///
    /// * `grid` - The grid to deduce on
    ///
    /// # Returns
    ///
    /// * `true` - At least one cell was assigned or one candidate removed
    /// * `false` - The rule matched nothing; the grid is unchanged
    ///
    /// Rules never validate: an assignment that contradicts a determined peer
    /// is left for the conflict check that follows the round.
    fn apply(&self, grid: &mut Grid) -> bool;
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

impl Clone for BoxedRule {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
