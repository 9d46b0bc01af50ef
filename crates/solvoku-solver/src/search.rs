//! Backtracking over the cells propagation leaves open.

use solvoku_core::{Grid, Position};

/// Statistics collected during backtracking search.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    nodes: usize,
    backtracks: usize,
}

impl SearchStats {
    /// Returns the number of search nodes visited.
    ///
    /// Each node is one recursive invocation; a puzzle completed by
    /// propagation alone never visits any.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the number of abandoned branches.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }
}

/// Completes a partially determined grid by exhaustive search.
///
/// Picks the undetermined cell with the fewest candidates (ties broken by
/// lowest position index) and tries its candidates in ascending order. Each
/// branch works on its own copy of the grid, so abandoning a branch is a
/// drop, not an undo. A tentative assignment that produces a duplicate
/// anywhere on the grid is abandoned immediately.
///
/// Returns the first completed grid found, or `None` when every branch is
/// exhausted. Solution uniqueness is assumed, not verified: on a puzzle with
/// several completions the search returns whichever its deterministic order
/// reaches first.
///
/// # Examples
///
/// ```
/// use solvoku_core::Grid;
/// use solvoku_solver::search::{self, SearchStats};
///
/// let mut stats = SearchStats::default();
/// let solution = search::search(&Grid::empty(), &mut stats).unwrap();
///
/// assert!(solution.is_complete());
/// assert!(!solution.has_conflict());
/// ```
#[must_use]
pub fn search(grid: &Grid, stats: &mut SearchStats) -> Option<Grid> {
    stats.nodes += 1;

    let Some(target) = most_constrained(grid) else {
        // No undetermined cells remain: the grid is a solution.
        return Some(grid.clone());
    };

    for digit in grid.candidates(target) {
        let mut branch = grid.clone();
        branch.assign(target, digit);
        if branch.has_conflict() {
            stats.backtracks += 1;
            continue;
        }
        if let Some(solution) = search(&branch, stats) {
            return Some(solution);
        }
        stats.backtracks += 1;
    }

    // A cell with no viable candidate: this branch has no completion.
    None
}

/// Returns the undetermined cell with the fewest remaining candidates.
///
/// `min_by_key` keeps the first minimum it sees, which gives the
/// lowest-index tie-break.
fn most_constrained(grid: &Grid) -> Option<Position> {
    grid.undetermined()
        .min_by_key(|&pos| grid.candidates(pos).len())
}
