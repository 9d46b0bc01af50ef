use derive_more::{Display, Error};
use solvoku_core::Conflict;

/// Errors reported by [`Solver::solve`](crate::Solver::solve).
///
/// Malformed input never reaches the solver: grid construction rejects it with
/// [`GridError`](solvoku_core::GridError) before solving starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolveError {
    /// The clues break a Sudoku constraint, either as given or once their
    /// consequences are propagated.
    #[display("contradictory puzzle: {_0}")]
    Contradiction(Conflict),
    /// The clues are consistent but no assignment of the remaining cells
    /// completes the grid.
    #[display("no solution exists for the given clues")]
    Unsolvable,
}
