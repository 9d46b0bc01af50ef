use solvoku_core::Grid;

use crate::{
    PropagationStats, Propagator, SolveError,
    search::{self, SearchStats},
};

/// Counters collected across one full solve.
///
/// Combines the propagation counters with the search counters, so a caller
/// can tell how much of the work deduction did before guessing took over.
#[derive(Debug, Clone)]
pub struct SolveStats {
    pub(crate) propagation: PropagationStats,
    pub(crate) search: SearchStats,
}

impl SolveStats {
    /// Returns the counters of the deduction phase.
    #[must_use]
    pub fn propagation(&self) -> &PropagationStats {
        &self.propagation
    }

    /// Returns the counters of the search phase.
    #[must_use]
    pub fn search(&self) -> &SearchStats {
        &self.search
    }
}

/// The full solving pipeline: propagation to a fixed point, then search.
///
/// The deduction rules run first, and the backtracking search only covers
/// whatever cells they leave open, so puzzles that yield to logic alone
/// never pay for guessing. The input grid is left untouched; the solver
/// works on its own copy.
///
/// # Examples
///
/// ```
/// use solvoku_core::Grid;
/// use solvoku_solver::Solver;
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// let solver = Solver::with_standard_rules();
/// let solution = solver.solve(&grid)?;
///
/// assert!(solution.is_complete());
/// assert_eq!(solution.value(solvoku_core::Position::new(0, 2)), Some(solvoku_core::Digit::D4));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    propagator: Propagator,
}

impl Solver {
    /// Creates a solver around an existing propagator.
    #[must_use]
    pub fn new(propagator: Propagator) -> Self {
        Self { propagator }
    }

    /// Creates a solver with the standard rule battery.
    #[must_use]
    pub fn with_standard_rules() -> Self {
        Self::new(Propagator::with_standard_rules())
    }

    /// Returns the propagator driving the deduction phase.
    #[must_use]
    pub fn propagator(&self) -> &Propagator {
        &self.propagator
    }

    /// Creates a statistics object sized for this solver's rule battery.
    #[must_use]
    pub fn new_stats(&self) -> SolveStats {
        SolveStats {
            propagation: self.propagator.new_stats(),
            search: SearchStats::default(),
        }
    }

    /// Solves the puzzle and returns the completed grid.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Contradiction`] if the clues duplicate a digit
    /// within a unit, and [`SolveError::Unsolvable`] if the search exhausts
    /// every branch without completing the grid.
    pub fn solve(&self, grid: &Grid) -> Result<Grid, SolveError> {
        let mut stats = self.new_stats();
        self.solve_with_stats(grid, &mut stats)
    }

    /// Like [`solve`](Self::solve), but records counters into `stats`.
    ///
    /// # Errors
    ///
    /// As [`solve`](Self::solve).
    pub fn solve_with_stats(
        &self,
        grid: &Grid,
        stats: &mut SolveStats,
    ) -> Result<Grid, SolveError> {
        if let Some(conflict) = grid.find_conflict() {
            return Err(SolveError::Contradiction(conflict));
        }

        let mut working = grid.clone();
        self.propagator
            .run_with_stats(&mut working, &mut stats.propagation);

        // The rules only place digits their peers still allow, so a
        // duplicate at this point traces back to the clues themselves.
        if let Some(conflict) = working.find_conflict() {
            return Err(SolveError::Contradiction(conflict));
        }
        if working.is_complete() {
            return Ok(working);
        }

        log::debug!(
            "deduction left {} cells open, falling back to search",
            working.undetermined_count()
        );
        search::search(&working, &mut stats.search).ok_or(SolveError::Unsolvable)
    }
}
