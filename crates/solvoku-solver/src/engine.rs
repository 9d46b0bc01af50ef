use solvoku_core::Grid;

use crate::rule::{self, BoxedRule};

/// Default cap on propagation rounds per [`Propagator::run`] call.
///
/// The cap is a safety valve, not a termination proof: puzzles that need
/// guessing would keep producing small changes without converging, so after
/// this many rounds the engine hands the grid to the search with whatever
/// progress was made. Raise it with [`Propagator::with_max_rounds`] if a rule
/// battery benefits from longer convergence.
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Statistics collected during propagation.
///
/// Tracks how many rounds ran and, per rule, in how many rounds it made
/// progress.
///
/// # Examples
///
/// ```
/// use solvoku_core::Grid;
/// use solvoku_solver::Propagator;
///
/// let propagator = Propagator::with_standard_rules();
/// let mut grid = Grid::empty();
///
/// let stats = propagator.run(&mut grid);
/// assert_eq!(stats.rounds(), 1);
///
/// for (i, count) in stats.applications().iter().enumerate() {
///     println!("{}: {} rounds with progress", propagator.rules()[i].name(), count);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PropagationStats {
    applications: Vec<usize>,
    rounds: usize,
}

impl PropagationStats {
    /// Returns per-rule progress counts in battery order.
    ///
    /// Each entry is the number of rounds in which the rule changed the grid.
    /// Rules that never fired keep a count of `0`.
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the number of propagation rounds that ran.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Returns the total number of rule firings across all rounds.
    #[must_use]
    pub fn total_applications(&self) -> usize {
        self.applications.iter().sum()
    }

    /// Returns `true` if any rule made progress.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total_applications() > 0
    }
}

/// A deduction engine that applies a rule battery in rounds.
///
/// Each round applies every rule once, in battery order. Rounds repeat until
/// the grid is complete, a full round changes nothing, or the round cap is
/// reached. The engine never guesses and never validates; a contradictory
/// grid simply stops making progress and is left for the conflict check.
///
/// # Examples
///
/// ```
/// use std::str::FromStr as _;
///
/// use solvoku_core::Grid;
/// use solvoku_solver::Propagator;
///
/// let mut grid = Grid::from_str(
///     "530070000600195000098000060800060003400803001\
///      700020006060000280000419005000080079",
/// )?;
///
/// let propagator = Propagator::with_standard_rules();
/// let stats = propagator.run(&mut grid);
///
/// // This puzzle falls to deduction alone.
/// assert!(grid.is_complete());
/// assert!(stats.rounds() <= 10);
/// # Ok::<(), solvoku_core::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Propagator {
    rules: Vec<BoxedRule>,
    max_rounds: usize,
}

impl Propagator {
    /// Creates a new propagator with the specified rules.
    ///
    /// Rules are applied in the order they appear in the vector, once per
    /// round. The round cap defaults to [`DEFAULT_MAX_ROUNDS`].
    #[must_use]
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self {
            rules,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Creates a new propagator with the standard rule battery.
    ///
    /// # Examples
    ///
    /// ```
    /// use solvoku_solver::Propagator;
    ///
    /// let propagator = Propagator::with_standard_rules();
    /// assert_eq!(propagator.rules().len(), 4);
    /// ```
    #[must_use]
    pub fn with_standard_rules() -> Self {
        Self::new(rule::standard_rules())
    }

    /// Sets the per-run round cap.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Returns the configured rules in application order.
    ///
    /// The returned slice defines the index mapping used by
    /// [`PropagationStats::applications`].
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Returns the per-run round cap.
    #[must_use]
    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Creates a statistics object aligned with this propagator's rule order.
    #[must_use]
    pub fn new_stats(&self) -> PropagationStats {
        PropagationStats {
            applications: vec![0; self.rules.len()],
            rounds: 0,
        }
    }

    /// Applies every rule once, in battery order.
    ///
    /// # Arguments
    ///
    /// * `grid` - The grid to deduce on
    /// * `stats` - Statistics object to record which rules made progress
    ///
    /// # Returns
    ///
    /// * `true` - At least one rule changed the grid
    /// * `false` - The round was a fixed point; further rounds are futile
    pub fn round(&self, grid: &mut Grid, stats: &mut PropagationStats) -> bool {
        debug_assert_eq!(self.rules.len(), stats.applications.len());

        let mut changed = false;
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.apply(grid) {
                log::trace!("{} made progress", rule.name());
                stats.applications[i] += 1;
                changed = true;
            }
        }
        changed
    }

    /// Runs rounds until the grid is complete, a round changes nothing, or
    /// the round cap is reached.
    ///
    /// Returns the statistics for this run.
    pub fn run(&self, grid: &mut Grid) -> PropagationStats {
        let mut stats = self.new_stats();
        self.run_with_stats(grid, &mut stats);
        stats
    }

    /// Like [`run`](Self::run), but accumulates into an existing statistics
    /// object.
    ///
    /// The round cap applies per call, not to the accumulated total.
    pub fn run_with_stats(&self, grid: &mut Grid, stats: &mut PropagationStats) {
        for _ in 0..self.max_rounds {
            if grid.is_complete() {
                break;
            }
            let changed = self.round(grid, stats);
            stats.rounds += 1;
            if !changed {
                break;
            }
        }
        log::debug!(
            "propagation stopped after {} rounds with {} cells undetermined",
            stats.rounds,
            grid.undetermined_count()
        );
    }
}
