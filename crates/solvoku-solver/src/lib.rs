//! Solving engine for Solvoku puzzles.
//!
//! The pipeline has three layers:
//!
//! - [`rule`]: the deduction rules. Each implements [`Rule`](rule::Rule)
//!   and sweeps the grid for every instance of its pattern in one call.
//! - [`Propagator`]: applies the rule battery in rounds until a round
//!   changes nothing, the grid completes, or the round cap is reached.
//! - [`search`]: minimum-remaining-values backtracking over whatever cells
//!   the rules leave open.
//!
//! [`Solver`] chains the layers behind a single entry point and reports
//! [`SolveStats`] describing how the work split between them.
//!
//! # Examples
//!
//! ```
//! use solvoku_core::Grid;
//! use solvoku_solver::Solver;
//!
//! let grid: Grid =
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
//!         .parse()?;
//!
//! let solver = Solver::with_standard_rules();
//! let solution = solver.solve(&grid)?;
//!
//! assert!(solution.is_complete());
//! assert!(!solution.has_conflict());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    engine::{DEFAULT_MAX_ROUNDS, PropagationStats, Propagator},
    error::SolveError,
    solver::{SolveStats, Solver},
};

mod engine;
mod error;
pub mod rule;
pub mod search;
mod solver;
pub mod testing;
