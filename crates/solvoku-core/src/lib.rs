//! Core data model for the Solvoku solving engine.
//!
//! This crate holds the grid state that the solver crates operate on, with no
//! solving logic of its own beyond the consistency check. It is organized
//! around a handful of small value types:
//!
//! - [`digit`]: type-safe digits 1-9
//! - [`digit_set`]: 9-bit candidate sets with ascending iteration
//! - [`position`]: row-major cell positions and the static peer tables
//! - [`unit`]: the 27 rows, columns, and blocks
//! - [`grid`]: the 81-cell grid tracking values, candidates, and clue origin
//! - [`conflict`]: duplicate detection across units, the pipeline's sole
//!   validity oracle
//! - [`error`]: input validation errors
//!
//! # Examples
//!
//! ```
//! use solvoku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::empty();
//! grid.assign(Position::new(4, 4), Digit::D5);
//!
//! // Assignment strips the digit from every peer's candidates.
//! assert!(!grid.candidates(Position::new(4, 8)).contains(Digit::D5));
//! assert!(!grid.has_conflict());
//! ```

pub mod conflict;
pub mod digit;
pub mod digit_set;
pub mod error;
pub mod grid;
pub mod position;
pub mod unit;

pub use self::{
    conflict::Conflict,
    digit::Digit,
    digit_set::DigitSet,
    error::GridError,
    grid::{CellState, Grid},
    position::Position,
    unit::Unit,
};
