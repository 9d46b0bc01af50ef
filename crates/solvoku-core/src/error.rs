//! Input validation errors.

use derive_more::{Display, Error};

/// Errors raised while constructing a [`Grid`](crate::Grid) from external
/// input.
///
/// Malformed input is rejected at construction, never coerced; each variant
/// points at the first offending cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridError {
    /// The input does not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongLength {
        /// Number of cells found in the input.
        count: usize,
    },
    /// A cell value is outside the range 0-9.
    #[display("cell {index} holds {value}, outside the digit range 0-9")]
    ValueOutOfRange {
        /// Row-major index of the offending cell.
        index: usize,
        /// The rejected value.
        value: u8,
    },
    /// A character in a grid string is neither a digit nor a blank marker.
    #[display("unexpected character {found:?} at cell {index}")]
    UnexpectedCharacter {
        /// Row-major index of the offending cell.
        index: usize,
        /// The rejected character.
        found: char,
    },
    /// The clue mask does not cover exactly 81 cells.
    #[display("expected a clue mask of 81 entries, found {count}")]
    MaskLength {
        /// Number of mask entries found.
        count: usize,
    },
    /// The clue mask marks a blank cell as a given.
    #[display("cell {index} is marked as a clue but holds no digit")]
    MaskedBlank {
        /// Row-major index of the offending cell.
        index: usize,
    },
}
