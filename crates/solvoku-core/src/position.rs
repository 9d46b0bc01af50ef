//! Cell positions and grid geometry.

use std::fmt::{self, Display};

/// A cell position on the 9×9 grid, stored as a row-major index 0-80.
///
/// Row, column, and block coordinates are derived arithmetically:
/// `index = row·9 + column` and `block = (row/3)·3 + column/3`, with blocks
/// numbered left to right, top to bottom.
///
/// Positions order by index, so iterating [`Position::ALL`] scans the grid
/// row by row.
///
/// # Examples
///
/// ```
/// use solvoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.index(), 43);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.block(), 5);
/// assert_eq!(pos.to_string(), "r5c8");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(u8);

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self(0); 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a position from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self(row * 9 + col)
    }

    /// Creates a position from its row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81);
        Self(index)
    }

    /// Creates a position from a block index and a slot within the block
    /// (both 0-8, row-major within the block).
    ///
    /// # Panics
    ///
    /// Panics if `block` or `slot` is not in the range 0-8.
    #[must_use]
    pub const fn from_block(block: u8, slot: u8) -> Self {
        assert!(block < 9 && slot < 9);
        Self::new((block / 3) * 3 + slot / 3, (block % 3) * 3 + slot % 3)
    }

    /// Returns the row-major index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 9
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 9
    }

    /// Returns the index of the 3×3 block containing this position (0-8).
    #[must_use]
    pub const fn block(self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }

    /// Returns the row-major slot of this position within its block (0-8).
    #[must_use]
    pub const fn block_slot(self) -> u8 {
        (self.row() % 3) * 3 + self.col() % 3
    }

    /// Returns the 20 positions sharing a row, column, or block with this one.
    #[must_use]
    pub fn peers(self) -> &'static [Self; 20] {
        &PEERS[self.index()]
    }

    /// Returns `true` if `other` shares a row, column, or block with `self`.
    #[must_use]
    pub const fn sees(self, other: Self) -> bool {
        self.0 != other.0
            && (self.row() == other.row()
                || self.col() == other.col()
                || self.block() == other.block())
    }
}

/// Peer lookup: for every position, the 20 cells it shares a unit with.
const PEERS: [[Position; 20]; 81] = {
    let mut table = [[Position(0); 20]; 81];
    let mut i = 0;
    while i < 81 {
        let pos = Position::ALL[i];
        let mut count = 0;
        let mut j = 0;
        while j < 81 {
            let other = Position::ALL[j];
            if pos.sees(other) {
                table[i][count] = other;
                count += 1;
            }
            j += 1;
        }
        assert!(count == 20);
        i += 1;
    }
    table
};

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row() + 1, self.col() + 1)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}
