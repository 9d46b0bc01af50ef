//! Rows, columns, and blocks.

use std::fmt::{self, Display};

use crate::Position;

/// A unit: a row, column, or 3×3 block — any group of nine cells that must
/// contain each digit exactly once.
///
/// The 27 units are fixed by grid geometry; their member tables are built
/// once at compile time and shared read-only by every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// A row, identified by its row index (0-8).
    Row(u8),
    /// A column, identified by its column index (0-8).
    Column(u8),
    /// A 3×3 block, identified by its block index (0-8, left to right, top
    /// to bottom).
    Block(u8),
}

impl Unit {
    /// The nine rows, top to bottom.
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row(i as u8);
            i += 1;
        }
        rows
    };

    /// The nine columns, left to right.
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column(i as u8);
            i += 1;
        }
        columns
    };

    /// The nine blocks, left to right, top to bottom.
    pub const BLOCKS: [Self; 9] = {
        let mut blocks = [Self::Block(0); 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            blocks[i] = Self::Block(i as u8);
            i += 1;
        }
        blocks
    };

    /// All 27 units in row, column, block order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row(0); 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row(i as u8);
            all[i + 9] = Self::Column(i as u8);
            all[i + 18] = Self::Block(i as u8);
            i += 1;
        }
        all
    };

    /// Returns the nine member positions of this unit, in reading order.
    #[must_use]
    pub const fn positions(self) -> [Position; 9] {
        MEMBERS[self.table_index()]
    }

    /// Returns `true` if `pos` belongs to this unit.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            Self::Row(row) => pos.row() == row,
            Self::Column(col) => pos.col() == col,
            Self::Block(block) => pos.block() == block,
        }
    }

    const fn table_index(self) -> usize {
        match self {
            Self::Row(row) => row as usize,
            Self::Column(col) => 9 + col as usize,
            Self::Block(block) => 18 + block as usize,
        }
    }
}

/// Member positions for each unit, indexed rows 0-8, columns 9-17, blocks
/// 18-26.
const MEMBERS: [[Position; 9]; 27] = {
    let mut table = [[Position::from_index(0); 9]; 27];
    let mut i = 0;
    #[expect(clippy::cast_possible_truncation)]
    while i < 9 {
        let mut k = 0;
        while k < 9 {
            table[i][k] = Position::new(i as u8, k as u8);
            table[i + 9][k] = Position::new(k as u8, i as u8);
            table[i + 18][k] = Position::from_block(i as u8, k as u8);
            k += 1;
        }
        i += 1;
    }
    table
};

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(row) => write!(f, "row {}", row + 1),
            Self::Column(col) => write!(f, "column {}", col + 1),
            Self::Block(block) => write!(f, "block {}", block + 1),
        }
    }
}
