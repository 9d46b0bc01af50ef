//! The 81-cell grid: values, candidates, and clue tracking.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{Digit, DigitSet, GridError, Position, Unit};

/// The solving state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// A clue from the puzzle input; never changed by solving.
    Given(Digit),
    /// A digit determined by a deduction rule or an accepted guess.
    Solved(Digit),
    /// An open cell, holding the digits not yet ruled out for it.
    Pending(DigitSet),
}

impl CellState {
    /// Returns the determined digit, or `None` for a pending cell.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Solved(digit) => Some(digit),
            Self::Pending(_) => None,
        }
    }

    /// Returns `true` once the cell holds a digit.
    #[must_use]
    pub const fn is_determined(self) -> bool {
        !matches!(self, Self::Pending(_))
    }

    /// Returns the candidate set of a pending cell, or the empty set for a
    /// determined one.
    #[must_use]
    pub const fn candidates(self) -> DigitSet {
        match self {
            Self::Given(_) | Self::Solved(_) => DigitSet::EMPTY,
            Self::Pending(set) => set,
        }
    }
}

/// A 9×9 Sudoku grid tracking per-cell values, candidates, and clue origin.
///
/// A grid is built once per solve from the input clues: clue cells start
/// [`Given`](CellState::Given), all others start
/// [`Pending`](CellState::Pending) with every digit a peer clue has not
/// already excluded. From there it is mutated only by [`assign`](Self::assign)
/// (which also strips the digit from all 20 peers) and
/// [`eliminate`](Self::eliminate) — both monotonic. `Grid` is a small value
/// type; the search undoes tentative work by dropping a clone rather than by
/// reverting in place.
///
/// # Examples
///
/// ```
/// use solvoku_core::{Digit, Grid, Position};
///
/// let grid: Grid = "
///     53. .7. ...
///     6.. 195 ...
///     .98 ... .6.
///     8.. .6. ..3
///     4.. 8.3 ..1
///     7.. .2. ..6
///     .6. ... 28.
///     ... 419 ..5
///     ... .8. .79
/// "
/// .parse()?;
///
/// assert_eq!(grid.value(Position::new(0, 0)), Some(Digit::D5));
/// assert!(grid.is_clue(Position::new(0, 0)));
/// // 5 is excluded from every peer of the top-left cell
/// assert!(!grid.candidates(Position::new(0, 2)).contains(Digit::D5));
/// # Ok::<(), solvoku_core::GridError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [CellState; 81],
}

impl Grid {
    /// Creates a grid with no clues: every cell pending with all nine
    /// candidates.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [CellState::Pending(DigitSet::FULL); 81],
        }
    }

    /// Creates a grid from 81 values in row-major order, with `0` meaning
    /// blank and every nonzero value taken as a clue.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::WrongLength`] unless `digits` has exactly 81
    /// entries, or [`GridError::ValueOutOfRange`] if an entry exceeds 9.
    pub fn from_digits(digits: &[u8]) -> Result<Self, GridError> {
        let clues = Self::check_digits(digits)?;
        Ok(Self::from_clues(&clues))
    }

    /// Creates a grid from 81 values and an explicit clue mask: only cells
    /// the mask marks become clues, everything else starts blank.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::WrongLength`] or [`GridError::MaskLength`] on a
    /// length mismatch, [`GridError::ValueOutOfRange`] for a value above 9,
    /// and [`GridError::MaskedBlank`] if the mask marks a cell holding `0`.
    pub fn from_digits_masked(digits: &[u8], given: &[bool]) -> Result<Self, GridError> {
        let mut clues = Self::check_digits(digits)?;
        if given.len() != 81 {
            return Err(GridError::MaskLength { count: given.len() });
        }
        for (index, (clue, &is_given)) in clues.iter_mut().zip(given).enumerate() {
            if is_given {
                if clue.is_none() {
                    return Err(GridError::MaskedBlank { index });
                }
            } else {
                *clue = None;
            }
        }
        Ok(Self::from_clues(&clues))
    }

    fn check_digits(digits: &[u8]) -> Result<[Option<Digit>; 81], GridError> {
        if digits.len() != 81 {
            return Err(GridError::WrongLength {
                count: digits.len(),
            });
        }
        let mut clues = [None; 81];
        for (index, (&value, clue)) in digits.iter().zip(&mut clues).enumerate() {
            if value > 9 {
                return Err(GridError::ValueOutOfRange { index, value });
            }
            *clue = Digit::new(value);
        }
        Ok(clues)
    }

    /// Pins the clues, then prunes candidates in one pass so that late clues
    /// also reach cells earlier in reading order.
    fn from_clues(clues: &[Option<Digit>; 81]) -> Self {
        let mut grid = Self::empty();
        for (cell, clue) in grid.cells.iter_mut().zip(clues) {
            if let Some(digit) = *clue {
                *cell = CellState::Given(digit);
            }
        }
        for pos in Position::ALL {
            if let Some(digit) = grid.cells[pos.index()].digit() {
                grid.eliminate_from_peers(pos, digit);
            }
        }
        grid
    }

    /// Returns the full state of a cell.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Returns the determined digit at `pos`, or `None` for a pending cell.
    #[must_use]
    pub const fn value(&self, pos: Position) -> Option<Digit> {
        self.cell(pos).digit()
    }

    /// Returns the candidates still open at `pos` (empty for a determined
    /// cell).
    #[must_use]
    pub const fn candidates(&self, pos: Position) -> DigitSet {
        self.cell(pos).candidates()
    }

    /// Returns `true` if the cell at `pos` is a clue from the input.
    #[must_use]
    pub const fn is_clue(&self, pos: Position) -> bool {
        matches!(self.cell(pos), CellState::Given(_))
    }

    /// Returns `true` once the cell at `pos` holds a digit.
    #[must_use]
    pub const fn is_determined(&self, pos: Position) -> bool {
        self.cell(pos).is_determined()
    }

    /// Fixes `digit` at `pos` and removes it from the candidates of all 20
    /// peers.
    ///
    /// The caller picks the digit from the cell's own candidate set (the
    /// rules and the search both do), so assignment itself never validates;
    /// a contradictory grid is caught by [`find_conflict`](Self::find_conflict).
    pub fn assign(&mut self, pos: Position, digit: Digit) {
        debug_assert!(
            !self.is_determined(pos),
            "{pos} is already determined, cannot assign {digit}"
        );
        self.cells[pos.index()] = CellState::Solved(digit);
        self.eliminate_from_peers(pos, digit);
    }

    /// Removes `digit` from the candidates at `pos`. Returns `true` if the
    /// candidate was present; determined cells are untouched.
    pub fn eliminate(&mut self, pos: Position, digit: Digit) -> bool {
        match &mut self.cells[pos.index()] {
            CellState::Pending(set) => set.remove(digit),
            CellState::Given(_) | CellState::Solved(_) => false,
        }
    }

    fn eliminate_from_peers(&mut self, pos: Position, digit: Digit) {
        for &peer in pos.peers() {
            self.eliminate(peer, digit);
        }
    }

    /// Returns the positions still undetermined, in reading order.
    pub fn undetermined(&self) -> impl Iterator<Item = Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| !self.is_determined(pos))
    }

    /// Returns the number of undetermined cells.
    #[must_use]
    pub fn undetermined_count(&self) -> usize {
        self.undetermined().count()
    }

    /// Returns `true` once every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_determined())
    }

    /// Returns the set of digits determined somewhere in `unit`.
    #[must_use]
    pub fn unit_digits(&self, unit: Unit) -> DigitSet {
        let mut digits = DigitSet::EMPTY;
        for pos in unit.positions() {
            if let Some(digit) = self.value(pos) {
                digits.insert(digit);
            }
        }
        digits
    }

    /// Returns the 81 cell values in row-major order, `0` for blanks.
    #[must_use]
    pub fn digits(&self) -> [u8; 81] {
        let mut digits = [0; 81];
        for (value, cell) in digits.iter_mut().zip(&self.cells) {
            if let Some(digit) = cell.digit() {
                *value = digit.get();
            }
        }
        digits
    }

    /// Renders the grid as a single 81-character line, `0` for blanks.
    ///
    /// This is the plain output contract; [`Display`] gives the
    /// human-readable form.
    #[must_use]
    pub fn to_line(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell.digit() {
                Some(digit) => digit.to_char(),
                None => '0',
            })
            .collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses a grid from 81 significant characters: `1`-`9` for clues and
    /// `0`, `.`, or `_` for blanks, with all whitespace ignored. Both the
    /// compact one-line form and the nine-line block form parse.
    fn from_str(s: &str) -> Result<Self, GridError> {
        let mut clues = [None; 81];
        let mut index = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let clue = match c {
                '0' | '.' | '_' => None,
                _ => Some(
                    Digit::from_char(c)
                        .ok_or(GridError::UnexpectedCharacter { index, found: c })?,
                ),
            };
            if index < 81 {
                clues[index] = clue;
            }
            index += 1;
        }
        if index != 81 {
            return Err(GridError::WrongLength { count: index });
        }
        Ok(Self::from_clues(&clues))
    }
}

impl Display for Grid {
    /// Nine rows of three space-separated triplets, `.` for blanks. The
    /// output parses back into an equal grid.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row > 0 {
                f.write_char('\n')?;
            }
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    f.write_char(' ')?;
                }
                match self.value(Position::new(row, col)) {
                    Some(digit) => f.write_char(digit.to_char())?,
                    None => f.write_char('.')?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({})", self.to_line())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    // The classic 30-clue puzzle that appears throughout the tests.
    const EASY: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn empty_grid_has_all_candidates() {
        let grid = Grid::empty();
        assert!(!grid.is_complete());
        assert_eq!(grid.undetermined_count(), 81);
        for pos in Position::ALL {
            assert_eq!(grid.candidates(pos), DigitSet::FULL);
            assert!(!grid.is_clue(pos));
        }
    }

    #[test]
    fn from_digits_marks_nonzero_values_as_clues() {
        let mut digits = [0_u8; 81];
        digits[0] = 5;
        digits[80] = 9;
        let grid = Grid::from_digits(&digits).unwrap();

        assert_eq!(grid.value(Position::new(0, 0)), Some(Digit::D5));
        assert!(grid.is_clue(Position::new(0, 0)));
        assert!(grid.is_clue(Position::new(8, 8)));
        assert_eq!(grid.undetermined_count(), 79);
        assert_eq!(grid.digits(), digits);
    }

    #[test]
    fn construction_prunes_peer_candidates() {
        let mut digits = [0_u8; 81];
        digits[0] = 5; // r1c1
        let grid = Grid::from_digits(&digits).unwrap();

        // Same row, column, and block lose 5 as a candidate.
        assert!(!grid.candidates(Position::new(0, 8)).contains(Digit::D5));
        assert!(!grid.candidates(Position::new(8, 0)).contains(Digit::D5));
        assert!(!grid.candidates(Position::new(2, 2)).contains(Digit::D5));
        // Unrelated cells keep it.
        assert!(grid.candidates(Position::new(3, 3)).contains(Digit::D5));
    }

    #[test]
    fn late_clues_prune_earlier_cells() {
        let mut digits = [0_u8; 81];
        digits[80] = 3; // r9c9, last cell in reading order
        let grid = Grid::from_digits(&digits).unwrap();
        assert!(!grid.candidates(Position::new(0, 8)).contains(Digit::D3));
    }

    #[test]
    fn from_digits_rejects_bad_shapes() {
        assert_eq!(
            Grid::from_digits(&[0; 80]),
            Err(GridError::WrongLength { count: 80 })
        );
        assert_eq!(
            Grid::from_digits(&[0; 82]),
            Err(GridError::WrongLength { count: 82 })
        );

        let mut digits = [0_u8; 81];
        digits[13] = 10;
        assert_eq!(
            Grid::from_digits(&digits),
            Err(GridError::ValueOutOfRange {
                index: 13,
                value: 10
            })
        );
    }

    #[test]
    fn masked_construction_drops_unmasked_values() {
        let mut digits = [0_u8; 81];
        digits[0] = 5;
        digits[1] = 7;
        let mut given = [false; 81];
        given[0] = true;

        let grid = Grid::from_digits_masked(&digits, &given).unwrap();
        assert_eq!(grid.value(Position::new(0, 0)), Some(Digit::D5));
        // Unmasked value at index 1 is not a clue and not placed.
        assert_eq!(grid.value(Position::new(0, 1)), None);
        assert!(!grid.is_clue(Position::new(0, 1)));
    }

    #[test]
    fn masked_construction_rejects_bad_masks() {
        let digits = [0_u8; 81];
        assert_eq!(
            Grid::from_digits_masked(&digits, &[false; 80]),
            Err(GridError::MaskLength { count: 80 })
        );

        let mut given = [false; 81];
        given[4] = true;
        assert_eq!(
            Grid::from_digits_masked(&digits, &given),
            Err(GridError::MaskedBlank { index: 4 })
        );
    }

    #[test]
    fn parses_compact_and_block_forms() {
        let compact: Grid = EASY.parse().unwrap();
        let block: Grid = "
            53. .7. ...
            6.. 195 ...
            .98 ... .6.
            8.. .6. ..3
            4.. 8.3 ..1
            7.. .2. ..6
            .6. ... 28.
            ... 419 ..5
            ... .8. .79
        "
        .parse()
        .unwrap();
        assert_eq!(compact, block);

        // Underscores work as blanks too.
        let underscored: Grid = EASY.replace('0', "_").parse().unwrap();
        assert_eq!(compact, underscored);
    }

    #[test]
    fn parse_rejects_malformed_strings() {
        assert_eq!(
            "123".parse::<Grid>(),
            Err(GridError::WrongLength { count: 3 })
        );
        let long = "0".repeat(82);
        assert_eq!(
            long.parse::<Grid>(),
            Err(GridError::WrongLength { count: 82 })
        );
        let mut bad = EASY.to_owned();
        bad.replace_range(5..6, "x");
        assert_eq!(
            bad.parse::<Grid>(),
            Err(GridError::UnexpectedCharacter {
                index: 5,
                found: 'x'
            })
        );
    }

    #[test]
    fn assign_determines_the_cell_and_prunes_peers() {
        let mut grid = Grid::empty();
        let pos = Position::new(4, 4);
        grid.assign(pos, Digit::D7);

        assert_eq!(grid.value(pos), Some(Digit::D7));
        assert!(!grid.is_clue(pos));
        assert_eq!(grid.candidates(pos), DigitSet::EMPTY);
        for &peer in pos.peers() {
            assert!(!grid.candidates(peer).contains(Digit::D7));
            assert_eq!(grid.candidates(peer).len(), 8);
        }
    }

    #[test]
    fn eliminate_only_touches_pending_cells() {
        let mut grid = Grid::empty();
        let pos = Position::new(2, 3);

        assert!(grid.eliminate(pos, Digit::D1));
        assert!(!grid.eliminate(pos, Digit::D1));
        assert_eq!(grid.candidates(pos).len(), 8);

        grid.assign(pos, Digit::D9);
        assert!(!grid.eliminate(pos, Digit::D2));
        assert_eq!(grid.value(pos), Some(Digit::D9));
    }

    #[test]
    fn unit_digits_collects_determined_values() {
        let grid: Grid = EASY.parse().unwrap();
        let top_row = grid.unit_digits(Unit::Row(0));
        assert_eq!(
            top_row.iter().collect::<Vec<_>>(),
            [Digit::D3, Digit::D5, Digit::D7]
        );
        assert_eq!(grid.unit_digits(Unit::Block(4)).len(), 4);
    }

    #[test]
    fn display_round_trips_through_parse() {
        let grid: Grid = EASY.parse().unwrap();
        let rendered = grid.to_string();
        assert!(rendered.starts_with("53. .7. ..."));
        let reparsed: Grid = rendered.parse().unwrap();
        assert_eq!(grid, reparsed);
    }

    #[test]
    fn line_output_matches_input_digits() {
        let grid: Grid = EASY.parse().unwrap();
        assert_eq!(grid.to_line(), EASY);
        assert_eq!(format!("{grid:?}"), format!("Grid({EASY})"));
    }

    proptest! {
        /// Any clue pattern round-trips through the line form.
        #[test]
        fn line_round_trips(values in prop::collection::vec(0_u8..=9, 81)) {
            let grid = Grid::from_digits(&values).unwrap();
            let line = grid.to_line();
            let reparsed: Grid = line.parse().unwrap();
            prop_assert_eq!(&grid, &reparsed);
            prop_assert_eq!(line, values.iter().map(|v| char::from(b'0' + v)).collect::<String>());
        }

        /// Construction never leaves a pending cell holding a digit one of
        /// its determined peers already owns.
        #[test]
        fn construction_candidates_respect_peers(values in prop::collection::vec(0_u8..=9, 81)) {
            let grid = Grid::from_digits(&values).unwrap();
            for pos in Position::ALL {
                let candidates = grid.candidates(pos);
                for &peer in pos.peers() {
                    if let Some(digit) = grid.value(peer) {
                        prop_assert!(
                            !candidates.contains(digit),
                            "{} still offers {} owned by peer {}",
                            pos, digit, peer,
                        );
                    }
                }
            }
        }
    }
}
