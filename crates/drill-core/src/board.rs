//! 9x9 Sudoku board and the row/column/box uniqueness check.

use crate::error::{DrillError, Result};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Side length of the board.
pub const SIZE: usize = 9;
/// Side length of a box.
pub const BOX_SIZE: usize = 3;

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// A digit in `1..=9`
    Digit(u8),
}

impl Cell {
    /// Parse one board character. `.` and `0` mean empty.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '0' => Some(Cell::Empty),
            '1'..='9' => Some(Cell::Digit(c as u8 - b'0')),
            _ => None,
        }
    }

    pub fn digit(&self) -> Option<u8> {
        match self {
            Cell::Empty => None,
            Cell::Digit(d) => Some(*d),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Digit(d) => (b'0' + d) as char,
        }
    }
}

/// A constraint unit. Paired with a digit it forms the membership key used
/// by [`is_valid_board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Row(u8),
    Column(u8),
    Box(u8),
}

impl Unit {
    /// The three units containing `(row, col)`.
    pub fn containing(row: usize, col: usize) -> [Unit; 3] {
        let box_idx = (row / BOX_SIZE) * BOX_SIZE + col / BOX_SIZE;
        [
            Unit::Row(row as u8),
            Unit::Column(col as u8),
            Unit::Box(box_idx as u8),
        ]
    }
}

/// A well-formed 9x9 board. Cells are only written through `from_rows`,
/// `from_string` and `set`, all of which reject digits outside `1..=9`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// An all-empty board.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a board from 9 row strings of 9 characters each.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != SIZE {
            return Err(DrillError::BoardShape {
                rows: rows.len(),
                bad_row: None,
            });
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != SIZE {
                return Err(DrillError::BoardShape {
                    rows: rows.len(),
                    bad_row: Some(row),
                });
            }
            for (col, c) in line.chars().enumerate() {
                board.cells[row][col] = Cell::from_char(c)
                    .ok_or(DrillError::InvalidCell { row, col, found: c })?;
            }
        }
        Ok(board)
    }

    /// Parse an 81-character string in row-major order. Whitespace is
    /// skipped so a board laid out over several lines parses too.
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != SIZE * SIZE {
            return Err(DrillError::BoardShape {
                rows: chars.len() / SIZE,
                bad_row: (chars.len() % SIZE != 0).then_some(chars.len() / SIZE),
            });
        }

        let mut board = Board::empty();
        for (i, &c) in chars.iter().enumerate() {
            let (row, col) = (i / SIZE, i % SIZE);
            board.cells[row][col] =
                Cell::from_char(c).ok_or(DrillError::InvalidCell { row, col, found: c })?;
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Write one cell. Digits outside `1..=9` are rejected and leave the
    /// board untouched.
    ///
    /// Panics if `row` or `col` is not below 9, like [`Board::get`].
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        if let Cell::Digit(digit) = cell {
            if !(1..=9).contains(&digit) {
                return Err(DrillError::DigitOutOfRange { row, col, digit });
            }
        }
        self.cells[row][col] = cell;
        Ok(())
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// Row-major string, `.` for empty cells.
    pub fn to_line(&self) -> String {
        self.cells.iter().flatten().map(|c| c.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 && row % BOX_SIZE == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (col, cell) in cells.iter().enumerate() {
                if col > 0 && col % BOX_SIZE == 0 {
                    write!(f, "| ")?;
                }
                write!(f, "{}", cell.to_char())?;
                if col + 1 < SIZE {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// True iff no digit repeats within any row, column, or 3x3 box.
///
/// Only checks the current placement; it does not ask whether the board can
/// be completed.
pub fn is_valid_board(board: &Board) -> bool {
    let mut seen: HashSet<(Unit, u8)> = HashSet::with_capacity(SIZE * SIZE * 3);

    for row in 0..SIZE {
        for col in 0..SIZE {
            let Some(digit) = board.get(row, col).digit() else {
                continue;
            };
            for unit in Unit::containing(row, col) {
                if !seen.insert((unit, digit)) {
                    debug!(row, col, digit, ?unit, "duplicate digit");
                    return false;
                }
            }
        }
    }

    true
}
