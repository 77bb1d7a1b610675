//! Error type shared by every exercise that can reject its input.

/// Errors raised when an input breaks an exercise's stated constraints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrillError {
    /// The board is not exactly 9 rows of 9 cells.
    #[error("board must be 9x9, got {rows} rows (first bad row: {bad_row:?})")]
    BoardShape { rows: usize, bad_row: Option<usize> },

    /// A board cell holds something other than a digit or an empty marker.
    #[error("invalid cell {found:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, found: char },

    /// A digit written into a board is outside `1..=9`.
    #[error("digit {digit} at row {row}, column {col} is outside 1..=9")]
    DigitOutOfRange { row: usize, col: usize, digit: u8 },

    /// Input to a sorted-only exercise is out of order.
    #[error("input is not sorted: value at index {index} is smaller than its predecessor")]
    Unsorted { index: usize },

    /// Anagram inputs must be lowercase ASCII letters.
    #[error("expected lowercase ascii letters, found {found:?}")]
    NotLowercase { found: char },

    /// More results were requested than distinct values exist.
    #[error("k = {k} exceeds the number of distinct values ({distinct})")]
    KOutOfRange { k: usize, distinct: usize },

    /// Encoded string list is malformed.
    #[error("decode failed at byte {offset}: {reason}")]
    Decode { offset: usize, reason: String },

    /// No catalog entry with this slug.
    #[error("unknown problem: {slug}")]
    UnknownProblem { slug: String },
}

/// Result alias for fallible exercises.
pub type Result<T> = std::result::Result<T, DrillError>;
