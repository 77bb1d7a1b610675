//! Static metadata for every exercise in the crate.

use crate::error::{DrillError, Result};
use serde::{Deserialize, Serialize};

/// Algorithmic pattern an exercise is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    /// Hashed-key membership and counting
    Hashing,
    /// Cursors converging from both ends
    TwoPointers,
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pattern::Hashing => write!(f, "Arrays & Hashing"),
            Pattern::TwoPointers => write!(f, "Two Pointers"),
        }
    }
}

/// Time and space bounds, in big-O notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
}

/// One catalogued exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Problem {
    /// Position in the problem list
    pub number: u16,
    pub slug: &'static str,
    pub title: &'static str,
    pub pattern: Pattern,
    pub complexity: Complexity,
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04} {:<36} {:<17} time {:<12} space {}",
            self.number,
            self.title,
            self.pattern.to_string(),
            self.complexity.time,
            self.complexity.space
        )
    }
}

const fn problem(
    number: u16,
    slug: &'static str,
    title: &'static str,
    pattern: Pattern,
    time: &'static str,
    space: &'static str,
) -> Problem {
    Problem {
        number,
        slug,
        title,
        pattern,
        complexity: Complexity { time, space },
    }
}

static PROBLEMS: [Problem; 10] = [
    problem(1, "contains-duplicate", "Contains Duplicate", Pattern::Hashing, "O(n)", "O(n)"),
    problem(2, "valid-anagram", "Valid Anagram", Pattern::Hashing, "O(n)", "O(1)"),
    problem(4, "group-anagrams", "Group Anagrams", Pattern::Hashing, "O(n * m)", "O(n * m)"),
    problem(5, "top-k-frequent-elements", "Top K Frequent Elements", Pattern::Hashing, "O(n)", "O(n)"),
    problem(6, "encode-and-decode-strings", "Encode and Decode Strings", Pattern::Hashing, "O(n)", "O(n)"),
    problem(8, "valid-sudoku", "Valid Sudoku", Pattern::Hashing, "O(1)", "O(1)"),
    problem(9, "longest-consecutive-sequence", "Longest Consecutive Sequence", Pattern::Hashing, "O(n)", "O(n)"),
    problem(10, "valid-palindrome", "Valid Palindrome", Pattern::TwoPointers, "O(n)", "O(1)"),
    problem(11, "two-sum-ii-input-array-is-sorted", "Two Sum II - Input Array Is Sorted", Pattern::TwoPointers, "O(n)", "O(1)"),
    problem(12, "3sum", "3Sum", Pattern::TwoPointers, "O(n^2)", "O(1)"),
];

/// All exercises, ordered by number.
pub fn catalog() -> &'static [Problem] {
    &PROBLEMS
}

/// Look up an exercise by slug.
pub fn find(slug: &str) -> Result<&'static Problem> {
    PROBLEMS
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| DrillError::UnknownProblem {
            slug: slug.to_string(),
        })
}
