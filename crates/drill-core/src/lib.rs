//! Array and string scanning exercises.
//!
//! Every operation is a pure function over an in-memory slice or string:
//! hashed membership sets for the board, run, duplicate, anagram and
//! frequency problems, and converging cursors for the palindrome, pair-sum
//! and triple-sum problems. Inputs that break an exercise's constraints are
//! rejected with [`DrillError`] instead of producing a degenerate answer.

pub mod anagram;
pub mod board;
pub mod catalog;
pub mod codec;
pub mod duplicate;
pub mod error;
pub mod frequency;
pub mod pair_sum;
pub mod palindrome;
pub mod run;
pub mod triple_sum;

pub use anagram::{group_anagrams, is_anagram};
pub use board::{is_valid_board, Board, Cell, Unit};
pub use catalog::{catalog, find, Complexity, Pattern, Problem};
pub use codec::{decode, encode};
pub use duplicate::has_duplicate;
pub use error::{DrillError, Result};
pub use frequency::top_k_frequent;
pub use pair_sum::two_sum_sorted;
pub use palindrome::is_palindrome;
pub use run::longest_consecutive_run;
pub use triple_sum::three_sum_zero;
