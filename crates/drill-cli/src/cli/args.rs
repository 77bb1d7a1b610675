use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "drill",
    version,
    about = "Run array and string scanning exercises from the command line"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to a JSON config file
    #[arg(long, global = true, env = "DRILL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List every exercise
    List,
    /// Show one exercise by slug
    Show(ShowArgs),
    /// Check a 9x9 board for row, column and box conflicts
    Board(BoardArgs),
    /// Length of the longest run of consecutive integers
    LongestRun(ValuesArgs),
    /// Alphanumeric, case-insensitive palindrome check
    Palindrome(TextArgs),
    /// 1-based positions of two sorted values summing to a target
    PairSum(PairSumArgs),
    /// All unique triples summing to zero
    TripleSum(ValuesArgs),
    /// Whether any value repeats
    Duplicate(ValuesArgs),
    /// Whether two lowercase words are anagrams
    Anagram(AnagramArgs),
    /// Group lowercase words into anagram sets
    GroupAnagrams(WordsArgs),
    /// The k most frequent values
    TopK(TopKArgs),
    /// Length-prefix encode a list of strings
    Encode(WordsArgs),
    /// Decode a length-prefixed string list
    Decode(TextArgs),
}

impl Command {
    /// Catalog slug of the exercise this command runs, if any.
    pub fn slug(&self) -> Option<&'static str> {
        match self {
            Command::List | Command::Show(_) => None,
            Command::Board(_) => Some("valid-sudoku"),
            Command::LongestRun(_) => Some("longest-consecutive-sequence"),
            Command::Palindrome(_) => Some("valid-palindrome"),
            Command::PairSum(_) => Some("two-sum-ii-input-array-is-sorted"),
            Command::TripleSum(_) => Some("3sum"),
            Command::Duplicate(_) => Some("contains-duplicate"),
            Command::Anagram(_) => Some("valid-anagram"),
            Command::GroupAnagrams(_) => Some("group-anagrams"),
            Command::TopK(_) => Some("top-k-frequent-elements"),
            Command::Encode(_) | Command::Decode(_) => Some("encode-and-decode-strings"),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    pub slug: String,
}

#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// 81 characters in row-major order; '.' or '0' for empty cells
    #[arg(conflicts_with = "rows", required_unless_present = "rows")]
    pub board: Option<String>,

    /// Nine row strings of nine characters each
    #[arg(long, num_args = 9, value_name = "ROW")]
    pub rows: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ValuesArgs {
    #[arg(allow_negative_numbers = true, value_name = "INT")]
    pub values: Vec<i32>,
}

#[derive(Args, Debug, Clone)]
pub struct TextArgs {
    pub text: String,
}

#[derive(Args, Debug, Clone)]
pub struct PairSumArgs {
    #[arg(long, short, allow_negative_numbers = true)]
    pub target: i32,

    /// Values in non-decreasing order
    #[arg(allow_negative_numbers = true, value_name = "INT")]
    pub values: Vec<i32>,
}

#[derive(Args, Debug, Clone)]
pub struct AnagramArgs {
    pub first: String,
    pub second: String,
}

#[derive(Args, Debug, Clone)]
pub struct WordsArgs {
    pub words: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct TopKArgs {
    #[arg(short)]
    pub k: usize,

    #[arg(allow_negative_numbers = true, value_name = "INT")]
    pub values: Vec<i32>,
}

#[cfg(test)]
mod tests;
