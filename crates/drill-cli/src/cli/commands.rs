use super::args::{BoardArgs, Command};
use crate::config::OutputFormat;
use anyhow::{Context, Result};
use drill_core::{self as drill, Board};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

/// Result of one command, ready to print either way
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<&'static str>,
    pub answer: Value,
    #[serde(skip)]
    pub text: String,
}

impl Answer {
    fn new(problem: Option<&'static str>, answer: Value, text: impl Into<String>) -> Self {
        Self {
            problem,
            answer,
            text: text.into(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.text.clone()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

pub fn dispatch(cmd: Command) -> Result<Answer> {
    let slug = cmd.slug();
    info!(command = ?cmd, "running");

    let answer = match cmd {
        Command::List => {
            let problems = drill::catalog();
            let text = problems
                .iter()
                .map(|p| format!("{:<34} {}", p.slug, p))
                .collect::<Vec<_>>()
                .join("\n");
            Answer::new(None, serde_json::to_value(problems)?, text)
        }
        Command::Show(args) => {
            let problem = drill::find(&args.slug)?;
            Answer::new(
                Some(problem.slug),
                serde_json::to_value(problem)?,
                problem.to_string(),
            )
        }
        Command::Board(args) => {
            let board = parse_board(&args)?;
            let valid = drill::is_valid_board(&board);
            let text = format!("{}{}", board, if valid { "valid" } else { "invalid" });
            Answer::new(slug, json!(valid), text)
        }
        Command::LongestRun(args) => {
            let len = drill::longest_consecutive_run(&args.values);
            Answer::new(slug, json!(len), len.to_string())
        }
        Command::Palindrome(args) => {
            let yes = drill::is_palindrome(&args.text);
            Answer::new(slug, json!(yes), yes.to_string())
        }
        Command::PairSum(args) => {
            let pair = drill::two_sum_sorted(&args.values, args.target)
                .context("pair-sum needs values in non-decreasing order")?;
            let text = match pair {
                Some((i, j)) => format!("{} {}", i, j),
                None => "no pair".to_string(),
            };
            Answer::new(slug, json!(pair), text)
        }
        Command::TripleSum(args) => {
            let triples = drill::three_sum_zero(args.values);
            let text = triples
                .iter()
                .map(|t| format!("{} {} {}", t[0], t[1], t[2]))
                .collect::<Vec<_>>()
                .join("\n");
            Answer::new(slug, json!(triples), text)
        }
        Command::Duplicate(args) => {
            let yes = drill::has_duplicate(&args.values);
            Answer::new(slug, json!(yes), yes.to_string())
        }
        Command::Anagram(args) => {
            let yes = drill::is_anagram(&args.first, &args.second)?;
            Answer::new(slug, json!(yes), yes.to_string())
        }
        Command::GroupAnagrams(args) => {
            let groups = drill::group_anagrams(args.words)?;
            let text = groups
                .iter()
                .map(|g| g.join(" "))
                .collect::<Vec<_>>()
                .join("\n");
            Answer::new(slug, json!(groups), text)
        }
        Command::TopK(args) => {
            let top = drill::top_k_frequent(&args.values, args.k)?;
            let text = top
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            Answer::new(slug, json!(top), text)
        }
        Command::Encode(args) => {
            let encoded = drill::encode(args.words.as_slice());
            Answer::new(slug, json!(encoded), encoded)
        }
        Command::Decode(args) => {
            let items = drill::decode(&args.text)?;
            let text = items.join("\n");
            Answer::new(slug, json!(items), text)
        }
    };

    Ok(answer)
}

fn parse_board(args: &BoardArgs) -> Result<Board> {
    let board = match &args.board {
        Some(line) => Board::from_string(line),
        None => Board::from_rows(args.rows.as_slice()),
    };
    board.context("reading board")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{
        AnagramArgs, PairSumArgs, ShowArgs, TextArgs, TopKArgs, ValuesArgs, WordsArgs,
    };

    fn values(v: &[i32]) -> ValuesArgs {
        ValuesArgs { values: v.to_vec() }
    }

    #[test]
    fn test_board_answer() {
        let answer = dispatch(Command::Board(BoardArgs {
            board: Some(
                "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
                    .to_string(),
            ),
            rows: Vec::new(),
        }))
        .unwrap();
        assert_eq!(answer.problem, Some("valid-sudoku"));
        assert_eq!(answer.answer, json!(true));
        assert!(answer.text.ends_with("\nvalid"));
    }

    #[test]
    fn test_bad_board_is_an_error() {
        let err = dispatch(Command::Board(BoardArgs {
            board: Some("12345".to_string()),
            rows: Vec::new(),
        }))
        .unwrap_err();
        assert!(format!("{err:#}").contains("board must be 9x9"));
    }

    #[test]
    fn test_sequence_answers() {
        let answer = dispatch(Command::LongestRun(values(&[100, 4, 200, 1, 3, 2]))).unwrap();
        assert_eq!(answer.answer, json!(4));

        let answer = dispatch(Command::TripleSum(values(&[-1, 0, 1, 2, -1, -4]))).unwrap();
        assert_eq!(answer.answer, json!([[-1, -1, 2], [-1, 0, 1]]));
        assert_eq!(answer.text, "-1 -1 2\n-1 0 1");

        let answer = dispatch(Command::Duplicate(values(&[1, 2, 1]))).unwrap();
        assert_eq!(answer.answer, json!(true));
    }

    #[test]
    fn test_pair_sum() {
        let answer = dispatch(Command::PairSum(PairSumArgs {
            target: 9,
            values: vec![2, 7, 11, 15],
        }))
        .unwrap();
        assert_eq!(answer.answer, json!([1, 2]));
        assert_eq!(answer.text, "1 2");

        let answer = dispatch(Command::PairSum(PairSumArgs {
            target: 100,
            values: vec![2, 7, 11, 15],
        }))
        .unwrap();
        assert_eq!(answer.answer, Value::Null);
        assert_eq!(answer.text, "no pair");

        assert!(dispatch(Command::PairSum(PairSumArgs {
            target: 9,
            values: vec![7, 2],
        }))
        .is_err());
    }

    #[test]
    fn test_string_answers() {
        let answer = dispatch(Command::Palindrome(TextArgs {
            text: "race a car".to_string(),
        }))
        .unwrap();
        assert_eq!(answer.answer, json!(false));

        let answer = dispatch(Command::Anagram(AnagramArgs {
            first: "listen".to_string(),
            second: "silent".to_string(),
        }))
        .unwrap();
        assert_eq!(answer.answer, json!(true));

        let answer = dispatch(Command::GroupAnagrams(WordsArgs {
            words: vec!["ab".to_string(), "c".to_string(), "ba".to_string()],
        }))
        .unwrap();
        assert_eq!(answer.text, "ab ba\nc");

        let answer = dispatch(Command::TopK(TopKArgs {
            k: 1,
            values: vec![3, 3, 1],
        }))
        .unwrap();
        assert_eq!(answer.text, "3");
    }

    #[test]
    fn test_codec_commands() {
        let encoded = dispatch(Command::Encode(WordsArgs {
            words: vec!["a#b".to_string(), "cd".to_string()],
        }))
        .unwrap();
        assert_eq!(encoded.text, "3#a#b2#cd");

        let decoded = dispatch(Command::Decode(TextArgs { text: encoded.text })).unwrap();
        assert_eq!(decoded.answer, json!(["a#b", "cd"]));
    }

    #[test]
    fn test_catalog_commands() {
        let list = dispatch(Command::List).unwrap();
        assert_eq!(list.problem, None);
        assert_eq!(list.answer.as_array().map(Vec::len), Some(drill::catalog().len()));

        let show = dispatch(Command::Show(ShowArgs {
            slug: "3sum".to_string(),
        }))
        .unwrap();
        assert_eq!(show.answer["number"], json!(12));

        assert!(dispatch(Command::Show(ShowArgs {
            slug: "nope".to_string(),
        }))
        .is_err());
    }

    #[test]
    fn test_render_json() {
        let answer = dispatch(Command::LongestRun(values(&[]))).unwrap();
        assert_eq!(
            answer.render(OutputFormat::Json).unwrap(),
            r#"{"problem":"longest-consecutive-sequence","answer":0}"#
        );
        assert_eq!(answer.render(OutputFormat::Text).unwrap(), "0");
    }
}
