use super::*;
use clap::CommandFactory;
use clap::Parser;

#[test]
fn cli_debug_assert() {
    Cli::command().debug_assert();
}

#[test]
fn negative_values_parse_as_positionals() {
    let cli = Cli::try_parse_from(["drill", "triple-sum", "-1", "0", "1", "2", "-1", "-4"])
        .expect("parse should succeed");

    match cli.cmd {
        Command::TripleSum(args) => assert_eq!(args.values, vec![-1, 0, 1, 2, -1, -4]),
        _ => panic!("expected Command::TripleSum"),
    }
}

#[test]
fn pair_sum_parses_negative_target() {
    let cli = Cli::try_parse_from(["drill", "pair-sum", "--target", "-3", "-5", "2", "9"])
        .expect("parse should succeed");

    match cli.cmd {
        Command::PairSum(args) => {
            assert_eq!(args.target, -3);
            assert_eq!(args.values, vec![-5, 2, 9]);
        }
        _ => panic!("expected Command::PairSum"),
    }
}

#[test]
fn board_accepts_string_or_rows() {
    let line = ".".repeat(81);
    let cli = Cli::try_parse_from(["drill", "board", line.as_str()]).expect("parse should succeed");
    match cli.cmd {
        Command::Board(args) => {
            assert_eq!(args.board.as_deref(), Some(line.as_str()));
            assert!(args.rows.is_empty());
        }
        _ => panic!("expected Command::Board"),
    }

    let mut argv = vec!["drill", "board", "--rows"];
    argv.extend(std::iter::repeat(".........").take(9));
    let cli = Cli::try_parse_from(argv).expect("parse should succeed");
    match cli.cmd {
        Command::Board(args) => {
            assert!(args.board.is_none());
            assert_eq!(args.rows.len(), 9);
        }
        _ => panic!("expected Command::Board"),
    }
}

#[test]
fn board_requires_input() {
    assert!(Cli::try_parse_from(["drill", "board"]).is_err());
}

#[test]
fn global_flags() {
    let cli = Cli::try_parse_from([
        "drill", "top-k", "-k", "2", "1", "1", "2", "--format", "json", "-vv",
    ])
    .expect("parse should succeed");

    assert_eq!(cli.format, Some(OutputFormat::Json));
    assert_eq!(cli.verbose, 2);
    match cli.cmd {
        Command::TopK(args) => {
            assert_eq!(args.k, 2);
            assert_eq!(args.values, vec![1, 1, 2]);
        }
        _ => panic!("expected Command::TopK"),
    }
}

#[test]
fn slugs_exist_in_catalog() {
    let commands = [
        Command::Board(BoardArgs {
            board: None,
            rows: Vec::new(),
        }),
        Command::Palindrome(TextArgs {
            text: String::new(),
        }),
        Command::Decode(TextArgs {
            text: String::new(),
        }),
        Command::TripleSum(ValuesArgs { values: Vec::new() }),
    ];
    for command in commands {
        let slug = command.slug().expect("exercise command has a slug");
        assert!(drill_core::find(slug).is_ok(), "{slug} missing from catalog");
    }
    assert_eq!(Command::List.slug(), None);
}
