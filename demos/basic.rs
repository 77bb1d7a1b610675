//! Basic example of using the drill exercises

use drill_core::{
    catalog, is_palindrome, is_valid_board, longest_consecutive_run, three_sum_zero,
    two_sum_sorted, Board,
};

fn main() {
    println!("Exercises:");
    for problem in catalog() {
        println!("  {}", problem);
    }

    // Parse a puzzle from a string
    println!("\n--- Validating a board ---\n");
    let puzzle_string = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    match Board::from_string(puzzle_string) {
        Ok(board) => {
            println!("{}", board);
            println!("Filled cells: {}", board.filled_count());
            println!("Valid: {}", is_valid_board(&board));
        }
        Err(e) => println!("Could not parse board: {}", e),
    }

    println!("\n--- Scanning sequences ---\n");
    println!(
        "Longest run in [100, 4, 200, 1, 3, 2]: {}",
        longest_consecutive_run(&[100, 4, 200, 1, 3, 2])
    );
    println!(
        "\"A man, a plan, a canal: Panama\" is a palindrome: {}",
        is_palindrome("A man, a plan, a canal: Panama")
    );
    match two_sum_sorted(&[2, 7, 11, 15], 9) {
        Ok(Some((i, j))) => println!("Pair summing to 9: positions {} and {}", i, j),
        Ok(None) => println!("No pair sums to 9"),
        Err(e) => println!("Bad input: {}", e),
    }
    println!(
        "Zero-sum triples in [-1, 0, 1, 2, -1, -4]: {:?}",
        three_sum_zero(vec![-1, 0, 1, 2, -1, -4])
    );
}
