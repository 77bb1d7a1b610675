//! Longest run of consecutive integers in an unordered collection.

use std::collections::HashSet;
use tracing::trace;

/// Length of the longest run of consecutive integers present in `values`.
///
/// Only values whose predecessor is absent start a scan, so every run is
/// walked exactly once and the whole pass is O(n).
pub fn longest_consecutive_run(values: &[i32]) -> usize {
    let present: HashSet<i32> = values.iter().copied().collect();
    let mut longest = 0;

    for &start in &present {
        let is_start = match start.checked_sub(1) {
            Some(prev) => !present.contains(&prev),
            None => true,
        };
        if !is_start {
            continue;
        }

        let mut len = 1;
        let mut current = start;
        while let Some(next) = current.checked_add(1) {
            if !present.contains(&next) {
                break;
            }
            current = next;
            len += 1;
        }

        trace!(start, len, "run");
        longest = longest.max(len);
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(longest_consecutive_run(&[100, 4, 200, 1, 3, 2]), 4);
    }

    #[test]
    fn test_empty() {
        assert_eq!(longest_consecutive_run(&[]), 0);
    }

    #[test]
    fn test_single_and_duplicates() {
        assert_eq!(longest_consecutive_run(&[7]), 1);
        assert_eq!(longest_consecutive_run(&[1, 2, 0, 1]), 3);
        assert_eq!(longest_consecutive_run(&[5, 5, 5]), 1);
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(longest_consecutive_run(&[-3, -1, -2, 10, 0, 11]), 4);
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(
            longest_consecutive_run(&[i32::MAX, i32::MAX - 1, i32::MIN, i32::MIN + 1, 0]),
            2
        );
    }

    #[test]
    fn test_two_runs_longer_second() {
        assert_eq!(
            longest_consecutive_run(&[0, 3, 7, 2, 5, 8, 4, 6, 0, 1]),
            9
        );
    }
}
