//! Two-pointer pair search over a non-decreasing sequence.

use crate::error::{DrillError, Result};
use std::cmp::Ordering;
use tracing::debug;

/// Index of the first element smaller than its predecessor, if any.
fn first_unsorted(values: &[i32]) -> Option<usize> {
    values.windows(2).position(|w| w[1] < w[0]).map(|i| i + 1)
}

/// Find the 1-based positions `(i, j)`, `i < j`, of two values in the sorted
/// slice `values` that sum to `target`.
///
/// Returns `Ok(None)` when no pair exists and `Err(DrillError::Unsorted)`
/// when the input is not in non-decreasing order.
pub fn two_sum_sorted(values: &[i32], target: i32) -> Result<Option<(usize, usize)>> {
    if let Some(index) = first_unsorted(values) {
        return Err(DrillError::Unsorted { index });
    }

    Ok(converge(values, i64::from(target)).map(|(lo, hi)| (lo + 1, hi + 1)))
}

/// Move two cursors inward from both ends of `values` until their sum hits
/// `target`. Returns 0-based indices.
fn converge(values: &[i32], target: i64) -> Option<(usize, usize)> {
    if values.len() < 2 {
        return None;
    }

    let mut lo = 0;
    let mut hi = values.len() - 1;

    while lo < hi {
        let sum = i64::from(values[lo]) + i64::from(values[hi]);
        match sum.cmp(&target) {
            Ordering::Equal => {
                debug!(lo, hi, "pair found");
                return Some((lo, hi));
            }
            Ordering::Less => lo += 1,
            Ordering::Greater => hi -= 1,
        }
    }

    None
}
