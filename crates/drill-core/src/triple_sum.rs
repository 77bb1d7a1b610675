//! All unique zero-sum triples, via sort + two-pointer convergence.

use std::cmp::Ordering;
use tracing::trace;

/// Every unique triple `[a, b, c]` with `a + b + c == 0`.
///
/// Takes ownership of `values` and sorts it in place. Each returned triple
/// is ascending and the list is ordered by its first, then second element.
pub fn three_sum_zero(mut values: Vec<i32>) -> Vec<[i32; 3]> {
    values.sort_unstable();
    let n = values.len();
    let mut triples = Vec::new();

    for first in 0..n.saturating_sub(2) {
        if first > 0 && values[first] == values[first - 1] {
            continue;
        }
        // Sorted, so nothing to the right can bring the sum back down to zero
        if values[first] > 0 {
            break;
        }

        let target = -i64::from(values[first]);
        let mut lo = first + 1;
        let mut hi = n - 1;

        while lo < hi {
            let sum = i64::from(values[lo]) + i64::from(values[hi]);
            match sum.cmp(&target) {
                Ordering::Equal => {
                    let triple = [values[first], values[lo], values[hi]];
                    trace!(?triple, "triple found");
                    triples.push(triple);

                    while lo < hi && values[lo] == values[lo + 1] {
                        lo += 1;
                    }
                    while lo < hi && values[hi] == values[hi - 1] {
                        hi -= 1;
                    }
                    lo += 1;
                    hi -= 1;
                }
                Ordering::Less => lo += 1,
                Ordering::Greater => hi -= 1,
            }
        }
    }

    triples
}
