//! Top-k most frequent values using bucket sort over counts.

use crate::error::{DrillError, Result};
use std::collections::HashMap;

/// The `k` most frequent distinct values, most frequent first.
///
/// Buckets are indexed by count so the pass stays O(n). Values sharing a
/// count come out smallest first.
pub fn top_k_frequent(values: &[i32], k: usize) -> Result<Vec<i32>> {
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for &v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    if k > counts.len() {
        return Err(DrillError::KOutOfRange {
            k,
            distinct: counts.len(),
        });
    }

    let mut buckets: Vec<Vec<i32>> = vec![Vec::new(); values.len() + 1];
    for (value, count) in counts {
        buckets[count].push(value);
    }

    let mut top = Vec::with_capacity(k);
    for bucket in buckets.iter_mut().rev() {
        if top.len() == k {
            break;
        }
        bucket.sort_unstable();
        let take = (k - top.len()).min(bucket.len());
        top.extend_from_slice(&bucket[..take]);
    }

    Ok(top)
}
