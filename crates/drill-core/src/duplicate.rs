//! Duplicate detection with a membership set.

use std::collections::HashSet;
use tracing::trace;

/// True iff some value occurs more than once. Stops at the first repeat.
pub fn has_duplicate(values: &[i32]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    for (index, &value) in values.iter().enumerate() {
        if !seen.insert(value) {
            trace!(index, value, "repeat");
            return true;
        }
    }
    false
}
