//! Anagram checks built on 26-slot letter counts.

use crate::error::{DrillError, Result};
use std::collections::HashMap;

const ALPHABET: usize = 26;

/// Letter frequencies of a lowercase ASCII word.
type Signature = [u32; ALPHABET];

fn letter_index(b: u8) -> Result<usize> {
    match b {
        b'a'..=b'z' => Ok(usize::from(b - b'a')),
        _ => Err(DrillError::NotLowercase { found: b as char }),
    }
}

fn signature(word: &str) -> Result<Signature> {
    let mut counts = [0; ALPHABET];
    for b in word.bytes() {
        counts[letter_index(b)?] += 1;
    }
    Ok(counts)
}

/// True iff `b` is a rearrangement of `a`.
pub fn is_anagram(a: &str, b: &str) -> Result<bool> {
    if a.len() != b.len() {
        // Still reject bad input rather than answer for it
        signature(a)?;
        signature(b)?;
        return Ok(false);
    }

    // One pass: count up for `a`, down for `b`.
    let mut balance = [0i64; ALPHABET];
    for (x, y) in a.bytes().zip(b.bytes()) {
        balance[letter_index(x)?] += 1;
        balance[letter_index(y)?] -= 1;
    }
    Ok(balance.iter().all(|&n| n == 0))
}

/// Partition `words` into anagram groups.
///
/// Groups come out in order of their first member; words keep their input
/// order within a group.
pub fn group_anagrams(words: Vec<String>) -> Result<Vec<Vec<String>>> {
    let mut slots: HashMap<Signature, usize> = HashMap::new();
    let mut groups: Vec<Vec<String>> = Vec::new();

    for word in words {
        let key = signature(&word)?;
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(word);
    }

    Ok(groups)
}
