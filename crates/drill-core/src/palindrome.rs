//! Two-cursor palindrome check over the alphanumeric characters of a string.

/// ASCII letters and digits count; everything else is skipped.
fn is_alnum(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9')
}

/// Range-based case folding. Locale plays no part.
fn fold(b: u8) -> u8 {
    if let b'A'..=b'Z' = b {
        b - b'A' + b'a'
    } else {
        b
    }
}

/// True iff the alphanumeric characters of `text`, case-folded, read the
/// same in both directions. Strings with no alphanumerics are palindromes.
pub fn is_palindrome(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return true;
    }

    let mut lo = 0;
    let mut hi = bytes.len() - 1;

    while lo < hi {
        while lo < hi && !is_alnum(bytes[lo]) {
            lo += 1;
        }
        while lo < hi && !is_alnum(bytes[hi]) {
            hi -= 1;
        }
        if fold(bytes[lo]) != fold(bytes[hi]) {
            return false;
        }
        lo += 1;
        hi -= 1;
    }

    true
}
