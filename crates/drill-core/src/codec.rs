//! Length-prefixed string list codec.
//!
//! Each string is written as `<byte length>#<bytes>`, so the payload may
//! contain `#` or digits without escaping.

use crate::error::{DrillError, Result};
use tracing::debug;

const DELIMITER: u8 = b'#';

/// Encode a list of strings into one string.
pub fn encode<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::new();
    for item in items {
        let item = item.as_ref();
        out.push_str(&item.len().to_string());
        out.push(char::from(DELIMITER));
        out.push_str(item);
    }
    out
}

/// Decode the output of [`encode`].
pub fn decode(encoded: &str) -> Result<Vec<String>> {
    let bytes = encoded.as_bytes();
    let mut items = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let header = pos;
        let delim = bytes[pos..]
            .iter()
            .position(|&b| b == DELIMITER)
            .map(|i| pos + i)
            .ok_or_else(|| fail(header, "missing '#' after length"))?;

        let digits = &encoded[pos..delim];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(fail(header, format!("invalid length {digits:?}")));
        }
        let len: usize = digits
            .parse()
            .map_err(|_| fail(header, format!("length {digits} out of range")))?;

        let start = delim + 1;
        let end = start
            .checked_add(len)
            .filter(|&end| end <= bytes.len())
            .ok_or_else(|| fail(header, format!("length {len} runs past end of input")))?;

        let item = encoded
            .get(start..end)
            .ok_or_else(|| fail(start, "length splits a utf-8 character"))?;
        items.push(item.to_string());
        pos = end;
    }

    Ok(items)
}

fn fail(offset: usize, reason: impl Into<String>) -> DrillError {
    let reason = reason.into();
    debug!(offset, %reason, "decode failed");
    DrillError::Decode { offset, reason }
}
