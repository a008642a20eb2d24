//! Log sanitization utilities
//!
//! Keeps record values (TXT/DKIM payloads) and access keys from being written
//! to logs in full.

/// Maximum number of bytes of a response body written to a log line.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a key left visible by [`mask_key`].
const MASK_VISIBLE: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged; longer ones keep their
/// first `TRUNCATE_LIMIT` bytes plus a note with the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask an access key id, keeping only a short prefix.
///
/// `LTAI5tAbCdEf` becomes `LTAI********`. Keys no longer than the visible
/// prefix are masked entirely.
pub fn mask_key(key: &str) -> String {
    let count = key.chars().count();
    if count <= MASK_VISIBLE {
        return "*".repeat(count);
    }
    let prefix: String = key.chars().take(MASK_VISIBLE).collect();
    format!("{prefix}{}", "*".repeat(count - MASK_VISIBLE))
}
