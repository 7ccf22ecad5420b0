//! Utility functions for file names and string manipulation.

/// Reduce an arbitrary client-supplied file name to a safe flat name.
///
/// Path components are dropped, anything outside `[A-Za-z0-9._-]` becomes
/// an underscore, and leading dots are stripped so the result can never be
/// a hidden or traversal name.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    cleaned.trim_start_matches('.').to_string()
}

/// Find the nearest valid UTF-8 char boundary at or before the given byte index.
#[inline]
pub fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Truncate a string to approximately `max_len` bytes, ensuring valid UTF-8 boundaries.
/// Returns a slice of the original string.
#[inline]
pub fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let boundary = floor_char_boundary(s, max_len);
        &s[..boundary]
    }
}
