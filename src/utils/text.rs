/// Keep the first `max` characters (Unicode scalar values, not bytes)
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}

/// Like [`truncate_chars`], but appends `suffix` when something was cut
pub(crate) fn truncate_with(s: &str, max: usize, suffix: &str) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}{suffix}", &s[..byte_idx]),
        None => s.to_string(),
    }
}
