//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Truncate to at most `max_chars` characters, ellipsis included.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some(_) => {
            let keep = max_chars.saturating_sub(3);
            let end = s.char_indices().nth(keep).map_or(s.len(), |(i, _)| i);
            format!("{}...", &s[..end])
        }
    }
}

/// Number of characters in the trimmed text.
pub fn char_len(s: &str) -> usize {
    s.trim().chars().count()
}

/// Case-folded, whitespace-collapsed form used to compare argument lines.
pub fn normalize_line(s: &str) -> String {
    s.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `haystack` contains `needle` after normalisation of both.
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    let needle = normalize_line(needle);
    !needle.is_empty() && normalize_line(haystack).contains(&needle)
}
