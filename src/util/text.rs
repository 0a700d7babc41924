// src/util/text.rs

/// Extract the first non-empty line of a note, trimmed.
///
/// # Examples
///
/// ```
/// use quicknotes::util::text::first_line;
///
/// assert_eq!(first_line("\n  groceries  \nmilk\neggs"), "groceries");
/// ```
pub fn first_line(text: &str) -> String {
    text.lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with `…`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}
