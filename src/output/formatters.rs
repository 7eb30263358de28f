//! Formatting utilities for terminal output

use crate::core::WILDCARD;

/// Render a word list for display
///
/// Up to `limit` words are joined with commas; longer lists are cut off and
/// followed by the total count.
///
/// # Examples
/// ```
/// use word_pattern_filter::output::formatters::summarize_words;
///
/// assert_eq!(summarize_words::<&str>(&[], 10), "[empty list]");
/// assert_eq!(summarize_words(&["a", "b"], 10), "a, b");
/// assert_eq!(summarize_words(&["a", "b", "c"], 2), "a, b ... (3 total)");
/// ```
#[must_use]
pub fn summarize_words<S: AsRef<str>>(words: &[S], limit: usize) -> String {
    if words.is_empty() {
        return "[empty list]".to_string();
    }

    let shown: Vec<&str> = words.iter().take(limit).map(AsRef::<str>::as_ref).collect();
    let joined = shown.join(", ");

    if words.len() <= limit {
        joined
    } else {
        format!("{joined} ... ({} total)", words.len())
    }
}

/// Uppercase the fixed letters of a pattern and keep wildcards as `_`
///
/// Used for headings, e.g. `s?a?e` becomes `S _ A _ E`.
#[must_use]
pub fn pattern_to_display(pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| {
            if c == WILDCARD {
                "_".to_string()
            } else {
                c.to_uppercase().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
