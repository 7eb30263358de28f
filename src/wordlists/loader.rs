//! Word list loading utilities
//!
//! Reads a newline-separated dictionary file into an ordered word list.

use super::DictionaryUnavailable;
use std::fs;
use std::path::Path;

/// Parse dictionary text into words
///
/// Only lines whose very first character is a letter are kept, so blank,
/// indented and punctuation-led lines are skipped. Kept lines are trimmed
/// and lowercased. Order is preserved.
///
/// # Examples
/// ```
/// use word_pattern_filter::wordlists::loader::parse_words;
///
/// let words = parse_words("Crane\n\nslate \n  indented\n#comment\n2nd\n");
/// assert_eq!(words, vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| line.chars().next().is_some_and(char::is_alphabetic))
        .map(|line| line.trim().to_lowercase())
        .collect()
}

/// Load words from a file
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
///
/// # Errors
///
/// Returns `DictionaryUnavailable` if the file cannot be read or holds no words.
///
/// # Examples
/// ```no_run
/// use word_pattern_filter::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryUnavailable> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| {
        DictionaryUnavailable::new(format!("Could not read {}: {e}", path.display()))
    })?;

    let words = parse_words(&String::from_utf8_lossy(&bytes));
    if words.is_empty() {
        return Err(DictionaryUnavailable::new(
            "Word list file is empty or invalid.",
        ));
    }

    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}
