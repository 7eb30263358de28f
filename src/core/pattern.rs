//! Wildcard pattern matching
//!
//! A pattern is a fixed-length template over `a-z` and `?`, where `?` accepts
//! any single character at its position. Only words of the same length can match.

use thiserror::Error;

/// Wildcard marker accepted at any position
pub const WILDCARD: char = '?';

/// Check whether `word` structurally matches `pattern`
///
/// Returns false when the lengths differ. Otherwise every position must hold
/// the same character in both strings, unless the pattern has a `?` there.
///
/// # Examples
/// ```
/// use word_pattern_filter::core::matches;
///
/// assert!(matches("hello", "h?ll?"));
/// assert!(matches("hallo", "h?ll?"));
/// assert!(!matches("help!", "h?ll?"));
/// assert!(!matches("hell", "h?ll?"));
/// ```
#[must_use]
pub fn matches(word: &str, pattern: &str) -> bool {
    word.chars().count() == pattern.chars().count()
        && word
            .chars()
            .zip(pattern.chars())
            .all(|(w, p)| p == WILDCARD || p == w)
}

/// Error type for rejected pattern input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Pattern is empty")]
    Empty,
    #[error("Pattern must be exactly {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Invalid character '{0}' in pattern. Use only a-z and '?'")]
    InvalidCharacter(char),
}

/// A validated fixed-length pattern
///
/// Construction normalizes the input (trimmed, lowercased) and guarantees the
/// text contains only `a-z` and `?`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    text: String,
}

impl Pattern {
    /// Parse user input into a pattern of the given length
    ///
    /// # Errors
    /// Returns `PatternError` if:
    /// - The trimmed input is empty
    /// - Length differs from `length`
    /// - A character is outside `a-z` and `?`
    ///
    /// # Examples
    /// ```
    /// use word_pattern_filter::core::Pattern;
    ///
    /// let pattern = Pattern::parse(" C?A?E ", 5).unwrap();
    /// assert_eq!(pattern.text(), "c?a?e");
    ///
    /// assert!(Pattern::parse("c?a", 5).is_err());
    /// assert!(Pattern::parse("c*a?e", 5).is_err());
    /// ```
    pub fn parse(input: &str, length: usize) -> Result<Self, PatternError> {
        let text = input.trim().to_lowercase();

        if text.is_empty() {
            return Err(PatternError::Empty);
        }

        if let Some(bad) = text
            .chars()
            .find(|&c| c != WILDCARD && !c.is_ascii_lowercase())
        {
            return Err(PatternError::InvalidCharacter(bad));
        }

        // Only ASCII remains, so byte length is the character count
        if text.len() != length {
            return Err(PatternError::InvalidLength {
                expected: length,
                actual: text.len(),
            });
        }

        Ok(Self { text })
    }

    /// Get the pattern as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of positions in the pattern
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a parsed pattern; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of positions pinned to a specific letter
    #[must_use]
    pub fn fixed_letters(&self) -> usize {
        self.text.chars().filter(|&c| c != WILDCARD).count()
    }

    /// Check whether `word` matches this pattern
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        matches(word, &self.text)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
