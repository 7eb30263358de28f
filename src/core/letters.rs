//! Letter occurrence counting
//!
//! Turns free-form input such as `"oo"` or `"A, e!"` into a map of letter to
//! occurrence count.

use rustc_hash::FxHashMap;

/// Mapping from lowercase letter to a positive occurrence count
///
/// Letters that never occur are absent, never present with a zero count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
}

impl LetterCounts {
    /// Count the letters of a free-form constraint string
    ///
    /// Non-letter characters are ignored and letters are case-folded.
    ///
    /// # Examples
    /// ```
    /// use word_pattern_filter::core::LetterCounts;
    ///
    /// let counts = LetterCounts::from_spec("O, o and E!");
    /// assert_eq!(counts.get('o'), 2);
    /// assert_eq!(counts.get('e'), 1);
    /// assert_eq!(counts.get('x'), 0);
    /// assert!(!counts.contains(','));
    /// ```
    #[must_use]
    pub fn from_spec(spec: &str) -> Self {
        Self::tally(spec.chars().filter(|c| c.is_alphabetic()))
    }

    /// Count every character of a candidate word, case-folded
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        Self::tally(word.chars())
    }

    fn tally(chars: impl Iterator<Item = char>) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in chars.flat_map(char::to_lowercase) {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `letter`, zero when absent
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Whether `letter` occurs at least once
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.counts.contains_key(&letter)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(letter, count)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&letter, &count)| (letter, count))
    }
}
