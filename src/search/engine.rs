//! Word list filtering
//!
//! Runs the pattern and letter-count predicates over every word of the right
//! length. Evaluation is data-parallel but results keep dictionary order.

use crate::core::{Constraints, Pattern};
use rayon::prelude::*;

/// A validated pattern together with its letter constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pattern: Pattern,
    constraints: Constraints,
}

impl Query {
    /// Build a query from a parsed pattern and raw include/exclude strings
    #[must_use]
    pub fn new(pattern: Pattern, include: &str, exclude: &str) -> Self {
        Self {
            pattern,
            constraints: Constraints::new(include, exclude),
        }
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub const fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Whether a single word satisfies both the pattern and the constraints
    #[inline]
    #[must_use]
    pub fn accepts(&self, word: &str) -> bool {
        self.pattern.matches(word) && self.constraints.check(word)
    }
}

/// Return every word accepted by `query`, in original list order
///
/// # Examples
/// ```
/// use word_pattern_filter::core::Pattern;
/// use word_pattern_filter::search::{Query, filter_words};
///
/// let words = ["crane", "crone", "drone", "robot", "cranes"];
/// let query = Query::new(Pattern::parse("?r?ne", 5).unwrap(), "o", "c");
///
/// assert_eq!(filter_words(&words, &query), vec!["drone"]);
/// ```
#[must_use]
pub fn filter_words<'a, S>(words: &'a [S], query: &Query) -> Vec<&'a str>
where
    S: AsRef<str> + Sync,
{
    let length = query.pattern().len();

    words
        .par_iter()
        .map(AsRef::<str>::as_ref)
        .filter(|word| word.chars().count() == length && query.accepts(word))
        .collect()
}

/// Count the words with exactly `length` characters
#[must_use]
pub fn count_with_length<S>(words: &[S], length: usize) -> usize
where
    S: AsRef<str> + Sync,
{
    words
        .par_iter()
        .map(AsRef::<str>::as_ref)
        .filter(|word| word.chars().count() == length)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<String> {
        [
            "hello", "hallo", "hills", "help", "spoon", "robot", "boxer", "crone", "hullo",
            "spoons",
        ]
        .iter()
        .map(|w| (*w).to_string())
        .collect()
    }

    fn query(pattern: &str, include: &str, exclude: &str) -> Query {
        Query::new(Pattern::parse(pattern, pattern.len()).unwrap(), include, exclude)
    }

    #[test]
    fn pattern_only_keeps_list_order() {
        let words = words();
        let result = filter_words(&words, &query("h?ll?", "", ""));
        assert_eq!(result, vec!["hello", "hallo", "hills", "hullo"]);
    }

    #[test]
    fn constraints_narrow_pattern_matches() {
        let words = words();
        // at least one e, no a
        let result = filter_words(&words, &query("h?ll?", "e", "a"));
        assert_eq!(result, vec!["hello"]);
    }

    #[test]
    fn overlap_rule_applies_in_search() {
        let words = words();
        let result = filter_words(&words, &query("?????", "o", "o"));
        // robot (two o's) and spoon (two o's) are excluded
        assert_eq!(result, vec!["hello", "hallo", "boxer", "crone", "hullo"]);
    }

    #[test]
    fn only_words_of_pattern_length_are_candidates() {
        let words = words();
        let result = filter_words(&words, &query("??????", "", ""));
        assert_eq!(result, vec!["spoons"]);
    }

    #[test]
    fn no_matches_is_empty() {
        let words = words();
        assert!(filter_words(&words, &query("zz???", "", "")).is_empty());
    }

    #[test]
    fn works_with_str_slices() {
        let words = ["spoon", "boxer"];
        let result = filter_words(&words, &query("?????", "", "x"));
        assert_eq!(result, vec!["spoon"]);
    }

    #[test]
    fn count_with_length_counts_exact_length() {
        let words = words();
        assert_eq!(count_with_length(&words, 5), 8);
        assert_eq!(count_with_length(&words, 4), 1);
        assert_eq!(count_with_length(&words, 6), 1);
        assert_eq!(count_with_length(&words, 7), 0);
    }

    #[test]
    fn query_accepts_single_word() {
        let q = query("sp???", "oo", "");
        assert!(q.accepts("spoon"));
        assert!(!q.accepts("spoons"));
        assert!(!q.accepts("spine"));
        assert_eq!(q.pattern().text(), "sp???");
        assert!(!q.constraints().is_empty());
    }
}
