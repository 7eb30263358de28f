//! Include/exclude letter-count constraints
//!
//! Two free-form strings describe which letters a word must and must not
//! contain. Each letter falls into exactly one rule:
//! - In both include and exclude: the word holds exactly the include count
//! - Include only: the word holds at least the include count
//! - Exclude only: the word does not contain the letter
//!
//! Letters named in neither string are unconstrained.

use super::letters::LetterCounts;

/// Check a word against raw include/exclude strings
///
/// # Examples
/// ```
/// use word_pattern_filter::core::satisfies_constraints;
///
/// assert!(satisfies_constraints("spoon", "oo", ""));
/// assert!(!satisfies_constraints("boxer", "", "x"));
///
/// // 'o' in both strings pins its count to exactly one
/// assert!(!satisfies_constraints("robot", "o", "o"));
/// assert!(satisfies_constraints("crane", "r", "r"));
/// ```
#[must_use]
pub fn satisfies_constraints(word: &str, include: &str, exclude: &str) -> bool {
    Constraints::new(include, exclude).check(word)
}

/// Letter constraints resolved once and reusable across many words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    exact: Vec<(char, usize)>,
    at_least: Vec<(char, usize)>,
    forbidden: Vec<char>,
}

impl Constraints {
    /// Resolve include/exclude strings into per-letter rules
    #[must_use]
    pub fn new(include: &str, exclude: &str) -> Self {
        Self::from_counts(
            &LetterCounts::from_spec(include),
            &LetterCounts::from_spec(exclude),
        )
    }

    /// Resolve already-counted include/exclude maps into per-letter rules
    #[must_use]
    pub fn from_counts(include: &LetterCounts, exclude: &LetterCounts) -> Self {
        let mut exact = Vec::new();
        let mut at_least = Vec::new();
        for (letter, count) in include.iter() {
            if exclude.contains(letter) {
                exact.push((letter, count));
            } else {
                at_least.push((letter, count));
            }
        }

        let mut forbidden: Vec<char> = exclude
            .iter()
            .map(|(letter, _)| letter)
            .filter(|&letter| !include.contains(letter))
            .collect();

        // Stable order for display and equality
        exact.sort_unstable();
        at_least.sort_unstable();
        forbidden.sort_unstable();

        Self {
            exact,
            at_least,
            forbidden,
        }
    }

    /// True when no letter is constrained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.at_least.is_empty() && self.forbidden.is_empty()
    }

    /// Check whether `word` satisfies every rule
    #[must_use]
    pub fn check(&self, word: &str) -> bool {
        if self.is_empty() {
            return true;
        }

        let counts = LetterCounts::from_word(word);

        self.exact
            .iter()
            .all(|&(letter, count)| counts.get(letter) == count)
            && self
                .at_least
                .iter()
                .all(|&(letter, count)| counts.get(letter) >= count)
            && self.forbidden.iter().all(|&letter| !counts.contains(letter))
    }

    /// Human-readable summary, e.g. `exactly 1×o, at least 2×e, none of x z`
    #[must_use]
    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "no letter constraints".to_string();
        }

        let mut parts = Vec::new();
        if !self.exact.is_empty() {
            parts.push(format!("exactly {}", join_counts(&self.exact)));
        }
        if !self.at_least.is_empty() {
            parts.push(format!("at least {}", join_counts(&self.at_least)));
        }
        if !self.forbidden.is_empty() {
            let letters: Vec<String> = self.forbidden.iter().map(char::to_string).collect();
            parts.push(format!("none of {}", letters.join(" ")));
        }
        parts.join(", ")
    }
}

fn join_counts(pairs: &[(char, usize)]) -> String {
    pairs
        .iter()
        .map(|(letter, count)| format!("{count}×{letter}"))
        .collect::<Vec<_>>()
        .join(" ")
}
