//! Core filtering predicates
//!
//! This module contains the pure matching logic with no I/O.
//! Both predicates are total: any pair of strings is valid input.

mod constraints;
mod letters;
mod pattern;

pub use constraints::{Constraints, satisfies_constraints};
pub use letters::LetterCounts;
pub use pattern::{Pattern, PatternError, WILDCARD, matches};
