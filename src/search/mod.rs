//! Dictionary search
//!
//! Applies the core predicates to a whole word list.

mod engine;

pub use engine::{Query, count_with_length, filter_words};
