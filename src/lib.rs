//! Word Pattern Filter
//!
//! Filters a dictionary by a fixed-length wildcard pattern and include/exclude
//! letter-count constraints. A letter named in both include and exclude must
//! appear exactly as many times as it was included.
//!
//! # Quick Start
//!
//! ```rust
//! use word_pattern_filter::core::{matches, satisfies_constraints};
//!
//! assert!(matches("hello", "h?ll?"));
//! assert!(satisfies_constraints("spoon", "oo", ""));
//! assert!(!satisfies_constraints("robot", "o", "o"));
//! ```

// Core matching predicates
pub mod core;

// Dictionary-wide search
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
