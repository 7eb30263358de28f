//! Terminal output formatting
//!
//! Display utilities for the prompt-driven interface.

pub mod display;
pub mod formatters;

pub use display::{PREVIEW_LIMIT, Tone, paint, print_banner, print_matches, say};
