//! One-shot query mode
//!
//! Filters the dictionary once and prints plain matches, one per line.

use crate::core::Pattern;
use crate::search::{Query, filter_words};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Configuration for a single query
#[derive(Debug, Clone, Default)]
pub struct QueryConfig {
    pub pattern: String,
    pub include: String,
    pub exclude: String,
    pub limit: Option<usize>,
}

impl QueryConfig {
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            ..Self::default()
        }
    }
}

/// Run a query and print matches to stdout
///
/// The pattern length is taken from the pattern itself.
///
/// # Errors
///
/// Returns an error if the pattern is invalid or stdout cannot be written.
pub fn run_query(dictionary: &Dictionary, config: &QueryConfig) -> Result<usize> {
    let stdout = io::stdout();
    write_matches(&mut stdout.lock(), dictionary, config)
}

/// Write matches for `config` to `out`, returning how many were written
///
/// # Errors
///
/// Returns an error if the pattern is invalid or `out` cannot be written.
pub fn write_matches<W: Write>(
    out: &mut W,
    dictionary: &Dictionary,
    config: &QueryConfig,
) -> Result<usize> {
    let trimmed = config.pattern.trim();
    let pattern = Pattern::parse(trimmed, trimmed.chars().count())
        .with_context(|| format!("Invalid pattern '{}'", config.pattern))?;
    let query = Query::new(pattern, &config.include, &config.exclude);

    let matches = filter_words(dictionary.words(), &query);
    tracing::info!(
        pattern = %query.pattern(),
        constraints = %query.constraints().describe(),
        matches = matches.len(),
        "query finished"
    );

    let shown = config.limit.unwrap_or(matches.len()).min(matches.len());
    for word in &matches[..shown] {
        writeln!(out, "{word}")?;
    }
    out.flush()?;

    Ok(shown)
}
