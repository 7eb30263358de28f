//! Colorized messages for the prompt-driven interface

use super::formatters::summarize_words;
use colored::{ColoredString, Colorize};

/// Number of matches shown before the list is summarized
pub const PREVIEW_LIMIT: usize = 10;

/// Kind of message, which decides its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    Success,
    Warning,
    Info,
    Hint,
}

/// Color a message according to its tone
#[must_use]
pub fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Error => text.bright_red(),
        Tone::Success => text.bright_green(),
        Tone::Warning => text.bright_yellow(),
        Tone::Info | Tone::Hint => text.bright_blue(),
    }
}

/// Print a single colored line
pub fn say(text: &str, tone: Tone) {
    println!("{}", paint(text, tone));
}

/// Print the outcome of one search
pub fn print_matches<S: AsRef<str>>(candidates: usize, length: usize, matches: &[S]) {
    say(
        &format!("Candidates of length {length}: {candidates}"),
        Tone::Hint,
    );

    if matches.is_empty() {
        say("No matches found.", Tone::Warning);
    } else {
        say(&format!("Matches: {}", matches.len()), Tone::Success);
        say(&summarize_words(matches, PREVIEW_LIMIT), Tone::Info);
    }
    println!();
}

/// Print the welcome banner with dictionary details
pub fn print_banner(word_count: usize, path: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        "{}",
        "              Word Pattern Filter - Interactive Mode".bright_cyan().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    say(&format!("Loaded {word_count} words."), Tone::Success);
    say(&format!("Dictionary: {path}"), Tone::Hint);
    println!();
    println!(
        "{} Use letters in {} and {} to enforce counts; if a letter is in both, its count is exact.",
        paint("Tip:", Tone::Hint),
        paint("Include", Tone::Info),
        paint("Exclude", Tone::Warning),
    );
    println!();
}
