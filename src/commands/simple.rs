//! Simple interactive CLI mode
//!
//! Prompt-driven filter loop without TUI

use crate::core::Pattern;
use crate::output::{Tone, paint, print_banner, print_matches, say};
use crate::search::{Query, count_with_length, filter_words};
use crate::wordlists::Dictionary;
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or flushing stdout fails.
pub fn run_simple(dictionary: &Dictionary, length: usize) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(dictionary, length, &mut stdin.lock())
}

/// Run the prompt loop reading answers from `input`
///
/// End of input is treated like a blank pattern: the session ends.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple_with<R: BufRead>(
    dictionary: &Dictionary,
    length: usize,
    input: &mut R,
) -> Result<()> {
    print_banner(dictionary.len(), &dictionary.path().display().to_string());

    loop {
        let Some(pattern) = read_pattern(input, length)? else {
            say("Goodbye!", Tone::Info);
            break;
        };

        let include = prompt(
            input,
            &format!(
                "{} (e.g., 'ae' or 'oo' for 2 o's, blank for none) > ",
                paint("Include letters", Tone::Info)
            ),
        )?
        .unwrap_or_default()
        .to_lowercase();
        let exclude = prompt(
            input,
            &format!(
                "{} (letters not present, blank for none) > ",
                paint("Exclude letters", Tone::Warning)
            ),
        )?
        .unwrap_or_default()
        .to_lowercase();

        let query = Query::new(pattern, &include, &exclude);
        tracing::debug!(
            pattern = %query.pattern(),
            constraints = %query.constraints().describe(),
            "running query"
        );

        let candidates = count_with_length(dictionary.words(), length);
        let matches = filter_words(dictionary.words(), &query);
        print_matches(candidates, length, &matches);

        if !ask_continue(input)? {
            say("Exiting...", Tone::Warning);
            break;
        }
    }

    Ok(())
}

/// Prompt until a valid pattern or a blank line is entered
fn read_pattern<R: BufRead>(input: &mut R, length: usize) -> Result<Option<Pattern>> {
    let text = format!(
        "Define a word pattern (use {} for unknowns) > ",
        paint("?", Tone::Hint)
    );

    loop {
        let Some(line) = prompt(input, &text)? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(None);
        }

        match Pattern::parse(&line, length) {
            Ok(pattern) => return Ok(Some(pattern)),
            Err(err) => {
                tracing::debug!(%err, input = %line, "rejected pattern");
                say(
                    &format!("Invalid pattern. Use only a-z and '?', length must be {length}."),
                    Tone::Warning,
                );
            }
        }
    }
}

fn ask_continue<R: BufRead>(input: &mut R) -> Result<bool> {
    let text = format!(
        "{} {} > ",
        paint("Continue?", Tone::Hint),
        paint("[Y/n]", Tone::Info)
    );
    Ok(prompt(input, &text)?.is_some_and(|answer| wants_continue(&answer)))
}

/// Blank, `y` and `yes` (any case) continue; anything else stops
fn wants_continue(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "" | "y" | "yes"
    )
}

/// Print a prompt and read one trimmed line, `None` at end of input
fn prompt<R: BufRead>(input: &mut R, text: &str) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(
            ["hello", "hallo", "spoon", "boxer"]
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
        )
    }

    #[test]
    fn continue_answers() {
        assert!(wants_continue(""));
        assert!(wants_continue("y"));
        assert!(wants_continue(" YES "));
        assert!(!wants_continue("n"));
        assert!(!wants_continue("no"));
        assert!(!wants_continue("maybe"));
    }

    #[test]
    fn read_pattern_skips_invalid_input() {
        let mut input = Cursor::new("abc\nh*llo\nH?LL?\n");
        let pattern = read_pattern(&mut input, 5).unwrap().unwrap();
        assert_eq!(pattern.text(), "h?ll?");
    }

    #[test]
    fn read_pattern_blank_or_eof_quits() {
        assert!(read_pattern(&mut Cursor::new("\n"), 5).unwrap().is_none());
        assert!(read_pattern(&mut Cursor::new(""), 5).unwrap().is_none());
        assert!(read_pattern(&mut Cursor::new("bad\n"), 5).unwrap().is_none());
    }

    #[test]
    fn session_runs_until_declined() {
        let mut input = Cursor::new("h?ll?\ne\n\ny\n?????\n\nx\nn\n");
        run_simple_with(&dictionary(), 5, &mut input).unwrap();
        // All input consumed
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert!(rest.is_empty());
    }

    #[test]
    fn session_ends_on_eof_mid_query() {
        let mut input = Cursor::new("h?ll?\n");
        run_simple_with(&dictionary(), 5, &mut input).unwrap();
    }
}
