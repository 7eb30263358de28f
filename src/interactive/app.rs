//! TUI application state and logic

use crate::core::{Pattern, PatternError};
use crate::search::{Query, count_with_length, filter_words};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Input field currently receiving keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Pattern,
    Include,
    Exclude,
}

impl Field {
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Pattern => Self::Include,
            Self::Include => Self::Exclude,
            Self::Exclude => Self::Pattern,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Pattern => Self::Exclude,
            Self::Include => Self::Pattern,
            Self::Exclude => Self::Include,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Pattern => "Pattern",
            Self::Include => "Include",
            Self::Exclude => "Exclude",
        }
    }
}

/// Outcome of the latest search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState<'a> {
    /// Pattern not yet usable; holds a hint for the user
    Incomplete(String),
    Ready {
        matches: Vec<&'a str>,
        /// Pattern positions pinned to a letter
        fixed: usize,
        constraints: String,
    },
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub length: usize,
    pub focus: Field,
    pub pattern_input: String,
    pub include_input: String,
    pub exclude_input: String,
    pub candidates: usize,
    pub search: SearchState<'a>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, length: usize) -> Self {
        let mut app = Self {
            dictionary,
            length,
            focus: Field::Pattern,
            pattern_input: String::new(),
            include_input: String::new(),
            exclude_input: String::new(),
            candidates: count_with_length(dictionary.words(), length),
            search: SearchState::Incomplete(String::new()),
            messages: vec![
                Message {
                    text: format!("Loaded {} words.", dictionary.len()),
                    style: MessageStyle::Success,
                },
                Message {
                    text: "A letter in both Include and Exclude has an exact count.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Text of the focused field
    #[must_use]
    pub fn focused_input(&self) -> &str {
        match self.focus {
            Field::Pattern => &self.pattern_input,
            Field::Include => &self.include_input,
            Field::Exclude => &self.exclude_input,
        }
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Pattern => &mut self.pattern_input,
            Field::Include => &mut self.include_input,
            Field::Exclude => &mut self.exclude_input,
        }
    }

    /// Number of matches in the current search, zero when incomplete
    #[must_use]
    pub fn match_count(&self) -> usize {
        match &self.search {
            SearchState::Ready { matches, .. } => matches.len(),
            SearchState::Incomplete(_) => 0,
        }
    }

    /// Recompute matches from the three input fields
    pub fn refresh(&mut self) {
        let dictionary = self.dictionary;
        self.search = match Pattern::parse(&self.pattern_input, self.length) {
            Ok(pattern) => {
                let query = Query::new(pattern, &self.include_input, &self.exclude_input);
                let matches = filter_words(dictionary.words(), &query);
                tracing::debug!(
                    pattern = %query.pattern(),
                    matches = matches.len(),
                    "refreshed search"
                );
                SearchState::Ready {
                    matches,
                    fixed: query.pattern().fixed_letters(),
                    constraints: query.constraints().describe(),
                }
            }
            Err(PatternError::Empty) => SearchState::Incomplete(format!(
                "Type a {}-letter pattern, using ? for unknown letters",
                self.length
            )),
            Err(PatternError::InvalidLength { expected, actual }) => SearchState::Incomplete(
                format!("Pattern has {actual} of {expected} characters"),
            ),
            Err(err @ PatternError::InvalidCharacter(_)) => SearchState::Incomplete(err.to_string()),
        };
    }

    /// Apply a key press to the state
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.focused_input_mut().clear();
                self.refresh();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
            }
            KeyCode::Enter => {
                self.report();
                self.focus = self.focus.next();
            }
            KeyCode::Backspace => {
                if self.focused_input_mut().pop().is_some() {
                    self.refresh();
                }
            }
            KeyCode::Char(c) => {
                if self.accepts_char(c) {
                    let c = c.to_ascii_lowercase();
                    self.focused_input_mut().push(c);
                    self.refresh();
                }
            }
            _ => {}
        }
    }

    fn accepts_char(&self, c: char) -> bool {
        match self.focus {
            Field::Pattern => {
                (c.is_ascii_alphabetic() || c == crate::core::WILDCARD)
                    && self.pattern_input.len() < self.length
            }
            Field::Include | Field::Exclude => c.is_alphabetic(),
        }
    }

    fn report(&mut self) {
        let (text, style) = match &self.search {
            SearchState::Ready { matches, .. } if matches.is_empty() => {
                ("No matches found.".to_string(), MessageStyle::Error)
            }
            SearchState::Ready { matches, .. } => {
                (format!("Matches: {}", matches.len()), MessageStyle::Success)
            }
            SearchState::Incomplete(hint) => (hint.clone(), MessageStyle::Error),
        };
        self.add_message(&text, style);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(
            ["hello", "hallo", "hills", "spoon", "robot", "cranes"]
                .iter()
                .map(|w| (*w).to_string())
                .collect(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn starts_incomplete_on_pattern_field() {
        let dict = dictionary();
        let app = App::new(&dict, 5);
        assert_eq!(app.focus, Field::Pattern);
        assert_eq!(app.candidates, 5);
        assert!(matches!(app.search, SearchState::Incomplete(_)));
        assert_eq!(app.match_count(), 0);
    }

    #[test]
    fn typing_full_pattern_runs_search() {
        let dict = dictionary();
        let mut app = App::new(&dict, 5);
        type_text(&mut app, "H?LL?");

        assert_eq!(app.pattern_input, "h?ll?");
        match &app.search {
            SearchState::Ready { matches, .. } => {
                assert_eq!(matches, &vec!["hello", "hallo", "hills"]);
            }
            SearchState::Incomplete(hint) => panic!("expected results, got hint {hint}"),
        }
    }

    #[test]
    fn pattern_field_rejects_extra_and_invalid_chars() {
        let dict = dictionary();
        let mut app = App::new(&dict, 5);
        type_text(&mut app, "h*1?ll?xyz");
        assert_eq!(app.pattern_input, "h?ll?");
    }

    #[test]
    fn constraints_update_results() {
        let dict = dictionary();
        let mut app = App::new(&dict, 5);
        type_text(&mut app, "?????");
        assert_eq!(app.match_count(), 5);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Field::Include);
        type_text(&mut app, "o");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Field::Exclude);
        type_text(&mut app, "o");

        // exactly one 'o': hello, hallo
        assert_eq!(app.match_count(), 2);
        if let SearchState::Ready { constraints, .. } = &app.search {
            assert_eq!(constraints, "exactly 1×o");
        }
    }

    #[test]
    fn backspace_and_clear_edit_focused_field() {
        let dict = dictionary();
        let mut app = App::new(&dict, 5);
        type_text(&mut app, "hello");
        assert_eq!(app.match_count(), 1);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.pattern_input, "hell");
        assert!(matches!(app.search, SearchState::Incomplete(_)));

        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert!(app.focused_input().is_empty());
    }

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(Field::Pattern.next().next().next(), Field::Pattern);
        assert_eq!(Field::Pattern.previous(), Field::Exclude);
        assert_eq!(Field::Include.previous(), Field::Pattern);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let dict = dictionary();
        let mut app = App::new(&dict, 5);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(&dict, 5);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.pattern_input.is_empty());
    }

    #[test]
    fn enter_reports_and_advances() {
        let dict = dictionary();
        let mut app = App::new(&dict, 5);
        type_text(&mut app, "zz???");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.focus, Field::Include);
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "No matches found.");
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn messages_are_capped() {
        let dict = dictionary();
        let mut app = App::new(&dict, 5);
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
