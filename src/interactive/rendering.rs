//! TUI rendering with ratatui

use super::app::{App, Field, MessageStyle, SearchState};
use crate::output::formatters::pattern_to_display;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Input fields
            Constraint::Min(8),    // Results
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_inputs(f, app, chunks[1]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[2]);

    render_results(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORD PATTERN FILTER - Live Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_inputs(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let fields = [
        (Field::Pattern, app.pattern_input.as_str(), Color::Cyan),
        (Field::Include, app.include_input.as_str(), Color::Blue),
        (Field::Exclude, app.exclude_input.as_str(), Color::Yellow),
    ];

    for ((field, text, color), chunk) in fields.into_iter().zip(chunks.iter()) {
        let focused = app.focus == field;
        let border_type = if focused {
            BorderType::Double
        } else {
            BorderType::Plain
        };
        let style = if focused {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(text.to_string()).style(style).block(
            Block::default()
                .title(format!(" {} ", field.title()))
                .borders(Borders::ALL)
                .border_type(border_type)
                .style(style),
        );
        f.render_widget(input, *chunk);

        if focused {
            // Place the cursor after the typed text, inside the border
            let x = chunk.x + 1 + text.chars().count() as u16;
            f.set_cursor_position((x.min(chunk.right().saturating_sub(2)), chunk.y + 1));
        }
    }
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let (title, content) = match &app.search {
        SearchState::Incomplete(hint) => (
            " Matches ".to_string(),
            vec![Line::from(Span::styled(
                hint.clone(),
                Style::default().fg(Color::DarkGray),
            ))],
        ),
        SearchState::Ready { matches, .. } if matches.is_empty() => (
            " Matches: 0 ".to_string(),
            vec![Line::from(Span::styled(
                "No matches found.",
                Style::default().fg(Color::Yellow),
            ))],
        ),
        SearchState::Ready { matches, .. } => {
            // Pack words into lines that fit the panel width
            let width = usize::from(area.width.saturating_sub(2)).max(1);
            let mut lines = Vec::new();
            let mut current = String::new();
            for word in matches {
                if !current.is_empty() && current.len() + 1 + word.len() > width {
                    lines.push(Line::from(std::mem::take(&mut current)));
                }
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
            if !current.is_empty() {
                lines.push(Line::from(current));
            }
            (format!(" Matches: {} ", matches.len()), lines)
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    let (fixed, constraints) = match &app.search {
        SearchState::Ready {
            fixed, constraints, ..
        } => (format!("{fixed} of {}", app.length), constraints.clone()),
        SearchState::Incomplete(_) => ("-".to_string(), "-".to_string()),
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Pattern: "),
            Span::styled(
                pattern_to_display(&app.pattern_input),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Fixed: {fixed}")),
        Line::from(format!("Letters: {constraints}")),
    ];

    let query = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Query ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(query, chunks[0]);

    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, chunks[1]);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let dictionary = Paragraph::new(format!("Words: {}", app.dictionary.len()))
        .alignment(Alignment::Center);
    f.render_widget(dictionary, chunks[0]);

    let candidates = Paragraph::new(format!(
        "Length {}: {} candidates",
        app.length, app.candidates
    ))
    .alignment(Alignment::Center);
    f.render_widget(candidates, chunks[1]);

    let matches =
        Paragraph::new(format!("Matches: {}", app.match_count())).alignment(Alignment::Center);
    f.render_widget(matches, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Tab: Next Field | Ctrl-U: Clear")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
