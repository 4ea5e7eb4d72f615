//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{Letter, Verdict, WORD_LENGTH};
use crate::game::KeyboardState;
use crate::output::formatters::distribution_bar;
use crate::stats::StatisticsStore;
use crate::text::{MessageKey, TextProvider};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S: StatisticsStore>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_keyboard(f, &app.player.keyboard(), chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<S: StatisticsStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let title = app.player.game().puzzle_number().map_or_else(
        || "WORD GUESS - Practice".to_string(),
        |n| format!("WORD GUESS - Daily #{n}"),
    );
    let header = Paragraph::new(title)
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

const fn verdict_style(verdict: Option<Verdict>) -> Style {
    let base = Style::new().add_modifier(Modifier::BOLD);
    match verdict {
        Some(Verdict::Correct) => base.fg(Color::Black).bg(Color::Green),
        Some(Verdict::Present) => base.fg(Color::Black).bg(Color::Yellow),
        Some(Verdict::Absent) => base.fg(Color::White).bg(Color::DarkGray),
        None => base.fg(Color::White),
    }
}

fn tile(letter: Option<Letter>, verdict: Option<Verdict>) -> Span<'static> {
    let text = letter.map_or_else(|| " · ".to_string(), |l| format!(" {l} "));
    Span::styled(text, verdict_style(verdict))
}

fn render_board<S: StatisticsStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let session = app.player.session();
    let mut lines = vec![Line::from("")];

    for row in 0..session.attempts() {
        let mut spans = vec![Span::raw("  ")];
        if let Some(guess) = session.guesses().get(row) {
            for (&letter, &verdict) in guess
                .word()
                .letters()
                .iter()
                .zip(guess.feedback().verdicts())
            {
                spans.push(tile(Some(letter), Some(verdict)));
                spans.push(Span::raw(" "));
            }
        } else if row == session.active_row() && !session.is_over() {
            for position in 0..WORD_LENGTH {
                spans.push(tile(session.pending().get(position).copied(), None));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<S: StatisticsStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    if app.show_stats {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);
        render_messages(f, app, chunks[0]);
        render_stats(f, app, chunks[1]);
    } else {
        render_messages(f, app, area);
    }
}

fn render_messages<S: StatisticsStore>(f: &mut Frame, app: &App<S>, area: Rect) {
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

    f.render_widget(messages_list, area);
}

fn render_stats<S: StatisticsStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let stats = app.player.game().stats().stats();
    let text = app.text();

    let mut lines = vec![
        Line::from(format!(
            "{}: {}   {}: {}%   {}: {}",
            text.text(MessageKey::Played),
            stats.played,
            text.text(MessageKey::WinRate),
            stats.win_rate(),
            text.text(MessageKey::Streak),
            stats.streak
        )),
        Line::from(""),
        Line::from(Span::styled(
            text.text(MessageKey::Distribution),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let max = stats.max_bucket();
    let last_row = app.player.session().is_won().then(|| app.player.session().guesses().len());
    for (i, &count) in stats.distribution.iter().enumerate() {
        let color = if last_row == Some(i + 1) {
            Color::Green
        } else {
            Color::DarkGray
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled(distribution_bar(count, max, 20), Style::default().fg(color)),
            Span::raw(format!(" {count}")),
        ]));
    }

    if app.player.session().is_over() {
        lines.push(Line::from(""));
        lines.extend(app.player.share().lines().map(|l| Line::from(l.to_string())));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardState, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .filter_map(|c| Letter::new(c).ok())
                .flat_map(|letter| [tile(Some(letter), keyboard.status(letter)), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(widget, area);
}

fn render_status<S: StatisticsStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let session = app.player.session();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(65),
        ])
        .split(area);

    let mode_text = format!(
        "{} | Hints: {} | Hard: {}",
        session.mode(),
        session.hints_remaining(),
        if session.hard_mode() { "on" } else { "off" }
    );
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let help_text = if session.is_over() {
        "n: New game | Tab: Switch mode | Ctrl-S: Stats | Esc: Quit"
    } else {
        "Enter: Submit | ?: Hint | Tab: Switch mode | Ctrl-T: Hard mode | Ctrl-S: Stats | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
