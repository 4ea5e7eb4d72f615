//! TUI application state and logic

use crate::core::Letter;
use crate::game::{Effect, Event as GameEvent, GameMode};
use crate::player::Player;
use crate::stats::StatisticsStore;
use crate::text::{English, MessageKey, TextProvider, unused_hint_reason};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How long to wait for a key before checking for lookup results
const TICK: Duration = Duration::from_millis(200);

/// Messages kept on screen
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App<S: StatisticsStore> {
    pub player: Player<S>,
    pub messages: Vec<Message>,
    pub show_stats: bool,
    pub should_quit: bool,
    text: English,
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

impl<S: StatisticsStore> App<S> {
    #[must_use]
    pub fn new(player: Player<S>) -> Self {
        let mut app = Self {
            player,
            messages: Vec::new(),
            show_stats: false,
            should_quit: false,
            text: English,
        };
        app.announce_game();
        app
    }

    #[must_use]
    pub const fn text(&self) -> &English {
        &self.text
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(self.player.session().mode()),
            KeyCode::Char('t') if ctrl => self.toggle_hard_mode(),
            KeyCode::Char('s') if ctrl => self.show_stats = !self.show_stats,
            KeyCode::Tab => self.new_game(self.player.session().mode().toggled()),
            KeyCode::Char('n') if self.player.session().is_over() => {
                self.new_game(self.player.session().mode());
            }
            KeyCode::Char('?') => self.dispatch(GameEvent::Hint),
            KeyCode::Char(c) if !ctrl => {
                if let Ok(letter) = Letter::new(c) {
                    self.dispatch(GameEvent::Letter(letter));
                }
            }
            KeyCode::Backspace => self.dispatch(GameEvent::Backspace),
            KeyCode::Enter => self.dispatch(GameEvent::Submit),
            _ => {}
        }
    }

    /// Called on every tick so lookups settle while the player thinks
    pub fn tick(&mut self) {
        self.player.sync_lookups();
    }

    fn dispatch(&mut self, event: GameEvent) {
        let effects = self.player.handle(event);

        if effects.is_empty()
            && event == GameEvent::Hint
            && let Some(key) = unused_hint_reason(self.player.session())
        {
            let text = self.text;
            self.add_message(text.text(key), MessageStyle::Error);
        }

        for effect in effects {
            match effect {
                Effect::Rejected(rejection) => {
                    let text = self.text.rejection(rejection);
                    self.add_message(&text, MessageStyle::Error);
                }
                Effect::HintRevealed(hint) => {
                    let text = format!("💡 {}", self.text.hint(hint));
                    self.add_message(&text, MessageStyle::Info);
                }
                Effect::Finished { won, target, .. } => {
                    self.announce_result(won, &target.to_string());
                }
                Effect::InputChanged { .. } | Effect::Scored { .. } => {}
            }
        }
    }

    fn announce_result(&mut self, won: bool, target: &str) {
        if won {
            let text = format!("🎉 {} {target}", self.text.text(MessageKey::Won));
            self.add_message(&text, MessageStyle::Success);
        } else {
            let text = format!(
                "{}. {}: {target}",
                self.text.text(MessageKey::Lost),
                self.text.text(MessageKey::Answer)
            );
            self.add_message(&text, MessageStyle::Error);
        }

        if self.player.session().mode() == GameMode::Daily {
            let text = format!(
                "{}: {}",
                self.text.text(MessageKey::NextDaily),
                self.player.next_daily()
            );
            self.add_message(&text, MessageStyle::Info);
        }
        self.show_stats = true;
        self.add_message("Press 'n' for a new game or Esc to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self, mode: GameMode) {
        self.player.new_game(mode);
        self.messages.clear();
        self.show_stats = false;
        self.announce_game();
    }

    fn announce_game(&mut self) {
        let text = self.player.game().puzzle_number().map_or_else(
            || "Practice game started".to_string(),
            |n| format!("Daily puzzle #{n}"),
        );
        self.add_message(&text, MessageStyle::Info);
    }

    fn toggle_hard_mode(&mut self) {
        let key = if self.player.toggle_hard_mode() {
            MessageKey::HardModeOn
        } else {
            MessageKey::HardModeOff
        };
        let text = self.text;
        self.add_message(text.text(key), MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
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
pub fn run_tui<S: StatisticsStore>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: StatisticsStore,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
