//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: one word per line, plus a few commands.

use crate::core::{Letter, WORD_LENGTH};
use crate::game::{Effect, Event, GameMode};
use crate::output::formatters::tile;
use crate::output::{print_board, print_statistics};
use crate::player::Player;
use crate::stats::StatisticsStore;
use crate::text::{MessageKey, TextProvider, unused_hint_reason};
use colored::Colorize;
use std::io::{self, Write};

/// One line of player input
///
/// Commands start with `:` so that every word, `share` and `daily` included,
/// can still be guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    Empty,
    Guess(String),
    Command(LineCommand),
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCommand {
    Quit,
    New,
    Practice,
    Daily,
    Stats,
    Share,
    Hard,
    Hint,
}

impl LineInput {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim().to_lowercase();
        if line.is_empty() {
            return Self::Empty;
        }
        let Some(name) = line.strip_prefix(':') else {
            return Self::Guess(line);
        };

        let command = match name.trim() {
            "quit" | "q" | "exit" => LineCommand::Quit,
            "new" | "n" => LineCommand::New,
            "practice" => LineCommand::Practice,
            "daily" => LineCommand::Daily,
            "stats" => LineCommand::Stats,
            "share" => LineCommand::Share,
            "hard" => LineCommand::Hard,
            "hint" | "h" => LineCommand::Hint,
            other => return Self::Unknown(other.to_string()),
        };
        Self::Command(command)
    }
}

/// Whether the input loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run the line-mode game until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<S: StatisticsStore>(
    player: &mut Player<S>,
    text: &impl TextProvider,
) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Word Guess - Line Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {WORD_LENGTH}-letter word. Type a word and press Enter.");
    println!(
        "Commands: ':hint', ':hard', ':stats', ':new', ':practice', ':daily', ':share', ':quit'\n"
    );
    print_game_banner(player);

    loop {
        let session = player.session();
        let prompt = if session.is_over() {
            "Command".to_string()
        } else {
            format!("Guess {}/{}", session.active_row() + 1, session.attempts())
        };

        let Some(line) = get_user_input(&prompt)? else {
            println!();
            return Ok(());
        };

        if execute(player, LineInput::parse(&line), text) == Flow::Quit {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
    }
}

/// Carry out one line of input
pub fn execute<S: StatisticsStore>(
    player: &mut Player<S>,
    input: LineInput,
    text: &impl TextProvider,
) -> Flow {
    let command = match input {
        LineInput::Empty => return Flow::Continue,
        LineInput::Guess(word) => {
            submit_word(player, &word, text);
            return Flow::Continue;
        }
        LineInput::Unknown(name) => {
            println!("❌ Unknown command ':{name}'\n");
            return Flow::Continue;
        }
        LineInput::Command(command) => command,
    };

    match command {
        LineCommand::Quit => return Flow::Quit,
        LineCommand::New => {
            let mode = player.session().mode();
            start(player, mode);
        }
        LineCommand::Practice => start(player, GameMode::Practice),
        LineCommand::Daily => start(player, GameMode::Daily),
        LineCommand::Stats => print_statistics(player.game().stats().stats(), text),
        LineCommand::Share => println!("\n{}\n", player.share()),
        LineCommand::Hard => {
            let key = if player.toggle_hard_mode() {
                MessageKey::HardModeOn
            } else {
                MessageKey::HardModeOff
            };
            println!("{}\n", text.text(key).bright_cyan());
        }
        LineCommand::Hint => {
            let effects = player.handle(Event::Hint);
            if effects.is_empty()
                && let Some(key) = unused_hint_reason(player.session())
            {
                println!("{}", text.text(key).red());
            }
            report(player, &effects, text);
        }
    }
    Flow::Continue
}

fn start<S: StatisticsStore>(player: &mut Player<S>, mode: GameMode) {
    player.new_game(mode);
    println!("\n🔄 New game started!\n");
    print_game_banner(player);
}

fn print_game_banner<S: StatisticsStore>(player: &Player<S>) {
    let session = player.session();
    let title = player.game().puzzle_number().map_or_else(
        || format!("{} game", session.mode()),
        |n| format!("Daily puzzle #{n}"),
    );
    let hard = if session.hard_mode() { " (hard mode)" } else { "" };
    println!("{}{hard}\n", title.bright_yellow().bold());
}

/// Replace the active row with `word` and submit it
fn submit_word<S: StatisticsStore>(player: &mut Player<S>, word: &str, text: &impl TextProvider) {
    if player.session().is_over() {
        println!("Game over. Type ':new' to play again.\n");
        return;
    }

    let letters: Result<Vec<Letter>, _> = word.chars().map(Letter::new).collect();
    let letters = match letters {
        Ok(letters) if letters.len() <= WORD_LENGTH => letters,
        Ok(letters) => {
            println!("❌ Too many letters ({})\n", letters.len());
            return;
        }
        Err(e) => {
            println!("❌ {e}\n");
            return;
        }
    };

    while !player.handle(Event::Backspace).is_empty() {}
    for letter in letters {
        player.handle(Event::Letter(letter));
    }
    let effects = player.handle(Event::Submit);
    report(player, &effects, text);
}

fn report<S: StatisticsStore>(player: &Player<S>, effects: &[Effect], text: &impl TextProvider) {
    for effect in effects {
        match effect {
            Effect::Rejected(rejection) => {
                println!("❌ {}\n", text.rejection(*rejection).red());
            }
            Effect::HintRevealed(hint) => println!("💡 {}", text.hint(*hint).bright_cyan()),
            Effect::Scored { .. } => {
                println!();
                print_board(player.session().guesses());
                println!();
            }
            Effect::InputChanged { letters, .. } if !letters.is_empty() => {
                let typed: String = letters.iter().map(|&l| tile(l, None).to_string()).collect();
                println!("   Typed: {typed}\n");
            }
            Effect::InputChanged { .. } => {}
            Effect::Finished {
                won,
                target,
                attempts,
            } => print_result(player, *won, &target.to_string(), *attempts, text),
        }
    }
}

fn print_result<S: StatisticsStore>(
    player: &Player<S>,
    won: bool,
    target: &str,
    attempts: usize,
    text: &impl TextProvider,
) {
    println!("{}", "═".repeat(62).bright_cyan());
    if won {
        println!("  {}", text.text(MessageKey::Won).bright_green().bold());
        println!(
            "  {} in {}/{}",
            target.bright_white().bold(),
            attempts,
            player.session().attempts()
        );
    } else {
        println!("  {}", text.text(MessageKey::Lost).red().bold());
        println!(
            "  {}: {}",
            text.text(MessageKey::Answer),
            target.bright_white().bold()
        );
    }

    let stats = player.game().stats().stats();
    println!(
        "  {}: {}  {}: {}%",
        text.text(MessageKey::Streak),
        stats.streak,
        text.text(MessageKey::WinRate),
        stats.win_rate()
    );
    if player.session().mode() == GameMode::Daily {
        println!(
            "  {}: {}",
            text.text(MessageKey::NextDaily),
            player.next_daily()
        );
    }
    println!("{}", "═".repeat(62).bright_cyan());
    println!("\n{}\n", player.share());
    println!("Type ':new', ':practice' or ':quit'.\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::game::{Clock, DailySchedule, FixedClock, Game, TargetPicker};
    use crate::stats::{MemoryStore, StatisticsAggregator};
    use crate::text::English;
    use crate::wordlists::WordBank;
    use crate::wordlists::loader::words_from_slice;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn player(dir: &tempfile::TempDir, words: &[&str]) -> Player<MemoryStore> {
        let clock = FixedClock(
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        );
        let bank = WordBank::new(words_from_slice(words)).unwrap();
        let picker = TargetPicker::new(bank, DailySchedule::default());
        let settings = Settings::default();
        let stats = StatisticsAggregator::load(MemoryStore::default(), settings.attempts);
        let mut rng = StdRng::seed_from_u64(3);
        let game = Game::start(
            picker,
            stats,
            settings.rules(),
            GameMode::Daily,
            clock.today(),
            &mut rng,
        );
        Player::new(
            game,
            None,
            settings,
            dir.path().join("word_guess.json"),
            Box::new(clock),
            rng,
        )
    }

    #[test]
    fn command_names_are_plain_guesses() {
        assert_eq!(LineInput::parse(" Share "), LineInput::Guess("share".into()));
        assert_eq!(LineInput::parse("daily"), LineInput::Guess("daily".into()));
        assert_eq!(LineInput::parse(":share"), LineInput::Command(LineCommand::Share));
        assert_eq!(LineInput::parse(":Q"), LineInput::Command(LineCommand::Quit));
        assert_eq!(LineInput::parse(":nope"), LineInput::Unknown("nope".into()));
        assert_eq!(LineInput::parse("   "), LineInput::Empty);
    }

    #[test]
    fn share_can_be_guessed() {
        let dir = tempfile::tempdir().unwrap();
        let mut player = player(&dir, &["share"]);

        let flow = execute(&mut player, LineInput::parse("share"), &English);

        assert_eq!(flow, Flow::Continue);
        assert!(player.session().is_won());
        assert_eq!(player.game().stats().stats().wins, 1);
    }

    #[test]
    fn commands_act_on_the_player() {
        let dir = tempfile::tempdir().unwrap();
        let mut player = player(&dir, &["daily", "share"]);

        execute(&mut player, LineInput::parse(":hard"), &English);
        assert!(player.session().hard_mode());

        execute(&mut player, LineInput::parse(":practice"), &English);
        assert_eq!(player.session().mode(), GameMode::Practice);

        assert_eq!(execute(&mut player, LineInput::parse(":quit"), &English), Flow::Quit);
    }
}
