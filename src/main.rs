//! Word Guess - CLI
//!
//! Daily and practice word-guessing games in a TUI or on plain lines of text.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;
use word_guess::{
    commands::{daily_info, evaluate_words, run_simple},
    config::{CONFIG_FILE_NAME, Settings},
    dictionary::{HttpDictionary, LookupWorker},
    game::{Clock, DailySchedule, Game, GameMode, SystemClock, TargetPicker},
    output::{print_daily, print_evaluation, print_statistics},
    player::Player,
    stats::{JsonFileStore, MemoryStore, StatisticsAggregator, StatisticsStore},
    text::English,
    wordlists::{WordBank, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_guess",
    about = "Guess the hidden 5-letter word in daily or practice games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file (default: ./word_guess.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Target word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Keep statistics in memory only
    #[arg(long, global = true)]
    no_save: bool,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file; the TUI logs nowhere otherwise
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play(PlayArgs),

    /// Simple line mode without the TUI
    Simple(PlayArgs),

    /// Score a guess against an answer
    Evaluate {
        /// The guessed word
        guess: String,
        /// The hidden word
        answer: String,
    },

    /// Show saved statistics
    Stats,

    /// Show today's puzzle number and time until the next one
    Daily,
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Random word instead of the daily puzzle
    #[arg(short, long)]
    practice: bool,

    /// Hard mode for this run, whatever the saved preference
    #[arg(long)]
    hard: bool,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli
        .command
        .take()
        .unwrap_or_else(|| Commands::Play(PlayArgs::default()));
    init_logging(
        cli.verbose,
        cli.log_file.as_deref(),
        matches!(command, Commands::Play(_)),
    )?;

    let settings_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::load()?,
    };
    tracing::debug!(path = %settings_path.display(), "Settings loaded");

    match command {
        Commands::Play(args) => {
            let runtime = Runtime::new().context("Failed to start async runtime")?;
            let player = build_player(&cli, settings, settings_path, &args, &runtime)?;
            run_play_command(player)
        }
        Commands::Simple(args) => {
            let runtime = Runtime::new().context("Failed to start async runtime")?;
            let mut player = build_player(&cli, settings, settings_path, &args, &runtime)?;
            run_simple(&mut player, &English).context("Line mode failed")
        }
        Commands::Evaluate { guess, answer } => {
            let (guess, answer) = evaluate_words(&guess, &answer)?;
            print_evaluation(&guess, &answer);
            Ok(())
        }
        Commands::Stats => {
            let store = open_store(&settings, cli.no_save);
            let stats = StatisticsAggregator::load(store, settings.attempts);
            print_statistics(stats.stats(), &English);
            Ok(())
        }
        Commands::Daily => {
            let (puzzle, remaining) = daily_info(&DailySchedule::new(settings.epoch), &SystemClock);
            print_daily(puzzle, remaining, &English);
            Ok(())
        }
    }
}

/// `RUST_LOG` wins, then `--verbose`, else warnings only
///
/// The TUI owns the terminal, so without `--log-file` it logs nowhere.
fn init_logging(verbose: bool, log_file: Option<&Path>, tui: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create log file '{}'", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if tui => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn open_store(settings: &Settings, no_save: bool) -> Box<dyn StatisticsStore> {
    if no_save {
        Box::new(MemoryStore::default())
    } else {
        Box::new(JsonFileStore::new(&settings.stats_path))
    }
}

/// Load the word bank from `--wordlist` or the built-in list
fn load_bank(wordlist: Option<&Path>) -> Result<WordBank> {
    let bank = match wordlist {
        Some(path) => WordBank::new(load_from_file(path)?)?,
        None => WordBank::embedded()?,
    };
    tracing::debug!(words = bank.len(), "Word bank loaded");
    Ok(bank)
}

fn build_player(
    cli: &Cli,
    settings: Settings,
    settings_path: PathBuf,
    args: &PlayArgs,
    runtime: &Runtime,
) -> Result<Player<Box<dyn StatisticsStore>>> {
    let bank = load_bank(cli.wordlist.as_deref())?;
    let picker = TargetPicker::new(bank, DailySchedule::new(settings.epoch));
    let stats = StatisticsAggregator::load(open_store(&settings, cli.no_save), settings.attempts);

    let mut rules = settings.rules();
    rules.hard_mode |= args.hard;
    let mode = if args.practice {
        GameMode::Practice
    } else {
        GameMode::Daily
    };

    let worker = if settings.online_lookup {
        let dictionary = HttpDictionary::new(settings.dictionary_url.clone())?;
        Some(LookupWorker::new(runtime.handle().clone(), Arc::new(dictionary)))
    } else {
        None
    };

    let clock = SystemClock;
    let mut rng = StdRng::from_os_rng();
    let game = Game::start(picker, stats, rules, mode, clock.today(), &mut rng);

    Ok(Player::new(
        game,
        worker,
        settings,
        settings_path,
        Box::new(clock),
        rng,
    ))
}

fn run_play_command(player: Player<Box<dyn StatisticsStore>>) -> Result<()> {
    use word_guess::interactive::{App, run_tui};

    let app = App::new(player);
    run_tui(app)
}
