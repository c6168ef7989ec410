//! Wordbook CLI
//!
//! Cached dictionary lookups, bookmarks and quizzes on top of a local SQLite wordbook.
//! Exit code 0 on success, 1 on any error.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod commands;
mod dictionary;
mod profile;
mod state;

use self::state::AppState;

#[derive(Parser)]
#[command(name = "wordbook")]
#[command(version)]
#[command(about = "Personal vocabulary manager with quiz bookmarks")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Profile to load from the config directory
    #[arg(long, default_value = "main", global = true)]
    profile: String,

    /// Database file, overrides the profile and WORDBOOK_DB
    #[arg(long, global = true)]
    db: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look a word up, caching the result
    Search { word: String },
    /// Cached words and their meanings
    Word {
        #[command(subcommand)]
        action: commands::word::WordCommands,
    },
    /// Words marked for quizzing
    Bookmark {
        #[command(subcommand)]
        action: commands::bookmark::BookmarkCommands,
    },
    /// Run selection conditions against the bookmarks
    Select(commands::select::SelectArgs),
    /// Quiz counters of a bookmark
    Score {
        #[command(subcommand)]
        action: commands::score::ScoreCommands,
    },
    /// Generate multiple-choice quizzes
    Quiz(commands::quiz::QuizArgs),
    /// Config profiles
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileCommands,
    },
}

fn init_tracing(verbose: u8, json: bool) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("{e:?}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        profile,
        db,
        command,
        ..
    } = cli;

    let command = match command {
        Commands::Profile { action } => {
            return commands::profile::handle_profile_command(action, &profile);
        }
        other => other,
    };

    let mut config = profile::load_user_profile(&profile)?.with_env_overrides();
    if let Some(db) = db {
        config.database.path = db;
    }

    let mut state = AppState::open(config)?;
    let result = match command {
        Commands::Search { word } => commands::search::search_command(&mut state, &word),
        Commands::Word { action } => commands::word::handle_word_command(&mut state, action),
        Commands::Bookmark { action } => {
            commands::bookmark::handle_bookmark_command(&mut state, action)
        }
        Commands::Select(args) => commands::select::select_command(&state, args),
        Commands::Score { action } => commands::score::handle_score_command(&mut state, action),
        Commands::Quiz(args) => commands::quiz::quiz_command(&mut state, args),
        Commands::Profile { .. } => Ok(()),
    };

    let closed = state.close();
    result?;
    closed
}
