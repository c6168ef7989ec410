use clap::{Args, Subcommand};
use wordbook_core::BookmarkStore;

use super::{print_json, word_key};
use crate::state::AppState;

#[derive(Subcommand, Debug)]
pub enum ScoreCommands {
    /// Add to the quiz counters of a bookmark
    Add(ScoreArgs),
    /// Overwrite the quiz counters of a bookmark
    Reset(ScoreArgs),
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    pub word: String,

    #[arg(long, default_value_t = 0)]
    pub correct: u32,

    #[arg(long, default_value_t = 0)]
    pub incorrect: u32,
}

pub fn handle_score_command(state: &mut AppState, cmd: ScoreCommands) -> anyhow::Result<()> {
    let (key, updated) = match cmd {
        ScoreCommands::Add(args) => {
            let key = word_key(&args.word)?;
            let updated = state.store.increase_quiz_score(&key, args.correct, args.incorrect)?;
            (key, updated)
        }
        ScoreCommands::Reset(args) => {
            let key = word_key(&args.word)?;
            let updated = state.store.reset_quiz_score(&key, args.correct, args.incorrect)?;
            (key, updated)
        }
    };

    if !updated {
        tracing::warn!("no quiz score for '{key}'");
        anyhow::bail!("'{key}' is not bookmarked");
    }

    match state.store.get_quiz_score(&key)? {
        Some(score) => print_json(&score),
        None => anyhow::bail!("'{key}' is not bookmarked"),
    }
}
