use clap::Subcommand;
use wordbook_core::BookmarkStore;

use super::{print_json, word_key};
use crate::state::AppState;

#[derive(Subcommand, Debug)]
pub enum BookmarkCommands {
    /// Bookmark a stored word
    Add { word: String },
    /// Remove a bookmark and its quiz score
    Remove { word: String },
    Show { word: String },
    Count,
    /// Remove every bookmark, words are kept
    Clear,
    /// Most recent bookmarks first
    List {
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

pub fn handle_bookmark_command(state: &mut AppState, cmd: BookmarkCommands) -> anyhow::Result<()> {
    match cmd {
        BookmarkCommands::Add { word } => {
            let key = word_key(&word)?;
            state.store.add_bookmark(&key)?;
            println!("bookmarked '{key}'");
        }
        BookmarkCommands::Remove { word } => {
            let key = word_key(&word)?;
            state.store.delete_bookmark(&key)?;
            println!("removed '{key}'");
        }
        BookmarkCommands::Show { word } => {
            let key = word_key(&word)?;
            match state.store.get_bookmark(&key)? {
                Some(view) => print_json(&view)?,
                None => anyhow::bail!("'{key}' is not bookmarked"),
            }
        }
        BookmarkCommands::Count => println!("{}", state.store.bookmark_count()?),
        BookmarkCommands::Clear => {
            state.store.clear_bookmarks()?;
            println!("cleared bookmarks");
        }
        BookmarkCommands::List { limit } => {
            let limit = limit.unwrap_or(state.config.listing.limit);
            print_json(&state.engine().latest(limit)?)?;
        }
    }

    Ok(())
}
