use clap::{Args, Subcommand};
use wordbook_core::WordStore;
use wordbook_types::Meaning;

use super::{print_json, word_key};
use crate::state::AppState;

#[derive(Subcommand, Debug)]
pub enum WordCommands {
    /// Add a word with its meanings
    Add(WordArgs),
    /// Replace the meanings of a word
    Edit(WordArgs),
    Show { word: String },
    /// Delete a word that is not bookmarked
    Delete { word: String },
    List,
}

#[derive(Args, Debug)]
pub struct WordArgs {
    pub word: String,

    /// Meaning as FROM:TYPE:TO, append :* to star it
    #[arg(short, long = "meaning", value_parser = parse_meaning)]
    pub meanings: Vec<Meaning>,
}

pub fn parse_meaning(raw: &str) -> Result<Meaning, String> {
    let parts: Vec<&str> = raw.split(':').map(str::trim).collect();
    let meaning = match parts.as_slice() {
        [from, from_type, to] => Meaning::new(*from, *from_type, *to),
        [from, from_type, to, "*"] => Meaning::new(*from, *from_type, *to).starred(),
        _ => return Err(format!("expected FROM:TYPE:TO[:*], got '{raw}'")),
    };

    if meaning.to.is_empty() {
        return Err(format!("meaning '{raw}' has no translation"));
    }
    Ok(meaning)
}

pub fn handle_word_command(state: &mut AppState, cmd: WordCommands) -> anyhow::Result<()> {
    match cmd {
        WordCommands::Add(args) => {
            let key = word_key(&args.word)?;
            state.store.add_word(&key, &args.meanings)?;
            println!("added '{key}'");
        }
        WordCommands::Edit(args) => {
            let key = word_key(&args.word)?;
            if !state.store.edit_word(&key, &args.meanings)? {
                anyhow::bail!("word '{key}' not found");
            }
            println!("edited '{key}'");
        }
        WordCommands::Show { word } => {
            let key = word_key(&word)?;
            match state.store.get_word(&key)? {
                Some(word) => print_json(&word)?,
                None => anyhow::bail!("word '{key}' not found"),
            }
        }
        WordCommands::Delete { word } => {
            let key = word_key(&word)?;
            state.store.delete_word(&key)?;
            println!("deleted '{key}'");
        }
        WordCommands::List => print_json(&state.store.list_words()?)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meaning_flags() {
        assert_eq!(parse_meaning("run:v:달리다"), Ok(Meaning::new("run", "v", "달리다")));
        assert_eq!(
            parse_meaning("run : n : 운영 : *"),
            Ok(Meaning::new("run", "n", "운영").starred())
        );
        assert!(parse_meaning("run:v").is_err());
        assert!(parse_meaning("run:v:").is_err());
        assert!(parse_meaning("run:v:x:y").is_err());
    }
}
