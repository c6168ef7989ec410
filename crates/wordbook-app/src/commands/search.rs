use wordbook_core::search_word;

use super::print_json;
use crate::state::AppState;

pub fn search_command(state: &mut AppState, word: &str) -> anyhow::Result<()> {
    let dictionary = state.dictionary()?;
    if dictionary.is_empty() {
        tracing::warn!("no dictionary entries loaded, only cached words can be found");
    }
    let found = search_word(&mut state.store, &dictionary, word)?;
    print_json(&found)
}
