use crate::commands::{CmdMessage, CmdResult, SnippetRef};
use crate::error::Result;
use crate::store::{SnippetStore, StorageBackend};

use super::helpers::resolve;

pub fn select<B: StorageBackend>(
    store: &mut SnippetStore<B>,
    r: &SnippetRef,
) -> Result<CmdResult> {
    let snippet = resolve(store, r)?;
    store.select(snippet.id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Selected: {}", snippet.title)));
    Ok(result.with_affected_snippets(vec![snippet]))
}

pub fn clear<B: StorageBackend>(store: &mut SnippetStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if store.selection().current().is_some() {
        store.clear_selection();
        result.add_message(CmdMessage::info("Selection cleared"));
    }
    Ok(result)
}
