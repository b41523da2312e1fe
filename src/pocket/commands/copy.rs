use crate::commands::{CmdMessage, CmdResult, SnippetRef};
use crate::error::{PocketError, Result};
use crate::store::{SnippetStore, StorageBackend};

use super::helpers::resolve;

/// Puts a snippet's code on the clipboard through `copier`. The referenced snippet, or the
/// selection when `r` is `None`. A failing copier becomes a warning, not an error.
pub fn run<B, F>(store: &SnippetStore<B>, r: Option<&SnippetRef>, copier: F) -> Result<CmdResult>
where
    B: StorageBackend,
    F: FnOnce(&str) -> Result<()>,
{
    let snippet = match r {
        Some(r) => resolve(store, r)?,
        None => store
            .selected()
            .cloned()
            .ok_or_else(|| PocketError::Api("No snippet selected".to_string()))?,
    };

    let mut result = CmdResult::default();
    match copier(&snippet.code) {
        Ok(()) => result.add_message(CmdMessage::success(format!(
            "Copied to clipboard: {}",
            snippet.title
        ))),
        Err(e) => result.add_message(CmdMessage::warning(format!(
            "Could not copy to clipboard: {}",
            e
        ))),
    }
    Ok(result.with_affected_snippets(vec![snippet]))
}
