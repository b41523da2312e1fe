use crate::commands::{CmdResult, ListedSnippet, SnippetRef};
use crate::error::{PocketError, Result};
use crate::store::{SnippetStore, StorageBackend};

use super::helpers::{listed, resolve_all};

/// Shows the referenced snippets, or the current selection when no reference is given.
pub fn run<B: StorageBackend>(
    store: &SnippetStore<B>,
    refs: &[SnippetRef],
) -> Result<CmdResult> {
    let targets = if refs.is_empty() {
        let selected = store
            .selected()
            .ok_or_else(|| PocketError::Api("No snippet selected".to_string()))?;
        vec![selected.id]
    } else {
        resolve_all(store, refs)?
            .into_iter()
            .map(|s| s.id)
            .collect()
    };

    let rows = listed(store);
    let shown: Vec<ListedSnippet> = targets
        .iter()
        .filter_map(|id| rows.iter().find(|row| &row.snippet.id == id).cloned())
        .collect();

    Ok(CmdResult::default().with_listed_snippets(shown))
}
