use crate::commands::{CmdMessage, CmdResult, SnippetRef};
use crate::error::Result;
use crate::store::{SnippetStore, StorageBackend};

use super::helpers::resolve_all;

pub fn run<B: StorageBackend>(
    store: &mut SnippetStore<B>,
    refs: &[SnippetRef],
) -> Result<CmdResult> {
    let targets = resolve_all(store, refs)?;
    let mut result = CmdResult::default();

    for snippet in targets {
        // The same snippet may be named twice in one batch; the second removal is a no-op.
        if store.remove(&snippet.id)? {
            result.add_message(CmdMessage::success(format!(
                "Snippet deleted: {}",
                snippet.title
            )));
            result.affected_snippets.push(snippet);
        }
    }

    Ok(result)
}
