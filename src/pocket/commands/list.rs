use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter;
use crate::store::{SnippetStore, StorageBackend};

use super::helpers::listed;

/// Lists the collection newest first, keeping only snippets that match `query`.
/// Positions stay those of the full collection so they can be reused in later commands.
pub fn run<B: StorageBackend>(store: &SnippetStore<B>, query: &str) -> Result<CmdResult> {
    let rows: Vec<_> = listed(store)
        .into_iter()
        .filter(|row| filter::matches(&row.snippet, query))
        .collect();

    let result = CmdResult::default().with_listed_snippets(rows);
    if query.is_empty() {
        Ok(result)
    } else {
        Ok(result.with_query(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::model::SnippetDraft;
    use crate::store::mem_backend::MemBackend;
    use crate::store::Persistence;

    fn store() -> SnippetStore<MemBackend> {
        let (mut store, _) = SnippetStore::open(Persistence::new(MemBackend::new())).unwrap();
        store
            .add(SnippetDraft::new("Hello", "print(1)").with_language(Language::Python))
            .unwrap();
        store
            .add(SnippetDraft::new("Main", "fn main() {}").with_language(Language::Rust))
            .unwrap();
        store
    }

    #[test]
    fn lists_everything_without_query() {
        let store = store();
        let result = run(&store, "").unwrap();
        assert_eq!(result.listed_snippets.len(), 2);
        assert_eq!(result.listed_snippets[0].snippet.title, "Main");
        assert!(result.query.is_none());
    }

    #[test]
    fn filtered_rows_keep_full_positions() {
        let store = store();
        let result = run(&store, "PYTHON").unwrap();
        assert_eq!(result.listed_snippets.len(), 1);
        assert_eq!(result.listed_snippets[0].position, 2);
        assert_eq!(result.query.as_deref(), Some("PYTHON"));
    }
}
