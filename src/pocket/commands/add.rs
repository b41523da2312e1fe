use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SnippetDraft;
use crate::store::{SnippetStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut SnippetStore<B>,
    draft: SnippetDraft,
) -> Result<CmdResult> {
    let snippet = store.add(draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Snippet added: {}",
        snippet.title
    )));
    Ok(result.with_affected_snippets(vec![snippet]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PocketError;
    use crate::language::Language;
    use crate::store::mem_backend::MemBackend;
    use crate::store::Persistence;

    fn open() -> SnippetStore<MemBackend> {
        SnippetStore::open(Persistence::new(MemBackend::new()))
            .unwrap()
            .0
    }

    #[test]
    fn reports_added_snippet() {
        let mut store = open();
        let draft = SnippetDraft::new("Hello", "print(1)").with_language(Language::Python);
        let result = run(&mut store, draft).unwrap();

        assert_eq!(result.affected_snippets.len(), 1);
        assert_eq!(result.affected_snippets[0].title, "Hello");
        assert_eq!(result.messages[0].content, "Snippet added: Hello");
        assert_eq!(store.list()[0].id, result.affected_snippets[0].id);
    }

    #[test]
    fn validation_error_propagates() {
        let mut store = open();
        let err = run(&mut store, SnippetDraft::new("No code", "")).unwrap_err();
        assert!(matches!(err, PocketError::Validation(_)));
    }
}
