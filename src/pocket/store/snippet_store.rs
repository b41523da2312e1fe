use super::{Persistence, StorageBackend};
use crate::error::{PocketError, Result};
use crate::filter;
use crate::model::{Snippet, SnippetDraft};
use crate::selection::Selection;
use log::{debug, warn};
use uuid::Uuid;

/// The in-memory snippet collection, newest first, mirrored to persistence.
///
/// Every successful mutation is followed by a full save. When the save fails the
/// mutation is undone, so the collection in memory and the one in storage never disagree.
pub struct SnippetStore<B: StorageBackend> {
    persistence: Persistence<B>,
    snippets: Vec<Snippet>,
    selection: Selection,
}

impl<B: StorageBackend> SnippetStore<B> {
    /// Loads the collection. Unreadable stored data is recovered as an empty collection;
    /// the `CorruptState` error is handed back so the caller can tell the user.
    pub fn open(persistence: Persistence<B>) -> Result<(Self, Option<PocketError>)> {
        let (snippets, recovered) = match persistence.load() {
            Ok(snippets) => (snippets, None),
            Err(e @ PocketError::CorruptState(_)) => {
                warn!("{}; starting with an empty collection", e);
                (Vec::new(), Some(e))
            }
            Err(e) => return Err(e),
        };

        let store = Self {
            persistence,
            snippets,
            selection: Selection::new(),
        };
        Ok((store, recovered))
    }

    pub fn list(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn get(&self, id: &Uuid) -> Option<&Snippet> {
        self.snippets.iter().find(|s| &s.id == id)
    }

    pub fn filter(&self, query: &str) -> Vec<Snippet> {
        filter::filter(&self.snippets, query)
    }

    pub fn add(&mut self, draft: SnippetDraft) -> Result<Snippet> {
        draft.validate()?;

        let mut snippet = Snippet::from_draft(draft);
        while self.get(&snippet.id).is_some() {
            snippet.id = Uuid::new_v4();
        }

        self.snippets.insert(0, snippet.clone());
        if let Err(e) = self.persistence.save(&self.snippets) {
            self.snippets.remove(0);
            return Err(e);
        }

        debug!("added snippet {} ({})", snippet.id, snippet.title);
        Ok(snippet)
    }

    /// Removes the snippet with `id`. Absent ids are a no-op returning `false`.
    pub fn remove(&mut self, id: &Uuid) -> Result<bool> {
        let Some(pos) = self.snippets.iter().position(|s| &s.id == id) else {
            return Ok(false);
        };

        let removed = self.snippets.remove(pos);
        if let Err(e) = self.persistence.save(&self.snippets) {
            self.snippets.insert(pos, removed);
            return Err(e);
        }

        if self.selection.release(id) {
            debug!("selection cleared with removed snippet {}", id);
        }
        debug!("removed snippet {}", id);
        Ok(true)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn select(&mut self, id: Uuid) {
        self.selection.select(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// The selected snippet, if the selection points at one that still exists.
    pub fn selected(&self) -> Option<&Snippet> {
        self.selection.current().and_then(|id| self.get(&id))
    }

    pub fn persistence(&self) -> &Persistence<B> {
        &self.persistence
    }
}
