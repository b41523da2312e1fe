//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point for
//! every UI. It:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (reference strings → [`SnippetRef`]s, config defaults)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own beyond what commands do, and never formats output.
//!
//! ## Generic Over StorageBackend
//!
//! `PocketApi<B: StorageBackend>`:
//! - Production: `PocketApi<FsBackend>`
//! - Testing: `PocketApi<MemBackend>`

use crate::clipboard::copy_to_clipboard;
use crate::commands::{self, helpers::parse_refs};
use crate::config::PocketConfig;
use crate::error::{PocketError, Result};
use crate::language::Language;
use crate::model::SnippetDraft;
use crate::selection::Selection;
use crate::store::{Persistence, SnippetStore, StorageBackend};
use std::path::{Path, PathBuf};

/// The main API facade for pocket operations.
pub struct PocketApi<B: StorageBackend> {
    store: SnippetStore<B>,
    data_dir: PathBuf,
    config: PocketConfig,
}

impl<B: StorageBackend> PocketApi<B> {
    /// Loads configuration from `data_dir` and the collection from `backend`.
    ///
    /// The returned `CmdResult` carries any startup warning, such as unreadable stored
    /// snippets having been replaced by an empty collection.
    pub fn open(backend: B, data_dir: PathBuf) -> Result<(Self, CmdResult)> {
        let config = PocketConfig::load(&data_dir)?;
        let persistence = Persistence::with_key(backend, config.storage_key.clone());
        let (store, recovered) = SnippetStore::open(persistence)?;

        let mut startup = CmdResult::default();
        if let Some(e) = recovered {
            startup.add_message(CmdMessage::warning(format!(
                "{}. Starting with an empty collection.",
                e
            )));
        }

        let api = Self {
            store,
            data_dir,
            config,
        };
        Ok((api, startup))
    }

    pub fn add_snippet(&mut self, draft: SnippetDraft) -> Result<CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn list_snippets(&self, query: &str) -> Result<CmdResult> {
        commands::list::run(&self.store, query)
    }

    pub fn view_snippets<I: AsRef<str>>(&self, refs: &[I]) -> Result<CmdResult> {
        let refs = parse_refs(refs)?;
        commands::view::run(&self.store, &refs)
    }

    pub fn delete_snippets<I: AsRef<str>>(&mut self, refs: &[I]) -> Result<CmdResult> {
        let refs = parse_refs(refs)?;
        if refs.is_empty() {
            return Err(PocketError::Api("Nothing to delete".to_string()));
        }
        commands::remove::run(&mut self.store, &refs)
    }

    pub fn select_snippet(&mut self, r: &str) -> Result<CmdResult> {
        commands::select::select(&mut self.store, &r.parse::<SnippetRef>()?)
    }

    pub fn clear_selection(&mut self) -> Result<CmdResult> {
        commands::select::clear(&mut self.store)
    }

    /// Exports to `out_dir`, else the configured export directory, else the current one.
    pub fn export_snippets<I: AsRef<str>>(
        &self,
        refs: &[I],
        out_dir: Option<&Path>,
    ) -> Result<CmdResult> {
        let refs = parse_refs(refs)?;
        let dir = out_dir
            .map(Path::to_path_buf)
            .or_else(|| self.config.export_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        commands::export::run(&self.store, &refs, &dir)
    }

    pub fn copy_snippet(&self, r: Option<&str>) -> Result<CmdResult> {
        let r = r.map(str::parse::<SnippetRef>).transpose()?;
        commands::copy::run(&self.store, r.as_ref(), copy_to_clipboard)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.data_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn default_language(&self) -> Language {
        self.config.default_language
    }

    pub fn selection(&self) -> Selection {
        self.store.selection()
    }

    pub fn store(&self) -> &SnippetStore<B> {
        &self.store
    }

    pub fn storage_location(&self) -> PathBuf {
        self.store.persistence().location()
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::{export_file, suggested_filename, ExportFile};
pub use crate::commands::{CmdMessage, CmdResult, ListedSnippet, MessageLevel, SnippetRef};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use crate::store::persistence::DEFAULT_STORAGE_KEY;
    use tempfile::tempdir;

    fn api() -> (PocketApi<MemBackend>, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let (api, startup) = PocketApi::open(MemBackend::new(), dir.path().to_path_buf()).unwrap();
        assert!(startup.messages.is_empty());
        (api, dir)
    }

    #[test]
    fn add_then_list() {
        let (mut api, _dir) = api();
        api.add_snippet(SnippetDraft::new("Hello", "print(1)").with_language(Language::Python))
            .unwrap();

        let listed = api.list_snippets("hel").unwrap().listed_snippets;
        assert_eq!(listed.len(), 1);
        assert!(api.list_snippets("java").unwrap().listed_snippets.is_empty());
    }

    #[test]
    fn delete_dispatches_parsed_refs() {
        let (mut api, _dir) = api();
        api.add_snippet(SnippetDraft::new("a", "x")).unwrap();

        assert!(api.delete_snippets(&["not-a-ref!"]).is_err());
        let result = api.delete_snippets(&["1"]).unwrap();
        assert_eq!(result.affected_snippets.len(), 1);
        assert!(api.list_snippets("").unwrap().listed_snippets.is_empty());
    }

    #[test]
    fn select_then_delete_clears_selection() {
        let (mut api, _dir) = api();
        api.add_snippet(SnippetDraft::new("a", "x")).unwrap();

        api.select_snippet("1").unwrap();
        assert!(api.selection().current().is_some());
        api.delete_snippets(&["1"]).unwrap();
        assert_eq!(api.selection().current(), None);
    }

    #[test]
    fn corrupt_storage_is_a_startup_warning() {
        let dir = tempdir().unwrap();
        let backend = MemBackend::with_slot(DEFAULT_STORAGE_KEY, "[{broken");
        let (api, startup) = PocketApi::open(backend, dir.path().to_path_buf()).unwrap();

        assert_eq!(startup.messages.len(), 1);
        assert_eq!(startup.messages[0].level, MessageLevel::Warning);
        assert!(api.list_snippets("").unwrap().listed_snippets.is_empty());
    }

    #[test]
    fn configured_storage_key_selects_slot() {
        let dir = tempdir().unwrap();
        let mut config = PocketConfig::default();
        config.set("storage-key", "work").unwrap();
        config.save(dir.path()).unwrap();

        let (mut api, _) = PocketApi::open(MemBackend::new(), dir.path().to_path_buf()).unwrap();
        api.add_snippet(SnippetDraft::new("a", "x")).unwrap();
        assert_eq!(api.storage_location(), PathBuf::from("memory://work"));
    }

    #[test]
    fn config_changes_update_defaults() {
        let (mut api, _dir) = api();
        assert_eq!(api.default_language(), Language::JavaScript);
        api.config(ConfigAction::Set("default-language".into(), "sql".into()))
            .unwrap();
        assert_eq!(api.default_language(), Language::Sql);
    }

    #[test]
    fn export_uses_given_directory() {
        let (mut api, dir) = api();
        api.add_snippet(SnippetDraft::new("My Query", "SELECT 1").with_language(Language::Sql))
            .unwrap();

        let out = dir.path().join("out");
        let result = api.export_snippets(&["1"], Some(&out)).unwrap();
        assert_eq!(result.exported_paths, vec![out.join("my-query.sql")]);
    }
}
