use crate::config::PocketConfig;
use crate::model::Snippet;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod copy;
pub mod export;
pub mod helpers;
pub mod list;
pub mod remove;
pub mod select;
pub mod view;

pub use helpers::SnippetRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A snippet as it appears in a listing: its 1-based position in the full collection
/// (not in the filtered view) and whether it is the current selection.
#[derive(Debug, Clone)]
pub struct ListedSnippet {
    pub position: usize,
    pub snippet: Snippet,
    pub selected: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_snippets: Vec<Snippet>,
    pub listed_snippets: Vec<ListedSnippet>,
    pub exported_paths: Vec<PathBuf>,
    pub config: Option<PocketConfig>,
    /// The search query a listing was filtered by, if any.
    pub query: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_snippets(mut self, snippets: Vec<Snippet>) -> Self {
        self.affected_snippets = snippets;
        self
    }

    pub fn with_listed_snippets(mut self, snippets: Vec<ListedSnippet>) -> Self {
        self.listed_snippets = snippets;
        self
    }

    pub fn with_config(mut self, config: PocketConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}
