use crate::error::{PocketError, Result};
use crate::language::Language;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the id prefix shown in listings.
pub const SHORT_ID_LEN: usize = 8;

/// A stored unit of code.
///
/// Field names on disk are fixed (`createdAt` is camel-cased) so that collections
/// written by earlier clients keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub language: Language,
    pub code: String,
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Snippet {
    /// Builds a snippet from a validated draft, assigning a fresh id and the current time.
    pub fn from_draft(draft: SnippetDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            language: draft.language,
            code: draft.code,
            created_at: Utc::now().timestamp_millis(),
        }
    }

    pub fn created_at_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.created_at).unwrap_or_default()
    }

    /// First characters of the id, enough to tell snippets apart in listings.
    pub fn short_id(&self) -> String {
        self.id.to_string()[..SHORT_ID_LEN].to_string()
    }
}

/// Everything a caller supplies to create a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SnippetDraft {
    pub title: String,
    pub description: String,
    pub language: Language,
    pub code: String,
}

impl SnippetDraft {
    pub fn new(title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Rejects drafts with an empty title or empty code.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(PocketError::Validation("title cannot be empty".to_string()));
        }
        if self.code.trim().is_empty() {
            return Err(PocketError::Validation("code cannot be empty".to_string()));
        }
        Ok(())
    }
}
