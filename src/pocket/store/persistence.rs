use super::StorageBackend;
use crate::error::{PocketError, Result};
use crate::model::Snippet;
use log::debug;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_STORAGE_KEY: &str = "codeSnippets";
pub const ENVELOPE_VERSION: u32 = 1;

/// Shapes accepted when reading a slot. Writes always use the bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCollection {
    Bare(Vec<Snippet>),
    Versioned { version: u32, snippets: Vec<Snippet> },
}

/// Whole-collection snapshot persistence over a single storage slot.
pub struct Persistence<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> Persistence<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location(&self.key)
    }

    /// Reads the collection. A missing or blank slot is an empty collection; anything
    /// present that does not parse is `CorruptState`.
    pub fn load(&self) -> Result<Vec<Snippet>> {
        let raw = match self.backend.read(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(Vec::new()),
        };

        let stored: StoredCollection = serde_json::from_str(&raw)
            .map_err(|e| PocketError::CorruptState(format!("slot '{}': {}", self.key, e)))?;

        let snippets = match stored {
            StoredCollection::Bare(snippets) => snippets,
            StoredCollection::Versioned { version, snippets } if version == ENVELOPE_VERSION => {
                snippets
            }
            StoredCollection::Versioned { version, .. } => {
                return Err(PocketError::CorruptState(format!(
                    "slot '{}': unsupported format version {}",
                    self.key, version
                )))
            }
        };

        debug!("loaded {} snippets from '{}'", snippets.len(), self.key);
        Ok(snippets)
    }

    /// Overwrites the slot with the full collection.
    pub fn save(&self, snippets: &[Snippet]) -> Result<()> {
        let content = serde_json::to_string(snippets).map_err(PocketError::Serialization)?;
        self.backend.write(&self.key, &content)?;
        debug!("saved {} snippets to '{}'", snippets.len(), self.key);
        Ok(())
    }
}
