//! # Storage Layer
//!
//! Three pieces, from the bottom up:
//!
//! - [`StorageBackend`]: raw string slots addressed by key. This is the only part that
//!   knows where bytes live.
//!   - [`fs_backend::FsBackend`]: one file per slot, `<root>/<key>.json`, written atomically
//!   - [`mem_backend::MemBackend`]: a `HashMap` behind a `RefCell`, for tests
//! - [`persistence::Persistence`]: reads and writes the whole snippet collection as one
//!   JSON document in a single slot.
//! - [`snippet_store::SnippetStore`]: the in-memory, newest-first collection and the
//!   current selection. It is the only writer of the persistence slot and saves after every
//!   successful mutation.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── codeSnippets.json   # JSON array of snippets, newest first
//! └── config.json         # PocketConfig
//! ```

use crate::error::Result;
use std::path::PathBuf;

pub mod fs_backend;
pub mod mem_backend;
pub mod persistence;
pub mod snippet_store;

pub use persistence::Persistence;
pub use snippet_store::SnippetStore;

/// Abstract interface for raw slot storage.
///
/// Methods take `&self`; backends that hold state in memory use interior mutability.
pub trait StorageBackend {
    /// Read the raw value of a slot. `Ok(None)` if the slot was never written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value of a slot. Readers never observe a partial write.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Where the slot lives, for display. Virtual for non-file backends.
    fn location(&self, key: &str) -> PathBuf;
}
