//! # Pocket Architecture
//!
//! Pocket is a **UI-agnostic snippet library**. The terminal client in `main.rs` is one
//! consumer of it; nothing from `api.rs` inward knows it is being driven by a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, runs the shell session │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (positions / id prefixes → UUIDs)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Operates on Rust types, returns `CmdResult`              │
//! │  - User-facing notifications travel as `CmdMessage`s        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnippetStore: ordered collection + selection             │
//! │  - Persistence: whole-collection JSON snapshot in one slot  │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! The full collection lives in memory and is mirrored to a single storage slot after every
//! successful mutation. There is no incremental write: each save replaces the slot with the
//! complete snapshot. A slot that cannot be parsed is treated as empty and reported as a
//! warning, never as a fatal error.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Snippet store, persistence adapter and storage backends
//! - [`filter`]: The search predicate over title, description and language
//! - [`selection`]: The "currently viewed" snippet
//! - [`model`]: Core data types (`Snippet`, `SnippetDraft`)
//! - [`language`]: Language tags and the file-extension table
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod filter;
pub mod language;
pub mod model;
pub mod selection;
pub mod store;
