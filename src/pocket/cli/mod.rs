//! # CLI Layer
//!
//! One possible UI client for pocket, and the **only** place that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Uses `std::process::exit`
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup`: clap definitions and the version string
//! - `commands`: `run()` dispatch, `init_context()` and the one-shot `handle_*()` handlers
//! - `shell`: the interactive session, where the selection lives across commands
//! - `print`: output formatting

pub mod commands;
pub mod print;
pub mod setup;
pub mod shell;
