//! Storage infrastructure: config file location and bootstrap.
//!
//! This module is a thin adapter between the daemon and the file system.
//! The `config` sub-module handles:
//!
//! - Resolving the config path (`--config` override or
//!   `$HOME/.config/keyremap/config.json`).
//! - Writing the commented default template on first run, creating parent
//!   directories as needed.
//! - Reading the file and handing its text to `keyremap_core::config`.
//!
//! Keeping file-system concerns here means the core parser stays a pure
//! function over text and never touches the OS.

pub mod config;
