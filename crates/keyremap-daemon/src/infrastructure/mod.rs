//! Infrastructure layer for the daemon.
//!
//! Contains OS-facing adapters: the keyboard event tap and the config file
//! storage.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `keyremap_core`, but MUST NOT be imported by the application or domain
//! layers.

pub mod event_tap;
pub mod storage;
