//! Application layer use cases for the daemon.
//!
//! Use cases orchestrate the domain (the resolver) to answer a single
//! question per key event: what should the tap do with it?  They depend on
//! the event-tap types only as plain data (`KeyEvent` in,
//! `EventDisposition` out) and contain no OS calls, so every policy here is
//! unit-testable without hooks.
//!
//! # Sub-modules
//!
//! - **`remap_events`** – Normal operation: resolve each key-down against
//!   the mapping table and rewrite the delivered text when a candidate with
//!   non-empty output matches.  Runs on every keystroke.
//!
//! - **`probe_keys`** – Debug probe: report raw key codes and modifier
//!   state instead of remapping.  Mutually exclusive with `remap_events`;
//!   selected once at startup via `--keycodes`.

pub mod probe_keys;
pub mod remap_events;
