//! # keyremap-core
//!
//! Shared library for keyremap containing the mapping table, the modifier
//! resolution engine, and the config text parser.
//!
//! This crate is pure domain logic: it has zero dependencies on OS input
//! APIs, the file system, or the process environment.  The daemon crate
//! owns all of that and feeds this crate plain text and key events.
//!
//! # Architecture overview
//!
//! keyremap is a system-wide key remapping daemon: it intercepts low-level
//! key-down events and substitutes the text a key delivers, conditioned on
//! which modifier keys are held.  This crate defines:
//!
//! - **`domain`** – The data model: `KeyCode`, `ModifierSet`,
//!   `CandidateMapping`, and the `MappingTable` (key code → ordered candidate
//!   list, first-match order is semantically significant).
//!
//! - **`resolve`** – The resolution engine: given a key code and the live
//!   modifier state, pick the first stored candidate whose modifier
//!   requirement is satisfied.
//!
//! - **`config`** – The lenient line-oriented config parser that populates
//!   the table.  The format cosmetically resembles JSON but is not JSON;
//!   see the module docs for why a strict JSON parser must not be used.

pub mod config;
pub mod domain;
pub mod resolve;

// Re-export the most-used types at the crate root so callers can write
// `keyremap_core::MappingTable` instead of the full module path.
pub use domain::table::{CandidateMapping, KeyCode, MappingTable, ModifierSet};
pub use resolve::Resolver;
