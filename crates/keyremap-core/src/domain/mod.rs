//! Domain entities for keyremap.
//!
//! This module contains pure business logic with no infrastructure
//! dependencies.  It defines the data types that make the system what it is:
//! a table of key codes, each holding an ordered list of candidate mappings
//! gated by modifier requirements.
//!
//! Code in outer layers (the daemon's application and infrastructure layers)
//! depends on this module, but this module never depends on them.  That keeps
//! the mapping semantics unit-testable on any platform without OS hooks.

/// The mapping table – the core domain concept.
///
/// See [`table::MappingTable`] for the main type.
pub mod table;
