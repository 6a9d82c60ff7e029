//! Modifier resolution engine.
//!
//! Given a key code and the live modifier state of an incoming event, the
//! [`Resolver`] selects the single applicable [`CandidateMapping`] from the
//! table, or none (pass-through).
//!
//! # First-match, not best-match
//!
//! Candidates are scanned in stored order and the **first** one whose
//! modifier requirement is satisfied wins, even when a "better" (more
//! constrained) match exists later in the list.  Config authors must order
//! more-constrained candidates before less-constrained ones: an
//! unconditional candidate placed first will always shadow a later
//! shift-requiring one.  This keeps resolution a single O(candidates) scan
//! with no scoring pass, which matters because it runs inside the OS event
//! callback on every key press.

use tracing::trace;

use crate::domain::table::{CandidateMapping, KeyCode, MappingTable, ModifierSet};

/// Owns the immutable [`MappingTable`] for the process lifetime and answers
/// per-event resolution queries.
///
/// The table is built once at startup by the config parser and handed over
/// by value; nothing mutates it afterwards, so the resolver can be consulted
/// from the event callback without locking.
#[derive(Debug)]
pub struct Resolver {
    table: MappingTable,
}

impl Resolver {
    /// Takes ownership of a built mapping table.
    pub fn new(table: MappingTable) -> Self {
        Self { table }
    }

    /// Selects the applicable candidate for `key_code` under `live`
    /// modifiers, or `None` when the event should pass through untouched.
    ///
    /// A matched candidate with empty output text is still reported as a
    /// match; the caller decides how to treat it.  Pure function of the
    /// table and the live state; no side effects, no allocation.
    pub fn resolve(&self, key_code: KeyCode, live: ModifierSet) -> Option<&CandidateMapping> {
        let candidate = self
            .table
            .lookup(key_code)
            .iter()
            .find(|c| c.required.satisfied_by(&live));

        if let Some(c) = candidate {
            trace!(key_code, output = %c.output, "candidate matched");
        }
        candidate
    }

    /// The table this resolver answers from.
    pub fn table(&self) -> &MappingTable {
        &self.table
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
