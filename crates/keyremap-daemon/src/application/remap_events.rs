//! RemapEventsUseCase: decides the disposition of every key event.
//!
//! This use case is the daemon's steady state.  It owns the [`Resolver`]
//! (and through it the immutable mapping table) for the process lifetime and
//! is consulted synchronously from the tap callback on every key event.
//!
//! By construction there is no error path here: lookup and resolution on a
//! built table cannot fail, so the handler's return type is a plain
//! [`EventDisposition`].

use tracing::trace;

use keyremap_core::Resolver;

use crate::infrastructure::event_tap::{EventDisposition, KeyEvent};

/// The remap use case: resolver-backed disposition of key events.
pub struct RemapEventsUseCase {
    resolver: Resolver,
}

impl RemapEventsUseCase {
    /// Creates the use case, taking ownership of the resolver.
    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }

    /// Decides what the tap should do with `event`.
    ///
    /// Key-up events are observed but never rewritten; no remapping state is
    /// carried between down and up.  For key-down events the resolver picks
    /// the first matching candidate; a match with **empty** output text is
    /// treated as "no substitution" and the event passes through unchanged
    /// (the scan does not continue to later candidates – resolution is
    /// final at the first match).
    pub fn handle_event(&self, event: &KeyEvent) -> EventDisposition {
        if !event.is_key_down {
            return EventDisposition::PassThrough;
        }

        match self.resolver.resolve(event.key_code, event.modifiers) {
            Some(candidate) if !candidate.output.is_empty() => {
                trace!(
                    key_code = event.key_code,
                    output = %candidate.output,
                    "rewriting key event"
                );
                EventDisposition::ReplaceText(candidate.output.clone())
            }
            _ => EventDisposition::PassThrough,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
