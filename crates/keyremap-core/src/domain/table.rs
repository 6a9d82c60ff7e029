//! Mapping table domain entities.
//!
//! A [`MappingTable`] maps a hardware [`KeyCode`] to an **ordered** list of
//! [`CandidateMapping`]s.  Order is insertion order from the config source and
//! is semantically significant: resolution is first-match-wins, so an author
//! places more-constrained candidates (e.g., requiring shift) before
//! unconditional fallbacks for the same key.
//!
//! The table is built once at startup and is read-only afterwards.  There is
//! no runtime mutation and no concurrent writer, so it needs no locking for
//! the lifetime of the event loop.

use std::collections::HashMap;

/// Hardware key code as reported by the OS input layer (CGKeyCode-sized).
///
/// Identifies a physical key position, independent of the active keyboard
/// layout.  Stable identity; never mutated by remapping – only the delivered
/// text is substituted.
pub type KeyCode = u16;

/// A set of independent modifier flags.
///
/// The same shape serves two semantically distinct roles:
///
/// - the **requirement** attached to a candidate mapping, where `true` means
///   "must be held" and `false` means "no constraint on this modifier"
///   (note: *not* "must be absent"), and
/// - the **live state** of an incoming event.
///
/// Caps lock is deliberately absent: it never participates in matching, so a
/// candidate requiring only shift matches even while caps lock is latched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierSet {
    pub shift: bool,
    pub control: bool,
    pub command: bool,
    pub option: bool,
}

impl ModifierSet {
    /// A set with no flags raised – as a requirement, matches any live state.
    pub const NONE: ModifierSet = ModifierSet {
        shift: false,
        control: false,
        command: false,
        option: false,
    };

    /// Returns `true` if this set, read as a *requirement*, is satisfied by
    /// the given live modifier state.
    ///
    /// Every flag raised here must also be raised in `live`; flags not raised
    /// here impose no constraint.  Extra live modifiers therefore never
    /// disqualify a candidate: a requirement of `{shift}` is satisfied by a
    /// live state of `{shift, command}`.
    pub fn satisfied_by(&self, live: &ModifierSet) -> bool {
        (!self.shift || live.shift)
            && (!self.control || live.control)
            && (!self.command || live.command)
            && (!self.option || live.option)
    }
}

/// One possible remap outcome for a key code.
///
/// `output` is carried as decoded UTF-8 text end to end; conversion to
/// whatever code units the OS wants happens at the event-tap boundary.
/// An empty `output` is representable – the resolver still reports such a
/// candidate as a match, and the event adapter decides what "match with
/// empty text" means (currently: no substitution).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMapping {
    /// Modifiers that must be held for this candidate to apply.
    pub required: ModifierSet,
    /// Replacement text delivered to the focused application.
    pub output: String,
}

impl CandidateMapping {
    /// Creates an unconditional candidate producing `output`.
    pub fn unconditional(output: impl Into<String>) -> Self {
        Self {
            required: ModifierSet::NONE,
            output: output.into(),
        }
    }
}

/// Key code → ordered candidate list.
///
/// Append-only while the config parser builds it; immutable afterwards.
/// A key code absent from the table means "no remapping; pass through".
/// Candidate lists are never empty once a key is present – [`insert`] is the
/// only way to add a key and it always appends a candidate.
///
/// [`insert`]: MappingTable::insert
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: HashMap<KeyCode, Vec<CandidateMapping>>,
}

impl MappingTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a candidate to the list for `key_code`.
    ///
    /// Later insertions for the same key code never overwrite earlier ones;
    /// they add alternatives.  This is what enables the documented pattern of
    /// a shift-aware line followed by a bare fallback line for the same
    /// physical key.
    pub fn insert(&mut self, key_code: KeyCode, candidate: CandidateMapping) {
        self.entries.entry(key_code).or_default().push(candidate);
    }

    /// Returns the ordered candidate list for `key_code`, or an empty slice
    /// if the key has no entry.
    pub fn lookup(&self, key_code: KeyCode) -> &[CandidateMapping] {
        self.entries.get(&key_code).map_or(&[], Vec::as_slice)
    }

    /// Number of key codes with at least one candidate.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key code has a candidate.
    ///
    /// An empty table is a legitimate outcome of parsing (e.g., a config
    /// containing only comments), not an error.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── ModifierSet satisfaction ──────────────────────────────────────────────

    #[test]
    fn test_empty_requirement_matches_any_live_state() {
        // Arrange
        let requirement = ModifierSet::NONE;
        let live = ModifierSet {
            shift: true,
            control: true,
            command: true,
            option: true,
        };

        // Act / Assert
        assert!(requirement.satisfied_by(&live));
        assert!(requirement.satisfied_by(&ModifierSet::NONE));
    }

    #[test]
    fn test_requirement_not_satisfied_when_flag_missing() {
        let requirement = ModifierSet {
            shift: true,
            ..ModifierSet::NONE
        };

        assert!(!requirement.satisfied_by(&ModifierSet::NONE));
    }

    #[test]
    fn test_superset_live_modifiers_satisfy_subset_requirement() {
        // Arrange – candidate requires only shift
        let requirement = ModifierSet {
            shift: true,
            ..ModifierSet::NONE
        };
        let live = ModifierSet {
            shift: true,
            command: true,
            ..ModifierSet::NONE
        };

        // Assert – extra live modifiers never disqualify
        assert!(requirement.satisfied_by(&live));
    }

    #[test]
    fn test_multi_flag_requirement_needs_all_flags() {
        let requirement = ModifierSet {
            shift: true,
            command: true,
            ..ModifierSet::NONE
        };
        let only_shift = ModifierSet {
            shift: true,
            ..ModifierSet::NONE
        };
        let both = ModifierSet {
            shift: true,
            command: true,
            ..ModifierSet::NONE
        };

        assert!(!requirement.satisfied_by(&only_shift));
        assert!(requirement.satisfied_by(&both));
    }

    // ── MappingTable ──────────────────────────────────────────────────────────

    #[test]
    fn test_lookup_on_absent_key_returns_empty_slice() {
        let table = MappingTable::new();
        assert!(table.lookup(42).is_empty());
    }

    #[test]
    fn test_insert_appends_in_order_for_duplicate_key() {
        // Arrange
        let mut table = MappingTable::new();
        table.insert(
            10,
            CandidateMapping {
                required: ModifierSet {
                    shift: true,
                    ..ModifierSet::NONE
                },
                output: "~".to_string(),
            },
        );
        table.insert(10, CandidateMapping::unconditional("`"));

        // Act
        let candidates = table.lookup(10);

        // Assert – file order preserved, nothing overwritten
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].output, "~");
        assert_eq!(candidates[1].output, "`");
    }

    #[test]
    fn test_len_counts_key_codes_not_candidates() {
        let mut table = MappingTable::new();
        table.insert(10, CandidateMapping::unconditional("a"));
        table.insert(10, CandidateMapping::unconditional("b"));
        table.insert(11, CandidateMapping::unconditional("c"));

        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }
}
