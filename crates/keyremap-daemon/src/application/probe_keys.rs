//! ProbeKeysUseCase: report raw key codes instead of remapping.
//!
//! The probe is an alternate startup mode (`--keycodes`) for discovering
//! which hardware key code a physical key carries, so authors can write
//! config lines for it.  Every key-down is reported with its live modifier
//! state; every event passes through unmodified.  The probe never loads the
//! config and cannot be toggled at runtime.

use tracing::info;

use crate::infrastructure::event_tap::{EventDisposition, KeyEvent};

/// The probe use case.  Stateless; all output goes through `tracing`.
pub struct ProbeKeysUseCase;

impl ProbeKeysUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Reports key-down events and passes everything through.
    pub fn handle_event(&self, event: &KeyEvent) -> EventDisposition {
        if event.is_key_down {
            info!("{}", describe(event));
        }
        EventDisposition::PassThrough
    }
}

impl Default for ProbeKeysUseCase {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a key event as `keycode: <n> [ <modifiers> ]`.
///
/// Caps lock is included in the report even though it never participates in
/// matching; seeing it here explains why a key "suddenly" types capitals.
pub fn describe(event: &KeyEvent) -> String {
    let mut report = format!("keycode: {} [", event.key_code);
    if event.modifiers.shift {
        report.push_str(" Shift");
    }
    if event.modifiers.control {
        report.push_str(" Control");
    }
    if event.modifiers.command {
        report.push_str(" Command");
    }
    if event.modifiers.option {
        report.push_str(" Option");
    }
    if event.caps_lock {
        report.push_str(" CapsLock");
    }
    report.push_str(" ]");
    report
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use keyremap_core::ModifierSet;

    #[test]
    fn test_describe_lists_held_modifiers() {
        // Arrange
        let mut event = KeyEvent::down(
            10,
            ModifierSet {
                shift: true,
                command: true,
                ..ModifierSet::NONE
            },
        );
        event.caps_lock = true;

        // Act / Assert
        assert_eq!(describe(&event), "keycode: 10 [ Shift Command CapsLock ]");
    }

    #[test]
    fn test_describe_with_no_modifiers() {
        let event = KeyEvent::down(50, ModifierSet::NONE);
        assert_eq!(describe(&event), "keycode: 50 [ ]");
    }

    #[test]
    fn test_probe_always_passes_events_through() {
        let probe = ProbeKeysUseCase::new();

        let down = probe.handle_event(&KeyEvent::down(10, ModifierSet::NONE));
        let up = probe.handle_event(&KeyEvent::up(10, ModifierSet::NONE));

        assert_eq!(down, EventDisposition::PassThrough);
        assert_eq!(up, EventDisposition::PassThrough);
    }
}
