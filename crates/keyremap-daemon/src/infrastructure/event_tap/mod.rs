//! Keyboard event tap infrastructure.
//!
//! On macOS this registers a `CGEventTap` at the HID level and runs a
//! `CFRunLoop` that delivers every key event to a callback before the
//! focused application sees it.  The callback may rewrite the text the
//! event delivers; the key code itself is never altered.
//!
//! # Latency
//!
//! The OS invokes the callback synchronously on the run-loop thread for
//! every key press.  Everything dispatched through [`EventTap::run`] must
//! complete within a single callback invocation – no blocking, no spawning –
//! or typing latency becomes visible system-wide.
//!
//! # Testability
//!
//! The [`EventTap`] trait allows unit and integration tests to drive the
//! handler with scripted events via [`mock::MockEventTap`], without OS hooks
//! or accessibility permissions.

use keyremap_core::{KeyCode, ModifierSet};

pub mod mock;

#[cfg(target_os = "macos")]
pub mod macos;

/// A raw keyboard event as delivered by the OS input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    /// Hardware key code of the pressed or released key.
    pub key_code: KeyCode,
    /// Live modifier state at the time of the event.
    pub modifiers: ModifierSet,
    /// Whether caps lock was latched.  Reported by the probe, never part of
    /// matching.
    pub caps_lock: bool,
    /// `true` for key-down, `false` for key-up.
    pub is_key_down: bool,
}

impl KeyEvent {
    /// A key-down event with the given live modifiers.
    pub fn down(key_code: KeyCode, modifiers: ModifierSet) -> Self {
        Self {
            key_code,
            modifiers,
            caps_lock: false,
            is_key_down: true,
        }
    }

    /// A key-up event with the given live modifiers.
    pub fn up(key_code: KeyCode, modifiers: ModifierSet) -> Self {
        Self {
            key_code,
            modifiers,
            caps_lock: false,
            is_key_down: false,
        }
    }
}

/// What the handler wants done with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDisposition {
    /// Deliver the event completely unmodified.
    PassThrough,
    /// Deliver the event with its output text replaced.  The key code is
    /// untouched; only the character(s) the OS delivers to the focused
    /// application are substituted.
    ReplaceText(String),
}

/// Handler invoked for every key event, synchronously, on the tap thread.
pub type EventHandler<'a> = &'a mut dyn FnMut(&KeyEvent) -> EventDisposition;

/// Error type for event tap registration and operation.
#[derive(Debug, thiserror::Error)]
pub enum TapError {
    /// The OS declined to create the tap, usually because the process lacks
    /// the Accessibility permission.
    #[error("failed to create event tap: {0}")]
    CreationFailed(String),
    /// No tap backend exists for the current platform.
    #[error("platform not supported: {0}")]
    UnsupportedPlatform(String),
}

/// Trait abstracting the OS event tap.
///
/// The production implementation registers with the OS exactly once and
/// blocks in the OS run loop until the process is terminated externally;
/// tests use [`mock::MockEventTap`] to feed scripted events instead.
pub trait EventTap {
    /// Registers the tap and dispatches every key event to `handler` until
    /// the loop terminates.
    ///
    /// # Errors
    ///
    /// Returns [`TapError::CreationFailed`] when registration is declined.
    /// Registration is attempted exactly once; there are no retries.
    fn run(&self, handler: EventHandler<'_>) -> Result<(), TapError>;
}

// ── Tests ─────────────────────────────────────────────────────────────────────
