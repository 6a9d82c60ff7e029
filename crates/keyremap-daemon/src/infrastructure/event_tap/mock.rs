//! Mock event tap for testing.
//!
//! Allows tests to drive the event handler with scripted [`KeyEvent`]s and
//! inspect the resulting dispositions, without OS hooks or accessibility
//! permissions.

use std::sync::Mutex;

use super::{EventDisposition, EventHandler, EventTap, KeyEvent, TapError};

/// A mock implementation of [`EventTap`] that replays a scripted event
/// sequence and records what the handler decided for each event.
pub struct MockEventTap {
    events: Vec<KeyEvent>,
    dispositions: Mutex<Vec<EventDisposition>>,
}

impl MockEventTap {
    /// Creates a mock tap that will replay `events` in order.
    pub fn with_events(events: Vec<KeyEvent>) -> Self {
        Self {
            events,
            dispositions: Mutex::new(Vec::new()),
        }
    }

    /// Returns the dispositions recorded during [`EventTap::run`], in event
    /// order.
    pub fn dispositions(&self) -> Vec<EventDisposition> {
        self.dispositions.lock().expect("lock poisoned").clone()
    }
}

impl EventTap for MockEventTap {
    fn run(&self, handler: EventHandler<'_>) -> Result<(), TapError> {
        let mut recorded = self.dispositions.lock().expect("lock poisoned");
        for event in &self.events {
            recorded.push(handler(event));
        }
        Ok(())
    }
}
