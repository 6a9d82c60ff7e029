//! keyremap daemon entry point.
//!
//! Wires the config storage, the resolver, and the OS event tap together,
//! then blocks in the tap's run loop until externally terminated.
//!
//! # Usage
//!
//! ```text
//! keyremap [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Config file path [default: $HOME/.config/keyremap/config.json]
//!   --keycodes        Report raw key codes and modifiers instead of remapping
//! ```
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ config_file_path() / load_or_init()   -- bootstrap + parse (skipped
//!  │                                           entirely with --keycodes)
//!  └─ RemapEventsUseCase | ProbeKeysUseCase -- per-event policy
//!  └─ EventTap::run()                       -- OS callback loop, blocks
//! ```
//!
//! # Exit codes
//!
//! `0` on normal loop termination; `1` (any `Err` from `main`) for a missing
//! `$HOME`, a config load failure, or a declined tap registration (typically
//! the Accessibility permission).

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use keyremap_core::Resolver;
use keyremap_daemon::application::{probe_keys::ProbeKeysUseCase, remap_events::RemapEventsUseCase};
use keyremap_daemon::infrastructure::event_tap::{EventDisposition, EventHandler, KeyEvent};
use keyremap_daemon::infrastructure::storage;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// System-wide key remapping daemon.
///
/// Intercepts low-level key events and substitutes the text specific keys
/// deliver, conditioned on held modifiers, without altering OS keyboard
/// layout settings.
#[derive(Debug, Parser)]
#[command(name = "keyremap", about = "System-wide key remapping daemon", version)]
struct Args {
    /// Config file path; defaults to `$HOME/.config/keyremap/config.json`.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Report each key's raw key code and modifier state instead of
    /// remapping.  The config is never loaded in this mode.
    #[arg(long)]
    keycodes: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!("keyremap starting");

    // Per-event policy: probe or remap, chosen once, never toggled at runtime.
    let mut handler: Box<dyn FnMut(&KeyEvent) -> EventDisposition> = if args.keycodes {
        info!("probe mode: press any key to see its keycode and modifiers");
        let probe = ProbeKeysUseCase::new();
        Box::new(move |event| probe.handle_event(event))
    } else {
        let path = storage::config::config_file_path(args.config)
            .context("could not determine config file path")?;
        let table = storage::config::load_or_init(&path)
            .with_context(|| format!("could not load config from {}", path.display()))?;
        let remap = RemapEventsUseCase::new(Resolver::new(table));
        Box::new(move |event| remap.handle_event(event))
    };

    run_tap(handler.as_mut())?;

    info!("keyremap stopped");
    Ok(())
}

/// Registers the platform event tap and blocks in its run loop.
fn run_tap(handler: EventHandler<'_>) -> anyhow::Result<()> {
    #[cfg(target_os = "macos")]
    {
        use keyremap_daemon::infrastructure::event_tap::{macos::MacosEventTap, EventTap};

        let tap = MacosEventTap::new();
        tap.run(handler)
            .context("failed to register the event tap")?;
        Ok(())
    }

    #[cfg(not(target_os = "macos"))]
    {
        use keyremap_daemon::infrastructure::event_tap::TapError;

        let _ = handler;
        Err(TapError::UnsupportedPlatform(
            "keyremap currently targets macOS".to_string(),
        )
        .into())
    }
}
