//! Config file location, first-run bootstrap, and loading.
//!
//! The config lives at `$HOME/.config/keyremap/config.json` unless
//! overridden with `--config`.  On first run the file does not exist yet;
//! startup must not fail merely because of that, so the loader writes a
//! commented example file (creating parent directories as needed) and then
//! parses it.
//!
//! Loading is attempted exactly once at startup.  A file that cannot be
//! read or a directory that cannot be created is fatal; a file full of
//! comments or typos is not – the parser is lenient and an empty table just
//! means nothing gets remapped.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use keyremap_core::{config, MappingTable};

/// The commented example written on first run.
///
/// Demonstrates the documented authoring pattern: a shift-aware line
/// followed by a bare fallback line for the same physical key (key code 10,
/// producing `~` with shift and a backtick otherwise).
pub const DEFAULT_CONFIG: &str = r#"{
  // Example configuration:
  // "keycode": ["modifiers", "character"]
  // Available modifiers: shift, control/ctrl, command/cmd, option/alt
  // Combine with + : "shift+command"

  "10": ["shift", "~"],
  "10": ["", "`"],
}
"#;

/// Error type for config file operations.
///
/// All variants are fatal at startup; recoverable per-line problems never
/// reach this type (the parser skips them).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `$HOME` is not set, so no default config path can be formed.
    #[error("HOME environment variable not set")]
    HomeNotSet,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolves the config file path: the `--config` override when given,
/// otherwise `$HOME/.config/keyremap/config.json`.
///
/// # Errors
///
/// Returns [`ConfigError::HomeNotSet`] when no override is given and `$HOME`
/// is unset.
pub fn config_file_path(override_path: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = override_path {
        return Ok(path);
    }
    std::env::var_os("HOME")
        .map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("keyremap")
                .join("config.json")
        })
        .ok_or(ConfigError::HomeNotSet)
}

/// Loads the mapping table from `path`, bootstrapping the default config
/// first when the file does not exist yet.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the parent directory cannot be created
/// or the file cannot be written or read.  A structurally poor file is not
/// an error – unusable lines are skipped by the parser.
pub fn load_or_init(path: &Path) -> Result<MappingTable, ConfigError> {
    if !path.exists() {
        write_default_config(path)?;
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = config::parse(&content);
    info!(mappings = table.len(), path = %path.display(), "loaded key mappings");
    Ok(table)
}

/// Writes [`DEFAULT_CONFIG`] to `path`, creating parent directories first.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "created default config file");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use keyremap_core::{ModifierSet, Resolver};

    /// A unique temp directory per test, removed on drop.
    struct TempDir(PathBuf);

    impl TempDir {
        fn new(label: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "keyremap_test_{label}_{}_{}",
                std::process::id(),
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .expect("clock before epoch")
                    .as_nanos()
            ));
            std::fs::create_dir_all(&dir).expect("create temp dir");
            Self(dir)
        }

        fn path(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            std::fs::remove_dir_all(&self.0).ok();
        }
    }

    // ── Path resolution ───────────────────────────────────────────────────────

    #[test]
    fn test_override_path_wins_over_home() {
        // Arrange
        let override_path = PathBuf::from("/tmp/custom.json");

        // Act
        let path = config_file_path(Some(override_path.clone())).expect("override never fails");

        // Assert
        assert_eq!(path, override_path);
    }

    #[test]
    fn test_default_path_ends_with_product_config() {
        // Only meaningful when HOME is set (it is in any normal environment).
        if std::env::var_os("HOME").is_some() {
            let path = config_file_path(None).expect("HOME is set");
            assert!(path.ends_with(".config/keyremap/config.json"));
        }
    }

    // ── First-run bootstrap ────────────────────────────────────────────────────────

    #[test]
    fn test_load_or_init_creates_file_and_parent_directories() {
        // Arrange – a nested path whose directories do not exist yet
        let tmp = TempDir::new("bootstrap");
        let path = tmp.path().join("nested").join("dirs").join("config.json");
        assert!(!path.exists());

        // Act
        let table = load_or_init(&path).expect("bootstrap must not fail");

        // Assert – file exists and the example mappings parsed
        assert!(path.exists());
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup(10).len(), 2);
    }

    #[test]
    fn test_bootstrapped_default_config_resolves_the_tilde_scenario() {
        // Arrange
        let tmp = TempDir::new("default_semantics");
        let path = tmp.path().join("config.json");
        let table = load_or_init(&path).expect("bootstrap must not fail");
        let resolver = Resolver::new(table);
        let shift = ModifierSet {
            shift: true,
            ..ModifierSet::NONE
        };

        // Act / Assert
        assert_eq!(resolver.resolve(10, shift).unwrap().output, "~");
        assert_eq!(resolver.resolve(10, ModifierSet::NONE).unwrap().output, "`");
    }

    #[test]
    fn test_existing_file_is_not_overwritten() {
        // Arrange – a pre-existing config mapping a different key
        let tmp = TempDir::new("existing");
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "\"42\": [\"x\"]\n").expect("write test config");

        // Act
        let table = load_or_init(&path).expect("load must succeed");

        // Assert – the user's file survives untouched
        assert_eq!(table.lookup(42).len(), 1);
        assert!(table.lookup(10).is_empty());
    }

    #[test]
    fn test_unreadable_path_is_a_fatal_io_error() {
        // Arrange – path whose parent is a regular file, so mkdir must fail
        let tmp = TempDir::new("io_error");
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").expect("write blocker");
        let path = blocker.join("config.json");

        // Act
        let result = load_or_init(&path);

        // Assert
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
