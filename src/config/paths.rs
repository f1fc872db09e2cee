//! Path management for Spendlite
//!
//! Resolves where the ledger data file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag / `SPENDLITE_DATA_DIR` environment variable
//!    (handled by the CLI and passed in explicitly)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/spendlite` or `~/.config/spendlite`
//! 3. Windows: `%APPDATA%\spendlite`

use std::path::PathBuf;

use crate::error::SpendliteError;

/// Manages all paths used by Spendlite
#[derive(Debug, Clone)]
pub struct SpendlitePaths {
    base_dir: PathBuf,
}

impl SpendlitePaths {
    /// Resolve the default base directory for the current platform
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SpendliteError> {
        Ok(Self {
            base_dir: resolve_default_path()?,
        })
    }

    /// Create paths rooted at an explicit base directory
    ///
    /// Used for the `--data-dir` override and for tests.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/spendlite/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// The ledger data file, the single storage key of the app
    pub fn transactions_file(&self) -> PathBuf {
        self.base_dir.join("transactions.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SpendliteError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            SpendliteError::Storage(format!("Failed to create data directory: {}", e))
        })?;
        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SpendliteError> {
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME").map(|home| PathBuf::from(home).join(".config"))
        })
        .map_err(|_| {
            SpendliteError::Storage("Could not determine home directory".into())
        })?;
    Ok(config_base.join("spendlite"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SpendliteError> {
    let appdata = std::env::var("APPDATA").map_err(|_| {
        SpendliteError::Storage("Could not determine APPDATA directory".into())
    })?;
    Ok(PathBuf::from(appdata).join("spendlite"))
}
