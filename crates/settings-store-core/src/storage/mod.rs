//! File-based settings storage.

pub mod key;
pub mod settings;

pub use key::SettingsKey;
pub use settings::SettingsStore;

use crate::error::{Result, SettingsError};
use std::path::PathBuf;

/// Get the per-user local (non-roaming) application data directory.
///
/// Uses the `directories` crate to find the platform-specific location:
/// `%LOCALAPPDATA%` on Windows, `~/.local/share` on Linux and
/// `~/Library/Application Support` on macOS.
pub fn default_local_root() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.data_local_dir().to_path_buf())
}

/// Resolves the directory every settings path is built under.
///
/// Called once per store operation; implementations must not assume the
/// result is cached.
pub trait RootResolver {
    fn resolve(&self) -> Result<PathBuf>;
}

/// Platform local data directory of the current user.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDataRoot;

impl RootResolver for LocalDataRoot {
    fn resolve(&self) -> Result<PathBuf> {
        default_local_root().ok_or(SettingsError::NoLocalDataDir)
    }
}

/// A fixed directory, for tests and portable installs.
#[derive(Debug, Clone)]
pub struct FixedRoot(pub PathBuf);

impl RootResolver for FixedRoot {
    fn resolve(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}

impl<R: RootResolver + ?Sized> RootResolver for &R {
    fn resolve(&self) -> Result<PathBuf> {
        (**self).resolve()
    }
}
