//! Per-module settings storage service.
//!
//! Settings live at `<root>/<vendor>/<product>/[<module>/]<file>`. The root is
//! asked for on every call, so nothing here caches paths or file contents.

use super::key::{is_blank, SettingsKey};
use super::{LocalDataRoot, RootResolver};
use crate::config::StoreConfig;
use crate::error::{Result, SettingsError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{PathBuf, MAIN_SEPARATOR_STR};
use tracing::{debug, warn};

/// Settings storage service.
///
/// Takes a [`RootResolver`] so each consumer can decide where the local data
/// root is; [`SettingsStore::new`] uses the platform directory.
#[derive(Debug, Clone)]
pub struct SettingsStore<R = LocalDataRoot> {
    config: StoreConfig,
    resolver: R,
}

impl SettingsStore<LocalDataRoot> {
    /// Create a store rooted at the current user's local data directory.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_resolver(config, LocalDataRoot)
    }
}

impl Default for SettingsStore<LocalDataRoot> {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl<R: RootResolver> SettingsStore<R> {
    pub fn with_resolver(config: StoreConfig, resolver: R) -> Self {
        Self { config, resolver }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The local data root as reported by the resolver.
    pub fn local_root(&self) -> Result<PathBuf> {
        self.resolver.resolve()
    }

    /// `<root>/<vendor>/<product>`
    pub fn base_dir(&self) -> Result<PathBuf> {
        let root = self.local_root()?;
        Ok(append_segment(
            append_segment(root, &self.config.vendor),
            &self.config.product,
        ))
    }

    /// Folder holding a module's settings. A blank module maps to the base
    /// directory itself.
    pub fn module_dir(&self, module: &str) -> Result<PathBuf> {
        let base = self.base_dir()?;
        if is_blank(module) {
            Ok(base)
        } else {
            Ok(append_segment(base, module))
        }
    }

    /// Path of the settings file for `key`. Performs no IO and does not
    /// validate the module or file name; an absolute or separator-laden name
    /// is appended as text and stays under the base directory.
    pub fn path_for(&self, key: &SettingsKey) -> Result<PathBuf> {
        let file_name = key
            .file_name()
            .unwrap_or(self.config.default_file_name.as_str());
        Ok(append_segment(self.module_dir(key.module_id())?, file_name))
    }

    pub fn folder_exists(&self, module: &str) -> Result<bool> {
        Ok(self.module_dir(module)?.is_dir())
    }

    /// Create the module folder and any missing parents. Succeeds if it
    /// already exists.
    pub fn create_folder(&self, module: &str) -> Result<()> {
        let dir = self.module_dir(module)?;
        fs::create_dir_all(&dir).map_err(|e| SettingsError::from_io(&dir, e))?;
        debug!(dir = %dir.display(), "settings folder ready");
        Ok(())
    }

    pub fn exists(&self, key: &SettingsKey) -> Result<bool> {
        Ok(self.path_for(key)?.is_file())
    }

    /// Read and decode the settings file for `key`.
    ///
    /// Trailing NUL bytes are dropped before decoding; some filesystems pad
    /// the last block of a file with them after an interrupted write. A
    /// leading UTF-8 byte order mark is skipped.
    pub fn load<T: DeserializeOwned>(&self, key: &SettingsKey) -> Result<T> {
        let path = self.path_for(key)?;
        let raw = fs::read(&path).map_err(|e| SettingsError::from_io(&path, e))?;
        let body = skip_utf8_bom(trim_trailing_nuls(&raw));
        if body.len() != raw.len() {
            debug!(
                path = %path.display(),
                stripped = raw.len() - body.len(),
                "stripped BOM or trailing NUL bytes from settings file"
            );
        }

        serde_json::from_slice(body).map_err(|source| SettingsError::Decode { path, source })
    }

    /// Write already-serialized JSON for `key`, creating the module folder if
    /// needed. Empty content is ignored.
    ///
    /// The write is not atomic and concurrent writers are not coordinated.
    pub fn try_save(&self, json: &str, key: &SettingsKey) -> Result<()> {
        if json.is_empty() {
            return Ok(());
        }

        if !self.folder_exists(key.module_id())? {
            self.create_folder(key.module_id())?;
        }

        let path = self.path_for(key)?;
        fs::write(&path, json).map_err(|e| SettingsError::from_io(&path, e))?;
        debug!(path = %path.display(), bytes = json.len(), "saved settings");
        Ok(())
    }

    /// Best-effort [`try_save`](Self::try_save): failures are logged and
    /// otherwise ignored. Callers that need to know whether the file was
    /// written should use `try_save`.
    pub fn save(&self, json: &str, key: &SettingsKey) {
        if let Err(e) = self.try_save(json, key) {
            warn!(module = key.module_id(), error = %e, "failed to save settings");
        }
    }

    /// Serialize `value` as pretty JSON and [`save`](Self::save) it.
    pub fn save_value<T: Serialize + ?Sized>(&self, value: &T, key: &SettingsKey) {
        match serde_json::to_string_pretty(value) {
            Ok(json) => self.save(&json, key),
            Err(e) => {
                let e = SettingsError::Encode(e);
                warn!(module = key.module_id(), error = %e, "failed to save settings");
            }
        }
    }

    /// Remove the settings file for `key`.
    pub fn delete(&self, key: &SettingsKey) -> Result<()> {
        let path = self.path_for(key)?;
        fs::remove_file(&path).map_err(|e| SettingsError::from_io(&path, e))?;
        debug!(path = %path.display(), "deleted settings");
        Ok(())
    }
}

/// Append `segment` as text, so an absolute segment cannot replace `base`
/// the way `Path::join` would.
fn append_segment(base: PathBuf, segment: &str) -> PathBuf {
    let mut raw = base.into_os_string();
    raw.push(MAIN_SEPARATOR_STR);
    raw.push(segment);
    PathBuf::from(raw)
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

fn skip_utf8_bom(raw: &[u8]) -> &[u8] {
    raw.strip_prefix(UTF8_BOM).unwrap_or(raw)
}

fn trim_trailing_nuls(raw: &[u8]) -> &[u8] {
    let end = raw.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &raw[..end]
}
