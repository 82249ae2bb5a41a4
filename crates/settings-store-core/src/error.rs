//! Error types for settings storage.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by [`SettingsStore`](crate::SettingsStore) operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to decode settings in {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode settings: {0}")]
    Encode(serde_json::Error),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No per-user local data directory is available on this platform")]
    NoLocalDataDir,
}

impl SettingsError {
    /// Classify an IO error for `path`, keeping missing files distinct.
    pub(crate) fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            SettingsError::NotFound(path.to_path_buf())
        } else {
            SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SettingsError::NotFound(_))
    }
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_not_found_display() {
        let err = SettingsError::NotFound(PathBuf::from("a/settings.json"));
        assert!(format!("{}", err).starts_with("Settings file not found: "));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_classifies_missing_file() {
        let err = SettingsError::from_io(
            Path::new("missing.json"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_keeps_other_kinds() {
        let err = SettingsError::from_io(
            Path::new("locked.json"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        match err {
            SettingsError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("locked.json"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_serde_error_does_not_convert_to_encode() {
        fn classify(raw: &str) -> Result<serde_json::Value> {
            serde_json::from_str(raw).map_err(|source| SettingsError::Decode {
                path: PathBuf::from("settings.json"),
                source,
            })
        }

        assert!(matches!(classify("{"), Err(SettingsError::Decode { .. })));
        let encode = SettingsError::Encode(serde_json::from_str::<u8>("x").unwrap_err());
        assert!(format!("{}", encode).starts_with("Failed to encode settings"));
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SettingsError::Decode {
            path: PathBuf::from("bad.json"),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(format!("{}", err).contains("bad.json"));
    }
}
