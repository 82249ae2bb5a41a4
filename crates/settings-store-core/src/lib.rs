//! Per-module JSON settings storage.
//!
//! Each module of an application keeps its settings in a JSON file under the
//! current user's local data directory:
//!
//! ```text
//! <local data root>/<vendor>/<product>/[<module>/]settings.json
//! ```
//!
//! [`SettingsStore`] computes those paths and reads, writes, and deletes the
//! files. Writes take JSON the caller already serialized; reads decode into
//! any `serde` type.

pub mod config;
pub mod error;
pub mod storage;

pub use config::{StoreConfig, DEFAULT_FILE_NAME};
pub use error::{Result, SettingsError};
pub use storage::{
    default_local_root, FixedRoot, LocalDataRoot, RootResolver, SettingsKey, SettingsStore,
};
