//! Store configuration.

use serde::{Deserialize, Serialize};

/// File name used when a caller does not name one.
pub const DEFAULT_FILE_NAME: &str = "settings.json";

/// Vendor folder under the local data root.
pub const DEFAULT_VENDOR: &str = "Microsoft";

/// Product folder under the vendor folder.
pub const DEFAULT_PRODUCT: &str = "PowerToys";

/// Where a [`SettingsStore`](crate::SettingsStore) puts its files, relative
/// to the local data root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    pub vendor: String,
    pub product: String,
    pub default_file_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            vendor: DEFAULT_VENDOR.to_string(),
            product: DEFAULT_PRODUCT.to_string(),
            default_file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn new(vendor: impl Into<String>, product: impl Into<String>) -> Self {
        Self {
            vendor: vendor.into(),
            product: product.into(),
            ..Self::default()
        }
    }

    pub fn with_default_file_name(mut self, name: impl Into<String>) -> Self {
        self.default_file_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.vendor, "Microsoft");
        assert_eq!(config.product, "PowerToys");
        assert_eq!(config.default_file_name, "settings.json");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: StoreConfig = serde_json::from_str(r#"{"product":"Toolbox"}"#).unwrap();
        assert_eq!(config.vendor, DEFAULT_VENDOR);
        assert_eq!(config.product, "Toolbox");
        assert_eq!(config.default_file_name, DEFAULT_FILE_NAME);
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::new("Acme", "Widgets").with_default_file_name("prefs.json");
        assert_eq!(config.vendor, "Acme");
        assert_eq!(config.default_file_name, "prefs.json");
    }
}
