//! Addressing a settings file.

/// Identifies one settings file: an owning module plus an optional file name.
///
/// A blank module names the top-level settings file. A missing file name
/// means the store's default (`settings.json` unless configured otherwise).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SettingsKey {
    module: String,
    file_name: Option<String>,
}

impl SettingsKey {
    /// The top-level, non-module-scoped settings file.
    pub fn global() -> Self {
        Self::default()
    }

    pub fn module(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            file_name: None,
        }
    }

    pub fn with_file(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn module_id(&self) -> &str {
        &self.module
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// True when the key has no module segment.
    pub fn is_global(&self) -> bool {
        is_blank(&self.module)
    }
}

impl From<&str> for SettingsKey {
    fn from(module: &str) -> Self {
        SettingsKey::module(module)
    }
}

pub(crate) fn is_blank(module: &str) -> bool {
    module.trim().is_empty()
}
