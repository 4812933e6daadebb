use crate::manifest::codes::{InstallerType, ManifestCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Manifest field names understood by the default validators
pub mod fields {
    pub const INSTALLER_TYPE: &str = "InstallerType";
    pub const NESTED_INSTALLER_TYPE: &str = "NestedInstallerType";
    pub const ARCHITECTURE: &str = "Architecture";
    pub const SCOPE: &str = "Scope";
    pub const UPGRADE_BEHAVIOR: &str = "UpgradeBehavior";
    pub const PRODUCT_CODE: &str = "ProductCode";
}

/// Snapshot of an in-progress manifest draft.
///
/// Values stay raw, exactly as the author or the schema supplied them;
/// validators narrow them. A context is built once per validation session and
/// never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestContext {
    fields: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    installer_path: Option<PathBuf>,
}

impl ManifestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a raw field value
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Local path of the installer the manifest describes
    pub fn with_installer_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.installer_path = Some(path.into());
        self
    }

    /// Raw value of a field, if the draft has one
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn installer_path(&self) -> Option<&Path> {
        self.installer_path.as_deref()
    }

    /// Declared installer type, when present and recognisable
    pub fn installer_type(&self) -> Option<InstallerType> {
        self.raw(fields::INSTALLER_TYPE).and_then(InstallerType::parse)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
