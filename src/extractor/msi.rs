//! Conversion of raw Windows Installer tables into [`InstallerMetadata`].
//!
//! Reading the database is the extractor's job; this only interprets the
//! `Property` table and the summary information stream once they are in
//! memory.

use crate::extractor::metadata::InstallerMetadata;
use crate::manifest::{Architecture, InstallerType, Scope};
use std::collections::BTreeMap;

pub const ALL_USERS: &str = "ALLUSERS";
pub const PRODUCT_CODE: &str = "ProductCode";
pub const PRODUCT_VERSION: &str = "ProductVersion";
pub const TEMPLATE: &str = "Template";
pub const CREATING_APPLICATION: &str = "Creating Application";

/// Property table and summary information of one MSI database
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsiTables {
    pub properties: BTreeMap<String, String>,
    pub summary: BTreeMap<String, String>,
}

impl MsiTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn with_summary(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.summary.insert(name.into(), value.into());
        self
    }

    /// Only an authored `ALLUSERS=1` row pins the scope, to per-machine.
    /// Without the row the scope is decided on the command line, and
    /// `ALLUSERS=2` lets the user choose, so neither fixes a scope.
    pub fn scope(&self) -> Option<Scope> {
        match self.properties.get(ALL_USERS).map(|v| v.trim()) {
            Some("1") => Some(Scope::Machine),
            _ => None,
        }
    }

    /// Platform half of the `Template` summary property, e.g. `x64;1033`
    pub fn architecture(&self) -> Option<Architecture> {
        let template = self.summary.get(TEMPLATE)?;
        let platform = template.split(';').next()?.trim();
        match platform.to_ascii_lowercase().as_str() {
            "intel" | "" => Some(Architecture::X86),
            "x64" | "amd64" | "intel64" => Some(Architecture::X64),
            "arm64" => Some(Architecture::Arm64),
            "arm" => Some(Architecture::Arm),
            _ => None,
        }
    }

    pub fn installer_type(&self) -> InstallerType {
        let authored_by_wix = self
            .summary
            .get(CREATING_APPLICATION)
            .map(|app| {
                let app = app.to_ascii_lowercase();
                app.contains("wix") || app.contains("windows installer xml")
            })
            .unwrap_or(false);
        if authored_by_wix {
            InstallerType::Wix
        } else {
            InstallerType::Msi
        }
    }

    pub fn into_metadata(self) -> InstallerMetadata {
        InstallerMetadata {
            scope: self.scope(),
            product_code: non_empty(self.properties.get(PRODUCT_CODE)),
            product_version: non_empty(self.properties.get(PRODUCT_VERSION)),
            installer_type: Some(self.installer_type()),
            nested_installer_type: None,
            architecture: self.architecture(),
            summary: self.summary,
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
