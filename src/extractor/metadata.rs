use crate::error::ExtractionError;
use crate::manifest::{Architecture, InstallerType, Scope};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Facts read from an installer binary.
///
/// Every field is optional: extractors fill in what the format declares and
/// leave the rest empty. Validators treat what is present as ground truth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallerMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_version: Option<String>,

    /// Detected installer technology
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installer_type: Option<InstallerType>,

    /// Technology of the single installer inside an archive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested_installer_type: Option<InstallerType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Architecture>,

    /// Raw summary information properties
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub summary: BTreeMap<String, String>,
}

/// What the extractor is asked to read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRequest {
    pub installer_path: PathBuf,
    pub declared_type: InstallerType,
    /// Extractors must give up after this long and answer
    /// [`ExtractionError::TimedOut`]
    pub timeout: Duration,
}

impl ExtractionRequest {
    pub fn new(installer_path: impl Into<PathBuf>, declared_type: InstallerType, timeout: Duration) -> Self {
        Self {
            installer_path: installer_path.into(),
            declared_type,
            timeout,
        }
    }

    pub fn path(&self) -> &Path {
        &self.installer_path
    }
}

/// Reads installer metadata.
///
/// Implementations must be idempotent and open the installer read-only.
pub trait MetadataExtractor: Send + Sync {
    fn extract(&self, request: &ExtractionRequest) -> Result<InstallerMetadata, ExtractionError>;
}

/// Extractor for hosts without native installer APIs
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableExtractor;

impl MetadataExtractor for UnavailableExtractor {
    fn extract(&self, request: &ExtractionRequest) -> Result<InstallerMetadata, ExtractionError> {
        Err(ExtractionError::NativeApiUnavailable(format!(
            "no extractor is configured for {} installers",
            request.declared_type
        )))
    }
}
