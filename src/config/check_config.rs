use crate::error::CheckError;
use std::time::Duration;

/// Configuration for a [`ManifestChecks`](crate::checks::ManifestChecks) engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestChecksConfig {
    /// Deadline handed to the metadata extractor (Default: 30s)
    pub extraction_timeout: Duration,

    /// Read installer metadata for cross-field checks (Default: true)
    pub extract_metadata: bool,

    /// Narrow legal codes to the installer schema's enum lists (Default: true)
    pub use_schema_enumerations: bool,

    /// Longest candidate considered for matching (Default: 255)
    pub max_candidate_length: usize,
}

impl Default for ManifestChecksConfig {
    fn default() -> Self {
        Self {
            extraction_timeout: Duration::from_secs(30),
            extract_metadata: true,
            use_schema_enumerations: true,
            max_candidate_length: 255,
        }
    }
}

impl ManifestChecksConfig {
    /// Create a new configuration with all default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Short extraction deadline for CI pipelines
    pub fn strict() -> Self {
        Self {
            extraction_timeout: Duration::from_secs(10),
            ..Self::default()
        }
    }

    /// Never touch the installer; every check is domain-only
    pub fn offline() -> Self {
        Self {
            extract_metadata: false,
            ..Self::default()
        }
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), CheckError> {
        if self.extract_metadata && self.extraction_timeout.is_zero() {
            return Err(CheckError::InvalidConfiguration(
                "extraction_timeout must be greater than 0".to_string(),
            ));
        }

        if self.max_candidate_length == 0 {
            return Err(CheckError::InvalidConfiguration(
                "max_candidate_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
