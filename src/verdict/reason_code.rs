use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a candidate value failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    /// Not one of the field's legal codes for this manifest
    OutOfDomain,
    /// Disagrees with metadata read from the installer itself
    ConflictsWithInstallerMetadata,
    /// A required field has no value in the draft
    MissingRequiredValue,
}

impl ReasonCode {
    /// Returns the string representation of the reason code
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::OutOfDomain => "OUT_OF_DOMAIN",
            ReasonCode::ConflictsWithInstallerMetadata => "CONFLICTS_WITH_INSTALLER_METADATA",
            ReasonCode::MissingRequiredValue => "MISSING_REQUIRED_VALUE",
        }
    }

    /// Returns the standard human-readable message for the reason code
    pub fn message(&self) -> &'static str {
        match self {
            ReasonCode::OutOfDomain => "Value is not a legal code for this field",
            ReasonCode::ConflictsWithInstallerMetadata => {
                "Value conflicts with the installer's own metadata"
            }
            ReasonCode::MissingRequiredValue => "Required value is missing",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a registered validator did not run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkipReason {
    /// The rule has no meaning for the declared installer type
    InapplicableForInstallerType,
    /// Optional field absent from the draft
    NotProvided,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::InapplicableForInstallerType => "INAPPLICABLE_FOR_INSTALLER_TYPE",
            SkipReason::NotProvided => "NOT_PROVIDED",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
