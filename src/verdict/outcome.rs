use crate::verdict::reason_code::{ReasonCode, SkipReason};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Details of a failed check
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Failure {
    pub reason: ReasonCode,

    /// Human-readable explanation
    pub message: String,

    /// Candidate value as supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<String>,

    /// Authoritative value the candidate disagrees with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authoritative: Option<String>,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.reason, self.message)
    }
}

/// Outcome of a single field check
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verdict {
    Success,
    Failure(Failure),
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Verdict::Success => None,
            Verdict::Failure(failure) => Some(failure),
        }
    }

    pub fn reason(&self) -> Option<ReasonCode> {
        self.failure().map(|f| f.reason)
    }

    /// Candidate is not one of `legal`
    pub fn out_of_domain(field: &str, candidate: &str, legal: &[&str]) -> Self {
        let message = if legal.is_empty() {
            format!("'{}' is not valid for {}: no values are legal here", candidate, field)
        } else {
            format!(
                "'{}' is not valid for {}; expected one of: {}",
                candidate,
                field,
                legal.join(", ")
            )
        };
        Verdict::Failure(Failure {
            reason: ReasonCode::OutOfDomain,
            message,
            candidate: Some(candidate.to_string()),
            authoritative: None,
        })
    }

    /// Candidate is a known code that a cross-field rule excludes here.
    /// `restriction` names the rule, e.g. "when InstallerType is msix".
    pub fn out_of_domain_when(field: &str, candidate: &str, restriction: &str, legal: &[&str]) -> Self {
        Verdict::Failure(Failure {
            reason: ReasonCode::OutOfDomain,
            message: format!(
                "'{}' is not valid for {} {}; expected one of: {}",
                candidate,
                field,
                restriction,
                legal.join(", ")
            ),
            candidate: Some(candidate.to_string()),
            authoritative: None,
        })
    }

    /// Candidate breaks a format rule of a free-form field
    pub fn malformed(field: &str, candidate: &str, detail: &str) -> Self {
        Verdict::Failure(Failure {
            reason: ReasonCode::OutOfDomain,
            message: format!("'{}' is not valid for {}: {}", candidate, field, detail),
            candidate: Some(candidate.to_string()),
            authoritative: None,
        })
    }

    /// Candidate disagrees with the installer's own metadata
    pub fn conflict(field: &str, candidate: &str, authoritative: &str) -> Self {
        Verdict::Failure(Failure {
            reason: ReasonCode::ConflictsWithInstallerMetadata,
            message: format!(
                "{} '{}' conflicts with the installer, which declares '{}'",
                field, candidate, authoritative
            ),
            candidate: Some(candidate.to_string()),
            authoritative: Some(authoritative.to_string()),
        })
    }

    pub fn missing(field: &str) -> Self {
        Verdict::Failure(Failure {
            reason: ReasonCode::MissingRequiredValue,
            message: format!("{} is required", field),
            candidate: None,
            authoritative: None,
        })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Success => write!(f, "ok"),
            Verdict::Failure(failure) => write!(f, "{}", failure),
        }
    }
}

/// A verdict, or the reason no verdict was produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "lowercase")]
pub enum FieldOutcome {
    Checked(Verdict),
    Skipped(SkipReason),
}

impl FieldOutcome {
    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            FieldOutcome::Checked(verdict) => Some(verdict),
            FieldOutcome::Skipped(_) => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, FieldOutcome::Skipped(_))
    }
}
