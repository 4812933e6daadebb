use crate::verdict::outcome::{Failure, FieldOutcome, Verdict};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Whether installer metadata backed the cross-field checks of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "reason", rename_all = "camelCase")]
pub enum MetadataStatus {
    /// No applicable validator needed metadata, extraction is disabled, or
    /// the draft gives no installer to read
    NotRequested,
    Available,
    /// Extraction failed; metadata checks were relaxed
    Unavailable(String),
}

impl MetadataStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, MetadataStatus::Available)
    }
}

/// Outcome of one registered field in a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReport {
    pub field: String,
    pub outcome: FieldOutcome,
}

/// Every field outcome of one validation run, in registration order.
///
/// The overall status is never stored. It is derived on demand and written
/// into the serialized form as `is_success`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AggregatedResult {
    pub session_id: String,
    pub reports: Vec<FieldReport>,
    pub metadata: MetadataStatus,
}

impl AggregatedResult {
    /// True iff every checked verdict is a success. Skipped fields don't count.
    pub fn is_success(&self) -> bool {
        self.verdicts().all(|(_, verdict)| verdict.is_success())
    }

    /// Checked verdicts, in order
    pub fn verdicts(&self) -> impl Iterator<Item = (&str, &Verdict)> {
        self.reports
            .iter()
            .filter_map(|r| r.outcome.verdict().map(|v| (r.field.as_str(), v)))
    }

    /// Failed checks, in order
    pub fn failures(&self) -> impl Iterator<Item = (&str, &Failure)> {
        self.verdicts()
            .filter_map(|(field, verdict)| verdict.failure().map(|f| (field, f)))
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn get(&self, field: &str) -> Option<&FieldOutcome> {
        self.reports
            .iter()
            .find(|r| r.field == field)
            .map(|r| &r.outcome)
    }

    /// Fields that were registered but not checked
    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.reports
            .iter()
            .filter(|r| r.outcome.is_skipped())
            .map(|r| r.field.as_str())
    }
}

impl Serialize for AggregatedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AggregatedResult", 4)?;
        state.serialize_field("session_id", &self.session_id)?;
        state.serialize_field("is_success", &self.is_success())?;
        state.serialize_field("reports", &self.reports)?;
        state.serialize_field("metadata", &self.metadata)?;
        state.end()
    }
}

impl fmt::Display for AggregatedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.reports {
            match &report.outcome {
                FieldOutcome::Checked(verdict) => writeln!(f, "{:<20} {}", report.field, verdict)?,
                FieldOutcome::Skipped(reason) => {
                    writeln!(f, "{:<20} skipped ({})", report.field, reason)?
                }
            }
        }
        if let MetadataStatus::Unavailable(reason) = &self.metadata {
            writeln!(f, "installer metadata unavailable: {}", reason)?;
        }
        if self.is_success() {
            write!(f, "manifest is valid")
        } else {
            write!(f, "{} problem(s) found", self.failure_count())
        }
    }
}
