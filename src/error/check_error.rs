use crate::error::collaborator_error::SchemaError;
use crate::schema::SchemaKind;
use thiserror::Error;

/// Conditions that stop a validation request from producing verdicts.
///
/// Invalid manifest content is never one of these; it is always a
/// [`Verdict`](crate::verdict::Verdict).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckError {
    #[error("No validator is registered for field '{0}'")]
    UnknownField(String),

    #[error("The {kind} schema is unavailable: {source}")]
    SchemaUnavailable {
        kind: SchemaKind,
        #[source]
        source: SchemaError,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
