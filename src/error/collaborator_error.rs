use crate::schema::SchemaKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failure reported by a [`SchemaProvider`](crate::schema::SchemaProvider)
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SchemaError {
    #[error("no {0} schema is available")]
    NotFound(SchemaKind),

    #[error("the {kind} schema is malformed: {reason}")]
    Malformed { kind: SchemaKind, reason: String },

    #[error("schema transport failed: {0}")]
    Transport(String),
}

/// Failure reported by a [`MetadataExtractor`](crate::extractor::MetadataExtractor).
///
/// Captured as a value by the orchestrator; it relaxes metadata checks and
/// never aborts a run.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExtractionError {
    #[error("installer '{path}' could not be read: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("metadata extraction is not supported for {0} installers")]
    UnsupportedType(String),

    #[error("native installer API unavailable: {0}")]
    NativeApiUnavailable(String),

    #[error("metadata extraction timed out after {0:?}")]
    TimedOut(Duration),
}
