use crate::error::SchemaError;
use crate::schema::document::{SchemaDocument, SchemaKind};
use std::collections::HashMap;

/// Resolves a logical schema name to a decoded document.
///
/// Fetching and decoding happen outside this crate; implementations only hand
/// over what they already hold.
pub trait SchemaProvider: Send + Sync {
    fn fetch_schema(&self, kind: SchemaKind) -> Result<SchemaDocument, SchemaError>;
}

/// In-memory provider for documents the caller has already decoded
#[derive(Debug, Clone, Default)]
pub struct StaticSchemaProvider {
    documents: HashMap<SchemaKind, SchemaDocument>,
}

impl StaticSchemaProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(mut self, kind: SchemaKind, document: impl Into<SchemaDocument>) -> Self {
        self.documents.insert(kind, document.into());
        self
    }

    pub fn insert(&mut self, kind: SchemaKind, document: impl Into<SchemaDocument>) {
        self.documents.insert(kind, document.into());
    }
}

impl SchemaProvider for StaticSchemaProvider {
    fn fetch_schema(&self, kind: SchemaKind) -> Result<SchemaDocument, SchemaError> {
        self.documents
            .get(&kind)
            .cloned()
            .ok_or(SchemaError::NotFound(kind))
    }
}
