pub mod document;
pub mod provider;

pub use document::{SchemaDocument, SchemaKind};
pub use provider::{SchemaProvider, StaticSchemaProvider};
