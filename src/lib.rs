//! # installer-manifest-checks
//!
//! Semantic validation for package installer manifests. Structural schemas
//! say which spellings a field may take; the checks here add the rules a
//! schema cannot express, such as an MSI whose own property table already
//! fixes the install scope, or an upgrade behavior a packaged app cannot
//! honour.
//!
//! ## Features
//!
//! - **Field validators**: pure, deterministic rules per constrained field
//! - **Registry**: new fields are a registration, not another branch
//! - **Installer metadata**: cross-checks against facts read from the
//!   installer, extracted at most once per session
//! - **Complete reports**: every field is checked in one pass
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use installer_manifest_checks::prelude::*;
//! use std::sync::Arc;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let schemas = StaticSchemaProvider::new()
//!         .with_schema(SchemaKind::Installer, serde_json::json!({ "definitions": {} }));
//!     let checks = ManifestChecks::new(Arc::new(schemas), Arc::new(UnavailableExtractor))?;
//!
//!     let draft = ManifestContext::new()
//!         .with_field(fields::INSTALLER_TYPE, "msi")
//!         .with_field(fields::ARCHITECTURE, "x64")
//!         .with_field(fields::SCOPE, "M");
//!
//!     let session = checks.session(draft);
//!     let (verdict, supplement) = session.is_installer_scope_valid("U")?;
//!     println!("{} (legal: {:?})", verdict, supplement.legal_values);
//!
//!     let result = session.validate_all()?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

pub mod checks;
pub mod config;
pub mod error;
pub mod extractor;
pub mod manifest;
pub mod orchestrator;
pub mod schema;
pub mod validators;
pub mod verdict;

// Facade exports
pub use checks::{CheckSession, ManifestChecks, Supplement};

// Engine exports
pub use orchestrator::{FieldCheck, Orchestrator, ValidationSession};
pub use validators::{FieldValidator, ValidationEnv, ValidatorRegistry};

// Model exports
pub use manifest::{fields, Architecture, InstallerType, ManifestCode, ManifestContext, Scope, UpgradeBehavior};
pub use verdict::{
    AggregatedResult, Failure, FieldOutcome, FieldReport, MetadataStatus, ReasonCode, SkipReason, Verdict,
};

// Collaborator interfaces
pub use extractor::{ExtractionRequest, InstallerMetadata, MetadataExtractor, MsiTables, UnavailableExtractor};
pub use schema::{SchemaDocument, SchemaKind, SchemaProvider, StaticSchemaProvider};

// Configuration exports
pub use config::ManifestChecksConfig;

// Error exports
pub use error::{CheckError, ExtractionError, Result, SchemaError};

/// Prelude module for convenient importing
pub mod prelude {
    pub use crate::{
        fields, AggregatedResult, CheckError, CheckSession, ExtractionError, ExtractionRequest,
        InstallerMetadata, InstallerType, ManifestChecks, ManifestChecksConfig, ManifestContext,
        MetadataExtractor, ReasonCode, Result, SchemaDocument, SchemaError, SchemaKind,
        SchemaProvider, StaticSchemaProvider, Supplement, UnavailableExtractor, Verdict,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
