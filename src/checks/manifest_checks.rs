use crate::config::ManifestChecksConfig;
use crate::error::Result;
use crate::extractor::MetadataExtractor;
use crate::manifest::{fields, ManifestContext};
use crate::orchestrator::{Orchestrator, ValidationSession};
use crate::schema::SchemaProvider;
use crate::validators::ValidatorRegistry;
use crate::verdict::{AggregatedResult, FieldOutcome, MetadataStatus, SkipReason, Verdict};
use serde::Serialize;
use std::sync::Arc;

/// What an interactive caller needs to help the author fix a value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Supplement {
    /// Canonical spellings legal for this draft
    pub legal_values: Vec<String>,
    /// Value the installer itself declares
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authoritative: Option<String>,
    /// Set when the field was not checked at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
}

/// Entry point for manifest builders, prompts and CI checks
#[derive(Debug, Clone)]
pub struct ManifestChecks {
    orchestrator: Orchestrator,
}

impl ManifestChecks {
    /// Built-in validators with the default configuration
    pub fn new(schemas: Arc<dyn SchemaProvider>, extractor: Arc<dyn MetadataExtractor>) -> Result<Self> {
        Self::with_config(schemas, extractor, ManifestChecksConfig::default())
    }

    pub fn with_config(
        schemas: Arc<dyn SchemaProvider>,
        extractor: Arc<dyn MetadataExtractor>,
        config: ManifestChecksConfig,
    ) -> Result<Self> {
        Self::with_registry(ValidatorRegistry::with_defaults(), schemas, extractor, config)
    }

    /// Custom field set, e.g. the defaults plus extra registrations
    pub fn with_registry(
        registry: ValidatorRegistry,
        schemas: Arc<dyn SchemaProvider>,
        extractor: Arc<dyn MetadataExtractor>,
        config: ManifestChecksConfig,
    ) -> Result<Self> {
        Ok(Self {
            orchestrator: Orchestrator::new(registry, schemas, extractor, config)?,
        })
    }

    pub fn config(&self) -> &ManifestChecksConfig {
        self.orchestrator.config()
    }

    /// Names of the checked fields, in report order
    pub fn fields(&self) -> Vec<&'static str> {
        self.orchestrator.registry().names()
    }

    /// Start checking one draft. Reuse the session for every check on that
    /// draft so the installer is read at most once.
    pub fn session(&self, context: ManifestContext) -> CheckSession {
        CheckSession {
            session: self.orchestrator.session(context),
        }
    }

    /// Validate a whole draft in one call
    pub fn validate_manifest(&self, context: &ManifestContext) -> Result<AggregatedResult> {
        self.orchestrator.validate_all(context)
    }
}

/// Per-draft checks, one entry point per constrained field
pub struct CheckSession {
    session: ValidationSession,
}

impl CheckSession {
    pub fn id(&self) -> &str {
        self.session.id()
    }

    /// Check a candidate for any registered field by name
    pub fn check(&self, field: &str, candidate: &str) -> Result<(Verdict, Supplement)> {
        let check = self.session.validate_field(field, candidate)?;
        let (verdict, skipped) = match check.outcome {
            FieldOutcome::Checked(verdict) => (verdict, None),
            FieldOutcome::Skipped(reason) => (Verdict::Success, Some(reason)),
        };
        Ok((
            verdict,
            Supplement {
                legal_values: check.legal_values,
                authoritative: check.authoritative,
                skipped,
            },
        ))
    }

    pub fn is_installer_type_valid(&self, candidate: &str) -> Result<(Verdict, Supplement)> {
        self.check(fields::INSTALLER_TYPE, candidate)
    }

    pub fn is_nested_installer_type_valid(&self, candidate: &str) -> Result<(Verdict, Supplement)> {
        self.check(fields::NESTED_INSTALLER_TYPE, candidate)
    }

    pub fn is_architecture_valid(&self, candidate: &str) -> Result<(Verdict, Supplement)> {
        self.check(fields::ARCHITECTURE, candidate)
    }

    pub fn is_installer_scope_valid(&self, candidate: &str) -> Result<(Verdict, Supplement)> {
        self.check(fields::SCOPE, candidate)
    }

    pub fn is_upgrade_behaviour_valid(&self, candidate: &str) -> Result<(Verdict, Supplement)> {
        self.check(fields::UPGRADE_BEHAVIOR, candidate)
    }

    pub fn is_product_code_valid(&self, candidate: &str) -> Result<(Verdict, Supplement)> {
        self.check(fields::PRODUCT_CODE, candidate)
    }

    /// Validate every field of the draft
    pub fn validate_all(&self) -> Result<AggregatedResult> {
        self.session.validate_all()
    }

    pub fn metadata_status(&self) -> MetadataStatus {
        self.session.metadata_status()
    }
}
