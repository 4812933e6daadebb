use crate::error::{CheckError, ExtractionError, Result, SchemaError};
use crate::extractor::{ExtractionRequest, InstallerMetadata};
use crate::manifest::{ManifestCode, ManifestContext};
use crate::orchestrator::Orchestrator;
use crate::schema::{SchemaDocument, SchemaKind};
use crate::validators::{FieldValidator, ValidationEnv};
use crate::verdict::{AggregatedResult, FieldOutcome, FieldReport, MetadataStatus, SkipReason, Verdict};
use log::{debug, error, info, warn};
use serde::Serialize;
use std::sync::OnceLock;
use uuid::Uuid;

/// Outcome of one field check plus what a caller needs to correct it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCheck {
    pub field: String,
    pub outcome: FieldOutcome,
    /// Canonical spellings legal for this draft
    pub legal_values: Vec<String>,
    /// Value the installer declares, when authoritative
    pub authoritative: Option<String>,
}

#[derive(Debug)]
enum MetadataSlot {
    NotRequested,
    Available(InstallerMetadata),
    Unavailable(ExtractionError),
}

/// One validation pass over one manifest draft.
///
/// The installer schema and the installer metadata are each fetched at most
/// once per session, on first need. Concurrent callers block on the same
/// fetch and all observe its outcome.
pub struct ValidationSession {
    id: String,
    orchestrator: Orchestrator,
    context: ManifestContext,
    schema: OnceLock<std::result::Result<SchemaDocument, SchemaError>>,
    metadata: OnceLock<MetadataSlot>,
}

impl ValidationSession {
    pub(crate) fn new(orchestrator: Orchestrator, context: ManifestContext) -> Self {
        let id = Uuid::new_v4().to_string();
        debug!("Opened validation session {}", id);
        Self {
            id,
            orchestrator,
            context,
            schema: OnceLock::new(),
            metadata: OnceLock::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn context(&self) -> &ManifestContext {
        &self.context
    }

    /// The installer schema, fetched on first use
    pub fn installer_schema(&self) -> Result<&SchemaDocument> {
        let fetched = self.schema.get_or_init(|| {
            debug!("Session {}: fetching installer schema", self.id);
            self.orchestrator.schemas().fetch_schema(SchemaKind::Installer)
        });
        fetched.as_ref().map_err(|e| {
            error!("Session {}: installer schema unavailable: {}", self.id, e);
            CheckError::SchemaUnavailable {
                kind: SchemaKind::Installer,
                source: e.clone(),
            }
        })
    }

    /// Installer metadata, extracted on first use. `None` when extraction is
    /// disabled, impossible for this draft, or failed.
    pub fn metadata(&self) -> Option<&InstallerMetadata> {
        match self.metadata.get_or_init(|| self.extract()) {
            MetadataSlot::Available(metadata) => Some(metadata),
            MetadataSlot::NotRequested | MetadataSlot::Unavailable(_) => None,
        }
    }

    pub fn metadata_status(&self) -> MetadataStatus {
        match self.metadata.get() {
            None | Some(MetadataSlot::NotRequested) => MetadataStatus::NotRequested,
            Some(MetadataSlot::Available(_)) => MetadataStatus::Available,
            Some(MetadataSlot::Unavailable(e)) => MetadataStatus::Unavailable(e.to_string()),
        }
    }

    fn extract(&self) -> MetadataSlot {
        let config = self.orchestrator.config();
        if !config.extract_metadata {
            debug!("Session {}: metadata extraction disabled", self.id);
            return MetadataSlot::NotRequested;
        }
        let (Some(path), Some(declared_type)) =
            (self.context.installer_path(), self.context.installer_type())
        else {
            debug!(
                "Session {}: no installer path or recognisable installer type; skipping extraction",
                self.id
            );
            return MetadataSlot::NotRequested;
        };

        let request = ExtractionRequest::new(path, declared_type, config.extraction_timeout);
        info!(
            "Session {}: extracting metadata from {} installer {}",
            self.id,
            declared_type,
            path.display()
        );
        match self.orchestrator.extractor().extract(&request) {
            Ok(metadata) => {
                debug!("Session {}: extracted metadata {:?}", self.id, metadata);
                MetadataSlot::Available(metadata)
            }
            Err(e) => {
                warn!(
                    "Session {}: metadata extraction failed, relaxing metadata checks: {}",
                    self.id, e
                );
                MetadataSlot::Unavailable(e)
            }
        }
    }

    fn env<'s>(&'s self, validator: &dyn FieldValidator, schema: &'s SchemaDocument) -> ValidationEnv<'s> {
        let metadata = if validator.needs_metadata() {
            self.metadata()
        } else {
            None
        };
        ValidationEnv::new(&self.context, metadata, schema, self.orchestrator.config())
    }

    /// Check one candidate value for a registered field against this draft
    pub fn validate_field(&self, field: &str, candidate: &str) -> Result<FieldCheck> {
        let validator = self
            .orchestrator
            .registry()
            .get(field)
            .ok_or_else(|| CheckError::UnknownField(field.to_string()))?;
        let schema = self.installer_schema()?;

        if !validator.applies_to(self.context.installer_type()) {
            debug!("Session {}: {} does not apply to this installer type", self.id, field);
            return Ok(FieldCheck {
                field: validator.name().to_string(),
                outcome: FieldOutcome::Skipped(SkipReason::InapplicableForInstallerType),
                legal_values: Vec::new(),
                authoritative: None,
            });
        }

        let env = self.env(validator.as_ref(), schema);
        let verdict = validator.validate(candidate, &env);
        debug!("Session {}: {} '{}' -> {}", self.id, field, candidate, verdict);
        Ok(FieldCheck {
            field: validator.name().to_string(),
            outcome: FieldOutcome::Checked(verdict),
            legal_values: validator.legal_values(&env),
            authoritative: validator.authoritative_value(&env),
        })
    }

    /// Run every registered validator against the draft's own values.
    ///
    /// Never stops at the first failure. Fails only when the installer schema
    /// is unavailable.
    pub fn validate_all(&self) -> Result<AggregatedResult> {
        let schema = self.installer_schema()?;
        let installer_type = self.context.installer_type();
        let registry = self.orchestrator.registry();
        info!(
            "Session {}: validating {} fields (installer type: {})",
            self.id,
            registry.len(),
            installer_type.map_or("undetermined", |t| t.as_str())
        );

        let reports = registry
            .iter()
            .map(|validator| {
                let name = validator.name();
                let outcome = if !validator.applies_to(installer_type) {
                    FieldOutcome::Skipped(SkipReason::InapplicableForInstallerType)
                } else {
                    match self.context.raw(name) {
                        Some(candidate) => {
                            let env = self.env(validator.as_ref(), schema);
                            FieldOutcome::Checked(validator.validate(candidate, &env))
                        }
                        None if validator.is_required(&self.context) => {
                            FieldOutcome::Checked(Verdict::missing(name))
                        }
                        None => FieldOutcome::Skipped(SkipReason::NotProvided),
                    }
                };
                debug!("Session {}: {} -> {:?}", self.id, name, outcome);
                FieldReport {
                    field: name.to_string(),
                    outcome,
                }
            })
            .collect();

        let result = AggregatedResult {
            session_id: self.id.clone(),
            reports,
            metadata: self.metadata_status(),
        };
        info!(
            "Session {}: validation finished with {} failure(s)",
            self.id,
            result.failure_count()
        );
        Ok(result)
    }
}
