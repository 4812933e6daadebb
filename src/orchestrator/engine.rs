use crate::config::ManifestChecksConfig;
use crate::error::Result;
use crate::extractor::MetadataExtractor;
use crate::manifest::ManifestContext;
use crate::orchestrator::session::ValidationSession;
use crate::schema::SchemaProvider;
use crate::validators::ValidatorRegistry;
use crate::verdict::AggregatedResult;
use std::fmt;
use std::sync::Arc;

/// Runs registered field validators over manifest drafts.
///
/// Collaborators are handed in at construction; the orchestrator never looks
/// anything up from ambient state. Cloning is cheap and shares them along
/// with the registry.
#[derive(Clone)]
pub struct Orchestrator {
    registry: Arc<ValidatorRegistry>,
    schemas: Arc<dyn SchemaProvider>,
    extractor: Arc<dyn MetadataExtractor>,
    config: ManifestChecksConfig,
}

impl Orchestrator {
    pub fn new(
        registry: ValidatorRegistry,
        schemas: Arc<dyn SchemaProvider>,
        extractor: Arc<dyn MetadataExtractor>,
        config: ManifestChecksConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            registry: Arc::new(registry),
            schemas,
            extractor,
            config,
        })
    }

    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ManifestChecksConfig {
        &self.config
    }

    pub(crate) fn schemas(&self) -> &dyn SchemaProvider {
        self.schemas.as_ref()
    }

    pub(crate) fn extractor(&self) -> &dyn MetadataExtractor {
        self.extractor.as_ref()
    }

    /// Open a session for one draft
    pub fn session(&self, context: ManifestContext) -> ValidationSession {
        ValidationSession::new(self.clone(), context)
    }

    /// Validate a whole draft in a fresh session
    pub fn validate_all(&self, context: &ManifestContext) -> Result<AggregatedResult> {
        self.session(context.clone()).validate_all()
    }
}

impl fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::UnavailableExtractor;
    use crate::schema::StaticSchemaProvider;

    #[test]
    fn test_clones_share_the_registry() {
        let orchestrator = Orchestrator::new(
            ValidatorRegistry::with_defaults(),
            Arc::new(StaticSchemaProvider::new()),
            Arc::new(UnavailableExtractor),
            ManifestChecksConfig::default(),
        )
        .unwrap();

        let clone = orchestrator.clone();
        assert!(std::ptr::eq(orchestrator.registry(), clone.registry()));
        assert_eq!(clone.registry().len(), 6);
    }
}
