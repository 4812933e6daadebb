use crate::manifest::{fields, Architecture, InstallerType, ManifestCode, ManifestContext};
use crate::validators::field_validator::{code_names, legal_codes, narrow, FieldValidator, ValidationEnv};
use crate::verdict::Verdict;

#[derive(Debug, Clone, Copy, Default)]
pub struct ArchitectureValidator;

impl ArchitectureValidator {
    fn authoritative(env: &ValidationEnv<'_>) -> Option<Architecture> {
        let installer_type: InstallerType = env.installer_type()?;
        if !installer_type.has_authoritative_architecture() {
            return None;
        }
        env.metadata?.architecture
    }
}

impl FieldValidator for ArchitectureValidator {
    fn name(&self) -> &'static str {
        fields::ARCHITECTURE
    }

    fn is_required(&self, _context: &ManifestContext) -> bool {
        true
    }

    fn needs_metadata(&self) -> bool {
        true
    }

    fn legal_values(&self, env: &ValidationEnv<'_>) -> Vec<String> {
        code_names(&legal_codes::<Architecture, _>(self.name(), env, |_| true))
    }

    fn authoritative_value(&self, env: &ValidationEnv<'_>) -> Option<String> {
        Self::authoritative(env).map(|a| a.as_str().to_string())
    }

    fn validate(&self, candidate: &str, env: &ValidationEnv<'_>) -> Verdict {
        let architecture = match narrow::<Architecture>(self.name(), candidate, env) {
            Ok(architecture) => architecture,
            Err(verdict) => return verdict,
        };

        match Self::authoritative(env) {
            Some(declared) if declared != architecture => {
                Verdict::conflict(self.name(), candidate, declared.as_str())
            }
            _ => Verdict::Success,
        }
    }
}
