use crate::manifest::{fields, ManifestCode, Scope};
use crate::validators::field_validator::{code_names, legal_codes, narrow, FieldValidator, ValidationEnv};
use crate::verdict::Verdict;

/// Install scope. An MSI's property table is authoritative; other
/// technologies only hint at scope, so their metadata is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeValidator;

impl ScopeValidator {
    fn authoritative(env: &ValidationEnv<'_>) -> Option<Scope> {
        let installer_type = env.installer_type()?;
        if !installer_type.has_authoritative_scope() {
            return None;
        }
        env.metadata?.scope
    }
}

impl FieldValidator for ScopeValidator {
    fn name(&self) -> &'static str {
        fields::SCOPE
    }

    fn needs_metadata(&self) -> bool {
        true
    }

    fn legal_values(&self, env: &ValidationEnv<'_>) -> Vec<String> {
        code_names(&legal_codes::<Scope, _>(self.name(), env, |_| true))
    }

    fn authoritative_value(&self, env: &ValidationEnv<'_>) -> Option<String> {
        Self::authoritative(env).map(|s| s.as_str().to_string())
    }

    fn validate(&self, candidate: &str, env: &ValidationEnv<'_>) -> Verdict {
        let scope = match narrow::<Scope>(self.name(), candidate, env) {
            Ok(scope) => scope,
            Err(verdict) => return verdict,
        };

        match Self::authoritative(env) {
            Some(declared) if declared != scope => {
                Verdict::conflict(self.name(), candidate, declared.as_str())
            }
            _ => Verdict::Success,
        }
    }
}
