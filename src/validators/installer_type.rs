use crate::manifest::{fields, InstallerType, ManifestCode, ManifestContext};
use crate::validators::field_validator::{
    code_names, legal_codes, narrow, narrow_where, FieldValidator, ValidationEnv,
};
use crate::verdict::Verdict;

/// Declared installer technology, checked against the detected one
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallerTypeValidator;

impl FieldValidator for InstallerTypeValidator {
    fn name(&self) -> &'static str {
        fields::INSTALLER_TYPE
    }

    fn is_required(&self, _context: &ManifestContext) -> bool {
        true
    }

    fn needs_metadata(&self) -> bool {
        true
    }

    fn legal_values(&self, env: &ValidationEnv<'_>) -> Vec<String> {
        code_names(&legal_codes::<InstallerType, _>(self.name(), env, |_| true))
    }

    fn authoritative_value(&self, env: &ValidationEnv<'_>) -> Option<String> {
        env.metadata?
            .installer_type
            .map(|t| t.as_str().to_string())
    }

    fn validate(&self, candidate: &str, env: &ValidationEnv<'_>) -> Verdict {
        let declared = match narrow::<InstallerType>(self.name(), candidate, env) {
            Ok(declared) => declared,
            Err(verdict) => return verdict,
        };

        match env.metadata.and_then(|m| m.installer_type) {
            Some(detected) if !declared.is_compatible_with(detected) => {
                Verdict::conflict(self.name(), candidate, detected.as_str())
            }
            _ => Verdict::Success,
        }
    }
}

/// Technology of the installer inside a zip
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedInstallerTypeValidator;

impl FieldValidator for NestedInstallerTypeValidator {
    fn name(&self) -> &'static str {
        fields::NESTED_INSTALLER_TYPE
    }

    fn applies_to(&self, installer_type: Option<InstallerType>) -> bool {
        installer_type == Some(InstallerType::Zip)
    }

    fn is_required(&self, _context: &ManifestContext) -> bool {
        true
    }

    fn needs_metadata(&self) -> bool {
        true
    }

    fn legal_values(&self, env: &ValidationEnv<'_>) -> Vec<String> {
        code_names(&legal_codes(self.name(), env, |t: InstallerType| t.is_nestable()))
    }

    fn authoritative_value(&self, env: &ValidationEnv<'_>) -> Option<String> {
        env.metadata?
            .nested_installer_type
            .map(|t| t.as_str().to_string())
    }

    fn validate(&self, candidate: &str, env: &ValidationEnv<'_>) -> Verdict {
        let nestable = |t: InstallerType| t.is_nestable();
        let declared = match narrow_where(self.name(), candidate, env, nestable, "inside an archive") {
            Ok(declared) => declared,
            Err(verdict) => return verdict,
        };

        match env.metadata.and_then(|m| m.nested_installer_type) {
            Some(detected) if !declared.is_compatible_with(detected) => {
                Verdict::conflict(self.name(), candidate, detected.as_str())
            }
            _ => Verdict::Success,
        }
    }
}
