use crate::manifest::{fields, InstallerType};
use crate::validators::field_validator::{FieldValidator, ValidationEnv};
use crate::verdict::Verdict;
use log::warn;
use regex::Regex;
use std::sync::OnceLock;

const BRACED_GUID: &str =
    r"^\{[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}\}$";

fn braced_guid() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(BRACED_GUID).ok()).as_ref()
}

/// Product code of MSI databases and Burn bundles. Only an MSI's code has a
/// fixed format; it must also match the code in the database.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductCodeValidator;

impl ProductCodeValidator {
    fn max_length(env: &ValidationEnv<'_>) -> usize {
        env.schema
            .max_length(fields::PRODUCT_CODE)
            .unwrap_or(env.config.max_candidate_length)
    }
}

impl FieldValidator for ProductCodeValidator {
    fn name(&self) -> &'static str {
        fields::PRODUCT_CODE
    }

    fn applies_to(&self, installer_type: Option<InstallerType>) -> bool {
        installer_type.is_some_and(|t| t.is_msi_family() || t == InstallerType::Burn)
    }

    fn needs_metadata(&self) -> bool {
        true
    }

    /// Free-form field; there is no list to offer
    fn legal_values(&self, _env: &ValidationEnv<'_>) -> Vec<String> {
        Vec::new()
    }

    fn authoritative_value(&self, env: &ValidationEnv<'_>) -> Option<String> {
        env.metadata?.product_code.clone()
    }

    fn validate(&self, candidate: &str, env: &ValidationEnv<'_>) -> Verdict {
        let code = candidate.trim();
        if code.is_empty() {
            return Verdict::malformed(self.name(), candidate, "must not be empty");
        }

        let max_length = Self::max_length(env);
        if code.chars().count() > max_length {
            return Verdict::malformed(
                self.name(),
                candidate,
                &format!("must be at most {} characters", max_length),
            );
        }

        if let Some(pattern) = env.schema.pattern(self.name()) {
            match Regex::new(pattern) {
                Ok(regex) if !regex.is_match(code) => {
                    return Verdict::malformed(
                        self.name(),
                        candidate,
                        &format!("must match pattern {}", pattern),
                    );
                }
                Ok(_) => {}
                Err(e) => warn!("Ignoring invalid {} pattern in schema: {}", self.name(), e),
            }
        }

        let is_msi = env.installer_type().is_some_and(|t| t.is_msi_family());
        if is_msi && braced_guid().is_some_and(|guid| !guid.is_match(code)) {
            return Verdict::malformed(
                self.name(),
                candidate,
                "an MSI product code must be a GUID in braces",
            );
        }

        match env.metadata.and_then(|m| m.product_code.as_deref()) {
            Some(declared) if !declared.eq_ignore_ascii_case(code) => {
                Verdict::conflict(self.name(), candidate, declared)
            }
            _ => Verdict::Success,
        }
    }
}
