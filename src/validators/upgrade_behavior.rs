use crate::manifest::{fields, InstallerType, UpgradeBehavior};
use crate::validators::field_validator::{code_names, legal_codes, narrow_where, FieldValidator, ValidationEnv};
use crate::verdict::Verdict;

/// Upgrade behavior. `uninstallPrevious` needs an uninstaller for the old
/// version, which packaged, portable and web apps don't have.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpgradeBehaviorValidator;

fn permitted_for(installer_type: Option<InstallerType>) -> impl Fn(UpgradeBehavior) -> bool {
    move |behavior| {
        behavior != UpgradeBehavior::UninstallPrevious
            || installer_type.map_or(true, |t| t.supports_uninstall_previous())
    }
}

impl FieldValidator for UpgradeBehaviorValidator {
    fn name(&self) -> &'static str {
        fields::UPGRADE_BEHAVIOR
    }

    fn legal_values(&self, env: &ValidationEnv<'_>) -> Vec<String> {
        code_names(&legal_codes(self.name(), env, permitted_for(env.installer_type())))
    }

    fn validate(&self, candidate: &str, env: &ValidationEnv<'_>) -> Verdict {
        let installer_type = env.installer_type();
        let restriction = installer_type
            .map(|t| format!("when InstallerType is {}", t))
            .unwrap_or_default();
        match narrow_where::<UpgradeBehavior, _>(
            self.name(),
            candidate,
            env,
            permitted_for(installer_type),
            &restriction,
        ) {
            Ok(_) => Verdict::Success,
            Err(verdict) => verdict,
        }
    }
}
