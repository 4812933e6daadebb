use crate::validators::{
    ArchitectureValidator, FieldValidator, InstallerTypeValidator, NestedInstallerTypeValidator,
    ProductCodeValidator, ScopeValidator, UpgradeBehaviorValidator,
};
use log::debug;
use std::fmt;
use std::sync::Arc;

/// Validators keyed by field name, kept in registration order.
///
/// Registration order is the order fields appear in every aggregated result.
#[derive(Clone, Default)]
pub struct ValidatorRegistry {
    validators: Vec<Arc<dyn FieldValidator>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in installer manifest fields
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(InstallerTypeValidator);
        registry.register(NestedInstallerTypeValidator);
        registry.register(ArchitectureValidator);
        registry.register(ScopeValidator);
        registry.register(UpgradeBehaviorValidator);
        registry.register(ProductCodeValidator);
        registry
    }

    /// Register a validator. One registered under the same name is replaced
    /// in place, keeping its position.
    pub fn register<V: FieldValidator + 'static>(&mut self, validator: V) -> &mut Self {
        let validator: Arc<dyn FieldValidator> = Arc::new(validator);
        match self.validators.iter().position(|v| v.name() == validator.name()) {
            Some(index) => {
                debug!("Replacing validator for field {}", validator.name());
                self.validators[index] = validator;
            }
            None => {
                debug!("Registering validator for field {}", validator.name());
                self.validators.push(validator);
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn FieldValidator>> {
        self.validators.iter().find(|v| v.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn FieldValidator>> {
        self.validators.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("fields", &self.names())
            .finish()
    }
}
