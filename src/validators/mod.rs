pub mod architecture;
pub mod field_validator;
pub mod installer_type;
pub mod product_code;
pub mod registry;
pub mod scope;
pub mod upgrade_behavior;

pub use architecture::ArchitectureValidator;
pub use field_validator::{code_names, legal_codes, narrow, narrow_where, FieldValidator, ValidationEnv};
pub use installer_type::{InstallerTypeValidator, NestedInstallerTypeValidator};
pub use product_code::ProductCodeValidator;
pub use registry::ValidatorRegistry;
pub use scope::ScopeValidator;
pub use upgrade_behavior::UpgradeBehaviorValidator;
