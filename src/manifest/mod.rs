pub mod codes;
pub mod context;

pub use codes::{match_candidate, Architecture, InstallerType, ManifestCode, Scope, UpgradeBehavior};
pub use context::{fields, ManifestContext};
