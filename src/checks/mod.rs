pub mod manifest_checks;

pub use manifest_checks::{CheckSession, ManifestChecks, Supplement};
