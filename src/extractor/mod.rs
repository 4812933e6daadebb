pub mod archive;
pub mod metadata;
pub mod msi;

pub use archive::{nested_installer_from_entries, NestedInstaller};
pub use metadata::{ExtractionRequest, InstallerMetadata, MetadataExtractor, UnavailableExtractor};
pub use msi::MsiTables;
