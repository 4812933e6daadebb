pub mod check_error;
pub mod collaborator_error;

pub use check_error::CheckError;
pub use collaborator_error::{ExtractionError, SchemaError};

pub type Result<T> = std::result::Result<T, CheckError>;
