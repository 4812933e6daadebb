pub mod engine;
pub mod session;

pub use engine::Orchestrator;
pub use session::{FieldCheck, ValidationSession};
