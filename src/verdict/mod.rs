pub mod outcome;
pub mod reason_code;
pub mod result;

pub use outcome::{Failure, FieldOutcome, Verdict};
pub use reason_code::{ReasonCode, SkipReason};
pub use result::{AggregatedResult, FieldReport, MetadataStatus};
