// crates/shared-kernel/src/value_objects/mod.rs
pub mod lead_info;
pub mod timestamp;

pub use lead_info::{LeadId, SourceCode};
pub use timestamp::Timestamp;
