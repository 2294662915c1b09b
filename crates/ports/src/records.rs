// crates/ports/src/records.rs
use std::path::PathBuf;

use leadlens_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Input parameters controlling lead collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadFetchPlan {
    /// JSONL exports to read; empty means standard input.
    pub inputs: Vec<PathBuf>,
}

/// DTO representing a lead row produced by an input port.
///
/// Field names accept the spellings common in CRM exports alongside
/// snake_case. Timestamps stay in wire form here; interpretation belongs to
/// the domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecordDto {
    #[serde(default, alias = "ID")]
    pub id: Option<String>,
    #[serde(default, alias = "TITLE")]
    pub title: Option<String>,
    #[serde(default, alias = "SOURCE_ID")]
    pub source: Option<String>,
    #[serde(default, alias = "DATE_CREATE")]
    pub created_at: Option<String>,
}

/// Port for collecting lead rows.
pub trait LeadProvider: Send + Sync {
    fn collect(&self, plan: &LeadFetchPlan) -> Result<Vec<LeadRecordDto>>;
}
