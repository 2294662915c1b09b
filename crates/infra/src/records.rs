// crates/infra/src/records.rs
use std::{
    io::{self, BufRead},
    path::Path,
};

use leadlens_ports::records::{LeadFetchPlan, LeadProvider, LeadRecordDto};
use leadlens_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// JSONL adapter implementing the `LeadProvider` port: one JSON object per
/// line, the format CRM exports and `jq`-style pipelines produce. Blank lines
/// are skipped; a line that is not a JSON object fails the load with its
/// position so the export can be fixed rather than partially ingested.
#[derive(Debug, Default)]
pub struct JsonlLeadProvider;

impl JsonlLeadProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LeadProvider for JsonlLeadProvider {
    fn collect(&self, plan: &LeadFetchPlan) -> Result<Vec<LeadRecordDto>> {
        if plan.inputs.is_empty() {
            return read_records(io::stdin().lock(), Path::new("(stdin)"));
        }

        let mut records = Vec::new();
        for path in &plan.inputs {
            let reader = FileReader::open_buffered(path)
                .map_err(|source| InfrastructureError::FileRead { path: path.clone(), source })?;
            records.extend(read_records(reader, path)?);
        }
        Ok(records)
    }
}

fn read_records(reader: impl BufRead, path: &Path) -> Result<Vec<LeadRecordDto>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let mut line = line.map_err(|source| InfrastructureError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        if idx == 0 {
            // Strip BOM (U+FEFF) only on the very first line if present.
            if let Some(stripped) = line.strip_prefix('\u{feff}') {
                line = stripped.to_owned();
            }
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let record = serde_json::from_str(trimmed).map_err(|source| {
            InfrastructureError::RecordParse { path: path.to_path_buf(), line: idx + 1, source }
        })?;
        records.push(record);
    }
    Ok(records)
}
