use leadlens_shared_kernel::{DomainError, DomainResult, LeadId, SourceCode, Timestamp};
use serde::{Deserialize, Serialize};

/// A CRM lead row as delivered by an upstream export.
///
/// `created_at` keeps the wire form. Parsing happens when a date filter needs
/// the value, so a malformed timestamp is reported against the record that
/// carries it instead of failing the whole load. Every field may be absent in
/// real exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Option<LeadId>,
    pub title: Option<String>,
    pub source: Option<SourceCode>,
    pub created_at: Option<String>,
}

impl Lead {
    /// Parsed creation instant; `None` when the record has no timestamp.
    ///
    /// # Errors
    /// Returns [`DomainError::MalformedTimestamp`] when the field is present
    /// but not an unambiguous absolute instant.
    pub fn creation_time(&self) -> DomainResult<Option<Timestamp>> {
        self.created_at
            .as_deref()
            .map(|raw| {
                raw.parse::<Timestamp>().map_err(|details| DomainError::MalformedTimestamp {
                    value: raw.to_string(),
                    details,
                })
            })
            .transpose()
    }

    /// Identifier suitable for logs and rejection reports.
    pub fn display_id(&self) -> &str {
        self.id.as_ref().map_or("(no id)", LeadId::as_str)
    }
}
