// crates/shared-kernel/src/value_objects/lead_info.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier a CRM assigned to a lead; opaque to this tool.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct LeadId(String);

impl LeadId {
    #[must_use]
    pub fn new(id: String) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LeadId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl AsRef<str> for LeadId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Uppercased CRM source code (e.g. `WEB`, `CALLBACK`); custom codes are allowed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct SourceCode(String);

impl SourceCode {
    pub fn new(code: String) -> Self {
        Self(code.trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SourceCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl From<&str> for SourceCode {
    fn from(code: &str) -> Self {
        Self::new(code.to_string())
    }
}

impl fmt::Display for SourceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
