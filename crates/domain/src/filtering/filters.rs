// crates/domain/src/filtering/filters.rs
use std::collections::HashSet;

use leadlens_shared_kernel::{DomainResult, SourceCode};

use super::interval::Interval;
use crate::model::Lead;

/// Filtering parameters applied to each lead; predicates combine with AND.
#[derive(Debug, Default, Clone)]
pub struct Filters {
    pub created: Option<Interval>,
    pub sources: HashSet<SourceCode>,
}

impl Filters {
    /// # Errors
    /// Returns [`leadlens_shared_kernel::DomainError::MalformedTimestamp`]
    /// when an active date filter meets a record whose timestamp cannot be
    /// parsed; the caller decides what to do with such records.
    pub fn matches(&self, lead: &Lead) -> DomainResult<bool> {
        Ok(self.matches_created(lead)? && self.matches_source(lead))
    }

    /// Temporal membership. No interval, or no timestamp on the record, means
    /// no criterion applies and the lead passes. Both interval bounds are
    /// inclusive.
    fn matches_created(&self, lead: &Lead) -> DomainResult<bool> {
        let Some(interval) = &self.created else {
            return Ok(true);
        };
        Ok(match lead.creation_time()? {
            Some(created) => interval.contains(created),
            None => true,
        })
    }

    /// Source selection is positive: with codes configured, a lead without a
    /// source does not match.
    fn matches_source(&self, lead: &Lead) -> bool {
        if self.sources.is_empty() {
            return true;
        }
        lead.source.as_ref().is_some_and(|code| self.sources.contains(code))
    }
}
