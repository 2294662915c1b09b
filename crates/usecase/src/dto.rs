// crates/usecase/src/dto.rs
use leadlens_domain::model::Lead;
use leadlens_shared_kernel::DomainError;

/// Outcome of one collection-and-filtering pass.
#[derive(Debug)]
pub struct FilterLeadsOutput {
    /// Leads that satisfied every active filter, in input order.
    pub kept: Vec<Lead>,
    /// Count of leads an active filter excluded.
    pub excluded: usize,
    /// Leads the filter could not judge, with the reason. These are reported
    /// to the operator rather than silently included or dropped.
    pub rejected: Vec<RejectedLead>,
}

#[derive(Debug)]
pub struct RejectedLead {
    pub lead: Lead,
    pub reason: DomainError,
}
