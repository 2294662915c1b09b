// crates/usecase/src/orchestrator.rs
use leadlens_domain::filtering::Filters;
use leadlens_domain::model::Lead;
use leadlens_ports::records::{LeadFetchPlan, LeadProvider, LeadRecordDto};
use leadlens_shared_kernel::{LeadId, Result, SourceCode};

use crate::dto::{FilterLeadsOutput, RejectedLead};

/// Runs one collection-and-filtering pass over a lead source.
pub struct FilterLeads<'a> {
    provider: &'a dyn LeadProvider,
}

impl<'a> FilterLeads<'a> {
    pub fn new(provider: &'a dyn LeadProvider) -> Self {
        Self { provider }
    }

    pub fn run(&self, plan: &LeadFetchPlan, filters: &Filters) -> Result<FilterLeadsOutput> {
        let leads: Vec<Lead> =
            self.provider.collect(plan)?.into_iter().map(dto_to_lead).collect();
        Ok(apply_filters(leads, filters))
    }
}

fn dto_to_lead(dto: LeadRecordDto) -> Lead {
    Lead {
        id: dto.id.map(LeadId::new),
        title: dto.title,
        source: dto.source.map(SourceCode::new),
        created_at: dto.created_at,
    }
}

enum Verdict {
    Kept(Lead),
    Excluded,
    Rejected(RejectedLead),
}

fn judge(lead: Lead, filters: &Filters) -> Verdict {
    match filters.matches(&lead) {
        Ok(true) => Verdict::Kept(lead),
        Ok(false) => Verdict::Excluded,
        Err(reason) => Verdict::Rejected(RejectedLead { lead, reason }),
    }
}

// Filters are read-only, so judging each lead is independent; with the
// `parallel` feature the pass fans out over rayon and collects back in
// input order.
#[cfg(feature = "parallel")]
fn judge_all(leads: Vec<Lead>, filters: &Filters) -> Vec<Verdict> {
    use rayon::prelude::*;
    leads.into_par_iter().map(|lead| judge(lead, filters)).collect()
}

#[cfg(not(feature = "parallel"))]
fn judge_all(leads: Vec<Lead>, filters: &Filters) -> Vec<Verdict> {
    leads.into_iter().map(|lead| judge(lead, filters)).collect()
}

fn apply_filters(leads: Vec<Lead>, filters: &Filters) -> FilterLeadsOutput {
    let mut kept = Vec::new();
    let mut rejected = Vec::new();
    let mut excluded = 0;
    for verdict in judge_all(leads, filters) {
        match verdict {
            Verdict::Kept(lead) => kept.push(lead),
            Verdict::Excluded => excluded += 1,
            Verdict::Rejected(reject) => rejected.push(reject),
        }
    }
    FilterLeadsOutput { kept, excluded, rejected }
}
