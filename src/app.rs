//! Wires the JSONL adapter to the filtering pass.

use leadlens_infra::JsonlLeadProvider;
use leadlens_usecase::FilterLeads;
use leadlens_usecase::dto::FilterLeadsOutput;

use crate::config::Config;
use crate::error::Result;

pub fn run(config: &Config) -> Result<FilterLeadsOutput> {
    let provider = JsonlLeadProvider::new();
    let usecase = FilterLeads::new(&provider);
    Ok(usecase.run(&config.plan, &config.filters)?)
}
