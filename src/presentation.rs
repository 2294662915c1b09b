//! Output formatting for filtered leads.

use std::collections::BTreeMap;
use std::io::Write;

use leadlens_domain::model::Lead;
use leadlens_domain::sources;
use leadlens_usecase::dto::{FilterLeadsOutput, RejectedLead};

use crate::args::OutputFormat;
use crate::config::Config;
use crate::error::Result;

pub fn print_results(output: &FilterLeadsOutput, config: &Config) -> Result<()> {
    report_rejected(&output.rejected);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if config.by_source {
        return write_source_summary(&output.kept, &mut out);
    }
    match config.format {
        OutputFormat::Table => write_table(&output.kept, output.excluded, &mut out),
        OutputFormat::Json => write_json(&output.kept, &mut out),
        OutputFormat::Jsonl => write_jsonl(&output.kept, &mut out),
        OutputFormat::Csv => write_csv(&output.kept, &mut out),
    }
}

/// Rejected records are flagged one by one on stderr; they are neither
/// counted as kept nor silently dropped.
fn report_rejected(rejected: &[RejectedLead]) {
    for reject in rejected {
        eprintln!("warning: lead {}: {}", reject.lead.display_id(), reject.reason);
    }
}

fn write_table(leads: &[Lead], excluded: usize, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:<10} {:<32} {:<18} {}", "ID", "TITLE", "SOURCE", "CREATED")?;
    for lead in leads {
        writeln!(
            out,
            "{:<10} {:<32} {:<18} {}",
            lead.display_id(),
            lead.title.as_deref().unwrap_or("-"),
            source_label(lead),
            lead.created_at.as_deref().unwrap_or("-"),
        )?;
    }
    writeln!(out, "{} leads ({excluded} filtered out)", leads.len())?;
    Ok(())
}

fn source_label(lead: &Lead) -> &str {
    lead.source.as_ref().map_or("-", sources::friendly_name)
}

fn write_json(leads: &[Lead], out: &mut impl Write) -> Result<()> {
    let rendered = serde_json::to_string_pretty(leads)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}

fn write_jsonl(leads: &[Lead], out: &mut impl Write) -> Result<()> {
    for lead in leads {
        writeln!(out, "{}", serde_json::to_string(lead)?)?;
    }
    Ok(())
}

fn write_csv(leads: &[Lead], out: &mut impl Write) -> Result<()> {
    writeln!(out, "id,title,source,created_at")?;
    for lead in leads {
        writeln!(
            out,
            "{},{},{},{}",
            escape_field(lead.display_id()),
            escape_field(lead.title.as_deref().unwrap_or("")),
            escape_field(lead.source.as_ref().map_or("", |code| code.as_str())),
            escape_field(lead.created_at.as_deref().unwrap_or("")),
        )?;
    }
    Ok(())
}

/// Quote a CSV field when it contains the separator, quotes or newlines.
fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn write_source_summary(leads: &[Lead], out: &mut impl Write) -> Result<()> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for lead in leads {
        *counts.entry(source_label(lead)).or_default() += 1;
    }
    writeln!(out, "{:<24} {}", "SOURCE", "LEADS")?;
    for (name, count) in &counts {
        writeln!(out, "{name:<24} {count}")?;
    }
    writeln!(out, "{:<24} {}", "TOTAL", leads.len())?;
    Ok(())
}
