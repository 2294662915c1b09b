use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use leadlens_domain::filtering::Period;

use crate::parsers::{DateTimeArg, parse_period};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Jsonl,
    Csv,
}

/// CRM lead listing and date-range filtering tool.
#[derive(Debug, Parser)]
#[command(name = "leadlens", version, about)]
pub struct Args {
    /// JSONL lead exports to read (standard input when omitted)
    pub inputs: Vec<PathBuf>,

    /// Keep leads created in the named period: day, week or month
    #[arg(short, long, value_parser = parse_period, conflicts_with_all = ["since", "until"])]
    pub period: Option<Period>,

    /// Reference instant anchoring --period (RFC3339 / %Y-%m-%d %H:%M:%S / %Y-%m-%d; defaults to now)
    #[arg(long, requires = "period")]
    pub on: Option<DateTimeArg>,

    /// Keep leads created at or after this instant
    #[arg(long, requires = "until")]
    pub since: Option<DateTimeArg>,

    /// Keep leads created at or before this instant
    #[arg(long, requires = "since")]
    pub until: Option<DateTimeArg>,

    /// Keep leads from these source codes (repeatable, comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub source: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Print a per-source summary instead of individual leads
    #[arg(long)]
    pub by_source: bool,

    /// Exit with a failure status when any record is rejected. Default is to
    /// warn and continue
    #[arg(long)]
    pub strict: bool,
}
