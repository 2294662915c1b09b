use chrono::{Local, Utc};
use leadlens_domain::filtering::{Filters, Interval, bounds};
use leadlens_ports::records::LeadFetchPlan;
use leadlens_shared_kernel::{PresentationError, SourceCode, Timestamp};

use crate::args::{Args, OutputFormat};
use crate::error::Result;

/// Runtime configuration resolved from CLI arguments.
#[derive(Debug)]
pub struct Config {
    pub plan: LeadFetchPlan,
    pub filters: Filters,
    pub format: OutputFormat,
    pub by_source: bool,
    pub strict: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let created = build_interval(&args)?;
        let sources =
            args.source.iter().map(|code| SourceCode::from(code.as_str())).collect();

        Ok(Self {
            plan: LeadFetchPlan { inputs: args.inputs },
            filters: Filters { created, sources },
            format: args.format,
            by_source: args.by_source,
            strict: args.strict,
        })
    }
}

/// The reference for `--period` defaults to now and `--on` pins it for
/// reproducible runs. Bounds are anchored in the local zone, the same
/// calendar context that interprets date-only CLI arguments.
fn build_interval(args: &Args) -> Result<Option<Interval>> {
    if let Some(period) = args.period {
        let reference = args.on.map_or_else(Local::now, |arg| arg.0);
        return Ok(Some(bounds(&reference, period)?));
    }
    match (args.since, args.until) {
        (Some(since), Some(until)) => {
            let start = Timestamp::new(since.0.with_timezone(&Utc));
            let end = Timestamp::new(until.0.with_timezone(&Utc));
            Ok(Some(Interval::new(start, end)?))
        }
        (None, None) => Ok(None),
        // clap enforces this pairing; kept for programmatic construction.
        _ => Err(PresentationError::ConfigBuildFailed(
            "--since and --until must be given together".to_string(),
        )
        .into()),
    }
}
