use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use taskrank_core::gateway::{self, AnalyzeRequest};
use taskrank_core::{Config, CoreError, SortStrategy};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Read the request body from FILE instead of stdin
    #[arg(long, short)]
    input: Option<PathBuf>,
    /// Result order: priority, due_date or importance
    #[arg(long)]
    sort_by: Option<SortStrategy>,
    /// Score as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    today: Option<NaiveDate>,
    /// Include the four sub-scores with each task
    #[arg(long)]
    breakdown: bool,
}

pub fn run(args: AnalyzeArgs, config: &Config) -> Result<(), CoreError> {
    let pretty = config.output.pretty;
    let body = super::read_body(args.input.as_deref())?;
    let mut request = AnalyzeRequest::from_json(&body).map_err(|e| super::reject(e, pretty))?;

    if let Some(sort_by) = args.sort_by {
        request.sort_by = Some(sort_by);
    }
    if args.breakdown {
        request.include_breakdown = Some(true);
    }

    let today = super::resolve_today(args.today);
    let response = gateway::analyze(request, today, &config.gateway_defaults());
    super::emit(&response, pretty)
}
