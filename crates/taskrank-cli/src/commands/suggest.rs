use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use taskrank_core::gateway::{self, SuggestRequest};
use taskrank_core::{Config, CoreError};

#[derive(Args)]
pub struct SuggestArgs {
    /// Read the request body from FILE instead of stdin
    #[arg(long, short)]
    input: Option<PathBuf>,
    /// Number of suggestions (overrides the body and config)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    limit: Option<u64>,
    /// Score as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    today: Option<NaiveDate>,
}

pub fn run(args: SuggestArgs, config: &Config) -> Result<(), CoreError> {
    let pretty = config.output.pretty;
    let body = super::read_body(args.input.as_deref())?;
    let mut request = SuggestRequest::from_json(&body).map_err(|e| super::reject(e, pretty))?;

    if let Some(limit) = args.limit {
        request.limit = Some(limit as usize);
    }

    let today = super::resolve_today(args.today);
    let response = gateway::suggest(request, today, &config.gateway_defaults());
    super::emit(&response, pretty)
}
