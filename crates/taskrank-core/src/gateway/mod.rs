//! Request gateway.
//!
//! Turns a JSON request body into validated task records, runs the scoring
//! engine, and renders the result. Two call shapes are supported:
//!
//! - **Analyze**: every task with its computed fields, in the requested order
//! - **Suggest**: the top `limit` tasks by engine order, each with an explanation
//!
//! There is no transport here. A CLI, an HTTP handler or a test can drive the
//! same functions with a body string and a date.

pub mod request;
pub mod response;
pub mod sort;

pub use request::{AnalyzeRequest, SuggestRequest};
pub use response::{
    render, AnalyzeResponse, ErrorResponse, Status, SuggestResponse, SuggestionView, TaskView,
};
pub use sort::SortStrategy;

use chrono::NaiveDate;

use crate::error::GatewayError;
use crate::scoring::{apply_scores, get_top_tasks_for_today, score_tasks, DEFAULT_SUGGESTION_LIMIT};

/// Values used when a request leaves an option unset.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayDefaults {
    pub sort_by: SortStrategy,
    pub include_breakdown: bool,
    pub suggestion_limit: usize,
}

impl Default for GatewayDefaults {
    fn default() -> Self {
        Self {
            sort_by: SortStrategy::Priority,
            include_breakdown: false,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }
}

/// Score and render every task in the request.
pub fn analyze(
    request: AnalyzeRequest,
    today: NaiveDate,
    defaults: &GatewayDefaults,
) -> AnalyzeResponse {
    let AnalyzeRequest {
        mut tasks,
        sort_by,
        include_breakdown,
    } = request;
    let sort_by = sort_by.unwrap_or(defaults.sort_by);
    let include_breakdown = include_breakdown.unwrap_or(defaults.include_breakdown);

    let mut scored = score_tasks(&tasks, today);
    apply_scores(&mut tasks, &scored);
    sort_by.reorder(&mut scored, &tasks);

    tracing::info!(count = tasks.len(), sort_by = %sort_by, "analyzed tasks");

    let views = scored
        .iter()
        .filter_map(|s| Some(TaskView::new(s.task(&tasks)?, s, include_breakdown)))
        .collect();
    AnalyzeResponse::new(views)
}

/// Rank the request's tasks and explain the top entries.
pub fn suggest(
    request: SuggestRequest,
    today: NaiveDate,
    defaults: &GatewayDefaults,
) -> SuggestResponse {
    let SuggestRequest { mut tasks, limit } = request;
    let limit = limit.unwrap_or(defaults.suggestion_limit);

    let suggestions = get_top_tasks_for_today(&tasks, today, limit);
    let scored: Vec<_> = suggestions.iter().map(|s| s.scored.clone()).collect();
    apply_scores(&mut tasks, &scored);

    tracing::info!(count = tasks.len(), limit, returned = suggestions.len(), "suggested tasks");

    let views = suggestions
        .into_iter()
        .filter_map(|s| {
            let task = s.scored.task(&tasks)?;
            Some(SuggestionView {
                task: TaskView::new(task, &s.scored, false),
                explanation: s.explanation,
            })
        })
        .collect();
    SuggestResponse::new(views)
}

/// Parse, validate and analyze a raw request body.
pub fn handle_analyze(
    body: &str,
    today: NaiveDate,
    defaults: &GatewayDefaults,
) -> Result<AnalyzeResponse, GatewayError> {
    let request = AnalyzeRequest::from_json(body)?;
    Ok(analyze(request, today, defaults))
}

/// Parse, validate and suggest from a raw request body.
pub fn handle_suggest(
    body: &str,
    today: NaiveDate,
    defaults: &GatewayDefaults,
) -> Result<SuggestResponse, GatewayError> {
    let request = SuggestRequest::from_json(body)?;
    Ok(suggest(request, today, defaults))
}
