//! Wire shapes for gateway responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;
use crate::scoring::{PriorityTier, ScoreBreakdown, ScoredTask};
use crate::task::{Task, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// One scored task as rendered to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskView {
    pub title: String,
    pub due_date: NaiveDate,
    pub estimated_hours: f64,
    pub importance: u8,
    pub dependencies: Vec<TaskId>,
    pub priority_score: Option<f64>,
    pub days_until_due: i64,
    pub is_overdue: bool,
    pub priority_tier: PriorityTier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

impl TaskView {
    pub fn new(task: &Task, scored: &ScoredTask, include_breakdown: bool) -> Self {
        Self {
            title: task.title.clone(),
            due_date: task.due_date,
            estimated_hours: task.estimated_hours,
            importance: task.importance,
            dependencies: task.dependencies.clone(),
            priority_score: task.priority_score,
            days_until_due: scored.days_until_due,
            is_overdue: scored.days_until_due < 0,
            priority_tier: scored.tier(),
            breakdown: include_breakdown.then_some(scored.breakdown),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub status: Status,
    pub count: usize,
    pub tasks: Vec<TaskView>,
}

impl AnalyzeResponse {
    pub fn new(tasks: Vec<TaskView>) -> Self {
        Self {
            status: Status::Success,
            count: tasks.len(),
            tasks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionView {
    pub task: TaskView,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub status: Status,
    pub suggestions: Vec<SuggestionView>,
}

impl SuggestResponse {
    pub fn new(suggestions: Vec<SuggestionView>) -> Self {
        Self {
            status: Status::Success,
            suggestions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: Status,
    pub message: String,
}

impl From<&GatewayError> for ErrorResponse {
    fn from(err: &GatewayError) -> Self {
        Self {
            status: Status::Error,
            message: err.to_string(),
        }
    }
}

/// Serialize a response body.
pub fn render<T: Serialize>(body: &T, pretty: bool) -> Result<String, GatewayError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(body)
    } else {
        serde_json::to_string(body)
    };
    rendered.map_err(|e| GatewayError::Internal(e.to_string()))
}
