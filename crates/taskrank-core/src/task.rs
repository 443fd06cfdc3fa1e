//! Task record consumed by the scoring engine.
//!
//! Records are built fresh for every request by the gateway (or by a caller
//! holding its own store). The engine only reads them; `priority_score` is
//! written back through [`Task::apply_score`] when a caller asks for it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier used to resolve dependency references within one collection.
pub type TaskId = u64;

/// A unit of work to be ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Display only, never affects scoring
    pub title: String,
    pub due_date: NaiveDate,
    /// At least 0.1, enforced by the gateway
    pub estimated_hours: f64,
    /// 1..=10, enforced by the gateway
    pub importance: u8,
    /// Ids this task waits on. Ids missing from the collection are inert.
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
    /// Set only by the engine's apply step
    #[serde(default)]
    pub priority_score: Option<f64>,
}

impl Task {
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        due_date: NaiveDate,
        estimated_hours: f64,
        importance: u8,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            due_date,
            estimated_hours,
            importance,
            dependencies: Vec::new(),
            priority_score: None,
        }
    }

    pub fn with_dependencies(mut self, dependencies: impl IntoIterator<Item = TaskId>) -> Self {
        self.dependencies = dependencies.into_iter().collect();
        self
    }

    /// Whole days from `today` to the due date. Negative when overdue.
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        self.due_date.signed_duration_since(today).num_days()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today
    }

    /// Retain a computed score on the record.
    pub fn apply_score(&mut self, score: f64) {
        self.priority_score = Some(score);
    }
}
