//! Ranking and top-K suggestion.
//!
//! Scoring returns fresh [`ScoredTask`] values keyed by task id instead of
//! writing into the records. Callers that want the score kept on the record
//! run [`apply_scores`] as a separate step.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::components::{BlockedCounts, ScoreBreakdown};
use super::explain::generate_task_explanation;
use crate::task::{Task, TaskId};

/// Default number of suggestions returned by [`get_top_tasks_for_today`].
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Score above which a task counts as high priority.
pub const HIGH_TIER_THRESHOLD: f64 = 200.0;
/// Score above which a task counts as medium priority.
pub const MEDIUM_TIER_THRESHOLD: f64 = 150.0;

/// Coarse bucket for a priority score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    pub fn from_score(score: f64) -> Self {
        if score > HIGH_TIER_THRESHOLD {
            PriorityTier::High
        } else if score > MEDIUM_TIER_THRESHOLD {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }
}

/// Engine output for one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    pub task_id: TaskId,
    /// Position of the task in the input collection
    pub index: usize,
    pub priority_score: f64,
    pub breakdown: ScoreBreakdown,
    pub days_until_due: i64,
}

impl ScoredTask {
    pub fn tier(&self) -> PriorityTier {
        PriorityTier::from_score(self.priority_score)
    }

    /// The record this result was computed from.
    pub fn task<'a>(&self, tasks: &'a [Task]) -> Option<&'a Task> {
        tasks.get(self.index).filter(|t| t.id == self.task_id)
    }
}

/// A top-ranked task paired with its rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub scored: ScoredTask,
    pub explanation: String,
}

/// Score every task against the whole collection and order by descending score.
///
/// Equal scores keep their input order.
pub fn score_tasks(tasks: &[Task], today: NaiveDate) -> Vec<ScoredTask> {
    let blocked = BlockedCounts::from_collection(tasks);

    let mut scored: Vec<ScoredTask> = tasks
        .iter()
        .enumerate()
        .map(|(index, task)| {
            let breakdown = ScoreBreakdown::compute(task, today, Some(&blocked));
            ScoredTask {
                task_id: task.id,
                index,
                priority_score: breakdown.total(),
                breakdown,
                days_until_due: task.days_until_due(today),
            }
        })
        .collect();

    scored.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));

    tracing::debug!(
        count = scored.len(),
        top = scored.first().map(|s| s.priority_score),
        "scored task collection"
    );

    scored
}

/// Write each computed score back onto its record, matched by id.
pub fn apply_scores(tasks: &mut [Task], scored: &[ScoredTask]) {
    let by_id: HashMap<TaskId, f64> = scored
        .iter()
        .map(|s| (s.task_id, s.priority_score))
        .collect();
    for task in tasks.iter_mut() {
        if let Some(score) = by_id.get(&task.id) {
            task.apply_score(*score);
        }
    }
}

/// Rank the collection and explain the first `limit` entries.
///
/// Returns fewer than `limit` suggestions when the collection is smaller.
pub fn get_top_tasks_for_today(tasks: &[Task], today: NaiveDate, limit: usize) -> Vec<Suggestion> {
    score_tasks(tasks, today)
        .into_iter()
        .take(limit)
        .filter_map(|scored| {
            let task = scored.task(tasks)?;
            let explanation = generate_task_explanation(task, today);
            Some(Suggestion {
                scored,
                explanation,
            })
        })
        .collect()
}
