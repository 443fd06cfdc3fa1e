//! Sub-scores and the weighted composite.
//!
//! Every function here is pure. Inputs are trusted: importance and hours are
//! range-checked by the gateway, so nothing is clamped or defaulted here.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskId};

pub const URGENCY_WEIGHT: f64 = 1.2;
pub const IMPORTANCE_WEIGHT: f64 = 1.0;
pub const EFFORT_WEIGHT: f64 = 0.5;
pub const DEPENDENCY_WEIGHT: f64 = 0.3;

/// Points granted per task blocked by this one.
pub const POINTS_PER_BLOCKED_TASK: f64 = 15.0;
/// Upper bound of the dependency sub-score, reached at four dependents.
pub const MAX_DEPENDENCY_SCORE: f64 = 50.0;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Urgency for a signed day distance.
///
/// - Overdue or due today: 100
/// - Due tomorrow: 90
/// - Otherwise: `100 / (1 + d)^0.7`, rounded to 2 places
pub fn urgency_for_days(days_until_due: i64) -> f64 {
    match days_until_due {
        d if d <= 0 => 100.0,
        1 => 90.0,
        d => round2(100.0 / (1.0 + d as f64).powf(0.7)),
    }
}

/// Urgency sub-score from due-date proximity.
pub fn urgency_score(task: &Task, today: NaiveDate) -> f64 {
    urgency_for_days(task.days_until_due(today))
}

/// Importance sub-score, linear rescale of 1..=10 to 10..=100.
pub fn importance_score(task: &Task) -> f64 {
    f64::from(task.importance) * 10.0
}

/// Effort sub-score, a step function favouring quick wins.
///
/// Band upper edges are inclusive: 2h → 50, 8h → 30, 24h → 15.
pub fn effort_score(task: &Task) -> f64 {
    let hours = task.estimated_hours;
    if hours <= 2.0 {
        50.0
    } else if hours <= 8.0 {
        30.0
    } else if hours <= 24.0 {
        15.0
    } else {
        5.0
    }
}

/// Reverse-dependency index over one collection.
///
/// Maps each id to the number of *other* tasks in the collection that list it
/// as a dependency. Built once per scoring call so each lookup is O(1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedCounts {
    counts: HashMap<TaskId, usize>,
}

impl BlockedCounts {
    pub fn from_collection(tasks: &[Task]) -> Self {
        let mut counts: HashMap<TaskId, usize> = HashMap::new();
        for task in tasks {
            // Duplicates count once, self references never count.
            let distinct: HashSet<TaskId> = task
                .dependencies
                .iter()
                .copied()
                .filter(|id| *id != task.id)
                .collect();
            for id in distinct {
                *counts.entry(id).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Number of sibling tasks waiting on `id`.
    pub fn blocked_count(&self, id: TaskId) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }
}

/// Dependency sub-score: 15 points per blocked sibling, capped at 50.
///
/// Without collection context the score is 0.
pub fn dependency_score(task: &Task, context: Option<&BlockedCounts>) -> f64 {
    let Some(counts) = context else {
        return 0.0;
    };
    let blocked = counts.blocked_count(task.id) as f64;
    (blocked * POINTS_PER_BLOCKED_TASK).min(MAX_DEPENDENCY_SCORE)
}

/// The four sub-scores behind one priority score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependency: f64,
}

impl ScoreBreakdown {
    pub fn compute(task: &Task, today: NaiveDate, context: Option<&BlockedCounts>) -> Self {
        Self {
            urgency: urgency_score(task, today),
            importance: importance_score(task),
            effort: effort_score(task),
            dependency: dependency_score(task, context),
        }
    }

    /// Weighted composite, rounded to 2 places.
    pub fn total(&self) -> f64 {
        round2(
            self.urgency * URGENCY_WEIGHT
                + self.importance * IMPORTANCE_WEIGHT
                + self.effort * EFFORT_WEIGHT
                + self.dependency * DEPENDENCY_WEIGHT,
        )
    }
}

/// Composite priority score for one task.
///
/// Pass the collection's [`BlockedCounts`] to include the dependency term;
/// `None` scores the task in isolation.
pub fn calculate_priority_score(
    task: &Task,
    today: NaiveDate,
    context: Option<&BlockedCounts>,
) -> f64 {
    ScoreBreakdown::compute(task, today, context).total()
}
