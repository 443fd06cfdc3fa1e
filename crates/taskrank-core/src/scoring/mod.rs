//! Priority scoring engine.
//!
//! Converts task attributes into a composite priority and orders a collection
//! by it. The engine is pure and stateless: no I/O, no validation, nothing
//! shared between calls. "Today" is always supplied by the caller.
//!
//! | Component  | Range    | Weight |
//! |------------|----------|--------|
//! | Urgency    | 0-100    | 1.2    |
//! | Importance | 10-100   | 1.0    |
//! | Effort     | 5-50     | 0.5    |
//! | Dependency | 0-50     | 0.3    |

mod components;
mod engine;
mod explain;

pub use components::{
    calculate_priority_score, dependency_score, effort_score, importance_score, round2,
    urgency_for_days, urgency_score, BlockedCounts, ScoreBreakdown, DEPENDENCY_WEIGHT,
    EFFORT_WEIGHT, IMPORTANCE_WEIGHT, MAX_DEPENDENCY_SCORE, POINTS_PER_BLOCKED_TASK,
    URGENCY_WEIGHT,
};
pub use engine::{
    apply_scores, get_top_tasks_for_today, score_tasks, PriorityTier, ScoredTask, Suggestion,
    DEFAULT_SUGGESTION_LIMIT,
};
pub use explain::{
    explanation_reasons, generate_task_explanation, FALLBACK_EXPLANATION, REASON_SEPARATOR,
};

use chrono::NaiveDate;

/// Today's date on the local calendar.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
