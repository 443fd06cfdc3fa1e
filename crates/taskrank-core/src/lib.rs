//! # taskrank Core Library
//!
//! Ranks a list of tasks by a composite priority built from due-date
//! urgency, declared importance, estimated effort, and how many sibling tasks
//! each one blocks. The library is CLI-first: the `taskrank` binary is a thin
//! layer over the same functions.
//!
//! ## Architecture
//!
//! - **Scoring Engine**: pure functions over an in-memory task collection.
//!   No I/O, no validation, no state between calls
//! - **Gateway**: parses and validates request bodies into [`Task`] records,
//!   invokes the engine, and renders Analyze/Suggest responses
//! - **Storage**: TOML configuration for request defaults
//!
//! ## Key Components
//!
//! - [`score_tasks`]: rank a collection
//! - [`get_top_tasks_for_today`]: top-K with explanations
//! - [`gateway::handle_analyze`] / [`gateway::handle_suggest`]: request entry points
//! - [`Config`]: application configuration management

pub mod error;
pub mod gateway;
pub mod scoring;
pub mod storage;
pub mod task;

pub use error::{ConfigError, CoreError, ErrorKind, GatewayError};
pub use gateway::{GatewayDefaults, SortStrategy};
pub use scoring::{
    apply_scores, calculate_priority_score, generate_task_explanation, get_top_tasks_for_today,
    local_today, score_tasks, BlockedCounts, PriorityTier, ScoreBreakdown, ScoredTask,
    Suggestion,
};
pub use storage::Config;
pub use task::{Task, TaskId};
