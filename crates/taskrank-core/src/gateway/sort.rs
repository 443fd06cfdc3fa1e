//! Presentation order applied after scoring.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::scoring::ScoredTask;
use crate::task::Task;

/// How an already-scored list is re-ordered for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Engine order, highest score first
    #[default]
    Priority,
    /// Earliest due date first
    DueDate,
    /// Highest importance first
    Importance,
}

impl SortStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortStrategy::Priority => "priority",
            SortStrategy::DueDate => "due_date",
            SortStrategy::Importance => "importance",
        }
    }

    /// Parse a request value, falling back to `Priority` for anything unknown.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(sort_by = value, "unknown sort strategy, using priority");
            SortStrategy::Priority
        })
    }

    /// Stable re-order of `scored`. Equal keys keep engine order.
    pub fn reorder(&self, scored: &mut [ScoredTask], tasks: &[Task]) {
        match self {
            SortStrategy::Priority => {}
            SortStrategy::DueDate => {
                scored.sort_by_key(|s| s.task(tasks).map(|t| t.due_date));
            }
            SortStrategy::Importance => {
                scored.sort_by_key(|s| Reverse(s.task(tasks).map(|t| t.importance)));
            }
        }
    }
}

impl FromStr for SortStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "priority" => Ok(SortStrategy::Priority),
            "due_date" => Ok(SortStrategy::DueDate),
            "importance" => Ok(SortStrategy::Importance),
            other => Err(format!(
                "unknown sort strategy '{other}' (expected priority, due_date or importance)"
            )),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
