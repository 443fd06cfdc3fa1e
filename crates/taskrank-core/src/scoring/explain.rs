//! Human-readable rationale for a suggested task.
//!
//! Reasons come from an ordered rule table. Rules are grouped by category;
//! within a category the first applicable rule wins, and categories are
//! rendered in a fixed order. Only the task's own fields (and today's date)
//! are consulted, never its siblings.

use chrono::NaiveDate;

use crate::task::Task;

pub const REASON_SEPARATOR: &str = " • ";
pub const FALLBACK_EXPLANATION: &str = "Standard priority task";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReasonCategory {
    DueDate,
    Importance,
    Effort,
}

const CATEGORY_ORDER: [ReasonCategory; 3] = [
    ReasonCategory::DueDate,
    ReasonCategory::Importance,
    ReasonCategory::Effort,
];

/// What the rules look at.
struct Facts {
    days_until_due: i64,
    importance: u8,
    hours: f64,
}

struct ReasonRule {
    category: ReasonCategory,
    applies: fn(&Facts) -> bool,
    render: fn(&Facts) -> String,
}

const RULES: &[ReasonRule] = &[
    ReasonRule {
        category: ReasonCategory::DueDate,
        applies: |f| f.days_until_due < 0,
        render: |f| format!("⚠️ OVERDUE by {} day(s)", f.days_until_due.abs()),
    },
    ReasonRule {
        category: ReasonCategory::DueDate,
        applies: |f| f.days_until_due == 0,
        render: |_| "🔥 Due TODAY".to_string(),
    },
    ReasonRule {
        category: ReasonCategory::DueDate,
        applies: |f| f.days_until_due == 1,
        render: |_| "⏰ Due TOMORROW".to_string(),
    },
    ReasonRule {
        category: ReasonCategory::DueDate,
        applies: |f| (2..=3).contains(&f.days_until_due),
        render: |f| format!("📅 Due in {} days", f.days_until_due),
    },
    ReasonRule {
        category: ReasonCategory::Importance,
        applies: |f| f.importance >= 8,
        render: |f| format!("⭐ High importance ({}/10)", f.importance),
    },
    ReasonRule {
        category: ReasonCategory::Importance,
        applies: |f| f.importance >= 5,
        render: |f| format!("📌 Medium importance ({}/10)", f.importance),
    },
    ReasonRule {
        category: ReasonCategory::Effort,
        applies: |f| f.hours <= 2.0,
        render: |f| format!("✅ Quick task ({}h)", f.hours),
    },
    ReasonRule {
        category: ReasonCategory::Effort,
        applies: |f| f.hours >= 16.0,
        render: |f| format!("🏗️ Large project ({}h)", f.hours),
    },
];

/// Applicable reason fragments, in rendering order.
pub fn explanation_reasons(task: &Task, today: NaiveDate) -> Vec<String> {
    let facts = Facts {
        days_until_due: task.days_until_due(today),
        importance: task.importance,
        hours: task.estimated_hours,
    };

    CATEGORY_ORDER
        .iter()
        .filter_map(|category| {
            RULES
                .iter()
                .filter(|rule| rule.category == *category)
                .find(|rule| (rule.applies)(&facts))
                .map(|rule| (rule.render)(&facts))
        })
        .collect()
}

/// Joined explanation, or [`FALLBACK_EXPLANATION`] when nothing applies.
pub fn generate_task_explanation(task: &Task, today: NaiveDate) -> String {
    let reasons = explanation_reasons(task, today);
    if reasons.is_empty() {
        FALLBACK_EXPLANATION.to_string()
    } else {
        reasons.join(REASON_SEPARATOR)
    }
}
